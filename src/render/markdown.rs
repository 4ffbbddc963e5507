//! Markdown renderer for mkdocs-material.
//!
//! Option details go into a small HTML table so the theme can style them;
//! default and example values are fenced code blocks inside the cells.

use crate::classify::Entry;
use crate::config::Config;
use crate::error::Result;
use crate::model::Declaration;
use crate::nav::quote_yaml_key;
use crate::render::{Page, Renderer};

pub struct MarkdownRenderer {
    code_language: String,
    source_url: Option<String>,
}

impl MarkdownRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            code_language: config.code_language.clone(),
            source_url: config
                .source_url
                .as_ref()
                .map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    /// Render one option's block. `last` suppresses the trailing divider.
    pub fn render_option(&self, entry: &Entry, last: bool) -> String {
        let opt = &entry.record;
        let mut md = format!("## `{}`\n\n", entry.name);

        if let Some(desc) = opt.description_text() {
            md.push_str(desc);
            md.push_str("\n\n");
        }

        md.push_str("<div class=\"option-content\">\n");
        md.push_str("<table class=\"option-table\">\n");
        md.push_str(&row("Type", opt.type_label()));

        if let Some(text) = opt.default_text() {
            md.push_str(&row("Default", &self.code_cell(text)));
        }
        if let Some(text) = opt.example_text() {
            md.push_str(&row("Example", &self.code_cell(text)));
        }

        if !opt.declarations.is_empty() {
            let links: Vec<String> = opt
                .declarations
                .iter()
                .map(|d| self.declaration_link(d))
                .collect();
            md.push_str(&row("Declared in", &links.join(", ")));
        }

        md.push_str("</table>\n");
        md.push_str("</div>\n");

        if !last {
            md.push_str("<hr class=\"option-divider\"/>\n");
        }
        md
    }

    fn code_cell(&self, text: &str) -> String {
        format!("\n\n```{}\n{}\n```\n\n", self.code_language, text)
    }

    fn declaration_link(&self, decl: &Declaration) -> String {
        match decl {
            Declaration::Path(path) => match &self.source_url {
                Some(base) => format!("<a href='{}/{}'>{}</a>", base, path, path),
                None => format!("<code>{}</code>", path),
            },
            Declaration::Link { name, url: Some(url) } => format!("<a href='{}'>{}</a>", url, name),
            Declaration::Link { name, url: None } => format!("<code>{}</code>", name),
        }
    }
}

fn row(label: &str, value: &str) -> String {
    format!(
        "<tr><td class=\"option-label\"><strong>{}</strong></td><td class=\"option-value\">{}</td></tr>\n",
        label, value
    )
}

impl Renderer for MarkdownRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut out = String::new();

        out.push_str("---\n");
        out.push_str(&format!("title: {}\n", quote_yaml_key(&page.title)));
        out.push_str("---\n\n");
        out.push_str(&format!("# {}\n\n", page.title));
        out.push_str(&page.intro);
        out.push_str("\n\n");

        out.push_str("!!! info \"Available Options\"\n");
        out.push_str(&format!(
            "    This page documents {} configuration options.\n\n",
            page.options.len()
        ));

        let count = page.options.len();
        for (i, entry) in page.options.iter().enumerate() {
            out.push_str(&self.render_option(entry, i + 1 == count));
        }

        Ok(out)
    }

    fn file_name(&self) -> &str {
        "index.md"
    }
}
