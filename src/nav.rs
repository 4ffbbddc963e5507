//! Navigation outline for the static site generator.
//!
//! Produces an mkdocs-style `nav` list. A page that also has sub-pages is
//! written as a section whose first entry links the page itself, which the
//! site theme turns into the section's clickable index.

use crate::classify::{Catalog, ServicePages};
use crate::config::Config;
use crate::title::Titles;
use crate::tree::PageNode;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    /// Section header with nested entries.
    Section { title: String, items: Vec<NavItem> },
    /// Titled link to a page.
    Page { title: String, path: String },
    /// Untitled link; the site generator uses the page's own title.
    Link(String),
}

/// Builds nav entries with file paths under `reference_dir`.
pub struct NavBuilder<'a> {
    config: &'a Config,
    titles: Titles<'a>,
    file_name: &'a str,
}

impl<'a> NavBuilder<'a> {
    /// `file_name` is the per-page document name (`index.md` for markdown).
    pub fn new(config: &'a Config, file_name: &'a str) -> Self {
        Self {
            config,
            titles: Titles::new(config),
            file_name,
        }
    }

    /// The complete outline: one top-level section holding every service.
    pub fn build(&self, catalog: &Catalog) -> Vec<NavItem> {
        let mut items = vec![NavItem::Link(format!(
            "{}/{}",
            self.config.reference_dir, self.file_name
        ))];
        items.extend(catalog.services().into_iter().map(|s| self.service(s)));
        vec![NavItem::Section {
            title: self.config.nav_title.clone(),
            items,
        }]
    }

    /// Section for one service.
    ///
    /// The index page, when it has options, always comes first, even when it
    /// is the only page. Without index options the section only holds the
    /// sub-pages.
    pub fn service(&self, service: &ServicePages) -> NavItem {
        let title = self.titles.service(service.id());
        let tree = PageNode::build(service.group_keys());

        let mut items = Vec::new();
        if service.has_index() {
            items.push(NavItem::Page {
                title: title.clone(),
                path: self.page_path(service.id(), &[]),
            });
        }
        items.extend(self.tree(service.id(), &tree));
        NavItem::Section { title, items }
    }

    /// Entries for the children of `node`, in segment order.
    ///
    /// A namespace node contributes its children at its own level.
    pub fn tree(&self, service: &str, node: &PageNode) -> Vec<NavItem> {
        let mut items = Vec::new();
        for (segment, child) in node.children() {
            match child.page() {
                Some(key) => {
                    let title = self.titles.segment(segment);
                    let mut section = vec![NavItem::Page {
                        title: title.clone(),
                        path: self.page_path(service, key.segments()),
                    }];
                    section.extend(self.tree(service, child));
                    items.push(NavItem::Section {
                        title,
                        items: section,
                    });
                }
                None => items.extend(self.tree(service, child)),
            }
        }
        items
    }

    fn page_path(&self, service: &str, segments: &[String]) -> String {
        let mut parts = vec![self.config.reference_dir.as_str(), service];
        parts.extend(segments.iter().map(String::as_str));
        parts.push(self.file_name);
        parts.join("/")
    }
}

/// Render nav entries as an indented YAML list.
pub fn render_nav(items: &[NavItem]) -> String {
    let mut out = String::new();
    write_items(&mut out, items, 0);
    out
}

fn write_items(out: &mut String, items: &[NavItem], depth: usize) {
    let indent = INDENT.repeat(depth);
    for item in items {
        match item {
            NavItem::Section { title, items } => {
                out.push_str(&format!("{}- {}:\n", indent, quote_yaml_key(title)));
                write_items(out, items, depth + 1);
            }
            NavItem::Page { title, path } => {
                out.push_str(&format!("{}- {}: {}\n", indent, quote_yaml_key(title), path));
            }
            NavItem::Link(path) => {
                out.push_str(&format!("{}- {}\n", indent, path));
            }
        }
    }
}

/// Quote a mapping key if it would otherwise confuse a YAML parser.
pub(crate) fn quote_yaml_key(s: &str) -> String {
    let special = s.contains(": ")
        || s.contains(" #")
        || s.ends_with(':')
        || s.starts_with(['"', '\'', '[', '{', '&', '*', '!', '|', '>', '%', '@', '`', '-', '?'])
        || s.starts_with(' ');
    if special {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        s.to_string()
    }
}
