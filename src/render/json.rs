//! Page output as JSON, for tools that consume option docs programmatically.
//!
//! Writes each page as a JSON object with its options in display order.

use crate::error::{Error, Result};
use crate::model::Declaration;
use crate::render::{Page, Renderer};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPage<'a> {
    service: &'a str,
    page: String,
    title: &'a str,
    intro: &'a str,
    option_count: usize,
    options: Vec<JsonOption<'a>>,
}

#[derive(Serialize)]
struct JsonOption<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<&'a str>,
    #[serde(skip_serializing_if = "no_declarations")]
    declarations: &'a [Declaration],
}

fn no_declarations(decls: &&[Declaration]) -> bool {
    decls.is_empty()
}

impl Renderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let doc = JsonPage {
            service: page.service,
            page: page.key.to_string(),
            title: &page.title,
            intro: &page.intro,
            option_count: page.options.len(),
            options: page
                .options
                .iter()
                .map(|e| JsonOption {
                    name: &e.name,
                    type_name: e.record.type_label(),
                    description: e.record.description_text(),
                    default: e.record.default_text(),
                    example: e.record.example_text(),
                    declarations: &e.record.declarations,
                })
                .collect(),
        };
        let mut out = serde_json::to_string_pretty(&doc).map_err(|source| Error::Serialize {
            page: format!("{}/{}", page.service, page.key),
            source,
        })?;
        out.push('\n');
        Ok(out)
    }

    fn file_name(&self) -> &str {
        "index.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Entry;
    use crate::config::Config;
    use crate::model::{GroupKey, OptionRecord, PageKey};
    use crate::path::OptionPath;
    use serde_json::{json, Value};

    #[test]
    fn page_as_json() {
        let config = Config::default();
        let key = PageKey::Group(GroupKey::new(vec!["config".into(), "hostConfig".into()]));
        let name = "nixflix.sonarr.config.hostConfig.port";
        let record = OptionRecord {
            type_name: Some("int".into()),
            default: Some(json!({"_type": "literalExpression", "text": "8989"})),
            declarations: vec![Declaration::Path("modules/sonarr.nix".into())],
            ..Default::default()
        };
        let entries = vec![Entry::new(name.into(), record, OptionPath::parse(name, "nixflix").as_ref())];
        let page = Page::new("sonarr", &key, &entries, &config);
        let out = JsonRenderer.render(&page).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["service"], "sonarr");
        assert_eq!(value["page"], "config.hostConfig");
        assert_eq!(value["title"], "Sonarr - Config - Host Config");
        assert_eq!(value["optionCount"], 1);
        let opt = &value["options"][0];
        assert_eq!(opt["type"], "int");
        assert_eq!(opt["default"], "8989");
        assert_eq!(opt["declarations"][0], "modules/sonarr.nix");
        assert!(opt.get("example").is_none());
        assert!(opt.get("description").is_none());
    }
}
