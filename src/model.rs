//! Option records as read from the options dump, and page keys.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// All options keyed by their dotted path. Sorted so every later stage sees
/// the same order whatever the input file's key order was.
pub type OptionSet = BTreeMap<String, OptionRecord>;

/// Metadata for a single declared option, as emitted by the schema extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionRecord {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub default: Option<Value>,
    pub example: Option<Value>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub declarations: Vec<Declaration>,
    #[serde(deserialize_with = "null_as_default")]
    pub read_only: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub internal: bool,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where an option is declared: a repository-relative file, or a named link.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Declaration {
    Path(String),
    Link { name: String, url: Option<String> },
}

impl OptionRecord {
    /// Read-only and internal options are never documented.
    pub fn is_visible(&self) -> bool {
        !self.read_only && !self.internal
    }

    pub fn type_label(&self) -> &str {
        self.type_name.as_deref().unwrap_or("unspecified")
    }

    pub fn default_text(&self) -> Option<&str> {
        self.default.as_ref().and_then(literal_text)
    }

    pub fn example_text(&self) -> Option<&str> {
        self.example.as_ref().and_then(literal_text)
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Display text of a literal value (`{"_type": "literalExpression", "text": ...}`).
///
/// Values without the `_type` marker, or with empty text, are not shown.
pub fn literal_text(value: &Value) -> Option<&str> {
    let object = value.as_object()?;
    if !object.contains_key("_type") {
        return None;
    }
    object
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
}

/// Parse an options document and drop invisible options.
pub fn parse_options(content: &str) -> serde_json::Result<OptionSet> {
    let mut options: OptionSet = serde_json::from_str(content)?;
    options.retain(|_, opt| opt.is_visible());
    Ok(options)
}

/// Load the options file at `path`, keeping only visible options.
pub fn load_options(path: &Path) -> Result<OptionSet> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&content).map_err(|source| Error::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Canonical segments of a page-worthy prefix within one service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// One output page within a service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageKey {
    /// The service landing page.
    Index,
    Group(GroupKey),
}

impl PageKey {
    pub fn group(&self) -> Option<&GroupKey> {
        match self {
            PageKey::Index => None,
            PageKey::Group(key) => Some(key),
        }
    }

    /// Directory segments of this page below its service directory.
    pub fn segments(&self) -> &[String] {
        match self {
            PageKey::Index => &[],
            PageKey::Group(key) => key.segments(),
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKey::Index => f.write_str("index"),
            PageKey::Group(key) => fmt::Display::fmt(key, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_filters_hidden_options() {
        let options = parse_options(
            r#"{
                "nixflix.a.enable": {"type": "boolean"},
                "nixflix.a.secret": {"type": "string", "internal": true},
                "nixflix.a.state": {"type": "string", "readOnly": true}
            }"#,
        )
        .unwrap();
        assert_eq!(options.len(), 1);
        assert!(options.contains_key("nixflix.a.enable"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options = parse_options(r#"{"nixflix.a.b": {}}"#).unwrap();
        let opt = &options["nixflix.a.b"];
        assert_eq!(opt.type_label(), "unspecified");
        assert!(opt.description_text().is_none());
        assert!(opt.declarations.is_empty());
    }

    #[test]
    fn null_fields_take_defaults() {
        let options = parse_options(
            r#"{"nixflix.a.b": {"type": null, "description": null, "declarations": null,
                "readOnly": null, "internal": null, "default": null}}"#,
        )
        .unwrap();
        let opt = &options["nixflix.a.b"];
        assert_eq!(opt.type_label(), "unspecified");
        assert!(opt.declarations.is_empty());
        assert!(opt.is_visible());
        assert!(opt.default_text().is_none());
    }

    #[test]
    fn literal_requires_type_marker() {
        assert_eq!(
            literal_text(&json!({"_type": "literalExpression", "text": "8989"})),
            Some("8989")
        );
        assert_eq!(literal_text(&json!({"text": "8989"})), None);
        assert_eq!(literal_text(&json!({"_type": "literalExpression", "text": ""})), None);
        assert_eq!(literal_text(&json!(42)), None);
    }

    #[test]
    fn declarations_accept_paths_and_links() {
        let options = parse_options(
            r#"{"nixflix.a.b": {"declarations": [
                "modules/a.nix",
                {"name": "<nixflix/modules/b.nix>", "url": "https://example.com/b.nix"}
            ]}}"#,
        )
        .unwrap();
        let decls = &options["nixflix.a.b"].declarations;
        assert_eq!(decls[0], Declaration::Path("modules/a.nix".to_string()));
        assert!(matches!(&decls[1], Declaration::Link { url: Some(u), .. } if u == "https://example.com/b.nix"));
    }

    #[test]
    fn page_key_display() {
        assert_eq!(PageKey::Index.to_string(), "index");
        let key = PageKey::Group(GroupKey::new(vec!["config".into(), "delayProfiles".into()]));
        assert_eq!(key.to_string(), "config.delayProfiles");
    }

    #[test]
    fn index_sorts_before_groups() {
        let group = PageKey::Group(GroupKey::new(vec!["aaa".into()]));
        assert!(PageKey::Index < group);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_options("{not json").is_err());
    }
}
