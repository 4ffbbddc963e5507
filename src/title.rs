//! Human-readable titles for services, pages and nav entries.

use crate::config::Config;
use crate::model::PageKey;
use regex::Regex;
use std::sync::LazyLock;

static RE_CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Turn an identifier into title case.
///
/// `_` and `-` become spaces, camel-case humps are split, and every run of
/// letters gets an upper-case first letter with the rest lowered:
/// `delayProfiles` → `Delay Profiles`, `sonarr-anime` → `Sonarr Anime`.
pub fn title_case(ident: &str) -> String {
    let spaced = ident.replace(['_', '-'], " ");
    let spaced = RE_CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");

    let mut out = String::with_capacity(spaced.len());
    let mut in_word = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Title lookups backed by the override tables in [`Config`].
pub struct Titles<'a> {
    config: &'a Config,
}

impl<'a> Titles<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Display name of a service, as shown in navigation.
    pub fn service(&self, id: &str) -> String {
        self.config
            .titles
            .get(id)
            .cloned()
            .unwrap_or_else(|| title_case(id))
    }

    /// Display name of one page key segment.
    pub fn segment(&self, segment: &str) -> String {
        self.config
            .acronyms
            .get(segment)
            .cloned()
            .unwrap_or_else(|| self.service(segment))
    }

    /// Nav label for a multi-segment key: `config.delayProfiles` → `Config - Delay Profiles`.
    pub fn key(&self, segments: &[String]) -> String {
        segments
            .iter()
            .map(|s| self.segment(s))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Heading of a page.
    pub fn page(&self, service: &str, page: &PageKey) -> String {
        let base = if service == self.config.root_service {
            self.config.root_title.clone()
        } else {
            self.service(service)
        };
        match page {
            PageKey::Index => base,
            PageKey::Group(key) => format!("{} - {}", base, self.key(key.segments())),
        }
    }

    /// Introductory sentence of a page.
    pub fn intro(&self, service: &str, page: &PageKey) -> String {
        match page {
            PageKey::Index => self
                .config
                .descriptions
                .get(service)
                .cloned()
                .unwrap_or_else(|| format!("Configuration options for {}.", service)),
            PageKey::Group(key) => format!(
                "Configuration options for {} {}.",
                service,
                key.segments().join(" ")
            ),
        }
    }
}
