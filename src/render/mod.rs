//! Page view and the output formats it can be rendered to.

pub mod json;
pub mod markdown;

use crate::classify::Entry;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::PageKey;
use crate::title::Titles;

/// Everything a renderer needs for one output page.
#[derive(Debug)]
pub struct Page<'a> {
    pub service: &'a str,
    pub key: &'a PageKey,
    pub title: String,
    pub intro: String,
    /// Options in display order.
    pub options: Vec<&'a Entry>,
}

impl<'a> Page<'a> {
    pub fn new(service: &'a str, key: &'a PageKey, entries: &'a [Entry], config: &Config) -> Self {
        let titles = Titles::new(config);
        let own_enable = own_enable_option(config, service, key);
        let mut options: Vec<&Entry> = entries.iter().collect();
        options.sort_by(|a, b| {
            sort_tier(a, &own_enable)
                .cmp(&sort_tier(b, &own_enable))
                .then_with(|| a.name.cmp(&b.name))
        });
        Self {
            service,
            key,
            title: titles.page(service, key),
            intro: titles.intro(service, key),
            options,
        }
    }
}

/// Trait for rendering a page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &Page) -> Result<String>;
    /// Document name written into every page directory.
    fn file_name(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, config: &Config) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(config))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}

/// The toggle that enables the section a page documents.
///
/// Options of the root service sit directly below the namespace.
fn own_enable_option(config: &Config, service: &str, key: &PageKey) -> String {
    let ns = &config.namespace;
    match key {
        PageKey::Index if service == config.root_service => format!("{}.enable", ns),
        PageKey::Index => format!("{}.{}.enable", ns, service),
        PageKey::Group(group) => format!("{}.{}.{}.enable", ns, service, group),
    }
}

/// Display tier of an option on a page; lower tiers come first.
///
/// 0. the page's own `enable` toggle
/// 1. plain options that are not toggles
/// 2. toggles below a wildcard
/// 3. other options below a wildcard
/// 4. remaining toggles of nested sections
pub fn sort_tier(entry: &Entry, own_enable: &str) -> u8 {
    let guarded = entry.guarded;
    let toggle = entry.name.ends_with(".enable");
    if entry.name == own_enable {
        0
    } else if !guarded && !toggle {
        1
    } else if guarded && toggle {
        2
    } else if guarded {
        3
    } else {
        4
    }
}
