//! Assembling and writing the output tree.
//!
//! Every page and the nav file are rendered into memory first, so a
//! rendering failure leaves the output directory untouched.

use crate::classify::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::nav::{render_nav, NavBuilder};
use crate::render::{Page, Renderer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the generated navigation file.
pub const NAV_FILE: &str = "nav.yml";

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Page and option counts of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub id: String,
    pub pages: usize,
    pub options: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub services: Vec<ServiceSummary>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated documentation for {} services", self.services.len())?;
        for s in &self.services {
            writeln!(f, "  - {}: {} pages, {} options", s.id, s.pages, s.options)?;
        }
        Ok(())
    }
}

/// All rendered output of one run.
#[derive(Debug, Clone)]
pub struct Site {
    pub files: Vec<OutputFile>,
    pub summary: Summary,
}

/// Render every page of every service plus the nav file.
///
/// Pages live at `<service>/<segment>/.../<file name>`; the index page of a
/// service sits directly in the service directory.
pub fn render_site(catalog: &Catalog, config: &Config, renderer: &dyn Renderer) -> Result<Site> {
    let mut files = Vec::new();
    let mut summary = Summary::default();

    for service in catalog.services() {
        for (key, entries) in service.pages() {
            let page = Page::new(service.id(), key, entries, config);
            let mut path = PathBuf::from(service.id());
            path.extend(key.segments());
            path.push(renderer.file_name());
            files.push(OutputFile {
                path,
                contents: renderer.render(&page)?,
            });
        }
        summary.services.push(ServiceSummary {
            id: service.id().to_string(),
            pages: service.page_count(),
            options: service.option_count(),
        });
    }

    let nav = NavBuilder::new(config, renderer.file_name()).build(catalog);
    files.push(OutputFile {
        path: PathBuf::from(NAV_FILE),
        contents: render_nav(&nav),
    });

    Ok(Site { files, summary })
}

/// Write rendered files below `out_dir`, creating directories as needed.
pub fn write_site(out_dir: &Path, site: &Site) -> Result<()> {
    for file in &site.files {
        let target = out_dir.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::WriteOutput {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        debug!(path = %target.display(), bytes = file.contents.len(), "writing");
        fs::write(&target, &file.contents).map_err(|source| Error::WriteOutput {
            path: target.clone(),
            source,
        })?;
    }
    Ok(())
}
