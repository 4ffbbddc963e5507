//! Reference documentation from option metadata.
//!
//! Reads the JSON option dump of a module system (`ns.service.section.field`
//! paths with type, default, example and declaration metadata), decides which
//! option prefixes deserve a page of their own, and writes one page per group
//! plus an mkdocs navigation file mirroring the hierarchy.
//!
//! Pipeline: [`path`] → [`analyze`] → [`classify`] → [`tree`] → [`nav`],
//! with [`render`] turning classified pages into documents.

pub mod analyze;
pub mod classify;
pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod model;
pub mod nav;
pub mod path;
pub mod render;
pub mod site;
pub mod title;
pub mod tree;

pub use error::{Error, Result};
