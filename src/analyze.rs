//! Grouping analysis: decide which option prefixes get a page of their own.
//!
//! Every option contributes one count to each non-empty proper prefix of its
//! canonical path. A prefix reached by at least `min_group_size` options is a
//! *group* and becomes a page. Counting is strictly per service, so
//! `sonarr.config` and `radarr.config` never share a tally.

use crate::path::OptionPath;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Number of options found under each canonical prefix of one service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrefixCounts(BTreeMap<Vec<String>, usize>);

impl PrefixCounts {
    /// Count one option whose canonical path is `canonical`.
    ///
    /// The full path itself is not a prefix of the option, so an option with
    /// a single canonical segment (or none) adds nothing.
    pub fn record(&mut self, canonical: &[String]) {
        for len in 1..canonical.len() {
            *self.0.entry(canonical[..len].to_vec()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, prefix: &[String]) -> usize {
        self.0.get(prefix).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], usize)> {
        self.0.iter().map(|(k, v)| (k.as_slice(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Per-service counting and classification context.
#[derive(Debug, Default, Clone)]
pub struct ServiceGroups {
    counts: PrefixCounts,
    groups: BTreeSet<Vec<String>>,
}

impl ServiceGroups {
    pub fn counts(&self) -> &PrefixCounts {
        &self.counts
    }

    /// Whether `prefix` has enough options beneath it to warrant a page.
    pub fn is_group(&self, prefix: &[String]) -> bool {
        self.groups.contains(prefix)
    }

    /// Page-worthy prefixes in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = &[String]> {
        self.groups.iter().map(Vec::as_slice)
    }

    fn promote(&mut self, min_group_size: usize) {
        self.groups = self
            .counts
            .iter()
            .filter(|(_, count)| *count >= min_group_size)
            .map(|(prefix, _)| prefix.to_vec())
            .collect();
    }
}

/// Grouping tables for every service found in the input.
#[derive(Debug, Clone)]
pub struct Analysis {
    services: BTreeMap<String, ServiceGroups>,
}

impl Analysis {
    /// Discover services, then count prefixes and promote groups for each.
    ///
    /// Every discovered service gets an (initially empty) context before any
    /// counting happens; counting never creates a service on the fly.
    pub fn build<'a>(paths: impl IntoIterator<Item = &'a OptionPath>, min_group_size: usize) -> Self {
        let paths: Vec<&OptionPath> = paths.into_iter().filter(|p| !p.is_top_level()).collect();

        let mut services: BTreeMap<String, ServiceGroups> = discover_services(paths.iter().copied())
            .into_iter()
            .map(|id| (id, ServiceGroups::default()))
            .collect();

        for path in &paths {
            if let Some(context) = services.get_mut(path.service()) {
                context.counts.record(path.canonical());
            }
        }

        for (id, context) in &mut services {
            context.promote(min_group_size);
            debug!(
                service = %id,
                prefixes = context.counts.len(),
                groups = context.groups.len(),
                "analysed service"
            );
        }

        Self { services }
    }

    pub fn service(&self, id: &str) -> Option<&ServiceGroups> {
        self.services.get(id)
    }

    /// Discovered service identifiers, sorted.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }
}

/// Service identifiers (second path segment) of every option that has one.
pub fn discover_services<'a>(paths: impl IntoIterator<Item = &'a OptionPath>) -> BTreeSet<String> {
    paths
        .into_iter()
        .filter(|p| !p.is_top_level())
        .map(|p| p.service().to_string())
        .collect()
}
