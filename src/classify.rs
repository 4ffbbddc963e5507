//! Page assignment: place every option on exactly one page of one service.

use crate::analyze::{Analysis, ServiceGroups};
use crate::model::{GroupKey, OptionRecord, OptionSet, PageKey};
use crate::path::OptionPath;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// An option placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub record: OptionRecord,
    /// A wildcard sits somewhere below the service segment.
    pub guarded: bool,
}

impl Entry {
    /// Options without a parsed path (outside the namespace) are never guarded.
    pub fn new(name: String, record: OptionRecord, path: Option<&OptionPath>) -> Self {
        Self {
            guarded: path.is_some_and(OptionPath::has_wildcard),
            name,
            record,
        }
    }
}

/// The pages of one service and the options assigned to each.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePages {
    id: String,
    pages: BTreeMap<PageKey, Vec<Entry>>,
}

impl ServicePages {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            pages: BTreeMap::new(),
        }
    }

    fn push(&mut self, page: PageKey, entry: Entry) {
        self.pages.entry(page).or_default().push(entry);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pages with at least one option, index first.
    pub fn pages(&self) -> impl Iterator<Item = (&PageKey, &[Entry])> {
        self.pages.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Whether options live directly on the service landing page.
    pub fn has_index(&self) -> bool {
        self.pages.contains_key(&PageKey::Index)
    }

    /// Group pages that received options.
    pub fn group_keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.pages.keys().filter_map(PageKey::group)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn option_count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Every service with its page assignments.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: String,
    services: BTreeMap<String, ServicePages>,
}

impl Catalog {
    /// Classify all options.
    ///
    /// Options outside `namespace` and top-level options (`ns.x`) land on the
    /// index page of the `root` service.
    pub fn build(options: OptionSet, namespace: &str, root: &str, min_group_size: usize) -> Self {
        let parsed: Vec<(String, OptionRecord, Option<OptionPath>)> = options
            .into_iter()
            .map(|(name, record)| {
                let path = OptionPath::parse(&name, namespace);
                (name, record, path)
            })
            .collect();

        let analysis = Analysis::build(parsed.iter().filter_map(|(_, _, p)| p.as_ref()), min_group_size);

        let mut services: BTreeMap<String, ServicePages> = std::iter::once(root)
            .chain(analysis.services())
            .map(|id| (id.to_string(), ServicePages::new(id)))
            .collect();

        for (name, record, path) in parsed {
            let (service, page) = match path.as_ref() {
                Some(path) => classify(path, &analysis, root),
                None => {
                    debug!(option = %name, namespace, "option has no usable hierarchy, routed to root page");
                    (root, PageKey::Index)
                }
            };
            trace!(option = %name, service, page = %page, "assigned");
            let target = if services.contains_key(service) { service } else { root };
            if let Some(pages) = services.get_mut(target) {
                pages.push(page, Entry::new(name, record, path.as_ref()));
            }
        }

        Self {
            root: root.to_string(),
            services,
        }
    }

    pub fn service(&self, id: &str) -> Option<&ServicePages> {
        self.services.get(id)
    }

    /// Services that have options: the root service first, then the rest by name.
    pub fn services(&self) -> Vec<&ServicePages> {
        let root = self.services.get(&self.root).into_iter();
        let rest = self
            .services
            .iter()
            .filter(|(id, _)| **id != self.root)
            .map(|(_, pages)| pages);
        root.chain(rest).filter(|s| !s.is_empty()).collect()
    }

    pub fn option_count(&self) -> usize {
        self.services.values().map(ServicePages::option_count).sum()
    }
}

/// Service and page for one parsed option.
///
/// Total: an option whose service is unknown to `analysis` falls back to the
/// index page of `root`.
pub fn classify<'a>(path: &'a OptionPath, analysis: &Analysis, root: &'a str) -> (&'a str, PageKey) {
    if path.is_top_level() {
        return (root, PageKey::Index);
    }
    match analysis.service(path.service()) {
        Some(groups) => (path.service(), page_for(path.canonical(), groups)),
        None => (root, PageKey::Index),
    }
}

/// Deepest group containing `canonical`, or the index page.
///
/// An option whose whole canonical path is a group is that group's container
/// option and sits on the group's own page. Otherwise the longest group prefix
/// wins.
pub fn page_for(canonical: &[String], groups: &ServiceGroups) -> PageKey {
    if !canonical.is_empty() && groups.is_group(canonical) {
        return PageKey::Group(GroupKey::new(canonical.to_vec()));
    }
    (1..canonical.len())
        .rev()
        .map(|len| &canonical[..len])
        .find(|prefix| groups.is_group(prefix))
        .map_or(PageKey::Index, |prefix| PageKey::Group(GroupKey::new(prefix.to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_options;

    fn options(names: &[&str]) -> OptionSet {
        names
            .iter()
            .map(|n| (n.to_string(), OptionRecord::default()))
            .collect()
    }

    fn group(key: &str) -> PageKey {
        PageKey::Group(GroupKey::new(key.split('.').map(str::to_string).collect()))
    }

    fn page_of(catalog: &Catalog, service: &str, option: &str) -> Option<PageKey> {
        catalog.service(service)?.pages().find_map(|(key, entries)| {
            entries.iter().any(|e| e.name == option).then(|| key.clone())
        })
    }

    #[test]
    fn sample_scenario() {
        let catalog = Catalog::build(
            options(&["ns.svc.enable", "ns.svc.opts.a", "ns.svc.opts.b", "ns.svc.opts.c"]),
            "ns",
            "core",
            3,
        );
        assert_eq!(page_of(&catalog, "svc", "ns.svc.enable"), Some(PageKey::Index));
        for leaf in ["ns.svc.opts.a", "ns.svc.opts.b", "ns.svc.opts.c"] {
            assert_eq!(page_of(&catalog, "svc", leaf), Some(group("opts")));
        }
    }

    #[test]
    fn container_option_lands_on_its_own_group() {
        let catalog = Catalog::build(
            options(&["ns.svc.opts", "ns.svc.opts.a", "ns.svc.opts.b", "ns.svc.opts.c"]),
            "ns",
            "core",
            3,
        );
        assert_eq!(page_of(&catalog, "svc", "ns.svc.opts"), Some(group("opts")));
    }

    #[test]
    fn container_option_with_wildcard() {
        let catalog = Catalog::build(
            options(&[
                "ns.svc.hosts.<name>",
                "ns.svc.hosts.<name>.addr",
                "ns.svc.hosts.<name>.port",
                "ns.svc.hosts.<name>.user",
            ]),
            "ns",
            "core",
            3,
        );
        assert_eq!(page_of(&catalog, "svc", "ns.svc.hosts.<name>"), Some(group("hosts")));
        assert_eq!(page_of(&catalog, "svc", "ns.svc.hosts.<name>.port"), Some(group("hosts")));
    }

    #[test]
    fn longest_prefix_wins() {
        let catalog = Catalog::build(
            options(&[
                "ns.svc.config.x",
                "ns.svc.config.host.a",
                "ns.svc.config.host.b",
                "ns.svc.config.host.c",
            ]),
            "ns",
            "core",
            3,
        );
        // "config" has 4 options beneath it, "config.host" has 3: both are groups.
        assert_eq!(page_of(&catalog, "svc", "ns.svc.config.host.a"), Some(group("config.host")));
        assert_eq!(page_of(&catalog, "svc", "ns.svc.config.x"), Some(group("config")));
    }

    #[test]
    fn below_threshold_falls_through() {
        let catalog = Catalog::build(
            options(&[
                "ns.svc.config.x",
                "ns.svc.config.y",
                "ns.svc.config.small.a",
                "ns.svc.config.small.b",
            ]),
            "ns",
            "core",
            3,
        );
        // "config.small" has only 2 options, so they fold into "config".
        assert_eq!(page_of(&catalog, "svc", "ns.svc.config.small.a"), Some(group("config")));

        let catalog = Catalog::build(
            options(&["ns.svc.small.a", "ns.svc.small.b"]),
            "ns",
            "core",
            3,
        );
        assert_eq!(page_of(&catalog, "svc", "ns.svc.small.a"), Some(PageKey::Index));
    }

    #[test]
    fn top_level_and_foreign_options_go_to_root() {
        let catalog = Catalog::build(
            options(&["ns.enable", "ns.mediaDir", "other.thing", "ns"]),
            "ns",
            "core",
            3,
        );
        for name in ["ns.enable", "ns.mediaDir", "other.thing", "ns"] {
            assert_eq!(page_of(&catalog, "core", name), Some(PageKey::Index));
        }
    }

    #[test]
    fn unusable_segments_go_to_root() {
        let names = ["ns./tmp/x.a", "ns..x.y", "ns.svc..port", "ns.svc.a\\b.c"];
        let catalog = Catalog::build(options(&names), "ns", "core", 3);
        for name in names {
            assert_eq!(page_of(&catalog, "core", name), Some(PageKey::Index), "{name}");
        }
        assert_eq!(catalog.services().len(), 1);
    }

    #[test]
    fn real_service_named_like_root_merges() {
        let catalog = Catalog::build(options(&["ns.enable", "ns.core.port"]), "ns", "core", 3);
        assert_eq!(catalog.services().len(), 1);
        assert_eq!(catalog.service("core").unwrap().option_count(), 2);
    }

    #[test]
    fn unknown_service_falls_back_to_root() {
        let known = OptionPath::parse("ns.svc.a.b", "ns").unwrap();
        let analysis = Analysis::build([&known], 3);
        let stray = OptionPath::parse("ns.ghost.a.b", "ns").unwrap();
        assert_eq!(classify(&stray, &analysis, "core"), ("core", PageKey::Index));
    }

    #[test]
    fn root_service_listed_first() {
        let catalog = Catalog::build(
            options(&["ns.zeta.enable", "ns.alpha.enable", "ns.enable"]),
            "ns",
            "core",
            3,
        );
        let ids: Vec<&str> = catalog.services().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["core", "alpha", "zeta"]);
    }

    #[test]
    fn empty_root_is_skipped() {
        let catalog = Catalog::build(options(&["ns.svc.enable"]), "ns", "core", 3);
        let ids: Vec<&str> = catalog.services().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["svc"]);
    }

    #[test]
    fn every_visible_option_placed_once() {
        let opts = parse_options(
            r#"{
                "ns.enable": {},
                "ns.svc.enable": {},
                "ns.svc.hidden": {"internal": true},
                "ns.svc.cfg.a": {}, "ns.svc.cfg.b": {}, "ns.svc.cfg.c": {},
                "ns.svc.cfg.deep.x": {}, "ns.svc.cfg.deep.y": {}, "ns.svc.cfg.deep.z": {},
                "ns.svc.items.*.name": {}, "ns.svc.items.<name>.value": {},
                "ns.other.port": {},
                "stray": {}
            }"#,
        )
        .unwrap();
        let expected: Vec<String> = opts.keys().cloned().collect();
        let catalog = Catalog::build(opts, "ns", "core", 3);

        let mut placed: Vec<String> = catalog
            .services()
            .iter()
            .flat_map(|s| s.pages().flat_map(|(_, entries)| entries.iter().map(|e| e.name.clone())))
            .collect();
        placed.sort();
        assert_eq!(placed, expected);
        assert_eq!(catalog.option_count(), expected.len());
        assert!(!placed.contains(&"ns.svc.hidden".to_string()));
    }

    #[test]
    fn every_page_is_index_or_group() {
        let names = [
            "ns.svc.a.b.c", "ns.svc.a.b.d", "ns.svc.a.b.e", "ns.svc.a.f",
            "ns.svc.g.*.h", "ns.svc.g.<name>.i", "ns.svc.g.j", "ns.svc.k",
        ];
        let paths: Vec<OptionPath> = names.iter().map(|n| OptionPath::parse(n, "ns").unwrap()).collect();
        let analysis = Analysis::build(&paths, 3);
        let groups = analysis.service("svc").unwrap();
        for path in &paths {
            match page_for(path.canonical(), groups) {
                PageKey::Index => {}
                PageKey::Group(key) => assert!(groups.is_group(key.segments())),
            }
        }
    }
}
