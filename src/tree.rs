//! Page hierarchy of one service.
//!
//! Group keys are nested by segment: `config` and `config.host` become a
//! `config` node with a `host` child. A node may end a page, hold sub-pages, or
//! both. A node that only holds sub-pages is a namespace node: it is reached
//! while inserting a longer key but no page ends there.

use crate::model::GroupKey;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageNode {
    children: BTreeMap<String, PageNode>,
    page: Option<GroupKey>,
}

impl PageNode {
    /// Build the tree for a set of group keys. Insertion order does not matter.
    pub fn build<'a>(keys: impl IntoIterator<Item = &'a GroupKey>) -> Self {
        let mut root = Self::default();
        for key in keys {
            root.insert(key);
        }
        root
    }

    /// Add one page, creating intermediate nodes as needed.
    pub fn insert(&mut self, key: &GroupKey) {
        let mut node = self;
        for segment in key.segments() {
            node = node.children.entry(segment.clone()).or_default();
        }
        if !key.segments().is_empty() {
            node.page = Some(key.clone());
        }
    }

    /// Children in lexicographic order of their segment.
    pub fn children(&self) -> impl Iterator<Item = (&str, &PageNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn child(&self, segment: &str) -> Option<&PageNode> {
        self.children.get(segment)
    }

    /// The page this node ends, if any.
    pub fn page(&self) -> Option<&GroupKey> {
        self.page.as_ref()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Holds sub-pages without being a page itself.
    pub fn is_namespace(&self) -> bool {
        self.page.is_none() && self.has_children()
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.children.is_empty()
    }
}
