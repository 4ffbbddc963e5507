//! Option path decomposition.
//!
//! A dotted option name such as `nixflix.sonarr.settings.*.enable` is parsed
//! once into its segments. The canonical form drops the namespace, the service
//! and every wildcard placeholder, and is what grouping and page keys are built
//! from. The raw name is kept untouched for rendering and sorting.

/// Placeholder for "any list element" in a declared option path.
pub const ARRAY_WILDCARD: &str = "*";

/// Placeholder for "any attribute name" in a declared option path.
pub const NAMED_WILDCARD: &str = "<name>";

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Whether a segment is one of the two reserved wildcard tokens.
pub fn is_wildcard(segment: &str) -> bool {
    segment == ARRAY_WILDCARD || segment == NAMED_WILDCARD
}

/// Drop wildcard segments, keeping the order of everything else.
pub fn strip_wildcards<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !is_wildcard(s))
        .map(str::to_string)
        .collect()
}

/// Whether a segment can name an output directory.
///
/// Empty segments, `.`, `..` and anything holding a path separator would
/// resolve outside the page's own directory.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}

/// A parsed option path below a known namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPath {
    raw: String,
    /// All segments, namespace first.
    segments: Vec<String>,
    /// Segments after the service with wildcards removed.
    canonical: Vec<String>,
}

impl OptionPath {
    /// Parse `raw` as a path under `namespace`.
    ///
    /// Returns `None` when the first segment is not the namespace, there is
    /// no segment after it, or a later segment is not usable as a directory
    /// name. Callers treat that as "no hierarchy" and route the option to the
    /// root page.
    pub fn parse(raw: &str, namespace: &str) -> Option<Self> {
        let segments: Vec<String> = raw.split(SEPARATOR).map(str::to_string).collect();
        if segments.len() < 2 || segments[0] != namespace {
            return None;
        }
        if !segments[1..].iter().all(|s| is_safe_segment(s)) {
            return None;
        }
        let canonical = strip_wildcards(&segments[2..]);
        Some(Self {
            raw: raw.to_string(),
            segments,
            canonical,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Second segment: the subsystem the option belongs to.
    pub fn service(&self) -> &str {
        &self.segments[1]
    }

    /// True when the path stops at the service segment (`ns.x`).
    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 2
    }

    /// Segments after the service, wildcards included.
    pub fn structure(&self) -> &[String] {
        self.segments.get(2..).unwrap_or(&[])
    }

    /// Segments after the service, wildcards removed.
    pub fn canonical(&self) -> &[String] {
        &self.canonical
    }

    pub fn has_wildcard(&self) -> bool {
        self.structure().iter().any(|s| is_wildcard(s))
    }
}
