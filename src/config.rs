//! Generator configuration.
//!
//! Defaults reproduce the nixflix reference layout. A YAML file passed with
//! `--config` replaces any subset of the fields; command-line flags win over
//! both.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Minimum number of options under a prefix before it gets its own page.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 3;

pub const DEFAULT_NAMESPACE: &str = "nixflix";

/// Placeholder line replaced by `merge-nav`.
pub const NAV_PLACEHOLDER: &str = "# REFERENCE_NAV_PLACEHOLDER";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// First path segment every documented option starts with.
    pub namespace: String,
    pub min_group_size: usize,
    /// Service that collects top-level and unplaceable options.
    pub root_service: String,
    /// Page title of the root service's index page.
    pub root_title: String,
    /// Directory of the generated pages relative to the docs root, as used in nav paths.
    pub reference_dir: String,
    /// Title of the top-level nav section.
    pub nav_title: String,
    /// Base URL that declaration paths are appended to.
    pub source_url: Option<String>,
    /// Fence language for default and example values.
    pub code_language: String,
    /// Service and segment title overrides.
    pub titles: BTreeMap<String, String>,
    /// Page segment overrides, checked before `titles`.
    pub acronyms: BTreeMap<String, String>,
    /// Index page introductions per service.
    pub descriptions: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let titles = [
            ("sabnzbd", "SABnzbd"),
            ("qbittorrent", "qBittorrent"),
            ("rtorrent", "rTorrent"),
            ("mullvad", "Mullvad VPN"),
            ("postgres", "PostgreSQL"),
        ];
        let acronyms = [("gui", "GUI"), ("vpn", "VPN")];
        let descriptions = [
            ("core", "Top-level nixflix configuration options that apply to the entire system."),
            ("sonarr", "[Sonarr](https://github.com/Sonarr/Sonarr) is a PVR for Usenet and BitTorrent users for TV shows."),
            ("sonarr-anime", "[Sonarr](https://github.com/Sonarr/Sonarr) is a PVR for Usenet and BitTorrent users for anime TV shows."),
            ("radarr", "[Radarr](https://github.com/Radarr/Radarr) is a PVR for Usenet and BitTorrent users for movies."),
            ("lidarr", "[Lidarr](https://github.com/Lidarr/Lidarr) is a PVR for Usenet and BitTorrent users for music."),
            ("prowlarr", "[Prowlarr](https://github.com/Prowlarr/Prowlarr) is an indexer manager/proxy for Arr applications."),
            ("jellyfin", "[Jellyfin](https://github.com/jellyfin/jellyfin) is a free media server for managing and streaming media."),
            ("jellyseerr", "[Jellyseerr](https://github.com/seerr-team/seerr) is a media discovery and request application."),
            ("sabnzbd", "[SABnzbd](https://github.com/sabnzbd/sabnzbd) is a binary newsreader for Usenet."),
            ("downloadarr", "Downloadarr is a service that configures download clients in each Starr service."),
            ("qbittorrent", "[qBittorrent](https://github.com/qbittorrent/qBittorrent) is a BitTorrent download client."),
            ("mullvad", "[Mullvad VPN](https://mullvad.net/en) configuration for routing traffic through a VPN tunnel."),
            ("postgres", "[PostgreSQL](https://www.postgresql.org/) database backend for Arr services."),
            ("recyclarr", "[Recyclarr](https://github.com/recyclarr/recyclarr) automatically syncs TRaSH guides to Arr services."),
        ];
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            root_service: "core".to_string(),
            root_title: "Core Options".to_string(),
            reference_dir: "reference".to_string(),
            nav_title: "Reference".to_string(),
            source_url: Some("https://github.com/kiriwalawren/nixflix/blob/main".to_string()),
            code_language: "nix".to_string(),
            titles: to_map(&titles),
            acronyms: to_map(&acronyms),
            descriptions: to_map(&descriptions),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Config {
    /// Load a YAML config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&content).map_err(|source| Error::LoadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(Error::InvalidConfig("namespace must not be empty".into()));
        }
        if self.namespace.contains(crate::path::SEPARATOR) {
            return Err(Error::InvalidConfig(format!(
                "namespace must be a single segment, got {}",
                self.namespace
            )));
        }
        if self.min_group_size == 0 {
            return Err(Error::InvalidConfig("min_group_size must be at least 1".into()));
        }
        if self.root_service.is_empty() {
            return Err(Error::InvalidConfig("root_service must not be empty".into()));
        }
        Ok(())
    }
}
