//! Run configuration.
//!
//! Handles loading, validating, and layering `redirects.toml`. Every setting
//! has a stock default, so running with no file and no flags reproduces the
//! classic setup: archive in `../archive`, published at `https://spi.blue`.
//!
//! ## Layers
//!
//! Later layers override earlier ones key by key:
//!
//! ```text
//! stock defaults              ← RedirectConfig::default()
//! <root>/redirects.toml       ← or the file passed with --config
//! CLI flags                   ← --archive, --base-url, --exclude
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! archive_dir = "../archive"             # Relative paths resolve against the site root
//! base_url = "https://spi.blue"          # No trailing slash
//! exclude = ["404.html", "index.html"]   # Archive pages that never get a stub
//! ```
//!
//! Unknown keys are rejected to catch typos early. The archive mount path
//! ([`ARCHIVE_MOUNT`]) is fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the site root.
pub const CONFIG_FILE: &str = "redirects.toml";

/// URL path under which archived pages are published.
pub const ARCHIVE_MOUNT: &str = "/archive/";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one generator run.
///
/// Fixed for the duration of the run and passed by reference into every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedirectConfig {
    /// Directory holding the archived pages. Relative paths are joined onto
    /// the site root.
    pub archive_dir: PathBuf,
    /// Public origin of the site, e.g. `https://spi.blue`.
    pub base_url: String,
    /// Archive filenames that never get a stub. Matched exactly.
    pub exclude: BTreeSet<String>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            archive_dir: PathBuf::from("../archive"),
            base_url: "https://spi.blue".to_string(),
            exclude: ["index.html", "404.html"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RedirectConfig {
    /// Validate values that deserialization alone cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archive_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "archive_dir must not be empty".into(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must not end with '/', got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Archive directory as seen from `root`.
    pub fn resolve_archive_dir(&self, root: &Path) -> PathBuf {
        if self.archive_dir.is_absolute() {
            self.archive_dir.clone()
        } else {
            root.join(&self.archive_dir)
        }
    }

    pub fn is_excluded(&self, filename: &str) -> bool {
        self.exclude.contains(filename)
    }

    /// Prefix a site-relative path with the public origin.
    pub fn absolute_url(&self, relative: &str) -> String {
        format!("{}{}", self.base_url, relative)
    }
}

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub archive_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    /// Replaces the whole exclusion set when present.
    pub exclude: Option<Vec<String>>,
}

impl ConfigOverrides {
    /// Express the overrides as a sparse TOML table for merging.
    pub fn to_toml(&self) -> Option<toml::Value> {
        let mut table = toml::Table::new();
        if let Some(dir) = &self.archive_dir {
            table.insert(
                "archive_dir".into(),
                toml::Value::String(dir.to_string_lossy().into_owned()),
            );
        }
        if let Some(url) = &self.base_url {
            table.insert("base_url".into(), toml::Value::String(url.clone()));
        }
        if let Some(names) = &self.exclude {
            table.insert(
                "exclude".into(),
                toml::Value::Array(names.iter().cloned().map(toml::Value::String).collect()),
            );
        }
        if table.is_empty() {
            None
        } else {
            Some(toml::Value::Table(table))
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(RedirectConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `exclude` array is replaced rather than appended to.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a TOML file as a raw value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge optional layers onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    layers: impl IntoIterator<Item = Option<toml::Value>>,
) -> Result<RedirectConfig, ConfigError> {
    let merged = layers
        .into_iter()
        .flatten()
        .fold(base, merge_toml);
    let config: RedirectConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective configuration for a run rooted at `root`.
///
/// An explicit `config_path` must exist. Without one, `<root>/redirects.toml`
/// is used if present and skipped otherwise.
pub fn load_config(
    root: &Path,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<RedirectConfig, ConfigError> {
    let file_layer = match config_path {
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let default_path = root.join(CONFIG_FILE);
            if default_path.is_file() {
                Some(load_raw_config(&default_path)?)
            } else {
                None
            }
        }
    };
    resolve_config(stock_defaults_value()?, [file_layer, overrides.to_toml()])
}

/// Returns a fully-commented stock `redirects.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Archive Redirects Configuration
# ===============================
# All settings are optional. Values shown below are the defaults.
# Place this file as redirects.toml in the root of the site that should
# receive the redirect stubs, or pass it with --config.
# Unknown keys will cause an error.

# Directory holding the archived pages. Only top-level *.html files are used.
# Relative paths are resolved against the site root.
archive_dir = "../archive"

# Public origin of the site, used for the canonical link. No trailing slash.
base_url = "https://spi.blue"

# Archive pages that never get a redirect stub. Matched by exact filename.
exclude = ["404.html", "index.html"]
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_classic_setup() {
        let config = RedirectConfig::default();
        assert_eq!(config.archive_dir, PathBuf::from("../archive"));
        assert_eq!(config.base_url, "https://spi.blue");
        assert!(config.is_excluded("index.html"));
        assert!(config.is_excluded("404.html"));
        assert!(!config.is_excluded("hello-world.html"));
    }

    #[test]
    fn exclusion_is_case_sensitive() {
        let config = RedirectConfig::default();
        assert!(!config.is_excluded("INDEX.html"));
    }

    #[test]
    fn absolute_url_joins_base() {
        let config = RedirectConfig::default();
        assert_eq!(
            config.absolute_url("/archive/hello-world.html"),
            "https://spi.blue/archive/hello-world.html"
        );
    }

    #[test]
    fn parse_partial_config() {
        let text = r#"base_url = "https://example.org""#;
        let config = resolve_config(
            stock_defaults_value().unwrap(),
            [Some(toml::from_str(text).unwrap())],
        )
        .unwrap();

        assert_eq!(config.base_url, "https://example.org");
        assert_eq!(config.archive_dir, PathBuf::from("../archive"));
        assert_eq!(config.exclude.len(), 2);
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: RedirectConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, RedirectConfig::default());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path(), None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, RedirectConfig::default());
    }

    #[test]
    fn load_config_reads_root_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "archive_dir = \"pages\"\nexclude = [\"drafts.html\"]\n",
        )
        .unwrap();

        let config = load_config(tmp.path(), None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.archive_dir, PathBuf::from("pages"));
        assert!(config.is_excluded("drafts.html"));
        assert!(!config.is_excluded("index.html"));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let result = load_config(tmp.path(), Some(&missing), &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn overrides_beat_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "base_url = \"https://file.example\"\narchive_dir = \"from-file\"\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            base_url: Some("https://flag.example".into()),
            ..Default::default()
        };
        let config = load_config(tmp.path(), None, &overrides).unwrap();
        assert_eq!(config.base_url, "https://flag.example");
        assert_eq!(config.archive_dir, PathBuf::from("from-file"));
    }

    #[test]
    fn exclude_override_replaces_set() {
        let overrides = ConfigOverrides {
            exclude: Some(vec!["about.html".into()]),
            ..Default::default()
        };
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path(), None, &overrides).unwrap();
        assert_eq!(config.exclude.len(), 1);
        assert!(config.is_excluded("about.html"));
        assert!(!config.is_excluded("index.html"));
    }

    #[test]
    fn empty_overrides_produce_no_layer() {
        assert!(ConfigOverrides::default().to_toml().is_none());
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "base_uri = \"https://x.y\"\n").unwrap();
        let result = load_config(tmp.path(), None, &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "base_url = [unclosed").unwrap();
        let result = load_config(tmp.path(), None, &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn validate_rejects_trailing_slash() {
        let config = RedirectConfig {
            base_url: "https://spi.blue/".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = RedirectConfig {
            base_url: "spi.blue".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_archive_dir() {
        let config = RedirectConfig {
            archive_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn relative_archive_dir_resolves_against_root() {
        let config = RedirectConfig::default();
        assert_eq!(
            config.resolve_archive_dir(Path::new("/site")),
            PathBuf::from("/site/../archive")
        );
    }

    #[test]
    fn absolute_archive_dir_kept() {
        let config = RedirectConfig {
            archive_dir: PathBuf::from("/srv/archive"),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_archive_dir(Path::new("/site")),
            PathBuf::from("/srv/archive")
        );
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base: toml::Value = toml::from_str("xs = [\"a\", \"b\"]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [\"c\"]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["xs"].as_array().map(|a| a.len()), Some(1));
    }
}
