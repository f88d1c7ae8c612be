//! # Console configuration — `console.toml` plus runtime overrides
//!
//! [`AppConfig`] is resolved once at startup in two layers:
//!
//! 1. **Compiled defaults** — a TOML document bundled into the binary and
//!    parsed with [`AppConfig::from_toml`]. Missing fields take the built-in
//!    defaults below, so an empty document is a valid configuration.
//! 2. **Runtime overrides** — values injected at deploy time without a
//!    rebuild (the `window.env` object in the browser, process environment
//!    natively), applied by [`AppConfig::apply_overrides`].
//!
//! ```toml
//! production = false
//! api_url = "http://localhost:8080"
//! api_version = "v1"
//!
//! [features]
//! enable_toast = true
//! enable_pagination = true
//! default_page_size = 10
//! ```
//!
//! ## Override keys
//!
//! | Key | Field | Parsing |
//! |-----|-------|---------|
//! | `API_URL` | `api_url` | taken verbatim |
//! | `ENABLE_TOAST` | `features.enable_toast` | true iff it lowercases to `"true"` |
//! | `ENABLE_PAGINATION` | `features.enable_pagination` | same as above |
//! | `DEFAULT_PAGE_SIZE` | `features.default_page_size` | positive integer, otherwise rejected |
//!
//! Empty values and unsubstituted `${...}` template placeholders count as
//! absent.

use serde::{Deserialize, Serialize};

pub const API_URL_KEY: &str = "API_URL";
pub const ENABLE_TOAST_KEY: &str = "ENABLE_TOAST";
pub const ENABLE_PAGINATION_KEY: &str = "ENABLE_PAGINATION";
pub const DEFAULT_PAGE_SIZE_KEY: &str = "DEFAULT_PAGE_SIZE";

/// Every key consulted by [`AppConfig::apply_overrides`].
pub const OVERRIDE_KEYS: [&str; 4] = [
    API_URL_KEY,
    ENABLE_TOAST_KEY,
    ENABLE_PAGINATION_KEY,
    DEFAULT_PAGE_SIZE_KEY,
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level console configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub production: bool,
    /// Base URL of the REST backend, without the `/api/users` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub features: FeatureFlags,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub enable_toast: bool,
    #[serde(default = "default_true")]
    pub enable_pagination: bool,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_version() -> String {
    "v1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            production: false,
            api_url: default_api_url(),
            api_version: default_api_version(),
            features: FeatureFlags::default(),
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_toast: true,
            enable_pagination: true,
            default_page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply runtime overrides in place. `lookup` returns the raw injected
    /// value for a key, if any.
    ///
    /// Returns the `(key, value)` pairs that were present but malformed.
    /// Those settings keep their current value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<(&'static str, String)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| is_injected(v));
        let mut rejected = Vec::new();

        if let Some(url) = value(API_URL_KEY) {
            self.api_url = url;
        }
        if let Some(flag) = value(ENABLE_TOAST_KEY) {
            self.features.enable_toast = parse_flag(&flag);
        }
        if let Some(flag) = value(ENABLE_PAGINATION_KEY) {
            self.features.enable_pagination = parse_flag(&flag);
        }
        if let Some(raw) = value(DEFAULT_PAGE_SIZE_KEY) {
            match parse_page_size(&raw) {
                Some(size) => self.features.default_page_size = size,
                None => rejected.push((DEFAULT_PAGE_SIZE_KEY, raw)),
            }
        }
        rejected
    }

    /// Base URL with any trailing slash removed.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

/// False for empty strings and for template placeholders the deployment did
/// not substitute, e.g. `${API_URL}`.
fn is_injected(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && !(v.starts_with("${") && v.ends_with('}'))
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Positive page size, `None` otherwise.
pub fn parse_page_size(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.features.default_page_size, 10);
        assert!(config.features.enable_toast);
        assert!(config.features.enable_pagination);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            production = true
            api_url = "http://simple-mocking-api:8080"

            [features]
            default_page_size = 25
            "#,
        )
        .unwrap();
        assert!(config.production);
        assert_eq!(config.api_url, "http://simple-mocking-api:8080");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.features.default_page_size, 25);
        assert!(config.features.enable_toast);
    }

    #[test]
    fn test_toml_roundtrip_and_error() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);

        assert!(matches!(
            AppConfig::from_toml("production = \"maybe\""),
            Err(ConfigError::Parse(_))
        ));
    }

    fn resolve(pairs: &[(&str, &str)]) -> (AppConfig, Vec<(&'static str, String)>) {
        let vars = env(pairs);
        let mut config = AppConfig::default();
        let rejected = config.apply_overrides(|k| vars.get(k).cloned());
        (config, rejected)
    }

    #[test]
    fn test_overrides_applied() {
        let (config, rejected) = resolve(&[
            (API_URL_KEY, "http://api.localhost"),
            (ENABLE_TOAST_KEY, "FALSE"),
            (ENABLE_PAGINATION_KEY, "True"),
            (DEFAULT_PAGE_SIZE_KEY, "20"),
        ]);
        assert_eq!(config.api_url, "http://api.localhost");
        assert!(!config.features.enable_toast);
        assert!(config.features.enable_pagination);
        assert_eq!(config.features.default_page_size, 20);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_placeholders_are_absent_not_rejected() {
        let (config, rejected) = resolve(&[
            (API_URL_KEY, "${API_URL}"),
            (ENABLE_TOAST_KEY, ""),
            (ENABLE_PAGINATION_KEY, "${ENABLE_PAGINATION}"),
            (DEFAULT_PAGE_SIZE_KEY, "${DEFAULT_PAGE_SIZE}"),
        ]);
        assert_eq!(config, AppConfig::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_malformed_page_size_is_reported() {
        for raw in ["lots", "0", "-5"] {
            let (config, rejected) = resolve(&[(DEFAULT_PAGE_SIZE_KEY, raw)]);
            assert_eq!(config.features.default_page_size, 10);
            assert_eq!(rejected, vec![(DEFAULT_PAGE_SIZE_KEY, raw.to_string())]);
        }
    }

    #[test]
    fn test_non_true_flag_disables() {
        let (config, rejected) = resolve(&[(ENABLE_TOAST_KEY, "yes")]);
        assert!(!config.features.enable_toast);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_api_base_trims_slash() {
        let config = AppConfig {
            api_url: "http://api.localhost/".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base(), "http://api.localhost");
    }
}
