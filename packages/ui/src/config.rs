//! Startup configuration: compiled defaults plus deploy-time overrides.

use store::config::OVERRIDE_KEYS;
use store::{AppConfig, ConfigError};

/// Resolve the console configuration from the parsed bundled TOML document
/// and the runtime overrides of the current platform.
///
/// Call this after the logger is up: a broken bundle and malformed
/// overrides are reported as warnings.
pub fn load_app_config(bundled: Result<AppConfig, ConfigError>) -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    resolve(bundled, runtime_override)
}

fn resolve<F>(bundled: Result<AppConfig, ConfigError>, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = bundled.unwrap_or_else(|e| {
        tracing::warn!("Ignoring bundled configuration: {e}");
        AppConfig::default()
    });

    for key in OVERRIDE_KEYS {
        if let Some(value) = lookup(key) {
            tracing::debug!("Runtime override {key}={value}");
        }
    }

    for (key, value) in config.apply_overrides(&lookup) {
        tracing::warn!("Ignoring malformed runtime override {key}={value:?}");
    }
    config
}

/// Reads `window.env[key]`, the object the container entrypoint writes from
/// its environment.
#[cfg(target_arch = "wasm32")]
fn runtime_override(key: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &JsValue::from_str("env")).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    js_sys::Reflect::get(&env, &JsValue::from_str(key))
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::config::{API_URL_KEY, DEFAULT_PAGE_SIZE_KEY};

    #[test]
    fn test_broken_bundle_falls_back_to_defaults() {
        let config = resolve(AppConfig::from_toml("production = \"maybe\""), |_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_override_keeps_bundled_value() {
        let bundled = AppConfig::from_toml("[features]\ndefault_page_size = 25\n");
        let config = resolve(bundled, |key| match key {
            API_URL_KEY => Some("http://api.localhost".to_string()),
            DEFAULT_PAGE_SIZE_KEY => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://api.localhost");
        assert_eq!(config.features.default_page_size, 25);
    }
}
