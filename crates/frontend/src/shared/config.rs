//! Frontend configuration.
//!
//! Defaults are embedded at compile time. A build can override them by
//! setting `PRINTDESK_CONFIG` to TOML text; a malformed override is logged
//! and the embedded defaults are used instead.

use once_cell::sync::Lazy;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[ui]
toast_timeout_ms = 4000
default_page_size = 25
business_name = "PrintDesk"
"#;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Used verbatim when non-empty, e.g. "https://api.example.com"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_toast_timeout")]
    pub toast_timeout_ms: u32,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_business_name")]
    pub business_name: String,
}

fn default_port() -> u16 {
    3000
}

fn default_toast_timeout() -> u32 {
    4000
}

fn default_page_size() -> usize {
    25
}

fn default_business_name() -> String {
    "PrintDesk".to_string()
}

pub fn parse_config(text: &str) -> Result<AppConfig, String> {
    toml::from_str(text).map_err(|e| format!("Invalid configuration: {}", e))
}

fn load() -> AppConfig {
    if let Some(text) = option_env!("PRINTDESK_CONFIG") {
        match parse_config(text) {
            Ok(cfg) => return cfg,
            Err(e) => log::warn!("{}; falling back to defaults", e),
        }
    }
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("{}", e);
        AppConfig {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
            },
            ui: UiConfig {
                toast_timeout_ms: default_toast_timeout(),
                default_page_size: default_page_size(),
                business_name: default_business_name(),
            },
        }
    })
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Builds the API origin from the page location when no base URL is configured.
pub fn resolve_api_base(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    let base = api.base_url.trim();
    if !base.is_empty() {
        return base.trim_end_matches('/').to_string();
    }
    format!("{}//{}:{}", protocol, hostname, api.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let cfg = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(cfg.api.port, 3000);
        assert!(cfg.api.base_url.is_empty());
        assert_eq!(cfg.ui.toast_timeout_ms, 4000);
        assert_eq!(cfg.ui.default_page_size, 25);
        assert_eq!(cfg.ui.business_name, "PrintDesk");
    }

    #[test]
    fn test_partial_override_uses_defaults() {
        let cfg = parse_config("[api]\nport = 8080\n[ui]\n").unwrap();
        assert_eq!(cfg.api.port, 8080);
        assert_eq!(cfg.ui.default_page_size, 25);
    }

    #[test]
    fn test_malformed_override() {
        assert!(parse_config("[api\nport = ").is_err());
    }

    #[test]
    fn test_resolve_api_base() {
        let mut api = ApiConfig {
            base_url: String::new(),
            port: 3000,
        };
        assert_eq!(
            resolve_api_base(&api, "https:", "shop.example.com"),
            "https://shop.example.com:3000"
        );
        api.base_url = "https://api.example.com/".into();
        assert_eq!(resolve_api_base(&api, "http:", "localhost"), "https://api.example.com");
    }
}
