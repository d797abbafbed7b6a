//! Frontend configuration
//!
//! The default configuration is embedded in the bundle. A different TOML
//! document can be baked in at build time through the
//! `SETTINGS_FRONTEND_CONFIG` environment variable.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FrontendConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Absolute origin of the API server; empty means same origin
    #[serde(default)]
    pub base_url: String,
    /// Backend port on the page's host, used when `base_url` is empty
    #[serde(default)]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, unknown names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

fn default_timeout_ms() -> u32 {
    4000
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[notifications]
timeout_ms = 4000

[logging]
level = "debug"
"#;

/// Configuration together with the reason it fell back to defaults, if any
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: FrontendConfig,
    pub error: Option<String>,
}

static CONFIG: Lazy<LoadedConfig> = Lazy::new(|| {
    load_config(option_env!("SETTINGS_FRONTEND_CONFIG").unwrap_or(DEFAULT_CONFIG))
});

/// Parse a TOML configuration document
pub fn parse_config(source: &str) -> Result<FrontendConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Parse `source`, keeping the error instead of logging it
///
/// The config decides the log level, so it is read before a logger exists.
pub fn load_config(source: &str) -> LoadedConfig {
    match parse_config(source) {
        Ok(config) => LoadedConfig {
            config,
            error: None,
        },
        Err(e) => LoadedConfig {
            config: FrontendConfig::default(),
            error: Some(e.to_string()),
        },
    }
}

/// Process-wide configuration, loaded on first access
pub fn config() -> &'static FrontendConfig {
    &CONFIG.config
}

/// Why the process-wide configuration fell back to defaults
pub fn config_error() -> Option<&'static str> {
    CONFIG.error.as_deref()
}
