//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `line`: LINE channel credentials and endpoints
//! - `weather`: CWA open-data settings
//!
//! Sources in increasing precedence: built-in defaults, an optional
//! `config.toml`, `PCDBOT_<SECTION>__<KEY>` variables, and finally the bare
//! deployment variables `CHANNEL_SECRET`, `CHANNEL_ACCESS_TOKEN`,
//! `CWA_API_KEY` and `PORT`.

mod line;
mod server;
mod weather;

use std::{fmt, path::Path};

use config::{Config, ConfigError, File, Map};
use serde::{Deserialize, Serialize};

pub use line::LineConfig;
pub use server::ServerConfig;
pub use weather::WeatherConfig;

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "PCDBOT";

/// Bare variable names and the keys they override
const BARE_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("CHANNEL_SECRET", "line.channel_secret"),
    ("CHANNEL_ACCESS_TOKEN", "line.channel_access_token"),
    ("CWA_API_KEY", "weather.api_key"),
    ("PORT", "server.port"),
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// LINE channel configuration
    #[serde(default)]
    pub line: LineConfig,

    /// Weather configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the process environment and `./config.toml`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Some(Path::new("config")), None)
    }

    /// Load configuration from explicit sources
    ///
    /// `file` is an optional config file (missing files are skipped). `env`
    /// replaces the process environment when given.
    pub fn load_with(
        file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let lookup = |name: &str| {
            env.as_ref()
                .map_or_else(|| std::env::var(name).ok(), |map| map.get(name).cloned())
                .filter(|value| !value.trim().is_empty())
        };

        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env.clone()),
        );

        for (name, key) in BARE_ENV_OVERRIDES {
            builder = builder.set_override_option(key, lookup(name))?;
        }

        builder.build()?.try_deserialize()
    }

    /// Environment names of credentials that are not configured
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.line.has_channel_secret() {
            missing.push("CHANNEL_SECRET");
        }
        if !self.line.has_access_token() {
            missing.push("CHANNEL_ACCESS_TOKEN");
        }
        if !self.weather.has_api_key() {
            missing.push("CWA_API_KEY");
        }
        missing
    }

    pub fn is_ready(&self) -> bool {
        self.missing_credentials().is_empty()
    }
}
