use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied when a request leaves a selector unset.
///
/// Values stay as raw strings here; the binary parses them into the
/// closed enums of `cardqr-rfc` and `cardqr-service`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub kind: String,
    pub version: String,
    pub error_correction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("output.kind", "vcard")?
            .set_default("output.version", "3.0")?
            .set_default("output.error_correction", "H")?
            .set_default("logging.level", "debug")?)
    }

    /// ## Summary
    /// Loads configuration from defaults, environment variables, and `config.toml`.
    /// The TOML file takes precedence over environment variables.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
