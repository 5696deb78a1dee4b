use std::path::Path;

use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_LISTING_COUNT, DEFAULT_LOG_LEVEL, ENV_PREFIX, ENV_SEPARATOR,
};
use crate::options::RuleOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub listing: ListingConfig,
    #[serde(default)]
    pub schedules: Vec<ScheduleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Number of occurrences listed per schedule.
    pub count: u32,
    /// Date-like lower bound for listings; the schedule start when absent.
    pub from: Option<String>,
}

/// A named rule as written in the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    pub name: String,
    /// Date-like anchor (`epoch`, `today`, `2008-09-01`, ...).
    pub start: String,
    #[serde(default)]
    pub options: RuleOptions,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and the optional
    /// `kairos.toml` file into a `Settings`.
    /// File values take precedence over environment variables
    /// (`KAIROS_LOGGING__LEVEL`, ...), which take precedence over defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        if !Path::new(CONFIG_FILE).exists() {
            tracing::debug!(
                file = CONFIG_FILE,
                "No settings file, using defaults and environment"
            );
        }

        Self::layered(
            Self::environment(),
            config::File::with_name(CONFIG_FILE).required(false),
        )
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn layered<F>(environment: config::Environment, file: F) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let settings = Self::builder()?
            // Env
            .add_source(environment)
            // TOML file
            .add_source(file)
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(
            level = %settings.logging.level,
            schedules = settings.schedules.len(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from TOML text on top of the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or does not match the
    /// settings layout.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("listing.count", i64::from(DEFAULT_LISTING_COUNT))?)
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and
/// `kairos.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
