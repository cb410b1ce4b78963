//! # Application Configuration
//!
//! Layered configuration behind a global `RwLock`. Sources are merged in
//! order: the embedded defaults, `THERMOSITE`-prefixed environment variables,
//! an optional configuration file passed with `--config`, and finally
//! command-line overrides.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use clap::ArgMatches;
use config::{Config, Environment, FileFormat};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::types::LogLevel;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Scanner-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    /// Base path whose immediate subdirectories are treated as sites.
    pub base_path: PathBuf,
}

/// The merged application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub debug: bool,
    pub log_level: LogLevel,
    pub scan: Scan,
}

impl AppConfig {
    /// Initializes the global configuration from the embedded defaults and
    /// the process environment.
    pub fn init(default_config: Option<&str>) -> Result<()> {
        let mut builder = Config::builder();

        // Embedded defaults shipped inside the executable
        if let Some(config_contents) = default_config {
            builder = builder.add_source(config::File::from_str(config_contents, FileFormat::Toml));
        }

        // Environment variables take precedence over the defaults
        builder = builder.add_source(Environment::with_prefix("THERMOSITE").separator("__"));

        let settings = builder.build()?;

        {
            let mut w = CONFIG.write()?;
            *w = settings;
        }

        Ok(())
    }

    /// Layers a configuration file on top of the current settings.
    pub fn merge_config(config_file: Option<&Path>) -> Result<()> {
        if let Some(config_file_path) = config_file {
            let mut w = CONFIG.write()?;
            let merged = Config::builder()
                .add_source(w.clone())
                .add_source(config::File::from(config_file_path))
                .build()?;
            *w = merged;
        }

        Ok(())
    }

    /// Layers command-line arguments on top of the current settings.
    pub fn merge_args(args: ArgMatches) -> Result<()> {
        if let Some(debug) = args.get_one::<bool>("debug") {
            AppConfig::set("debug", &debug.to_string())?;
        }

        if let Some(log_level) = args.get_one::<LogLevel>("log_level") {
            AppConfig::set("log_level", &log_level.to_string())?;
        }

        Ok(())
    }

    /// Overrides a single configuration value.
    pub fn set(key: &str, value: &str) -> Result<()> {
        let mut w = CONFIG.write()?;
        let updated = Config::builder()
            .add_source(w.clone())
            .set_override(key, value)?
            .build()?;
        *w = updated;

        Ok(())
    }

    /// Reads a single typed value out of the configuration.
    pub fn get<'de, T>(key: &str) -> Result<T>
    where
        T: Deserialize<'de>,
    {
        Ok(CONFIG.read()?.get::<T>(key)?)
    }

    /// Deserializes the full configuration into an `AppConfig`.
    pub fn fetch() -> Result<AppConfig> {
        let config = CONFIG.read()?.clone();

        Ok(config.try_deserialize()?)
    }
}
