//! The configuration framework for propdump.

mod env_config;

use crate::{
    error::ConfigError, properties::PropertyMap, util, util::LogLevel, APP_PREFIX,
    DEFAULT_PROPERTY_PREFIX,
};
use env_config::EnvConfig;
use log::*;
use std::path::Path;

/// Represents a source of configuration values that can be layered over an existing `Config`.
pub trait ConfigSource {
    /// Applies the contained config values to a given `Config`, returning a new `Config` with the
    /// values set.
    fn apply_to_config(self, config: Config) -> Config;
}

/// Contains the program's configuration values.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// The log level to use.
    log_level: LogLevel,
    /// The property name prefix to report.
    prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            prefix: String::from(DEFAULT_PROPERTY_PREFIX),
        }
    }
}

/// Builds a `Config` by layering config sources over the defaults.
pub struct Builder {
    /// The config being built.
    config: Config,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Returns a new builder with every config value at its default.
    pub fn new() -> Builder {
        Builder {
            config: Config::default(),
        }
    }

    /// Applies the config values from a given environment snapshot. In debug builds the values
    /// from a `.env` file are read as well, if one exists; the snapshot's values take precedence.
    /// The `.env` file is never loaded into the process environment.
    pub fn apply_env(self, env: &PropertyMap) -> anyhow::Result<Self> {
        let dotenv = if cfg!(debug_assertions) {
            read_dotenv(dotenv::dotenv_iter())?
        } else {
            PropertyMap::new()
        };

        self.apply_env_layers(env, dotenv)
    }

    /// Applies the config values from a given environment snapshot layered over a given `.env`
    /// file.
    pub fn apply_env_with_file<P>(self, env: &PropertyMap, dotenv_path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let dotenv = read_dotenv(dotenv::from_path_iter(dotenv_path))?;
        self.apply_env_layers(env, dotenv)
    }

    /// Applies the config values from a given environment snapshot layered over a given set of
    /// `.env` values.
    fn apply_env_layers(self, env: &PropertyMap, mut layered: PropertyMap) -> anyhow::Result<Self> {
        for (key, value) in env.iter() {
            layered.insert(key, value);
        }

        let env_config = EnvConfig::from_table(&layered)?;
        Ok(self.apply(env_config))
    }

    /// Applies the config values from a given config source.
    pub fn apply<S>(self, source: S) -> Self
    where
        S: ConfigSource,
    {
        Builder {
            config: source.apply_to_config(self.config),
        }
    }

    /// Validates and returns the built config.
    pub fn build(self) -> anyhow::Result<Config> {
        if self.config.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix.into());
        }

        Ok(self.config)
    }
}

/// Reads the entries of a `.env` file without touching the process environment. A missing file
/// reads as empty.
fn read_dotenv<I>(entries: Result<I, dotenv::Error>) -> anyhow::Result<PropertyMap>
where
    I: IntoIterator<Item = Result<(String, String), dotenv::Error>>,
{
    let entries = match entries {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return Ok(PropertyMap::new()),
        Err(e) => return Err(e.into()),
    };

    let mut map = PropertyMap::new();
    for entry in entries {
        let (key, value) = entry?;
        map.insert(key, value);
    }

    Ok(map)
}

impl Config {
    /// Returns the log level.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the property name prefix to report.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Logs the program's config environment variables and the resulting config.
    pub fn debug_values(&self) {
        debug!("{:?}", util::env::dump_lines(APP_PREFIX));
        debug!("{:?}", self);
    }
}
