//! Provides the `EnvConfig` object, used to access config values from the running program's
//! environment variables.

use super::{Config, ConfigSource};
use crate::{properties::PropertyMap, report, util::LogLevel, APP_PREFIX};
use anyhow::Context;
use serde::Deserialize;

/// Contains the config values from the running program's environment variables.
#[derive(Debug, Deserialize, Default)]
pub struct EnvConfig {
    /// Corresponds to the `PROPDUMP_PREFIX` variable.
    prefix: Option<String>,
    /// Corresponds to the `PROPDUMP_LOG_LEVEL` variable.
    log_level: Option<LogLevel>,
}

impl ConfigSource for EnvConfig {
    fn apply_to_config(self, config: Config) -> Config {
        Config {
            prefix: self.prefix.unwrap_or(config.prefix),
            log_level: self.log_level.unwrap_or(config.log_level),
        }
    }
}

impl EnvConfig {
    /// Returns a new `EnvConfig` built from the `PROPDUMP_` variables in a given environment
    /// snapshot.
    pub fn from_table(env: &PropertyMap) -> anyhow::Result<Self> {
        envy::prefixed(APP_PREFIX)
            .from_iter::<_, Self>(env.clone())
            .with_context(|| {
                let lines = report::lines(APP_PREFIX, env)
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                format!(
                    "Failed to load config from environment variables:\n{}",
                    lines.join("\n")
                )
            })
    }
}
