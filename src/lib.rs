//! Reports the runtime environment properties whose names share a prefix, sorted, as
//! `name=value` lines.

#![warn(clippy::if_not_else)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod config;
pub mod error;
pub mod jvm;
pub mod log;
pub mod properties;
pub mod report;
pub mod util;

/// The prefix used with every environment value related to the program configuration.
pub const APP_PREFIX: &str = "PROPDUMP_";
/// The property name prefix reported when none is configured.
pub const DEFAULT_PROPERTY_PREFIX: &str = "java.";
