//! Provides several utilities and helper functions.

pub mod env;
mod log_level;

pub use log_level::LogLevel;

#[cfg(test)]
lazy_static::lazy_static! {
    // cargo runs tests in parallel and they all share the one process environment, so every test
    // that sets or removes environment variables holds this lock while doing so.
    pub static ref SERIAL_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
}
