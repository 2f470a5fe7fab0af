//! PASSFORGE sample entry point.
//!
//! Thin shell over `passforge-core`: builds a default random password
//! generator and hands back one password.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use log::SetLoggerError;
use passforge_core::{PasswordGenerator, RandomPasswordGenerator};

/// Install the logger. `RUST_LOG` selects the level; `tracing` events from the
/// core are forwarded through its `log` bridge.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger is already installed.
pub fn init_logging() -> Result<(), SetLoggerError> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).try_init()
}

/// Generate one password with the default random generator.
#[must_use]
pub fn run() -> String {
    let generator = RandomPasswordGenerator::default();
    tracing::info!("generating default random password");
    generator.generate()
}
