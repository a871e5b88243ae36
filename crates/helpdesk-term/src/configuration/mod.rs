//! Configuration handling for the terminal client.
//!
//! Precedence is defaults, then config file, then command line flags.

mod config;

pub use config::{Config, ConfigKey};
