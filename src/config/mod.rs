//! Application configuration.
//!
//! Loaded from `~/.config/rephrase/config.toml`; a missing file means
//! defaults. Only the server base URL is configurable — the endpoint
//! path and wire shape are fixed.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServerConfig};
