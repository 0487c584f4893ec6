//! Configuration loader and defaults for the claude-example-web server.
//!
//! Reads the listening port from the `PORT` environment variable at
//! startup, falling back to a default when the variable is unset or not
//! a valid port number. The value is read once in `main` and handed to
//! the server explicitly, so nothing else in the crate consults the
//! environment.
//!
use std::env;

/// Port used when `PORT` is unset or unparsable
const DEFAULT_PORT: u16 = 3000;

/// Application configuration, immutable for the process lifetime
pub struct Config {
    /// TCP port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            port: port_or_default(env::var("PORT").ok()),
        }
    }
}

fn port_or_default(raw: Option<String>) -> u16 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT)
}
