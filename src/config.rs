//! Host configuration parsed from environment variables.
//!
//! Leptos settings (`LEPTOS_*`, site root, output name) are read separately by
//! `leptos::config::get_configuration`; this module covers what the host
//! itself needs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port on all interfaces, default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// Parse an optional raw `PORT` value. Blank counts as unset.
    pub fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let port = match raw.map(str::trim).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: value.to_owned(), source })?,
        };
        Ok(Self { port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
