//! Waitlist store configuration baked in at build time.
//!
//! The endpoint and key come from `WAITLIST_STORE_URL` and
//! `WAITLIST_STORE_KEY` in the environment of the WASM build. The key is the
//! public, insert-only credential of the hosted store, so shipping it in the
//! bundle is expected. `WAITLIST_STORE_TABLE` overrides the collection name.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TABLE: &str = "waitlist";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing build-time setting {var}")]
    Missing { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the hosted project, without trailing slash.
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    /// Read the values compiled into this build.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when the URL or key was not set.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("WAITLIST_STORE_URL"),
            option_env!("WAITLIST_STORE_KEY"),
            option_env!("WAITLIST_STORE_TABLE"),
        )
    }

    /// Build a config from raw values. Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first absent setting.
    pub fn from_values(url: Option<&str>, api_key: Option<&str>, table: Option<&str>) -> Result<Self, ConfigError> {
        let url = non_blank(url)
            .ok_or(ConfigError::Missing { var: "WAITLIST_STORE_URL" })?
            .trim_end_matches('/')
            .to_owned();
        let api_key = non_blank(api_key)
            .ok_or(ConfigError::Missing { var: "WAITLIST_STORE_KEY" })?
            .to_owned();
        let table = non_blank(table).unwrap_or(DEFAULT_TABLE).to_owned();
        Ok(Self { url, api_key, table })
    }

    /// REST endpoint that accepts inserts into the waitlist collection.
    #[must_use]
    pub fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
