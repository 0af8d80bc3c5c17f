//! Process-wide settings, resolved once at startup and read-only afterwards.
//!
//! Sources, lowest precedence first: built-in defaults, `EFEMERIDES_*`
//! environment variables, then CLI flags applied by `main`.

use std::time::Duration;

use anyhow::{Context, Result};
use ::config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BASE_URL: &str = "https://es.wikipedia.org/wiki";
pub const DEFAULT_USER_AGENT: &str = concat!("efemerides/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub addr: String,
    pub base_url: String,
    pub user_agent: String,
    pub fetch_timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_config(
            Config::builder()
                .set_default("addr", DEFAULT_ADDR)?
                .set_default("base_url", DEFAULT_BASE_URL)?
                .set_default("user_agent", DEFAULT_USER_AGENT)?
                .set_default("fetch_timeout_secs", DEFAULT_FETCH_TIMEOUT_SECS)?
                .add_source(Environment::with_prefix("EFEMERIDES"))
                .build()
                .context("Failed to build settings")?,
        )
    }

    fn from_config(cfg: Config) -> Result<Self> {
        cfg.try_deserialize().context("Invalid EFEMERIDES_* settings")
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}
