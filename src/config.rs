// src/config.rs

use anyhow::{anyhow, Context, Result};
use std::{env, time::Duration};
use url::Url;

/// The SIL ISO 639-3 code table.
pub const DEFAULT_TABLE_URL: &str =
    "https://iso639-3.sil.org/sites/iso639-3/files/downloads/iso-639-3.tab";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const TABLE_URL_VAR: &str = "LANGCHECK_TABLE_URL";
pub const TIMEOUT_SECS_VAR: &str = "LANGCHECK_TIMEOUT_SECS";

/// Where the reference table lives and how long we wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_url: Url,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_url: Url::parse(DEFAULT_TABLE_URL).expect("default table URL should parse"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Read overrides from `LANGCHECK_TABLE_URL` and `LANGCHECK_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = get(TABLE_URL_VAR) {
            cfg.table_url = Url::parse(raw.trim())
                .with_context(|| format!("parsing {} = {:?}", TABLE_URL_VAR, raw))?;
        }

        if let Some(raw) = get(TIMEOUT_SECS_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("parsing {} = {:?}", TIMEOUT_SECS_VAR, raw))?;
            if secs == 0 {
                return Err(anyhow!("{} must be at least 1 second", TIMEOUT_SECS_VAR));
            }
            cfg.timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }

    pub fn with_table_url(mut self, table_url: Url) -> Self {
        self.table_url = table_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
