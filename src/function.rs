// src/function.rs
//
// Synchronous entry points for hosts that call into the crate as a plain
// function, one code per call. When the caller already sits inside a tokio
// runtime the lookup runs on a separate thread with its own runtime.

use anyhow::{anyhow, Context, Result};
use std::thread;
use tokio::runtime::{Builder, Handle};
use tracing::{debug, info};

use crate::config::Config;
use crate::validator::LanguageCodeValidator;

/// `true` iff `code` is an ISO 639-3 `Id` or ISO 639-1 `Part1` code.
///
/// Reads [`Config`] from the environment, fetches the table once and never
/// fails: every error is logged and reported as `false`.
pub fn is_real_language(code: &str) -> bool {
    match Config::from_env() {
        Ok(cfg) => is_real_language_with(&cfg, code),
        Err(e) => {
            info!(code, error = %format!("{:#}", e), "language code check failed");
            false
        }
    }
}

/// Negation of [`is_real_language`].
pub fn is_conlang(code: &str) -> bool {
    !is_real_language(code)
}

pub fn is_real_language_with(config: &Config, code: &str) -> bool {
    let result = if Handle::try_current().is_ok() {
        debug!(code, "inside a runtime, checking on a separate thread");
        thread::scope(|s| {
            s.spawn(|| run(config, code))
                .join()
                .unwrap_or_else(|_| Err(anyhow!("lookup thread panicked")))
        })
    } else {
        run(config, code)
    };

    match result {
        Ok(found) => found,
        Err(e) => {
            info!(code, error = %format!("{:#}", e), "language code check failed");
            false
        }
    }
}

fn run(config: &Config, code: &str) -> Result<bool> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building runtime")?;
    let validator = LanguageCodeValidator::from_config(config)?;
    Ok(rt.block_on(validator.is_real_language(code)))
}
