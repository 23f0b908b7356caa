// src/validator.rs

use tracing::{debug, info};

use crate::config::Config;
use crate::error::LookupError;
use crate::fetch::{HttpTableSource, TableSource};
use crate::table::{Language, LanguageTable};

/// Checks candidate codes against a freshly fetched ISO 639-3 table.
///
/// Every call fetches and parses the whole table; nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct LanguageCodeValidator<S = HttpTableSource> {
    source: S,
}

impl LanguageCodeValidator<HttpTableSource> {
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Ok(Self::new(HttpTableSource::new(config)?))
    }
}

impl<S: TableSource> LanguageCodeValidator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn load(&self) -> Result<LanguageTable, LookupError> {
        let body = self.source.fetch_table().await?;
        LanguageTable::parse(&body)
    }

    /// Whether `code` equals some row's `Id` or `Part1`, exactly.
    pub async fn try_is_real_language(&self, code: &str) -> Result<bool, LookupError> {
        let table = self.load().await?;
        let found = table.contains(code);
        debug!(code, found, rows = table.len(), "checked language code");
        Ok(found)
    }

    /// Like [`try_is_real_language`](Self::try_is_real_language), but any
    /// failure is logged and reported as `false`.
    pub async fn is_real_language(&self, code: &str) -> bool {
        match self.try_is_real_language(code).await {
            Ok(found) => found,
            Err(e) => {
                info!(code, kind = %e.kind(), error = %e, "language code check failed");
                false
            }
        }
    }

    /// The first row matching `code`, as a typed record.
    pub async fn try_lookup(&self, code: &str) -> Result<Option<Language>, LookupError> {
        let table = self.load().await?;
        Ok(table.find(code).map(Language::from_row))
    }

    pub async fn lookup(&self, code: &str) -> Option<Language> {
        match self.try_lookup(code).await {
            Ok(lang) => lang,
            Err(e) => {
                info!(code, kind = %e.kind(), error = %e, "language lookup failed");
                None
            }
        }
    }

    /// A code is treated as a constructed language when it is not a real one,
    /// including when the check itself fails.
    pub async fn is_conlang(&self, code: &str) -> bool {
        !self.is_real_language(code).await
    }
}
