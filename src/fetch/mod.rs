// src/fetch/mod.rs

use reqwest::Client;
use std::future::Future;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::LookupError;

#[cfg(test)]
pub(crate) mod test_server;

/// Anything that can hand back the raw reference table text.
pub trait TableSource {
    fn fetch_table(&self) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Fetches the table over HTTP. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpTableSource {
    client: Client,
    url: Url,
}

impl HttpTableSource {
    /// Build a client bounded by `config.timeout`.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LookupError::Client)?;
        Ok(Self::with_client(client, config.table_url.clone()))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn get_text(&self) -> Result<String, LookupError> {
        debug!(url = %self.url, "fetching reference table");
        let network = |e: reqwest::Error| LookupError::Network {
            url: self.url.to_string(),
            message: e.to_string(),
        };

        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                url: self.url.to_string(),
                status,
            });
        }

        let text = resp.text().await.map_err(network)?;
        debug!(url = %self.url, %status, bytes = text.len(), "fetched reference table");
        Ok(text)
    }
}

impl TableSource for HttpTableSource {
    fn fetch_table(&self) -> impl Future<Output = Result<String, LookupError>> + Send {
        self.get_text()
    }
}
