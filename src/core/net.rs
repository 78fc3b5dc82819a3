// src/core/net.rs
//
// Blocking HTTP GET for catalog pages. One request at a time, fixed timeout,
// no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Anything that can turn a URL into a page body.
/// The catalog adapter only talks to this, so tests can serve fixtures.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text().map_err(|source| FetchError::Request { url: s!(url), source })
    }
}
