//! HTTP client for the list service

use std::time::Duration;

use reqwest::{Client, Url, header};

use super::{ApiError, parse_lists};
use crate::model::List;

/// Reads the list collection from a fixed endpoint
#[derive(Debug, Clone)]
pub struct ListClient {
    http: Client,
    url: Url,
}

impl ListClient {
    /// Create a client for `url` with a per-request timeout
    pub fn new(url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("listmerge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `GET` the endpoint and decode the collection
    ///
    /// Any non-success status is an error; the body is not inspected then.
    pub async fn fetch_lists(&self) -> Result<Vec<List>, ApiError> {
        let response = self
            .http
            .get(self.url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        parse_lists(&body)
    }
}
