// SPDX-License-Identifier: MPL-2.0
//! One-shot HTTP GET helpers built on `reqwest`.
//!
//! Every call performs a single attempt: no retries, no backoff and no
//! timeout beyond what the transport imposes. Any transport failure,
//! non-success status or undecodable body becomes a [`FetchError`].

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use std::fmt;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("Shopfront/", env!("CARGO_PKG_VERSION"));

/// Address of a remote data source.
///
/// Components receive their endpoint at mount time instead of reading it
/// from process-wide configuration, so tests can point them anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fetches `endpoint` and decodes the body as JSON into `T`.
pub async fn fetch_json<T: DeserializeOwned>(endpoint: Endpoint) -> Result<T, FetchError> {
    let body = fetch_bytes(endpoint.0).await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches `url` and returns the raw body.
pub async fn fetch_bytes(url: String) -> Result<Vec<u8>, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_displays_its_url() {
        let endpoint = Endpoint::new("http://localhost:5000/api/products/images");
        assert_eq!(
            endpoint.to_string(),
            "http://localhost:5000/api/products/images"
        );
        assert_eq!(endpoint.as_str(), endpoint.to_string());
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("Shopfront/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
