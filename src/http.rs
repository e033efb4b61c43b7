//! HTTP GET for loading documents from a URL
//!
//! The runtime talks to the network through [`HttpFetcher`] so that tests
//! can substitute canned responses. Production uses a `ureq` agent with
//! native-tls and the platform's root certificates.

use std::time::Duration;

use anyhow::Context;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use ureq::Agent;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single GET with no custom headers
pub trait HttpFetcher: Send + Sync {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse>;
}

/// `ureq`-backed fetcher
pub struct UreqFetcher {
    agent: Agent,
}

impl UreqFetcher {
    /// Create a fetcher; `timeout` of None waits on the transport defaults
    pub fn new(timeout: Option<Duration>) -> Self {
        let tls_config = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .root_certs(RootCerts::PlatformVerifier)
            .build();

        // Status codes are checked by the caller so the log can name them
        let agent = Agent::config_builder()
            .tls_config(tls_config)
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();

        Self { agent }
    }
}

impl HttpFetcher for UreqFetcher {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .with_context(|| format!("HTTP request failed for {}", url))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(FetchResponse { status, body })
    }
}

/// Fetch `url` and return its body, or a log-ready description of the failure
pub fn fetch_text(fetcher: &dyn HttpFetcher, url: &str) -> Result<String, String> {
    match fetcher.get(url) {
        Ok(response) if response.is_success() => Ok(response.body),
        Ok(response) => Err(format!("HTTP error! status: {}", response.status)),
        Err(e) => Err(format!("{:#}", e)),
    }
}
