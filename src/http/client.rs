//! HTTP client wrapper with request counting and a fixed scan identity
//!
//! Redirects are never followed: the scanner observes 3xx responses rather
//! than chasing them, so redirect findings stay distinguishable from content
//! findings. Transport failures are returned as typed errors and treated by
//! callers as absence of evidence, never retried.

use crate::error::Result;
use crate::models::ScanConfig;
use reqwest::{Client, Response};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// HTTP client wrapper with request counting and an optional courtesy delay
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    request_count: Arc<AtomicU64>,
    request_delay: Option<Duration>,
}

impl HttpClient {
    /// Creates a new HttpClient from scan configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let request_delay = if config.request_delay_ms > 0 {
            Some(Duration::from_millis(config.request_delay_ms))
        } else {
            None
        };

        Ok(Self {
            client,
            request_count: Arc::new(AtomicU64::new(0)),
            request_delay,
        })
    }

    /// Sends a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.send(self.client.get(url)).await
    }

    /// Sends a GET request with query parameters appended
    pub async fn get_with_params(&self, url: &str, params: &[(String, String)]) -> Result<Response> {
        self.send(self.client.get(url).query(params)).await
    }

    /// Sends a POST request with a urlencoded form body
    pub async fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<Response> {
        self.send(self.client.post(url).form(params)).await
    }

    /// Returns the total number of requests made
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Sends a single request. The courtesy delay only suspends the calling
    /// worker; other workers' requests are unaffected.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<Response> {
        if let Some(delay) = self.request_delay {
            sleep(delay).await;
        }

        self.request_count.fetch_add(1, Ordering::Relaxed);

        let response = req.send().await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }
}
