//! Crawl-and-probe injection module
//!
//! Drives the crawl loop: pages come off the frontier one at a time, each
//! fetched page yields new same-origin frontier entries and a batch of
//! surfaces, and the batch is probed by a bounded worker pool before the
//! next page is fetched. Payload attempts within one surface are strictly
//! sequential so a positive can stop the list early; only across surfaces
//! is there concurrency.

pub mod sqli;
pub mod xss;

use crate::crawler::{self, extractor};
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Finding, Method, OriginPolicy, ScanConfig};
use crate::scanner::session::ScanSession;
use crate::scanner::surface::{self, Surface, SurfaceOrigin};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};
use url::Url;

/// Detects SQL injection and reflected XSS on crawled surfaces
pub struct InjectionScanner;

#[async_trait]
impl super::Scanner for InjectionScanner {
    fn name(&self) -> &str {
        "injection"
    }

    fn description(&self) -> &str {
        "Crawls the target and probes query parameters and form fields for SQLi and XSS"
    }

    async fn scan(
        &self,
        client: &HttpClient,
        config: &ScanConfig,
        session: &ScanSession,
    ) -> Result<()> {
        while let Some(page_url) = session.next_page().await {
            let body = match client.get(page_url.as_str()).await {
                Ok(response) => response.text().await.unwrap_or_default(),
                Err(e) => {
                    debug!("Failed to fetch {page_url}: {e}");
                    continue;
                }
            };

            // Link production: same-origin links feed the frontier
            for link in extractor::extract_links(&page_url, &body) {
                if crawler::same_origin(&session.target, &link) {
                    session.enqueue(&link).await;
                } else {
                    debug!("Dropping off-origin link {link}");
                }
            }

            // Surface production: query string first, then forms in
            // document order
            let mut surfaces = surface::from_query(&page_url);
            for form in extractor::extract_forms(&body) {
                for s in surface::from_form(&page_url, &form) {
                    if crawler::same_origin(&session.target, &s.url) {
                        surfaces.push(s);
                    } else {
                        match config.origin_policy {
                            OriginPolicy::Strict => {
                                warn!("Skipping cross-origin form action {}", s.url);
                            }
                            OriginPolicy::Permissive => {
                                warn!("Probing cross-origin form action {}", s.url);
                                surfaces.push(s);
                            }
                        }
                    }
                }
            }

            if surfaces.is_empty() {
                continue;
            }
            info!("Probing {} surfaces on {page_url}", surfaces.len());

            let findings: Vec<Finding> = stream::iter(surfaces)
                .map(|s| async move {
                    session.note_surface();
                    probe_surface(client, config, &s).await
                })
                .buffer_unordered(config.threads.max(1))
                .flat_map(stream::iter)
                .collect()
                .await;

            for finding in findings {
                session.record(finding).await;
            }
        }

        Ok(())
    }
}

/// Probes one surface against both vulnerability classes. Each class stops at
/// its first positive, so a surface yields at most one finding per class.
async fn probe_surface(client: &HttpClient, config: &ScanConfig, surface: &Surface) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(finding) = sqli::probe(client, surface, config.length_threshold).await {
        findings.push(finding);
    }

    if surface.origin == SurfaceOrigin::FormField {
        if let Some(finding) = xss::probe(client, surface).await {
            findings.push(finding);
        }
    }

    findings
}

/// Sends one probe request with `value` substituted for the parameter under
/// test; all other parameters keep their captured or baseline values.
/// Returns the response body, or a transport error the caller treats as
/// "no signal".
pub(crate) async fn send_probe(
    client: &HttpClient,
    surface: &Surface,
    value: &str,
) -> Result<String> {
    let response = match surface.origin {
        SurfaceOrigin::QueryString => {
            let (base, params) = mutate_query(&surface.url, &surface.param, value);
            client.get_with_params(base.as_str(), &params).await?
        }
        SurfaceOrigin::FormField => {
            let params = mutate_form(surface, value);
            match surface.method {
                Method::Get => client.get_with_params(surface.url.as_str(), &params).await?,
                Method::Post => client.post_form(surface.url.as_str(), &params).await?,
            }
        }
    };

    Ok(response.text().await.unwrap_or_default())
}

/// Splits a URL into (query-less base, pairs) with one parameter replaced
fn mutate_query(url: &Url, param: &str, value: &str) -> (Url, Vec<(String, String)>) {
    let params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == param {
                (k.to_string(), value.to_string())
            } else {
                (k.to_string(), v.to_string())
            }
        })
        .collect();

    let mut base = url.clone();
    base.set_query(None);
    (base, params)
}

/// Builds the form pairs with one field replaced; submit fields and every
/// other field keep their captured defaults
fn mutate_form(surface: &Surface, value: &str) -> Vec<(String, String)> {
    match &surface.form {
        Some(ctx) => ctx
            .fields
            .iter()
            .map(|(name, default)| {
                if name == &surface.param {
                    (name.clone(), value.to_string())
                } else {
                    (name.clone(), default.clone())
                }
            })
            .collect(),
        None => vec![(surface.param.clone(), value.to_string())],
    }
}
