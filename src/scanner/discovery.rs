//! Path discovery module: wordlist brute-force with risk classification
//!
//! Probes each wordlist entry with a no-redirect GET. Accessible paths are
//! classified by a keyword match against the path string; redirects are
//! recorded as low-risk findings carrying the redirect target.

use crate::crawler;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{EvidenceKind, Finding, Method, RiskLevel, ScanConfig, VulnClass};
use crate::payloads::{DEFAULT_WORDLIST, SENSITIVE_KEYWORDS};
use crate::scanner::session::ScanSession;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

/// Brute-forces common paths against the target root
pub struct DiscoveryScanner;

/// Classifies a path's sensitivity by keyword substring match
pub fn classify_sensitivity(path: &str) -> RiskLevel {
    let lower = path.to_lowercase();
    if SENSITIVE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

impl DiscoveryScanner {
    fn load_wordlist(config: &ScanConfig) -> Vec<String> {
        match config.wordlist_path.as_deref() {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => content
                    .lines()
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty() && !l.starts_with('#'))
                    .collect(),
                Err(e) => {
                    info!("Could not load wordlist from {path} ({e}), using built-in defaults");
                    DEFAULT_WORDLIST.iter().map(|s| s.to_string()).collect()
                }
            },
            None => DEFAULT_WORDLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    async fn check_path(client: &HttpClient, session: &ScanSession, path: String) -> Option<Finding> {
        let url = crawler::join_base(&session.target).join(&path).ok()?;

        let response = match client.get(url.as_str()).await {
            Ok(r) => r,
            Err(e) => {
                debug!("Discovery probe failed for {url}: {e}");
                return None;
            }
        };

        let status = response.status();
        match status.as_u16() {
            200 | 201 | 203 => {
                let content_type = response
                    .headers()
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                let body = response.text().await.unwrap_or_default();
                let risk = classify_sensitivity(&path);

                Some(
                    Finding::new(
                        VulnClass::ExposedPath,
                        url.as_str(),
                        Method::Get,
                        EvidenceKind::ResponseStatus,
                        risk.into(),
                    )
                    .with_parameter(&path)
                    .with_detail(format!(
                        "HTTP {status}, {} bytes, content-type '{content_type}', risk {risk}",
                        body.len()
                    )),
                )
            }
            301 | 302 | 307 | 308 => {
                let location = response
                    .headers()
                    .get("location")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown")
                    .to_string();

                Some(
                    Finding::new(
                        VulnClass::ExposedPath,
                        url.as_str(),
                        Method::Get,
                        EvidenceKind::ResponseStatus,
                        RiskLevel::Low.into(),
                    )
                    .with_parameter(&path)
                    .with_detail(format!("HTTP {status} redirects to {location}")),
                )
            }
            _ => None,
        }
    }
}

#[async_trait]
impl super::Scanner for DiscoveryScanner {
    fn name(&self) -> &str {
        "discovery"
    }

    fn description(&self) -> &str {
        "Brute-forces common paths and classifies exposed ones by sensitivity"
    }

    async fn scan(
        &self,
        client: &HttpClient,
        config: &ScanConfig,
        session: &ScanSession,
    ) -> Result<()> {
        let wordlist = Self::load_wordlist(config);
        info!("Running path discovery with {} entries", wordlist.len());

        let findings: Vec<Finding> = stream::iter(wordlist)
            .map(|path| Self::check_path(client, session, path))
            .buffer_unordered(config.threads.max(1))
            .filter_map(|f| async { f })
            .collect()
            .await;

        for finding in findings {
            session.record(finding).await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sensitivity_keywords() {
        assert_eq!(classify_sensitivity("admin/"), RiskLevel::High);
        assert_eq!(classify_sensitivity(".git/"), RiskLevel::High);
        assert_eq!(classify_sensitivity("wp-config.php"), RiskLevel::High);
        assert_eq!(classify_sensitivity("API/v1/"), RiskLevel::High);
        assert_eq!(classify_sensitivity("images/"), RiskLevel::Medium);
        assert_eq!(classify_sensitivity("readme.html"), RiskLevel::Medium);
    }
}
