//! Scanner engine and trait definitions

pub mod discovery;
pub mod injection;
pub mod session;
pub mod surface;

use crate::crawler;
use crate::error::{Result, WebHackError};
use crate::http::HttpClient;
use crate::models::{ScanConfig, ScanResult};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use session::ScanSession;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

/// Trait that all scanner modules must implement
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Returns the module name
    fn name(&self) -> &str;

    /// Returns a description of what this module checks
    fn description(&self) -> &str;

    /// Executes the scan, recording findings into the session as it goes so
    /// partial results survive a deadline expiry
    async fn scan(
        &self,
        client: &HttpClient,
        config: &ScanConfig,
        session: &ScanSession,
    ) -> Result<()>;
}

/// Orchestrates the execution of all registered scanner modules
pub struct ScanEngine {
    scanners: Vec<Arc<dyn Scanner>>,
}

impl ScanEngine {
    /// Creates a new ScanEngine with no registered scanners
    pub fn new() -> Self {
        Self {
            scanners: Vec::new(),
        }
    }

    /// Creates a ScanEngine with all default scanners registered
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register(Arc::new(injection::InjectionScanner));
        engine.register(Arc::new(discovery::DiscoveryScanner));
        engine
    }

    /// Registers a new scanner module
    pub fn register(&mut self, scanner: Arc<dyn Scanner>) {
        self.scanners.push(scanner);
    }

    /// Returns information about all registered modules
    pub fn list_modules(&self) -> Vec<(&str, &str)> {
        self.scanners
            .iter()
            .map(|s| (s.name(), s.description()))
            .collect()
    }

    /// Runs all enabled scanner modules and collects results
    pub async fn run(&self, config: &ScanConfig) -> Result<ScanResult> {
        let target = crawler::normalize_target(&config.target)?;
        resolve_target(&target).await?;

        let client = HttpClient::from_config(config)?;
        let session = ScanSession::new(target.clone(), config.max_pages);
        session.enqueue(&target).await;

        for name in &config.modules {
            if !self.scanners.iter().any(|s| s.name() == name) {
                warn!("{}", WebHackError::ModuleNotFound(name.clone()));
            }
        }

        let enabled: Vec<Arc<dyn Scanner>> = self
            .scanners
            .iter()
            .filter(|s| config.modules.contains(&s.name().to_string()))
            .cloned()
            .collect();

        let mut result = ScanResult::new(target.as_str());
        result.modules_executed = enabled.iter().map(|s| s.name().to_string()).collect();

        let run_all = self.run_sequential(&enabled, &client, config, &session);
        match config.deadline_secs {
            Some(secs) => {
                if tokio::time::timeout(Duration::from_secs(secs), run_all)
                    .await
                    .is_err()
                {
                    warn!(
                        "{}, reporting partial results",
                        WebHackError::ScanTimeout(secs)
                    );
                }
            }
            None => run_all.await,
        }

        let mut findings = session.findings().await;

        // One finding per (class, method, url, parameter); keep the first
        // occurrence. URLs compare verbatim, paths are case-sensitive.
        let mut seen = HashSet::new();
        findings.retain(|f| {
            let key = format!(
                "{}|{}|{}|{}",
                f.class,
                f.method,
                f.url,
                f.parameter.as_deref().unwrap_or("")
            );
            seen.insert(key)
        });
        findings.sort_by(|a, b| a.severity.cmp(&b.severity));

        result.findings = findings;
        result.pages_visited = session.pages_fetched().await;
        result.surfaces_tested = session.surfaces_tested();
        result.total_requests = client.request_count();
        result.finish();

        Ok(result)
    }

    /// Modules run one after another; probe concurrency lives inside each
    /// module's worker pool
    async fn run_sequential(
        &self,
        scanners: &[Arc<dyn Scanner>],
        client: &HttpClient,
        config: &ScanConfig,
        session: &ScanSession,
    ) {
        let pb = ProgressBar::new(scanners.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        for scanner in scanners {
            pb.set_message(format!("Running {}...", scanner.name()));
            info!("Executing module: {}", scanner.name());

            match scanner.scan(client, config, session).await {
                Ok(()) => {
                    info!("Module '{}' completed", scanner.name());
                }
                Err(e) => {
                    error!("Module '{}' failed: {}", scanner.name(), e);
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("Scan complete");
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Resolves the target host before any crawling begins; failure here is the
/// only fatal error a scan can hit
async fn resolve_target(target: &Url) -> Result<()> {
    let host = target
        .host_str()
        .ok_or_else(|| WebHackError::ConfigError(format!("target '{target}' has no host")))?;
    let port = target.port_or_known_default().unwrap_or(80);

    tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| WebHackError::TargetUnreachable(format!("{host}: {e}")))?;

    Ok(())
}
