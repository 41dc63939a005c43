//! Shared scan-session state
//!
//! One `ScanSession` lives for the duration of one engine run and owns the
//! frontier, the finding collection, and the scan-wide counters. All mutation
//! goes through synchronized accessors; findings recorded before a deadline
//! expiry remain reportable.

use crate::crawler::frontier::Frontier;
use crate::models::Finding;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::info;
use url::Url;

/// Mutable state shared by the crawl loop and the probe workers
pub struct ScanSession {
    /// Normalized scan target; immutable once the scan starts
    pub target: Url,
    frontier: Mutex<Frontier>,
    findings: Mutex<Vec<Finding>>,
    surfaces_tested: AtomicUsize,
}

impl ScanSession {
    pub fn new(target: Url, max_pages: usize) -> Self {
        Self {
            target,
            frontier: Mutex::new(Frontier::new(max_pages)),
            findings: Mutex::new(Vec::new()),
            surfaces_tested: AtomicUsize::new(0),
        }
    }

    /// Enqueues a URL for crawling; returns false when already seen
    pub async fn enqueue(&self, url: &Url) -> bool {
        self.frontier.lock().await.enqueue(url)
    }

    /// Hands out the next page to fetch, bounded by the page ceiling
    pub async fn next_page(&self) -> Option<Url> {
        self.frontier.lock().await.next()
    }

    /// Pages fetched so far
    pub async fn pages_fetched(&self) -> usize {
        self.frontier.lock().await.pages_fetched()
    }

    /// Counts one surface handed to the probe engine
    pub fn note_surface(&self) {
        self.surfaces_tested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn surfaces_tested(&self) -> usize {
        self.surfaces_tested.load(Ordering::Relaxed)
    }

    /// Records a finding. Append-only; called concurrently by probe workers.
    pub async fn record(&self, finding: Finding) {
        info!(
            "{} at {} (parameter: {}, evidence: {})",
            finding.class,
            finding.url,
            finding.parameter.as_deref().unwrap_or("-"),
            finding.evidence
        );
        self.findings.lock().await.push(finding);
    }

    /// Snapshot of the findings collected so far
    pub async fn findings(&self) -> Vec<Finding> {
        self.findings.lock().await.clone()
    }
}
