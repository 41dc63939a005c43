//! Core data models for the Web-Hack scanner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

/// Severity level for security findings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// Risk classification for discovered paths
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::Low => write!(f, "LOW"),
        }
    }
}

impl From<RiskLevel> for Severity {
    fn from(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::High => Severity::High,
            RiskLevel::Medium => Severity::Medium,
            RiskLevel::Low => Severity::Low,
        }
    }
}

/// Vulnerability class of a finding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VulnClass {
    #[serde(rename = "SQL_INJECTION")]
    SqlInjection,
    #[serde(rename = "XSS")]
    Xss,
    #[serde(rename = "EXPOSED_PATH")]
    ExposedPath,
}

impl fmt::Display for VulnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VulnClass::SqlInjection => write!(f, "SQL_INJECTION"),
            VulnClass::Xss => write!(f, "XSS"),
            VulnClass::ExposedPath => write!(f, "EXPOSED_PATH"),
        }
    }
}

/// The detection mechanism that produced a positive finding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvidenceKind {
    #[serde(rename = "error-signature")]
    ErrorSignature,
    #[serde(rename = "length-differential")]
    LengthDifferential,
    #[serde(rename = "payload-reflection")]
    PayloadReflection,
    #[serde(rename = "response-status")]
    ResponseStatus,
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvidenceKind::ErrorSignature => write!(f, "error-signature"),
            EvidenceKind::LengthDifferential => write!(f, "length-differential"),
            EvidenceKind::PayloadReflection => write!(f, "payload-reflection"),
            EvidenceKind::ResponseStatus => write!(f, "response-status"),
        }
    }
}

/// HTTP method for a surface or finding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A security finding discovered during scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique identifier
    pub id: String,
    /// Vulnerability class
    pub class: VulnClass,
    /// Affected URL
    pub url: String,
    /// HTTP method used to demonstrate the issue
    pub method: Method,
    /// Injected parameter, when the finding is parameter-scoped
    pub parameter: Option<String>,
    /// Resolved form action, for form-based findings
    pub form_action: Option<String>,
    /// Payload that produced the positive signal
    pub payload: Option<String>,
    /// Detection mechanism that fired
    pub evidence: EvidenceKind,
    /// Human-readable evidence detail
    pub detail: String,
    /// Severity level
    pub severity: Severity,
}

impl Finding {
    /// Creates a new Finding with a generated UUID
    pub fn new(
        class: VulnClass,
        url: impl Into<String>,
        method: Method,
        evidence: EvidenceKind,
        severity: Severity,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            class,
            url: url.into(),
            method,
            parameter: None,
            form_action: None,
            payload: None,
            evidence,
            detail: String::new(),
            severity,
        }
    }

    /// Sets the injected parameter name
    pub fn with_parameter(mut self, param: impl Into<String>) -> Self {
        self.parameter = Some(param.into());
        self
    }

    /// Sets the resolved form action
    pub fn with_form_action(mut self, action: impl Into<String>) -> Self {
        self.form_action = Some(action.into());
        self
    }

    /// Sets the payload that triggered the finding
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets the evidence detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Result of a complete scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Target URL
    pub target: String,
    /// Unique scan identifier
    pub scan_id: String,
    /// Scan start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Scan end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// All findings discovered
    pub findings: Vec<Finding>,
    /// Names of modules that were executed
    pub modules_executed: Vec<String>,
    /// Pages fetched by the crawl loop
    pub pages_visited: usize,
    /// Surfaces submitted to the probe engine
    pub surfaces_tested: usize,
    /// Total HTTP requests made
    pub total_requests: u64,
}

impl ScanResult {
    /// Creates a new ScanResult
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scan_id: uuid::Uuid::new_v4().to_string(),
            started_at: Local::now(),
            finished_at: None,
            findings: Vec::new(),
            modules_executed: Vec::new(),
            pages_visited: 0,
            surfaces_tested: 0,
            total_requests: 0,
        }
    }

    /// Returns count of findings by severity
    pub fn count_by_severity(&self, severity: &Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| &f.severity == severity)
            .count()
    }

    /// Marks the scan as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }
}

/// Policy for form actions that resolve outside the target origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OriginPolicy {
    /// Drop cross-origin form actions entirely
    Strict,
    /// Probe cross-origin form actions (logged when it happens)
    Permissive,
}

impl FromStr for OriginPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(OriginPolicy::Strict),
            "permissive" => Ok(OriginPolicy::Permissive),
            other => Err(format!("unknown origin policy '{other}'")),
        }
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Target URL to scan
    pub target: String,
    /// Worker pool size for concurrent probing
    pub threads: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// List of modules to execute
    pub modules: Vec<String>,
    /// Maximum number of distinct pages fetched by the crawl loop
    pub max_pages: usize,
    /// Path to a custom wordlist for path discovery
    pub wordlist_path: Option<String>,
    /// Byte threshold for the length-differential SQLi check
    pub length_threshold: u64,
    /// How to treat form actions outside the target origin
    pub origin_policy: OriginPolicy,
    /// Courtesy delay between requests issued by one worker, in ms (0 = off)
    pub request_delay_ms: u64,
    /// Overall scan deadline in seconds; partial findings survive expiry
    pub deadline_secs: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            threads: 10,
            timeout_secs: 5,
            user_agent: "Web-Hack Security Scanner v1.0".to_string(),
            modules: vec!["injection".to_string(), "discovery".to_string()],
            max_pages: 10,
            wordlist_path: None,
            length_threshold: 50,
            origin_policy: OriginPolicy::Permissive,
            request_delay_ms: 0,
            deadline_secs: None,
        }
    }
}
