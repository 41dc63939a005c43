//! Configuration management for the Web-Hack scanner

use crate::error::{Result, WebHackError};
use crate::models::{OriginPolicy, ScanConfig};
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching webhack.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
    modules: Option<ModulesSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    threads: Option<usize>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    max_pages: Option<usize>,
    length_threshold: Option<u64>,
    origin_policy: Option<String>,
    request_delay_ms: Option<u64>,
    deadline_secs: Option<u64>,
    wordlist: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModulesSection {
    enabled: Option<Vec<String>>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path).map_err(WebHackError::IoError)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(threads) = scan.threads {
            config.threads = threads;
        }
        if let Some(timeout) = scan.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(ua) = scan.user_agent {
            config.user_agent = ua;
        }
        if let Some(pages) = scan.max_pages {
            config.max_pages = pages;
        }
        if let Some(threshold) = scan.length_threshold {
            config.length_threshold = threshold;
        }
        if let Some(policy) = scan.origin_policy {
            config.origin_policy = policy.parse().map_err(WebHackError::ConfigError)?;
        }
        if let Some(delay) = scan.request_delay_ms {
            config.request_delay_ms = delay;
        }
        if let Some(deadline) = scan.deadline_secs {
            config.deadline_secs = Some(deadline);
        }
        if let Some(wordlist) = scan.wordlist {
            config.wordlist_path = Some(wordlist);
        }
    }

    if let Some(modules) = file_config.modules {
        if let Some(enabled) = modules.enabled {
            config.modules = enabled;
        }
    }

    Ok(config)
}

/// Merges CLI arguments into an existing ScanConfig
#[allow(clippy::too_many_arguments)]
pub fn merge_cli_args(
    config: &mut ScanConfig,
    target: String,
    threads: Option<usize>,
    timeout: Option<u64>,
    modules: Option<Vec<String>>,
    max_pages: Option<usize>,
    wordlist: Option<String>,
    length_threshold: Option<u64>,
    origin_policy: Option<OriginPolicy>,
    request_delay_ms: Option<u64>,
    deadline_secs: Option<u64>,
) {
    config.target = target;

    if let Some(t) = threads {
        config.threads = t;
    }
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    if let Some(m) = modules {
        config.modules = m;
    }
    if let Some(p) = max_pages {
        config.max_pages = p;
    }
    if let Some(w) = wordlist {
        config.wordlist_path = Some(w);
    }
    if let Some(l) = length_threshold {
        config.length_threshold = l;
    }
    if let Some(o) = origin_policy {
        config.origin_policy = o;
    }
    if let Some(d) = request_delay_ms {
        config.request_delay_ms = d;
    }
    if let Some(d) = deadline_secs {
        config.deadline_secs = Some(d);
    }
}
