//! Integration tests for the path discovery module

use std::io::Write;
use webhack::models::{ScanConfig, Severity, VulnClass};
use webhack::scanner::ScanEngine;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn discovery_config(target: &str, wordlist: &std::path::Path) -> ScanConfig {
    ScanConfig {
        target: target.to_string(),
        threads: 2,
        timeout_secs: 10,
        modules: vec!["discovery".to_string()],
        wordlist_path: Some(wordlist.to_string_lossy().into_owned()),
        ..ScanConfig::default()
    }
}

fn write_wordlist(entries: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for entry in entries {
        writeln!(file, "{entry}").expect("write entry");
    }
    file
}

#[tokio::test]
async fn test_sensitive_path_classified_high() {
    let mock_server = MockServer::start().await;

    // 404 for everything except admin/
    Mock::given(method("GET"))
        .and(path("/admin/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>admin panel</html>"))
        .mount(&mock_server)
        .await;

    let wordlist = write_wordlist(&["admin/", "images/", "contact/"]);
    let config = discovery_config(&mock_server.uri(), wordlist.path());

    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.findings.len(), 1, "two 404s, one hit");

    let finding = &result.findings[0];
    assert_eq!(finding.class, VulnClass::ExposedPath);
    assert_eq!(finding.severity, Severity::High, "'admin' is a sensitive keyword");
    assert!(finding.url.ends_with("/admin/"));
    assert_eq!(finding.parameter.as_deref(), Some("admin/"));
}

#[tokio::test]
async fn test_non_sensitive_path_classified_medium() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>listing</html>"))
        .mount(&mock_server)
        .await;

    let wordlist = write_wordlist(&["images/"]);
    let config = discovery_config(&mock_server.uri(), wordlist.path());

    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].severity, Severity::Medium);
}

#[tokio::test]
async fn test_redirect_recorded_as_low() {
    let mock_server = MockServer::start().await;

    // Redirects are observed, never followed
    Mock::given(method("GET"))
        .and(path("/old/"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", "/new/"),
        )
        .mount(&mock_server)
        .await;

    let wordlist = write_wordlist(&["old/"]);
    let config = discovery_config(&mock_server.uri(), wordlist.path());

    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.severity, Severity::Low);
    assert!(finding.detail.contains("/new/"));

    // The redirect target itself was never requested
    let requests = mock_server.received_requests().await.expect("recording on");
    assert!(!requests.iter().any(|r| r.url.path() == "/new/"));
}

#[tokio::test]
async fn test_wordlist_entries_join_under_target_path() {
    let mock_server = MockServer::start().await;

    // Entries must land under /app/, not beside it at the root
    Mock::given(method("GET"))
        .and(path("/app/admin/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>admin</html>"))
        .mount(&mock_server)
        .await;

    let wordlist = write_wordlist(&["admin/"]);
    let config = discovery_config(&format!("{}/app", mock_server.uri()), wordlist.path());

    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.findings.len(), 1);
    assert!(result.findings[0].url.ends_with("/app/admin/"));

    let requests = mock_server.received_requests().await.expect("recording on");
    assert!(
        !requests.iter().any(|r| r.url.path() == "/admin/"),
        "the target path segment must not be replaced"
    );
}

#[tokio::test]
async fn test_comments_and_blanks_skipped_in_wordlist() {
    let mock_server = MockServer::start().await;

    let wordlist = write_wordlist(&["# common paths", "", "missing/"]);
    let config = discovery_config(&mock_server.uri(), wordlist.path());

    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert!(result.findings.is_empty());

    let requests = mock_server.received_requests().await.expect("recording on");
    assert_eq!(requests.len(), 1, "only the real entry is probed");
}
