//! Integration tests for the crawl loop: deduplication and the page ceiling

use webhack::models::ScanConfig;
use webhack::scanner::ScanEngine;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(target: &str) -> ScanConfig {
    ScanConfig {
        target: target.to_string(),
        threads: 2,
        timeout_secs: 10,
        modules: vec!["injection".to_string()],
        ..ScanConfig::default()
    }
}

#[tokio::test]
async fn test_page_ceiling_limits_fetches() {
    let mock_server = MockServer::start().await;

    // Root links to 5 same-host pages; none have parameters or forms
    let root = r#"<html><body>
        <a href="/p1">1</a> <a href="/p2">2</a> <a href="/p3">3</a>
        <a href="/p4">4</a> <a href="/p5">5</a>
    </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(root))
        .mount(&mock_server)
        .await;
    for p in ["/p1", "/p2", "/p3", "/p4", "/p5"] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>leaf</html>"))
            .mount(&mock_server)
            .await;
    }

    let mut config = test_config(&mock_server.uri());
    config.max_pages = 2;

    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.pages_visited, 2);
    assert!(result.findings.is_empty());

    let requests = mock_server.received_requests().await.expect("recording on");
    assert_eq!(requests.len(), 2, "fetch count must not exceed the ceiling");
}

#[tokio::test]
async fn test_no_duplicate_fetches() {
    let mock_server = MockServer::start().await;

    // Both pages link back to each other and to themselves
    let page_a = r#"<a href="/a">self</a> <a href="/b">b</a> <a href="/a#frag">frag</a>"#;
    let page_b = r#"<a href="/a">a</a> <a href="/b">self</a>"#;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_a))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_b))
        .mount(&mock_server)
        .await;

    let config = test_config(&format!("{}/a", mock_server.uri()));
    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.pages_visited, 2);

    let requests = mock_server.received_requests().await.expect("recording on");
    let a_fetches = requests.iter().filter(|r| r.url.path() == "/a").count();
    let b_fetches = requests.iter().filter(|r| r.url.path() == "/b").count();
    assert_eq!(a_fetches, 1, "each URL fetched at most once");
    assert_eq!(b_fetches, 1, "each URL fetched at most once");
}

#[tokio::test]
async fn test_off_origin_links_not_crawled() {
    let mock_server = MockServer::start().await;

    let root = r#"<a href="http://off-origin.invalid/page">external</a> <a href="/local">local</a>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(root))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/local"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect("scan completes");

    assert_eq!(result.pages_visited, 2, "root and /local only");
}

#[tokio::test]
async fn test_unresolvable_target_is_fatal() {
    let config = test_config("http://definitely-not-a-real-host.invalid/");
    let err = ScanEngine::with_defaults()
        .run(&config)
        .await
        .expect_err("scan must fail before crawling");

    assert!(matches!(
        err,
        webhack::error::WebHackError::TargetUnreachable(_)
    ));
}
