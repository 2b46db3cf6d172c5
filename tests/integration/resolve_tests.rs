use linkprobe::config::HttpConfig;
use linkprobe::{build_http_client, resolve};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_resolve_ok() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fine"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = format!("{}/ok", mock_server.uri());
    let outcome = resolve(&client, &url, Duration::from_secs(5)).await;

    assert!(outcome.ok);
    assert_eq!(outcome.status_code, 200);
    assert_eq!(outcome.final_url, url);
    assert_eq!(outcome.error, None);
}

#[tokio::test]
async fn test_resolve_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = format!("{}/missing", mock_server.uri());
    let outcome = resolve(&client, &url, Duration::from_secs(5)).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, 404);
    assert_eq!(outcome.error.as_deref(), Some("Not Found"));
    assert!(outcome.is_broken());
}

#[tokio::test]
async fn test_resolve_follows_redirects() {
    let mock_server = MockServer::start().await;
    let target = format!("{}/final", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/short"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", target.as_str()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let outcome = resolve(&client, &format!("{}/short", mock_server.uri()), Duration::from_secs(5)).await;

    assert!(outcome.ok);
    assert_eq!(outcome.status_code, 200);
    assert_eq!(outcome.final_url, target);
}

#[tokio::test]
async fn test_resolve_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = format!("{}/slow", mock_server.uri());
    let outcome = resolve(&client, &url, Duration::from_millis(200)).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, 408);
    assert_eq!(outcome.error.as_deref(), Some("Request timed out"));
    assert_eq!(outcome.final_url, url);
}

#[tokio::test]
async fn test_resolve_redirect_limit() {
    let mock_server = MockServer::start().await;
    let looping = format!("{}/loop", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", looping.as_str()))
        .mount(&mock_server)
        .await;

    let config = HttpConfig {
        max_redirects: 3,
        ..HttpConfig::default()
    };
    let client = build_http_client(&config).unwrap();
    let outcome = resolve(&client, &looping, Duration::from_secs(5)).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, 0);
    assert!(outcome.error.is_some());
    assert_eq!(outcome.final_url, looping);
}

#[tokio::test]
async fn test_resolve_connection_refused() {
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let outcome = resolve(&client, "http://127.0.0.1:1/", Duration::from_secs(5)).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, 0);
    assert_eq!(
        outcome.error.as_deref(),
        Some("Network error or CORS restriction")
    );
    assert_eq!(outcome.final_url, "http://127.0.0.1:1/");
}
