use crate::{create_test_config, create_test_prober, page_with_links};
use linkprobe::output::summarize;
use linkprobe::probe::SeedPayload;
use linkprobe::{FetchMode, SeedStatus};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a GET route answering with the given status
async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts a GET route serving an HTML page
async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_rt_mode_tracks_allowlisted_links() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(
        &mock_server,
        "/page",
        page_with_links(&[
            "/aka/one".to_string(),
            "/about".to_string(),
            format!("{}/aka/two", base),
            "#top".to_string(),
            "/aka/one".to_string(),
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/aka/one"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", format!("{}/dest/landing", base).as_str()),
        )
        .mount(&mock_server)
        .await;
    mount_status(&mock_server, "/dest/landing", 200).await;
    mount_status(&mock_server, "/aka/two", 404).await;

    let prober = create_test_prober();
    let seed = format!("{}/page", base);
    let results = prober.probe_batch(&[seed.clone()], FetchMode::Rt).await;

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.status, SeedStatus::Success);
    assert_eq!(result.status_code, 200);
    assert_eq!(result.source_url, seed);

    let SeedPayload::Rt {
        fetched_urls,
        destination_urls,
    } = &result.payload
    else {
        panic!("expected rt payload, got {:?}", result.payload);
    };

    assert_eq!(
        fetched_urls,
        &vec![format!("{}/aka/one", base), format!("{}/aka/two", base)]
    );
    assert_eq!(destination_urls.len(), 2);

    assert_eq!(destination_urls[0].original_url, format!("{}/aka/one", base));
    assert_eq!(destination_urls[0].outcome.final_url, format!("{}/dest/landing", base));
    assert_eq!(destination_urls[0].outcome.status_code, 200);
    assert!(destination_urls[0].redirected);

    assert_eq!(destination_urls[1].outcome.status_code, 404);
    assert_eq!(destination_urls[1].outcome.error.as_deref(), Some("Not Found"));
    assert!(!destination_urls[1].redirected);

    let stats = summarize(&results, &create_test_config().filter);
    assert_eq!(stats.links_checked, 2);
    assert_eq!(stats.red_links, 1);
    assert_eq!(stats.shortener_to_destination, 1);
}

#[tokio::test]
async fn test_broken_mode_reports_failures_in_order() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(
        &mock_server,
        "/page",
        page_with_links(&[
            "/l1".to_string(),
            "/l2".to_string(),
            "/l3".to_string(),
            "/l4".to_string(),
            "/l5".to_string(),
        ]),
    )
    .await;
    mount_status(&mock_server, "/l1", 200).await;
    mount_status(&mock_server, "/l2", 404).await;
    mount_status(&mock_server, "/l3", 204).await;
    mount_status(&mock_server, "/l4", 500).await;
    Mock::given(method("GET"))
        .and(path("/l5"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", format!("{}/l1", base).as_str()))
        .mount(&mock_server)
        .await;

    let prober = create_test_prober();
    let results = prober
        .probe_batch(&[format!("{}/page", base)], FetchMode::Broken)
        .await;

    let SeedPayload::Broken {
        total_links,
        broken_links,
    } = &results[0].payload
    else {
        panic!("expected broken payload, got {:?}", results[0].payload);
    };

    assert_eq!(*total_links, 5);
    assert_eq!(broken_links.len(), 2);
    assert_eq!(broken_links[0].original_url, format!("{}/l2", base));
    assert_eq!(broken_links[0].outcome.error.as_deref(), Some("Not Found"));
    assert_eq!(broken_links[1].original_url, format!("{}/l4", base));
    assert_eq!(broken_links[1].outcome.status_code, 500);
    assert_eq!(
        broken_links[1].outcome.error.as_deref(),
        Some("Server Error")
    );
}

#[tokio::test]
async fn test_broken_mode_reports_timeouts() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/page", page_with_links(&["/slow".to_string()])).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let prober = create_test_prober();
    let results = prober
        .probe_batch(&[format!("{}/page", mock_server.uri())], FetchMode::Broken)
        .await;

    let records = results[0].link_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].outcome.status_code, 408);
    assert_eq!(records[0].outcome.error.as_deref(), Some("Request timed out"));
}

#[tokio::test]
async fn test_seo_mode_finds_duplicates() {
    let mock_server = MockServer::start().await;

    let html = r#"<html><head>
        <meta name="description" content="Shop the sale">
        <meta property="og:description" content="Shop the sale">
        <meta property="og:title" content="Sale">
        <meta name="twitter:title" content="Sale">
        </head><body></body></html>"#;
    mount_page(&mock_server, "/page", html.to_string()).await;

    let prober = create_test_prober();
    let results = prober
        .probe_batch(&[format!("{}/page", mock_server.uri())], FetchMode::Seo)
        .await;

    let SeedPayload::Seo {
        duplicate_descriptions,
    } = &results[0].payload
    else {
        panic!("expected seo payload, got {:?}", results[0].payload);
    };

    assert_eq!(
        duplicate_descriptions,
        &vec![
            r#"og:description duplicates with description: "Shop the sale""#.to_string(),
            r#"twitter:title duplicates with og:title: "Sale""#.to_string(),
        ]
    );
}

#[tokio::test]
async fn test_failing_seed_does_not_affect_others() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(&mock_server, "/one", page_with_links(&[])).await;
    mount_status(&mock_server, "/two", 403).await;
    mount_page(&mock_server, "/three", page_with_links(&[])).await;

    let prober = create_test_prober();
    let seeds = vec![
        format!("{}/one", base),
        format!("{}/two", base),
        format!("{}/three", base),
    ];
    let results = prober.probe_batch(&seeds, FetchMode::Broken).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results.iter().filter(|r| r.is_error()).count(), 1);
    for (result, seed) in results.iter().zip(&seeds) {
        assert_eq!(&result.source_url, seed);
    }

    let failed = &results[1];
    assert_eq!(failed.status, SeedStatus::Error);
    assert_eq!(failed.status_code, 403);
    assert_eq!(
        failed.error.as_deref(),
        Some("Access Forbidden - Consider authentication or checking access permissions")
    );
    assert_eq!(
        failed.payload,
        SeedPayload::Broken {
            total_links: 0,
            broken_links: vec![],
        }
    );
}

#[tokio::test]
async fn test_seed_server_error() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/page", 500).await;

    let prober = create_test_prober();
    let result = prober
        .probe_seed(&format!("{}/page", mock_server.uri()), FetchMode::Rt)
        .await;

    assert!(result.is_error());
    assert_eq!(result.status_code, 500);
    assert_eq!(result.error.as_deref(), Some("HTTP error! status: 500"));
}

#[tokio::test]
async fn test_seed_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let prober = create_test_prober();
    let result = prober
        .probe_seed(&format!("{}/page", mock_server.uri()), FetchMode::Seo)
        .await;

    assert!(result.is_error());
    assert_eq!(result.status_code, 408);
    assert_eq!(result.error.as_deref(), Some("Request timed out"));
}

#[tokio::test]
async fn test_seed_connection_refused() {
    let prober = create_test_prober();
    let result = prober.probe_seed("http://127.0.0.1:1/", FetchMode::Rt).await;

    assert!(result.is_error());
    assert_eq!(result.status_code, 0);
    assert_eq!(
        result.error.as_deref(),
        Some("Network error or CORS restriction")
    );
    assert_eq!(result.payload, SeedPayload::empty(FetchMode::Rt));
}
