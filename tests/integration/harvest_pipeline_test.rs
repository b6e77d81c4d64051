// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::redirecting_fetcher::RedirectingFetcher;
use super::helpers::search_fixtures::{engine_for, results_page};
use harvestrs::domain::models::target_domain::TargetDomain;
use harvestrs::domain::services::harvest_service::HarvestService;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITE: &str = "example.test";

const NO_RESULTS: &str = r#"<html><body><div class="no-results">No results.</div></body></html>"#;

async fn mount_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<p>Reach us at <a href=\"mailto:Hello@Example.test\">Hello@Example.test</a> \
             or sales@example.test. Partner: bob@partner.test</p>",
        ))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>About us</p>"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Careers: jobs@example.test; Board: ceo@sub.example.test"),
        )
        .mount(server)
        .await;
}

fn redirect_link(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("//duckduckgo.com/l/?uddg={}&amp;rut=test", encoded)
}

#[tokio::test]
async fn test_pipeline_merges_site_pages_snippets_and_result_pages() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let listing = redirect_link(&format!("{}/listing", server.uri()));
    let page = results_page(&[
        ("Example staff directory", listing.as_str(), "Press contact: press@example.test"),
        ("About Example", "https://example.test/about", "Company history"),
    ]);
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "\"@example.test\""))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NO_RESULTS))
        .mount(&server)
        .await;

    let fetcher = Arc::new(RedirectingFetcher::new(SITE, &server.uri()));
    let service = HarvestService::new(
        fetcher.clone(),
        Arc::new(engine_for(&server.uri())),
        Duration::ZERO,
    );

    let domain = TargetDomain::parse(SITE).unwrap();
    let report = service.harvest(&domain, 10).await;

    assert_eq!(
        report.sorted_emails(),
        vec![
            "hello@example.test",
            "jobs@example.test",
            "press@example.test",
            "sales@example.test",
        ]
    );
    assert_eq!(report.stats.queries_run, 4);
    assert_eq!(report.stats.queries_empty, 3);

    let requested = fetcher.requested();
    // The contact page matched over https, so http was never tried
    assert!(!requested.contains(&"http://example.test/contact".to_string()));
    // Already visited during the common-path scan
    let about = requested
        .iter()
        .filter(|u| u.as_str() == "https://example.test/about")
        .count();
    assert_eq!(about, 1);
    assert!(requested.contains(&format!("{}/listing", server.uri())));
}

#[tokio::test]
async fn test_pipeline_survives_failing_search_backend() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = Arc::new(RedirectingFetcher::new(SITE, &server.uri()));
    let service = HarvestService::new(
        fetcher,
        Arc::new(engine_for(&server.uri())),
        Duration::ZERO,
    );

    let report = service
        .harvest(&TargetDomain::parse(SITE).unwrap(), 10)
        .await;

    assert_eq!(
        report.sorted_emails(),
        vec!["hello@example.test", "sales@example.test"]
    );
    assert_eq!(report.stats.queries_empty, 4);
}

#[tokio::test]
async fn test_pipeline_treats_bot_challenge_as_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><div class="anomaly-modal__title">Unfortunately, bots use DuckDuckGo too.</div></body></html>"#,
        ))
        .mount(&server)
        .await;

    let fetcher = Arc::new(RedirectingFetcher::new(SITE, &server.uri()));
    let service = HarvestService::new(
        fetcher.clone(),
        Arc::new(engine_for(&server.uri())),
        Duration::ZERO,
    );

    let report = service
        .harvest(&TargetDomain::parse(SITE).unwrap(), 10)
        .await;

    assert!(report.is_empty());
    assert_eq!(report.stats.queries_empty, 4);
    // Only the common-path scan touched the site: 14 paths, both schemes
    assert_eq!(fetcher.requested().len(), 28);
}
