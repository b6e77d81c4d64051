// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::redirecting_fetcher::RedirectingFetcher;
use super::helpers::search_fixtures::{engine_for, results_page};
use harvestrs::application::use_cases::harvest_batch::{resolve_target, HarvestBatch, TargetError};
use harvestrs::domain::services::harvest_service::HarvestService;
use harvestrs::infrastructure::storage::LocalStorage;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_batch_from_file_writes_one_result_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team"))
        .respond_with(ResponseTemplate::new(200).set_body_string("zoe@example.test ADAM@example.test"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[(
            "Example",
            "",
            "Contact: adam@example.test",
        )])))
        .mount(&server)
        .await;

    let mut targets = tempfile::NamedTempFile::new().unwrap();
    writeln!(targets, "\n  @www.example.test  \n\n").unwrap();
    let domains = resolve_target(targets.path().to_str().unwrap()).unwrap();
    assert_eq!(domains.len(), 1);

    let out = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalStorage::new(out.path().join("results")));
    assert!(storage.ensure_base_dir().await.unwrap());

    let fetcher = Arc::new(RedirectingFetcher::new("example.test", &server.uri()));
    let service = HarvestService::new(fetcher, Arc::new(engine_for(&server.uri())), Duration::ZERO);
    let batch = HarvestBatch::new(service, storage);

    let summary = batch.run(&domains, 10).await;

    assert_eq!(summary.domains_processed, 1);
    assert_eq!(summary.total_emails, 2);
    assert_eq!(summary.files_written.len(), 1);

    let written = std::path::Path::new(&summary.files_written[0]);
    let name = written.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("example.test_"));
    assert!(name.ends_with(".txt"));
    // example.test_YYYYMMDD_HHMMSS.txt
    assert_eq!(name.len(), "example.test_".len() + 15 + 4);

    let content = std::fs::read_to_string(written).unwrap();
    assert_eq!(content, "adam@example.test\nzoe@example.test\n");
}

#[test]
fn test_missing_target_file_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("domains.txt");

    let result = resolve_target(missing.to_str().unwrap());

    assert!(matches!(result, Err(TargetError::FileNotFound(_))));
}
