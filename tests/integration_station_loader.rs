//! Integration tests for loading the station dataset over HTTP.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the successful load and every failure class
//! the loader can report.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use station_reviews::app::services::station_loader::StationLoader;
use station_reviews::config::LoaderConfig;
use station_reviews::{Error, FailureKind};

const DATA_PATH: &str = "/raizen_places_cleaned.json";

fn test_loader(server: &MockServer) -> StationLoader {
    let config = LoaderConfig {
        source: format!("{}{}", server.uri(), DATA_PATH),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        user_agent: "station-reviews-test/0.1".to_string(),
    };
    StationLoader::new(&config).unwrap()
}

async fn mount_body(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_returns_cleaned_dataset_on_success() {
    let server = MockServer::start().await;
    let payload = json!([
        {"place_id": "a", "name": "Posto A", "latitude": -23.5, "longitude": -46.6, "rating": 5,
         "reviews": [{"author_name": "Ana", "rating": 5}]},
        {"place_id": "b", "name": "Posto B", "latitude": -22.9, "longitude": -43.2, "rating": 3},
        {"place_id": "a", "name": "Posto A (dup)", "latitude": -23.5, "longitude": -46.6,
         "reviews": [{}, {}, {}]},
        {"place_id": "c", "name": "Posto C", "latitude": "-22.9", "longitude": -43.2}
    ]);
    mount_body(&server, ResponseTemplate::new(200).set_body_json(&payload)).await;

    let dataset = test_loader(&server).load().await.unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.stations()[0].name, "Posto A");
    assert_eq!(dataset.stats().total_reviews, 1);
    assert_eq!(dataset.stats().average_rating, 4.0);
    assert_eq!(dataset.cleaning_stats().invalid, 1);
    assert_eq!(dataset.cleaning_stats().duplicates_removed, 1);
}

#[tokio::test]
async fn load_fails_with_status_on_not_found() {
    let server = MockServer::start().await;
    mount_body(&server, ResponseTemplate::new(404)).await;

    let error = test_loader(&server).load().await.unwrap_err();

    match &error {
        Error::UnexpectedStatus { status, url } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with(DATA_PATH));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert!(error.to_string().starts_with("HTTP error! status: 404"));
    assert_eq!(error.failure_kind(), FailureKind::Transport);
}

#[tokio::test]
async fn load_fails_with_status_on_server_error() {
    let server = MockServer::start().await;
    mount_body(&server, ResponseTemplate::new(500)).await;

    let error = test_loader(&server).load().await.unwrap_err();

    assert!(matches!(error, Error::UnexpectedStatus { status: 500, .. }));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn load_fails_structurally_on_non_array_body() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        ResponseTemplate::new(200).set_body_json(&json!({"stations": []})),
    )
    .await;

    let error = test_loader(&server).load().await.unwrap_err();

    assert!(matches!(error, Error::Structural { .. }));
    assert!(error.to_string().starts_with("Invalid or empty data received"));
}

#[tokio::test]
async fn load_fails_structurally_on_empty_array() {
    let server = MockServer::start().await;
    mount_body(&server, ResponseTemplate::new(200).set_body_json(&json!([]))).await;

    let error = test_loader(&server).load().await.unwrap_err();

    assert_eq!(error.failure_kind(), FailureKind::Structural);
}

#[tokio::test]
async fn load_fails_structurally_on_invalid_json() {
    let server = MockServer::start().await;
    mount_body(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let error = test_loader(&server).load().await.unwrap_err();

    assert!(matches!(error, Error::Structural { .. }));
}

#[tokio::test]
async fn load_fails_with_empty_dataset_when_nothing_is_valid() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        ResponseTemplate::new(200).set_body_json(&json!([
            {"place_id": "x", "name": "Sem Coordenadas"},
            {"name": "Sem ID", "latitude": 0.0, "longitude": 0.0}
        ])),
    )
    .await;

    let error = test_loader(&server).load().await.unwrap_err();

    assert!(matches!(
        error,
        Error::EmptyDataset {
            total_input: 2,
            valid: 0,
            unique: 0
        }
    ));
    assert!(error.to_string().starts_with("No valid station data found after cleaning"));
}

#[tokio::test]
async fn load_fails_with_transport_error_when_server_is_gone() {
    let server = MockServer::start().await;
    let loader = test_loader(&server);
    drop(server);

    let error = loader.load().await.unwrap_err();

    assert!(matches!(error, Error::Transport { .. }));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn fetch_raw_returns_unmodified_records() {
    let server = MockServer::start().await;
    let payload = json!([null, {"place_id": "a"}, 42]);
    mount_body(&server, ResponseTemplate::new(200).set_body_json(&payload)).await;

    let raw = test_loader(&server).fetch_raw().await.unwrap();

    assert_eq!(raw, payload.as_array().unwrap().clone());
}
