//! Platform client against a mock vendor API

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shiftboard_core::{DataStore, FeedProvider};
use shiftboard_domain::{ApiConfig, ShiftType, ShiftboardError};
use shiftboard_infra::{
    ApiError, HttpClient, InMemoryStateRepository, JsonFileStateRepository, PlatformClient,
};
use tempfile::TempDir;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GROUP: &str = "group-1";

fn platform(server: &MockServer) -> PlatformClient {
    let config = ApiConfig::new(server.uri(), GROUP, "test-token");
    let http = HttpClient::builder()
        .base_backoff(Duration::from_millis(1))
        .max_attempts(2)
        .build()
        .expect("http client");
    PlatformClient::with_http_client(config, http).expect("platform client")
}

fn uploads_body() -> serde_json::Value {
    json!({
        "items": [{
            "uuid": "u-1",
            "upload_file_name": "Set_32-A_Sensor_768.bin",
            "created_by": "operator@example.com",
            "upload_size_mb": 12.5,
            "date_created": "2024-03-01T17:00:00Z",
            "processing_finished": true,
            "has_error": false,
            "group_uuid": "g1"
        }],
        "totalItems": 1
    })
}

fn measurements_body() -> serde_json::Value {
    json!({
        "items": [
            {
                "uuid": "m-1",
                "date_created": "2024-03-01T17:00:00Z",
                "measurement_start": "2024-03-01T08:00:00Z",
                "measurement_end": "2024-03-01T16:00:00Z",
                "duration_sec": 28800.0,
                "imu_set": "32-A",
                "processing_finished": true,
                "has_error": false,
                "group_uuid": "g1"
            },
            {
                "uuid": "m-2",
                "date_created": "2024-03-03T07:00:00Z",
                "measurement_start": "2024-03-02T22:00:00Z",
                "measurement_end": "2024-03-03T06:00:00Z",
                "duration_sec": 28800.0,
                "imu_set": "33-B",
                "processing_finished": false,
                "has_error": false,
                "missing_fragment_ids": "775"
            }
        ],
        "totalItems": 2
    })
}

#[tokio::test]
async fn fetches_uploads_with_paging_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/data_store/{GROUP}/data_source_uploads")))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "50"))
        .and(query_param("column", "date_created"))
        .and(query_param("direction", "desc"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uploads_body()))
        .expect(1)
        .mount(&server)
        .await;

    let page = platform(&server).fetch_uploads().await.expect("uploads");
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].upload_file_name, "Set_32-A_Sensor_768.bin");
    assert_eq!(page.items[0].group_uuid.as_deref(), Some("g1"));
}

#[tokio::test]
async fn measurements_are_listed_with_put_and_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/data_store/{GROUP}/consolidated_measurements")))
        .and(body_string("{}"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(measurements_body()))
        .expect(1)
        .mount(&server)
        .await;

    let page = platform(&server).fetch_measurements().await.expect("measurements");
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].missing_fragment_ids.as_deref(), Some("775"));
}

#[tokio::test]
async fn raw_fetch_passes_vendor_json_through() {
    let server = MockServer::start().await;
    let body = json!({ "items": [], "totalItems": 0, "vendorExtra": { "kept": true } });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let value = platform(&server).uploads_raw().await.expect("raw uploads");
    assert_eq!(value, body);
}

#[tokio::test]
async fn non_success_status_is_reported_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let client = platform(&server);
    let err = client.uploads_raw().await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "API request failed with status 403");

    let err = client.fetch_uploads().await;
    assert!(matches!(err, Err(ShiftboardError::Auth(_))));
}

#[tokio::test]
async fn server_errors_are_retried_before_failing() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(502))
        .expect(2)
        .mount(&server)
        .await;

    let err = platform(&server).measurements_raw().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502, .. }));
}

#[tokio::test]
async fn unexpected_payload_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": "nope" })))
        .mount(&server)
        .await;

    let err = platform(&server).fetch_uploads().await.unwrap_err();
    assert!(matches!(err, ShiftboardError::Parse(_)));
}

#[tokio::test]
async fn data_store_round_trip_through_platform_and_disk() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uploads_body()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(measurements_body()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let repository = Arc::new(JsonFileStateRepository::new(dir.path(), "shiftboard-data"));
    let feed = Arc::new(platform(&server));

    let store = DataStore::open(feed.clone(), repository.clone()).await;
    store.fetch_uploads().await.expect("uploads");
    store.fetch_measurements().await.expect("measurements");
    let groups = store
        .combine_shifts(&["2024-03-01-day", "2024-03-02-night"], "Opening weekend")
        .await;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].shift_type, ShiftType::Custom);

    let report = store.sensor_report("m-1").expect("known measurement");
    assert_eq!(report.uploaded_labels(), ["Left Sensor (768)"]);

    let reopened = DataStore::open(feed, repository).await;
    let state = reopened.snapshot();
    assert_eq!(state.shift_groups, store.shift_groups());
    assert_eq!(state.uploads().len(), 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn in_memory_repository_backs_a_store() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repository = Arc::new(InMemoryStateRepository::new());
    let store = DataStore::open(Arc::new(platform(&server)), repository.clone()).await;

    assert!(store.fetch_measurements().await.is_err());
    let state = store.snapshot();
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch consolidated measurements: Network error: API request failed with status 500")
    );
    assert_eq!(repository.current(), None);
}
