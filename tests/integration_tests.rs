//! Integration tests using mock HTTP server
//!
//! Tests the full flow: client config → endpoint binding → HTTP → pager

use futures::TryStreamExt;
use lakehouse_sdk::auth::AuthConfig;
use lakehouse_sdk::{ClientConfig, Error, IngestionJobStatus, LakehouseClient, PageRequest};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> LakehouseClient {
    LakehouseClient::new(ClientConfig::new(server.uri())).unwrap()
}

fn params(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected object, got {other}"),
    }
}

// ============================================================================
// Ingestion Jobs Pager
// ============================================================================

async fn mount_two_job_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/lakehouse/v1/ingestion-jobs"))
        .and(query_param("status", "failed"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "job-1", "status": "failed"},
                {"id": "job-2", "status": "failed"}
            ],
            "next": {"href": "/lakehouse/v1/ingestion-jobs?status=failed&start=tok123"}
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lakehouse/v1/ingestion-jobs"))
        .and(query_param("status", "failed"))
        .and(query_param("start", "tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "job-3", "status": "failed", "engine_id": "e-7"}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_ingestion_jobs_pager_follows_cursor() {
    let server = MockServer::start().await;
    mount_two_job_pages(&server).await;

    let mut pager = client(&server)
        .ingestion_jobs_pager(PageRequest::new().param("status", "failed"))
        .unwrap();

    let first = pager.next_page().await.unwrap();
    assert_eq!(
        first.iter().map(|j| j.id.as_str()).collect::<Vec<_>>(),
        vec!["job-1", "job-2"]
    );
    assert!(pager.has_next());
    assert_eq!(pager.cursor(), Some("tok123"));

    let second = pager.next_page().await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].status, Some(IngestionJobStatus::Failed));
    assert_eq!(second[0].extra.get("engine_id"), Some(&json!("e-7")));
    assert!(!pager.has_next());
    assert_eq!(pager.pages_fetched(), 2);

    assert!(matches!(
        pager.next_page().await,
        Err(Error::PagerExhausted)
    ));
}

#[tokio::test]
async fn test_ingestion_jobs_pager_collect_all() {
    let server = MockServer::start().await;
    mount_two_job_pages(&server).await;

    let jobs = client(&server)
        .ingestion_jobs_pager(PageRequest::new().param("status", "failed"))
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    let ids: Vec<_> = jobs.into_iter().map(|j| j.id).collect();
    assert_eq!(ids, vec!["job-1", "job-2", "job-3"]);
}

#[tokio::test]
async fn test_ingestion_jobs_stream() {
    let server = MockServer::start().await;
    mount_two_job_pages(&server).await;

    let jobs: Vec<_> = client(&server)
        .ingestion_jobs_pager(PageRequest::new().param("status", "failed"))
        .unwrap()
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[2].id, "job-3");
}

#[tokio::test]
async fn test_pager_upstream_error_leaves_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lakehouse/v1/engines"))
        .respond_with(ResponseTemplate::new(500).set_body_string("engine index unavailable"))
        .expect(2)
        .mount(&server)
        .await;

    let mut pager = client(&server)
        .pager::<Value>("list_engines", params(json!({"state": "running"})))
        .unwrap();

    for _ in 0..2 {
        let err = pager.next_page().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(pager.has_next());
        assert_eq!(pager.cursor(), None);
        assert_eq!(pager.pages_fetched(), 0);
    }
}

#[tokio::test]
async fn test_pager_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lakehouse/v1/catalogs/c-1/tables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut pager = client(&server)
        .pager::<Value>("list_tables", params(json!({"catalog_id": "c-1"})))
        .unwrap();

    assert!(pager.next_page().await.unwrap().is_empty());
    assert!(!pager.has_next());
}

// ============================================================================
// Endpoint Calls
// ============================================================================

#[tokio::test]
async fn test_call_builds_path_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/lakehouse/v1/buckets/raw-data"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .call(
            "delete_bucket",
            params(json!({"bucket_id": "raw-data", "force": true})),
            None,
        )
        .await
        .unwrap();

    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn test_call_unknown_param_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .call(
            "get_bucket",
            params(json!({"bucket_id": "b", "verbose": true})),
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownParameter { .. }));
}

#[tokio::test]
async fn test_create_and_cancel_ingestion_job() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/lakehouse/v1/ingestion-jobs"))
        .and(body_json(json!({"table_name": "events", "source": "s3://raw/events"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "job-9",
            "status": "pending",
            "created_at": "2024-05-01T08:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/lakehouse/v1/ingestion-jobs/job-9/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-9",
            "status": "cancelled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let created = client
        .create_ingestion_job(json!({"table_name": "events", "source": "s3://raw/events"}))
        .await
        .unwrap();
    assert_eq!(created.status, Some(IngestionJobStatus::Pending));
    assert!(created.created_at.is_some());

    let cancelled = client.cancel_ingestion_job("job-9").await.unwrap();
    assert!(cancelled.is_finished());
}

#[tokio::test]
async fn test_get_ingestion_job_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lakehouse/v1/ingestion-jobs/job-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such job"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_ingestion_job("job-404")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_client_misuse());
}

#[tokio::test]
async fn test_bearer_auth_from_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lakehouse/v1/services"))
        .and(header("Authorization", "Bearer secret-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_auth(AuthConfig::bearer("secret-1"));
    let services = LakehouseClient::new(config)
        .unwrap()
        .pager::<Value>("list_services", serde_json::Map::new())
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert!(services.is_empty());
}

#[tokio::test]
async fn test_custom_service_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v1/catalogs/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "main"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_service_name("analytics");
    let catalog = LakehouseClient::new(config)
        .unwrap()
        .call("get_catalog", params(json!({"catalog_id": "main"})), None)
        .await
        .unwrap();

    assert_eq!(catalog["id"], "main");
}
