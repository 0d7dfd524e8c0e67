//! REST layer tests through the axum router

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use otp_settings::api::rest::dto::{OperationOutcomeDto, SettingsListResponse};
use otp_settings::api::rest::error::Problem;
use otp_settings::api::rest::routes::register_routes;
use otp_settings::domain::{SeedingPolicy, Service};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;
use common::{canonical_records, sorted_canonical_actions, MockStore};

fn router_over(store: &MockStore) -> Router {
    let service = Arc::new(Service::new(Arc::new(store.clone()), SeedingPolicy::default()));
    register_routes(Router::new(), service).unwrap()
}

async fn send<T: DeserializeOwned>(router: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_settings_seeds_and_renders_list() {
    let store = MockStore::new();

    let (status, body): (_, SettingsListResponse) =
        send(router_over(&store), get("/settings")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    let mut actions: Vec<_> = body.data.iter().filter_map(|s| s.action.clone()).collect();
    actions.sort();
    assert_eq!(actions, sorted_canonical_actions());
}

#[tokio::test]
async fn get_settings_failure_renders_empty_list_with_flag() {
    let store = MockStore::new();
    store.fail_reads();

    let (status, body): (_, SettingsListResponse) =
        send(router_over(&store), get("/settings")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.success);
    assert!(body.data.is_empty());
    assert_eq!(
        body.message.as_deref(),
        Some("Error loading OTP settings. Please try again.")
    );
}

#[tokio::test]
async fn raw_settings_are_not_seeded() {
    let store = MockStore::new();

    let (status, body): (_, SettingsListResponse) =
        send(router_over(&store), get("/settings/raw")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert!(body.data.is_empty());
    assert_eq!(store.insert_batches(), 0);
}

#[tokio::test]
async fn update_uses_camel_case_body() {
    let records = canonical_records();
    let store = MockStore::with_records(records.clone());
    let payload = json!([{ "id": records[0].id, "emailEnabled": true }]);

    let (status, body): (_, OperationOutcomeDto) =
        send(router_over(&store), post_json("/settings/update", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert_eq!(body.message, "OTP settings updated successfully!");
    let after = store.get(records[0].id).unwrap();
    assert!(after.email_enabled);
    assert!(!after.whatsapp_enabled);
}

#[tokio::test]
async fn update_direct_reports_sql_message() {
    let records = canonical_records();
    let store = MockStore::with_records(records.clone());
    let payload = json!([{ "id": records[1].id, "emailEnabled": false, "whatsappEnabled": true }]);

    let (status, body): (_, OperationOutcomeDto) =
        send(router_over(&store), post_json("/settings/updateDirect", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "OTP settings updated successfully using SQL!");
    assert!(store.get(records[1].id).unwrap().whatsapp_enabled);
}

#[tokio::test]
async fn blank_id_is_a_bad_request_without_store_calls() {
    let store = MockStore::with_records(canonical_records());
    let payload = json!([{ "id": "", "emailEnabled": true, "whatsappEnabled": true }]);

    let (status, problem): (_, Problem) =
        send(router_over(&store), post_json("/settings/update", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem.status, 400);
    assert_eq!(problem.instance.as_deref(), Some("/settings/update"));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn store_failure_maps_to_problem_and_rolls_back() {
    let records = canonical_records();
    let store = MockStore::with_records(records.clone());
    store.fail_on(records[1].id);
    let payload = json!([
        { "id": records[0].id, "emailEnabled": true, "whatsappEnabled": true },
        { "id": records[1].id, "emailEnabled": true, "whatsappEnabled": true },
        { "id": records[2].id, "emailEnabled": true, "whatsappEnabled": true }
    ]);

    let (status, problem): (_, Problem) =
        send(router_over(&store), post_json("/settings/updateDirect", payload)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        problem.detail.as_deref(),
        Some("Error updating OTP settings with SQL. Please try again.")
    );
    assert_eq!(store.snapshot(), records);
}

#[tokio::test]
async fn openapi_document_lists_endpoints() {
    let store = MockStore::new();

    let (status, doc): (_, serde_json::Value) =
        send(router_over(&store), get("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    for path in ["/settings", "/settings/raw", "/settings/update", "/settings/updateDirect"] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn mistyped_body_is_a_problem_not_plain_text() {
    let records = canonical_records();
    let store = MockStore::with_records(records.clone());

    for (uri, payload) in [
        (
            "/settings/update",
            json!([{ "id": records[0].id, "emailEnabled": "on" }]),
        ),
        ("/settings/updateDirect", json!([{ "id": 5 }])),
    ] {
        let (status, problem): (_, Problem) =
            send(router_over(&store), post_json(uri, payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(problem.title, "Validation Error");
        assert_eq!(problem.instance.as_deref(), Some(uri));
    }

    assert_eq!(store.calls(), 0);
    assert_eq!(store.snapshot(), records);
}

#[tokio::test]
async fn body_without_json_content_type_is_a_problem() {
    let store = MockStore::with_records(canonical_records());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/settings/update")
        .body(Body::from("[]"))
        .unwrap();

    let (status, problem): (_, Problem) = send(router_over(&store), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem.status, 400);
}
