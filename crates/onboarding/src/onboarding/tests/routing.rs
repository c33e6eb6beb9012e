use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::onboarding::router::{onboarding_router, view_handler};
use crate::onboarding::service::OnboardingService;

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn view_handler_returns_not_found_for_unknown_id() {
    let service = Arc::new(service_with(Vec::new()));

    let response = view_handler::<MemoryRepository, MemoryStatuses>(
        State(service),
        Path("ghost".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["application_id"], "ghost");
}

#[tokio::test]
async fn view_handler_returns_internal_error_on_outage() {
    let service = Arc::new(OnboardingService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryStatuses::default()),
    ));

    let response = view_handler::<UnavailableRepository, MemoryStatuses>(
        State(service),
        Path("app-1001".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn router_serves_stage_badges_for_stored_application() {
    let router = onboarding_router(Arc::new(service_with(vec![application("HR_REVIEW_STG3")])));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/onboarding/applications/app-1001")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["outcome"], "ready");
    assert_eq!(body["stages"][0]["status"], "COMPLETED");
    assert_eq!(body["stages"][1]["status"], "COMPLETED");
    assert_eq!(body["stages"][2]["status"], "IN_PROGRESS");
}

#[tokio::test]
async fn render_endpoint_accepts_null_application() {
    let router = onboarding_router(Arc::new(service_with(Vec::new())));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/onboarding/render")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "application": null }).to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "outcome": "no_data" }));
}

#[tokio::test]
async fn roster_endpoint_returns_badges() {
    let router = onboarding_router(Arc::new(service_with(Vec::new())));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/onboarding/roster")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "employees": [{ "id": "emp-1", "name": "Ravi" }] }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["rows"][0]["badge"]["status"], "IN_PROGRESS");
    assert_eq!(body["rows"][0]["badge"]["tone"], "warning");
}

async fn post(uri: &str, content_type: &str, body: String) -> Response {
    let router = onboarding_router(Arc::new(service_with(Vec::new())));
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", content_type)
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("router responds")
}

#[tokio::test]
async fn ill_typed_render_body_gets_json_error() {
    let response = post(
        "/api/v1/onboarding/render",
        "application/json",
        json!({ "application": "APP-1" }).to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some_and(|text| !text.is_empty()));
}

#[tokio::test]
async fn malformed_roster_body_gets_json_error() {
    let response = post(
        "/api/v1/onboarding/roster",
        "application/json",
        "{ \"employees\": [".to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let response = post(
        "/api/v1/onboarding/roster",
        "text/plain",
        json!({ "employees": [] }).to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn render_accepts_stored_document_with_duplicate_id_spellings() {
    let response = post(
        "/api/v1/onboarding/render",
        "application/json",
        json!({
            "application": { "_id": "65f0", "applicationId": "APP-1", "status": "COMPLETED" }
        })
        .to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["application_id"], "APP-1");
    assert_eq!(body["stages"][2]["status"], "COMPLETED");
}
