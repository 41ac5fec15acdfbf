use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::vetting::vetting_router;

async fn post_json(payload: Value) -> (StatusCode, Value) {
    let router = vetting_router(Arc::new(engine()));
    let response = router
        .oneshot(
            Request::post("/api/v1/vet")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn vet_route_returns_report() {
    let payload = serde_json::to_value(request("example.com", clean_collected())).unwrap();

    let (status, body) = post_json(payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], "example.com");
    assert_eq!(body["is_rejected"], false);
    assert_eq!(body["summary"]["score"], 100);
    assert_eq!(body["summary"]["level"], "good");
}

#[tokio::test]
async fn vet_route_serializes_rejections() {
    let payload = json!({
        "domain": "example.com",
        "signals": {
            "blacklist_hits": [{ "source": "multi.surbl.org", "listed": true }],
            "has_https": true,
            "website_exists": true,
            "has_valid_mx": true,
            "has_dmarc": true
        },
        "self_attested": { "has_optin": true, "has_captcha": true }
    });

    let (status, body) = post_json(payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_rejected"], true);
    assert_eq!(body["summary"]["level"], "rejected");
    assert_eq!(body["rejection_reasons"][0]["kind"], "critical_blacklist");
}

#[tokio::test]
async fn vet_route_rejects_blank_domain() {
    let payload = serde_json::to_value(request("", clean_collected())).unwrap();

    let (status, body) = post_json(payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "domain required");
}

#[tokio::test]
async fn vet_route_requires_transport_signals() {
    let payload = json!({ "domain": "example.com", "signals": { "has_https": true } });

    let (status, _) = post_json(payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
