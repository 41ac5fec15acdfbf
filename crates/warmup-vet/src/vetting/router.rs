use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::engine::{VetRequest, VettingEngine};

/// Router exposing the vetting engine over HTTP.
pub fn vetting_router(engine: Arc<VettingEngine>) -> Router {
    Router::new()
        .route("/api/v1/vet", post(vet_handler))
        .with_state(engine)
}

pub(crate) async fn vet_handler(
    State(engine): State<Arc<VettingEngine>>,
    axum::Json(request): axum::Json<VetRequest>,
) -> Response {
    match engine.evaluate(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
