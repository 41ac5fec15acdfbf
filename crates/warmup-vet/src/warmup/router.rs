use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::{WarmupRequest, WarmupScheduleGenerator};

/// Router exposing warm-up plan generation over HTTP.
pub fn warmup_router(generator: Arc<WarmupScheduleGenerator>) -> Router {
    Router::new()
        .route("/api/v1/warmup", post(warmup_handler))
        .with_state(generator)
}

pub(crate) async fn warmup_handler(
    State(generator): State<Arc<WarmupScheduleGenerator>>,
    axum::Json(request): axum::Json<WarmupRequest>,
) -> Response {
    match request.validate() {
        Ok(target_volume) => {
            let plans = generator.generate(target_volume, request.days);
            (StatusCode::OK, axum::Json(plans)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
