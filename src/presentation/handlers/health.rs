use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{AudioDecoder, BehaviorClassifier};
use crate::presentation::state::AppState;

use super::analyze::ErrorResponse;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness: the process is up, regardless of artifact state.
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

/// Readiness: reports degraded mode when the pretrained artifacts failed to
/// load at startup.
pub async fn readiness_handler<D, C>(State(state): State<AppState<D, C>>) -> Response
where
    D: AudioDecoder + 'static,
    C: BehaviorClassifier + 'static,
{
    if state.analysis_service.is_ready() {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ready".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(
                "pretrained model artifacts failed to load",
            )),
        )
            .into_response()
    }
}
