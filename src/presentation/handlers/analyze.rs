use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioDecoder, BehaviorClassifier};
use crate::application::services::AnalysisError;
use crate::presentation::state::AppState;

/// Sentinel used when the caller omits `device_id`.
pub const DEFAULT_DEVICE_ID: &str = "unknown-device";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64-encoded audio bytes.
    pub audio_data: String,
    #[serde(default = "default_device_id")]
    pub device_id: String,
}

fn default_device_id() -> String {
    DEFAULT_DEVICE_ID.to_string()
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub prediction: String,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// POST `/api/v1/analyze`: decode → extract → classify → log → respond.
/// Every failure is converted here into the uniform error response shape;
/// nothing propagates past this boundary.
#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler<D, C>(
    State(state): State<AppState<D, C>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response
where
    D: AudioDecoder + 'static,
    C: BehaviorClassifier + 'static,
{
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected malformed analyze request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "invalid request body: {}",
                    rejection.body_text()
                ))),
            )
                .into_response();
        }
    };

    let audio_bytes = match BASE64.decode(&request.audio_data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "audio_data is not valid base64");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("audio_data is not valid base64")),
            )
                .into_response();
        }
    };

    match state
        .analysis_service
        .analyze(&audio_bytes, &request.device_id)
        .await
    {
        Ok(log) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                status: "success".to_string(),
                prediction: log.behavior_label,
                timestamp: log.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = match &e {
                // Caller-fault: the payload could not be understood.
                AnalysisError::Decode(_) => StatusCode::BAD_REQUEST,
                // Server-fault: artifact/version skew in the pipeline.
                AnalysisError::Classify(_) => StatusCode::INTERNAL_SERVER_ERROR,
                AnalysisError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            };
            tracing::warn!(error = %e, status = %status, "analysis failed");
            (status, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}

/// Everything except POST is rejected before any processing occurs.
pub async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("only POST requests are accepted")),
    )
        .into_response()
}
