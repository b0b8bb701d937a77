use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioDecoder, BehaviorClassifier};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, health_handler, method_not_allowed_handler, readiness_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<D, C>(state: AppState<D, C>) -> Router
where
    D: AudioDecoder + 'static,
    C: BehaviorClassifier + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(readiness_handler::<D, C>))
        .route(
            "/api/v1/analyze",
            post(analyze_handler::<D, C>).fallback(method_not_allowed_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
