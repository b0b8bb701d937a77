pub mod analyze;
pub mod health;

pub use analyze::{
    AnalyzeRequest, AnalyzeResponse, DEFAULT_DEVICE_ID, ErrorResponse, analyze_handler,
    method_not_allowed_handler,
};
pub use health::{HealthResponse, health_handler, readiness_handler};
