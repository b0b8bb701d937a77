mod mock_repository;
mod noop_repository;
mod pg_analysis_log_repository;
mod pg_pool;

pub use mock_repository::{FailingAnalysisLogRepository, MockAnalysisLogRepository};
pub use noop_repository::NoopAnalysisLogRepository;
pub use pg_analysis_log_repository::PgAnalysisLogRepository;
pub use pg_pool::create_pool;
