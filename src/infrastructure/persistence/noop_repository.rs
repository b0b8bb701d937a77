use async_trait::async_trait;

use crate::application::ports::{AnalysisLogRepository, RepositoryError};
use crate::domain::AnalysisLog;

/// Used when no database is configured: skips persistence silently and never
/// fails a request.
pub struct NoopAnalysisLogRepository;

#[async_trait]
impl AnalysisLogRepository for NoopAnalysisLogRepository {
    async fn insert(&self, log: &AnalysisLog) -> Result<(), RepositoryError> {
        tracing::debug!(
            log_id = %log.id.as_uuid(),
            "no database configured, skipping analysis log persistence"
        );
        Ok(())
    }
}
