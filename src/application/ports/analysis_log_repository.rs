use async_trait::async_trait;

use crate::domain::AnalysisLog;

/// Insert-only sink for analysis records. Callers treat failures as
/// best-effort: a failed insert never fails the classification itself.
#[async_trait]
pub trait AnalysisLogRepository: Send + Sync {
    async fn insert(&self, log: &AnalysisLog) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
