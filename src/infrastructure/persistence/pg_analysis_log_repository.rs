use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{AnalysisLogRepository, RepositoryError};
use crate::domain::AnalysisLog;

pub struct PgAnalysisLogRepository {
    pool: PgPool,
}

impl PgAnalysisLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisLogRepository for PgAnalysisLogRepository {
    #[instrument(skip(self, log), fields(log_id = %log.id.as_uuid(), label = %log.behavior_label))]
    async fn insert(&self, log: &AnalysisLog) -> Result<(), RepositoryError> {
        // The connection is scoped to this call: dropped (and returned to the
        // pool) on every exit path, including errors.
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO analysis_logs (id, predicted_index, behavior_label, source_device, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(log.id.as_uuid())
        .bind(log.predicted_index)
        .bind(&log.behavior_label)
        .bind(&log.source_device)
        .bind(log.timestamp)
        .execute(&mut *conn)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
