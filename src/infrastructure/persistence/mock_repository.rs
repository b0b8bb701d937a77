use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{AnalysisLogRepository, RepositoryError};
use crate::domain::AnalysisLog;

/// Records every insert for assertions in tests.
#[derive(Default)]
pub struct MockAnalysisLogRepository {
    records: Mutex<Vec<AnalysisLog>>,
}

impl MockAnalysisLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AnalysisLog> {
        self.records.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl AnalysisLogRepository for MockAnalysisLogRepository {
    async fn insert(&self, log: &AnalysisLog) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("mock lock poisoned")
            .push(log.clone());
        Ok(())
    }
}

/// Simulates an unreachable store.
pub struct FailingAnalysisLogRepository;

#[async_trait]
impl AnalysisLogRepository for FailingAnalysisLogRepository {
    async fn insert(&self, _log: &AnalysisLog) -> Result<(), RepositoryError> {
        Err(RepositoryError::ConnectionFailed(
            "simulated store outage".to_string(),
        ))
    }
}
