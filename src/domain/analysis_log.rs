use chrono::{DateTime, Utc};

use super::{AnalysisLogId, Behavior};

/// One persisted classification outcome. Created once per successful
/// analysis, written to the external store, never read back or updated.
#[derive(Debug, Clone)]
pub struct AnalysisLog {
    pub id: AnalysisLogId,
    pub predicted_index: i64,
    pub behavior_label: String,
    pub source_device: String,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisLog {
    pub fn new(predicted_index: i64, behavior: Behavior, source_device: String) -> Self {
        Self {
            id: AnalysisLogId::new(),
            predicted_index,
            behavior_label: behavior.as_str().to_string(),
            source_device,
            timestamp: Utc::now(),
        }
    }
}
