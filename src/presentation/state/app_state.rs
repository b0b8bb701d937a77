use std::sync::Arc;

use crate::application::ports::{AudioDecoder, BehaviorClassifier};
use crate::application::services::AnalysisService;

pub struct AppState<D, C>
where
    D: AudioDecoder,
    C: BehaviorClassifier,
{
    pub analysis_service: Arc<AnalysisService<D, C>>,
}

impl<D, C> Clone for AppState<D, C>
where
    D: AudioDecoder,
    C: BehaviorClassifier,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
        }
    }
}
