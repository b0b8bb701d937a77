use std::sync::Arc;

use crate::application::ports::{
    AnalysisLogRepository, AudioDecoder, AudioDecoderError, BehaviorClassifier, ClassifierError,
    FeatureExtractor,
};
use crate::domain::{AnalysisLog, Behavior};

/// Orchestrates one classification: decode → extract → normalize/classify →
/// persist → return. Holds the process-wide pretrained classifier; absence
/// of the classifier (artifacts failed to load at startup) makes every
/// request fail fast before any audio work.
pub struct AnalysisService<D, C>
where
    D: AudioDecoder,
    C: BehaviorClassifier,
{
    decoder: Arc<D>,
    extractor: Arc<dyn FeatureExtractor>,
    classifier: Option<Arc<C>>,
    log_repository: Arc<dyn AnalysisLogRepository>,
}

impl<D, C> AnalysisService<D, C>
where
    D: AudioDecoder,
    C: BehaviorClassifier,
{
    pub fn new(
        decoder: Arc<D>,
        extractor: Arc<dyn FeatureExtractor>,
        classifier: Option<Arc<C>>,
        log_repository: Arc<dyn AnalysisLogRepository>,
    ) -> Self {
        Self {
            decoder,
            extractor,
            classifier,
            log_repository,
        }
    }

    /// True when the pretrained artifacts loaded at startup.
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    #[tracing::instrument(skip(self, audio, device_id), fields(bytes = audio.len(), device = %device_id))]
    pub async fn analyze(
        &self,
        audio: &[u8],
        device_id: &str,
    ) -> Result<AnalysisLog, AnalysisError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(AnalysisError::ModelUnavailable)?;

        let decoded = self.decoder.decode(audio)?;
        let features = self
            .extractor
            .extract(&decoded.samples, decoded.sample_rate);

        let index = classifier.classify(&features)?;
        let behavior = Behavior::from_index(index);
        if !behavior.is_known() {
            tracing::warn!(
                index,
                "classifier emitted an index outside the trained label map"
            );
        }

        let log = AnalysisLog::new(index, behavior, device_id.to_string());

        // Best-effort: classification succeeded independently of logging.
        if let Err(e) = self.log_repository.insert(&log).await {
            tracing::warn!(error = %e, "failed to persist analysis log");
        }

        tracing::info!(
            index,
            label = %log.behavior_label,
            sample_rate = decoded.sample_rate,
            "audio clip classified"
        );

        Ok(log)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("pretrained model artifacts are unavailable")]
    ModelUnavailable,
    #[error(transparent)]
    Decode(#[from] AudioDecoderError),
    #[error(transparent)]
    Classify(#[from] ClassifierError),
}
