mod analysis_log_repository;
mod audio_decoder;
mod behavior_classifier;
mod feature_extractor;

pub use analysis_log_repository::{AnalysisLogRepository, RepositoryError};
pub use audio_decoder::{AudioDecoder, AudioDecoderError, DecodedAudio};
pub use behavior_classifier::{BehaviorClassifier, ClassifierError};
pub use feature_extractor::FeatureExtractor;
