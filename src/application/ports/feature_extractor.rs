use crate::domain::FeatureVector;

/// Collapses a waveform of any duration into one fixed-length feature
/// vector. Pure function of its inputs.
pub trait FeatureExtractor: Send + Sync {
    fn extract(&self, samples: &[f32], sample_rate: u32) -> FeatureVector;
}
