use crate::domain::FeatureVector;

/// Opaque pretrained decision procedure: deterministic index for a given
/// input, reproducible across process restarts with the same artifacts.
pub trait BehaviorClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<i64, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Feature dimensionality does not match what the pretrained artifacts
    /// were fit against. Indicates artifact/version skew, not a caller fault.
    #[error("feature shape mismatch: expected {expected} dimensions, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
