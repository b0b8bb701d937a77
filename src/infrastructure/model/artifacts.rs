use std::path::Path;

use crate::application::ports::{BehaviorClassifier, ClassifierError};
use crate::domain::FeatureVector;

use super::{RandomForestModel, StandardScaler};

/// The pretrained scaler + forest pair, loaded once at process start and
/// shared read-only across all requests.
pub struct PretrainedModel {
    scaler: StandardScaler,
    forest: RandomForestModel,
}

impl PretrainedModel {
    pub fn new(scaler: StandardScaler, forest: RandomForestModel) -> Result<Self, ModelError> {
        if scaler.dimensions() != forest.n_features() {
            return Err(ModelError::Invalid(format!(
                "scaler has {} dimensions but the forest expects {} features",
                scaler.dimensions(),
                forest.n_features()
            )));
        }
        Ok(Self { scaler, forest })
    }

    /// Loads both artifacts from disk. Any failure here leaves the service
    /// running in degraded mode; it must not crash the process.
    pub fn load(forest_path: &Path, scaler_path: &Path) -> Result<Self, ModelError> {
        let forest_raw = std::fs::read_to_string(forest_path)
            .map_err(|e| ModelError::Io(format!("{}: {}", forest_path.display(), e)))?;
        let forest: RandomForestModel = serde_json::from_str(&forest_raw)
            .map_err(|e| ModelError::Parse(format!("{}: {}", forest_path.display(), e)))?;
        forest.validate().map_err(ModelError::Invalid)?;

        let scaler_raw = std::fs::read_to_string(scaler_path)
            .map_err(|e| ModelError::Io(format!("{}: {}", scaler_path.display(), e)))?;
        let scaler: StandardScaler = serde_json::from_str(&scaler_raw)
            .map_err(|e| ModelError::Parse(format!("{}: {}", scaler_path.display(), e)))?;
        scaler.validate().map_err(ModelError::Invalid)?;

        tracing::info!(
            forest = %forest_path.display(),
            scaler = %scaler_path.display(),
            n_features = forest.n_features(),
            "pretrained model artifacts loaded"
        );

        Self::new(scaler, forest)
    }
}

impl BehaviorClassifier for PretrainedModel {
    fn classify(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        let scaled = self.scaler.transform(features.as_slice())?;
        self.forest.predict(&scaled)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(String),
    #[error("failed to parse model artifact: {0}")]
    Parse(String),
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}
