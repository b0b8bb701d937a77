use serde::Deserialize;

use crate::application::ports::ClassifierError;

/// Per-dimension affine normalization fit at training time:
/// `(x - mean_i) / scale_i`. Parameters are loaded once and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, String> {
        if mean.len() != scale.len() {
            return Err(format!(
                "scaler mean/scale length mismatch: {} vs {}",
                mean.len(),
                scale.len()
            ));
        }
        if scale.iter().any(|&s| s == 0.0 || !s.is_finite()) {
            return Err("scaler contains a zero or non-finite scale entry".to_string());
        }
        Ok(Self { mean, scale })
    }

    pub fn dimensions(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if features.len() != self.mean.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }

    /// Checks the constraints [`StandardScaler::new`] enforces, for values
    /// that arrived through deserialization instead.
    pub(crate) fn validate(&self) -> Result<(), String> {
        Self::new(self.mean.clone(), self.scale.clone()).map(|_| ())
    }
}
