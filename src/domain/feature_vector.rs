/// Number of cepstral coefficients the extraction pipeline produces and the
/// pretrained artifacts were fit against.
pub const MFCC_DIMENSIONS: usize = 40;

/// Fixed-length acoustic feature vector: per-frame MFCCs mean-pooled over
/// time. The length is enforced by the type, so a vector of the wrong shape
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; MFCC_DIMENSIONS]);

impl FeatureVector {
    pub fn new(values: [f64; MFCC_DIMENSIONS]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn dimensions(&self) -> usize {
        MFCC_DIMENSIONS
    }
}
