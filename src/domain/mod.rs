mod analysis_log;
mod analysis_log_id;
mod behavior;
mod feature_vector;

pub use analysis_log::AnalysisLog;
pub use analysis_log_id::AnalysisLogId;
pub use behavior::Behavior;
pub use feature_vector::{FeatureVector, MFCC_DIMENSIONS};
