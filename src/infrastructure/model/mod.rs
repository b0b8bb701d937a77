mod artifacts;
mod forest;
mod scaler;

pub use artifacts::{ModelError, PretrainedModel};
pub use forest::{DecisionTree, RandomForestModel, TreeNode};
pub use scaler::StandardScaler;
