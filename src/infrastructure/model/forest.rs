use serde::Deserialize;

use crate::application::ports::ClassifierError;

/// One node of a serialized decision tree. Children are indices into the
/// tree's node table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Walks from the root to a leaf. Node and feature indices are validated
    /// at load time, so traversal cannot escape the node table.
    fn predict(&self, features: &[f64]) -> i64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("decision tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!(
                        "node {} references feature {} but the model has {} features",
                        i, feature, n_features
                    ));
                }
                // Children must point forward; this also rules out cycles.
                if *left <= i || *right <= i || *left >= self.nodes.len() || *right >= self.nodes.len()
                {
                    return Err(format!("node {} has out-of-range child indices", i));
                }
            }
        }
        Ok(())
    }
}

/// Pretrained random forest: majority vote over the member trees. Ties break
/// toward the lowest class index so the outcome is reproducible across
/// restarts.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForestModel {
    n_features: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForestModel {
    pub fn new(n_features: usize, trees: Vec<DecisionTree>) -> Result<Self, String> {
        let model = Self { n_features, trees };
        model.validate()?;
        Ok(model)
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError> {
        if features.len() != self.n_features {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let mut votes = std::collections::BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.predict(features)).or_insert(0usize) += 1;
        }

        // BTreeMap iterates classes in ascending order, so a strict `>`
        // leaves the lowest class holding a tied vote count.
        let mut winner = 0i64;
        let mut best = 0usize;
        for (class, count) in votes {
            if count > best {
                winner = class;
                best = count;
            }
        }
        Ok(winner)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("model declares zero features".to_string());
        }
        if self.trees.is_empty() {
            return Err("model has no trees".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|e| format!("tree {}: {}", i, e))?;
        }
        Ok(())
    }
}
