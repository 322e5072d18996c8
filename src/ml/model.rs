//! Calorie regression models loaded from JSON artifacts.
//!
//! Two model families are supported:
//! - `linear`: intercept plus one coefficient per feature
//! - `random_forest`: an ensemble of binary regression trees whose outputs
//!   are averaged
//!
//! Trees are stored as flat node arrays. A split sends a sample to `left`
//! when `x[feature] <= threshold`, otherwise to `right`. Child indices must
//! point forward in the array, which rules out cycles.

use serde::{Deserialize, Serialize};

use crate::metrics::WorkoutInput;

use super::predictor::CaloriePredictor;
use super::types::{MlError, FEATURE_COUNT, FEATURE_NAMES};

/// A single node of a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Binary regression tree, root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    fn validate(&self, tree_index: usize) -> Result<(), MlError> {
        if self.nodes.is_empty() {
            return Err(MlError::InvalidModel(format!("tree {} has no nodes", tree_index)));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(MlError::InvalidModel(format!(
                            "tree {} node {} splits on unknown feature {}",
                            tree_index, i, feature
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(MlError::InvalidModel(format!(
                            "tree {} node {} has a non-finite threshold",
                            tree_index, i
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(MlError::InvalidModel(format!(
                                "tree {} node {} has out-of-order child {}",
                                tree_index, i, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(MlError::InvalidModel(format!(
                            "tree {} leaf {} is not finite",
                            tree_index, i
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf. Assumes the tree passed validation.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { value } => return *value,
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
}

/// Linear regression over the seven features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), MlError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(MlError::InvalidModel(format!(
                "expected {} coefficients, found {}",
                FEATURE_COUNT,
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(MlError::InvalidModel("non-finite coefficient".to_string()));
        }
        Ok(())
    }

    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// Averaging ensemble of regression trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub trees: Vec<RegressionTree>,
}

impl ForestModel {
    fn validate(&self) -> Result<(), MlError> {
        if self.trees.is_empty() {
            return Err(MlError::InvalidModel("forest has no trees".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(())
    }

    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        total / self.trees.len() as f64
    }
}

/// Model family and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelKind {
    Linear(LinearModel),
    RandomForest(ForestModel),
}

/// A loaded calorie model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieModel {
    /// Human readable model description
    #[serde(default)]
    pub description: Option<String>,
    /// Feature column names, if recorded at training time
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(flatten)]
    pub kind: ModelKind,
}

impl CalorieModel {
    /// Parse and validate a JSON model artifact.
    pub fn from_json(json: &str) -> Result<Self, MlError> {
        let model: CalorieModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Structural checks that make prediction infallible afterwards.
    pub fn validate(&self) -> Result<(), MlError> {
        if let Some(features) = &self.features {
            if features.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
                return Err(MlError::InvalidModel(format!(
                    "feature order {:?} does not match {:?}",
                    features, FEATURE_NAMES
                )));
            }
        }

        match &self.kind {
            ModelKind::Linear(model) => model.validate(),
            ModelKind::RandomForest(model) => model.validate(),
        }
    }

    /// Raw model output before clamping.
    pub fn raw_predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        match &self.kind {
            ModelKind::Linear(model) => model.predict(features),
            ModelKind::RandomForest(model) => model.predict(features),
        }
    }

    /// Number of trees for forests, `None` for linear models.
    pub fn tree_count(&self) -> Option<usize> {
        match &self.kind {
            ModelKind::Linear(_) => None,
            ModelKind::RandomForest(model) => Some(model.trees.len()),
        }
    }
}

impl CaloriePredictor for CalorieModel {
    fn predict(&self, input: &WorkoutInput) -> Result<f64, MlError> {
        Ok(self.raw_predict(&input.features()).max(0.0))
    }

    fn name(&self) -> &str {
        match (&self.description, &self.kind) {
            (Some(description), _) => description,
            (None, ModelKind::Linear(_)) => "Linear Regression",
            (None, ModelKind::RandomForest(_)) => "Random Forest Regressor",
        }
    }
}
