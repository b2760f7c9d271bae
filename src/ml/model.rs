//! Trained price model: artifact loading and inference
//!
//! The artifact is a JSON export of the gradient-boosted regression trained
//! upstream: a feature schema (names, kinds, categorical vocabularies), a
//! base score, the additive trees, and optional per-feature importances.
//!
//! The model predicts the log1p of price; callers apply `exp_m1` to the raw
//! output. That transform pairing is a fixed contract of the trained
//! artifact.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;
use crate::ml::schema::{FeatureRow, FeatureValue, FEATURE_NAMES};

/// One feature of the artifact schema
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum FeatureSpec {
    /// Categorical feature with its training-time vocabulary
    Categorical {
        /// Feature name
        name: String,
        /// Vocabulary in training index order
        vocab: Vec<String>,
    },
    /// Numeric feature
    Numeric {
        /// Feature name
        name: String,
    },
}

impl FeatureSpec {
    fn name(&self) -> &str {
        match self {
            FeatureSpec::Categorical { name, .. } | FeatureSpec::Numeric { name } => name,
        }
    }
}

/// One node of a regression tree
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Node {
    /// Internal split: go left when `x[feature] < threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal leaf
    Leaf { value: f64 },
}

/// One regression tree, nodes indexed from the root at 0
#[derive(Debug, Clone, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn score(&self, x: &[f64; 12]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if x[*feature] < *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// A single feature's importance score, for chart display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    /// Feature name
    pub feature: String,

    /// Importance score, as exported at training time
    pub score: f64,
}

/// Pre-trained gradient-boosted price regression model
#[derive(Debug, Clone, Deserialize)]
pub struct PriceModel {
    features: Vec<FeatureSpec>,
    base_score: f64,
    trees: Vec<Tree>,
    #[serde(default)]
    importances: Option<Vec<f64>>,
}

impl PriceModel {
    /// Load and validate a model artifact from `path`
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::ModelError` if the file cannot be read or
    /// parsed, or if any tree is malformed; `EstimatorError::SchemaMismatch`
    /// if the artifact's feature schema diverges from [`FEATURE_NAMES`].
    pub fn load(path: &Path) -> Result<Self, EstimatorError> {
        log::debug!("Loading price model from: {}", path.display());

        let file = File::open(path).map_err(|e| {
            EstimatorError::ModelError(format!("failed to open {}: {}", path.display(), e))
        })?;
        let model: PriceModel = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| EstimatorError::ModelError(format!("failed to parse artifact: {}", e)))?;
        model.validate()?;

        log::debug!(
            "Loaded price model: {} trees, base score {}",
            model.trees.len(),
            model.base_score
        );
        Ok(model)
    }

    /// Parse and validate a model artifact from a JSON string
    ///
    /// # Errors
    ///
    /// Same conditions as [`PriceModel::load`].
    pub fn from_json(json: &str) -> Result<Self, EstimatorError> {
        let model: PriceModel = serde_json::from_str(json)
            .map_err(|e| EstimatorError::ModelError(format!("failed to parse artifact: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Predict log1p-price for one row
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::SchemaMismatch` if the row cannot be encoded
    /// against the artifact schema. With a validated artifact this cannot
    /// happen; the error path exists because inference must never panic.
    pub fn predict(&self, row: &FeatureRow) -> Result<f64, EstimatorError> {
        let x = self.encode(row)?;
        let mut score = self.base_score;
        for tree in &self.trees {
            score += tree.score(&x);
        }
        Ok(score)
    }

    /// Per-feature importances ranked by descending score, when the artifact
    /// carries them
    pub fn ranked_importance(&self) -> Option<Vec<FeatureImportance>> {
        let scores = self.importances.as_ref()?;
        let mut ranked: Vec<FeatureImportance> = self
            .features
            .iter()
            .zip(scores)
            .map(|(feature, score)| FeatureImportance {
                feature: feature.name().to_string(),
                score: *score,
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        Some(ranked)
    }

    /// Encode a row into the model's numeric input vector
    ///
    /// Categorical values map to their vocabulary index; a value the training
    /// data never saw maps to the unseen bucket (index = vocabulary length).
    fn encode(&self, row: &FeatureRow) -> Result<[f64; 12], EstimatorError> {
        let values = row.values();
        let mut x = [0.0; 12];
        for (i, (spec, value)) in self.features.iter().zip(values.iter()).enumerate() {
            x[i] = match (spec, value) {
                (FeatureSpec::Categorical { vocab, .. }, FeatureValue::Categorical(label)) => {
                    vocab
                        .iter()
                        .position(|v| v == label)
                        .unwrap_or(vocab.len()) as f64
                }
                (FeatureSpec::Numeric { .. }, FeatureValue::Numeric(v)) => *v,
                (spec, _) => {
                    return Err(EstimatorError::SchemaMismatch(format!(
                        "feature {:?} kind diverges from the engine schema",
                        spec.name()
                    )))
                }
            };
        }
        Ok(x)
    }

    fn validate(&self) -> Result<(), EstimatorError> {
        if self.features.len() != FEATURE_NAMES.len() {
            return Err(EstimatorError::SchemaMismatch(format!(
                "artifact has {} features, engine expects {}",
                self.features.len(),
                FEATURE_NAMES.len()
            )));
        }

        for (i, (spec, expected)) in self.features.iter().zip(FEATURE_NAMES).enumerate() {
            if spec.name() != expected {
                return Err(EstimatorError::SchemaMismatch(format!(
                    "feature {} is {:?}, engine expects {:?}",
                    i,
                    spec.name(),
                    expected
                )));
            }
            let expect_categorical = i < 4;
            let is_categorical = matches!(spec, FeatureSpec::Categorical { .. });
            if expect_categorical != is_categorical {
                return Err(EstimatorError::SchemaMismatch(format!(
                    "feature {:?} kind diverges from the engine schema",
                    spec.name()
                )));
            }
        }

        if let Some(importances) = &self.importances {
            if importances.len() != self.features.len() {
                return Err(EstimatorError::ModelError(format!(
                    "artifact has {} importance scores for {} features",
                    importances.len(),
                    self.features.len()
                )));
            }
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(EstimatorError::ModelError(format!("tree {} is empty", t)));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                if let Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.features.len() {
                        return Err(EstimatorError::ModelError(format!(
                            "tree {} node {}: feature index {} out of range",
                            t, n, feature
                        )));
                    }
                    // Children must follow their parent so traversal terminates.
                    if *left <= n || *right <= n || *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(EstimatorError::ModelError(format!(
                            "tree {} node {}: invalid child indices {}/{}",
                            t, n, left, right
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
