use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::{Classifier, FeatureVector, RawClassification};

/// Binary logistic regression exported from a trained pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Class label of each probability column, as the training pipeline
    /// ordered them. The positive column is `classes[1]`.
    #[serde(default = "default_classes")]
    pub classes: [u8; 2],
}

fn default_classes() -> [u8; 2] {
    [0, 1]
}

impl LogisticClassifier {
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::Invalid {
                reason: "classifier has no coefficients".to_string(),
            });
        }
        match self.classes {
            [0, 1] | [1, 0] => {}
            other => {
                return Err(ModelError::Invalid {
                    reason: format!("classes must be a permutation of 0 and 1, got {:?}", other),
                })
            }
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Invalid {
                reason: "classifier weights must be finite".to_string(),
            });
        }
        Ok(())
    }
}

impl Classifier for LogisticClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<RawClassification, ModelError> {
        if features.dimension != self.dimension() {
            return Err(ModelError::DimensionMismatch {
                expected: self.dimension(),
                actual: features.dimension,
            });
        }

        let positive = sigmoid(features.dot(&self.coefficients) + self.intercept);
        let (p_zero, p_one) = if self.classes[1] == 1 {
            (1.0 - positive, positive)
        } else {
            (positive, 1.0 - positive)
        };
        let label = if p_one >= p_zero { 1 } else { 0 };

        Ok(RawClassification {
            label,
            probabilities: [p_zero, p_one],
        })
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
