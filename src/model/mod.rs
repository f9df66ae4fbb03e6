//! Classification capability consumed by the engine.
//!
//! The engine only sees the [`Vectorizer`] and [`Classifier`] traits, so tests
//! can swap in deterministic stubs. [`loader`] builds the production
//! capability from exported TF-IDF and logistic regression artifacts.

pub mod loader;
pub mod logistic;
pub mod tfidf;

use std::sync::Arc;

use crate::error::ModelError;

pub use loader::{load_capability, ArtifactFingerprints};
pub use logistic::LogisticClassifier;
pub use tfidf::{TfidfNorm, TfidfVectorizer};

/// Sparse feature vector. Entries are `(column, value)` sorted by column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    pub dimension: usize,
    pub entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn new(dimension: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(column, _)| *column);
        Self { dimension, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|(column, value)| weights.get(*column).map(|weight| weight * value))
            .sum()
    }
}

/// Raw classifier answer: label `0` (fake) or `1` (real) and the
/// probabilities ordered `[p_fake, p_real]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawClassification {
    pub label: u8,
    pub probabilities: [f64; 2],
}

pub trait Vectorizer: Send + Sync {
    fn vectorize(&self, text: &str) -> Result<FeatureVector, ModelError>;
}

pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<RawClassification, ModelError>;
}

/// A ready-to-use vectorizer and classifier pair, shared read-only.
#[derive(Clone)]
pub struct ModelCapability {
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn Classifier>,
    fingerprints: Option<ArtifactFingerprints>,
}

impl ModelCapability {
    pub fn new(vectorizer: Arc<dyn Vectorizer>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            vectorizer,
            classifier,
            fingerprints: None,
        }
    }

    pub fn with_fingerprints(mut self, fingerprints: ArtifactFingerprints) -> Self {
        self.fingerprints = Some(fingerprints);
        self
    }

    pub fn fingerprints(&self) -> Option<&ArtifactFingerprints> {
        self.fingerprints.as_ref()
    }

    pub fn predict(&self, cleaned_text: &str) -> Result<RawClassification, ModelError> {
        let features = self.vectorizer.vectorize(cleaned_text)?;
        self.classifier.classify(&features)
    }
}

impl std::fmt::Debug for ModelCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelCapability")
            .field("fingerprints", &self.fingerprints)
            .finish_non_exhaustive()
    }
}
