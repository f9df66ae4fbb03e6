use std::path::PathBuf;

/// Failures surfaced by [`crate::CredibilityEngine::evaluate`]. A failed
/// evaluation never produces a partial or default verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("classifier unavailable: {reason}")]
    ClassifierUnavailable { reason: String },

    #[error("classification failed: {reason}")]
    ClassificationFailure { reason: String },
}

impl EngineError {
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::EmptyInput => "empty_input",
            EngineError::ClassifierUnavailable { .. } => "classifier_unavailable",
            EngineError::ClassificationFailure { .. } => "classification_failure",
        }
    }
}

impl From<ModelError> for EngineError {
    fn from(err: ModelError) -> Self {
        EngineError::ClassificationFailure {
            reason: err.to_string(),
        }
    }
}

/// Errors raised while loading model artifacts or running them.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model artifact: {reason}")]
    Invalid { reason: String },

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
