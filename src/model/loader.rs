use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Arc;

use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::model::{LogisticClassifier, ModelCapability, TfidfVectorizer};

/// Short content hashes of the loaded artifacts, reported at startup and by
/// the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactFingerprints {
    pub vectorizer: String,
    pub classifier: String,
}

pub fn load_capability(config: &ModelConfig) -> Result<ModelCapability, ModelError> {
    let (vectorizer, vectorizer_fingerprint) =
        read_artifact::<TfidfVectorizer>(&config.vectorizer_path)?;
    vectorizer.validate()?;

    let (classifier, classifier_fingerprint) =
        read_artifact::<LogisticClassifier>(&config.classifier_path)?;
    classifier.validate()?;

    if vectorizer.dimension() != classifier.dimension() {
        return Err(ModelError::DimensionMismatch {
            expected: vectorizer.dimension(),
            actual: classifier.dimension(),
        });
    }

    tracing::info!(
        vectorizer = %config.vectorizer_path.display(),
        classifier = %config.classifier_path.display(),
        vectorizer_fingerprint = %vectorizer_fingerprint,
        classifier_fingerprint = %classifier_fingerprint,
        dimension = vectorizer.dimension(),
        "loaded model artifacts"
    );

    Ok(
        ModelCapability::new(Arc::new(vectorizer), Arc::new(classifier)).with_fingerprints(
            ArtifactFingerprints {
                vectorizer: vectorizer_fingerprint,
                classifier: classifier_fingerprint,
            },
        ),
    )
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<(T, String), ModelError> {
    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact = serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((artifact, fingerprint(&bytes)))
}

pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    format!("{:016x}", u64::from_be_bytes(prefix))
}
