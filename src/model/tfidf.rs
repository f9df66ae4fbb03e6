use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::error::ModelError;
use crate::model::{FeatureVector, Vectorizer};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TfidfNorm {
    #[default]
    L2,
    L1,
    None,
}

/// TF-IDF vectorizer exported from a trained pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: TfidfNorm,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl TfidfVectorizer {
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::Invalid {
                reason: format!("invalid ngram range ({}, {})", min_n, max_n),
            });
        }
        if self.vocabulary.is_empty() {
            return Err(ModelError::Invalid {
                reason: "vectorizer vocabulary is empty".to_string(),
            });
        }
        let max_column = self.vocabulary.values().copied().max().unwrap_or(0);
        if self.idf.len() != max_column + 1 {
            return Err(ModelError::Invalid {
                reason: format!(
                    "idf has {} entries but vocabulary spans {} columns",
                    self.idf.len(),
                    max_column + 1
                ),
            });
        }
        Ok(())
    }

    fn terms(&self, tokens: &[&str]) -> Vec<String> {
        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

impl Vectorizer for TfidfVectorizer {
    fn vectorize(&self, text: &str) -> Result<FeatureVector, ModelError> {
        let tokens: Vec<&str> = TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.terms(&tokens) {
            if let Some(column) = self.vocabulary.get(&term) {
                *counts.entry(*column).or_insert(0.0) += 1.0;
            }
        }

        let mut entries = Vec::with_capacity(counts.len());
        for (column, count) in counts {
            let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
            let idf = self
                .idf
                .get(column)
                .copied()
                .ok_or_else(|| ModelError::DimensionMismatch {
                    expected: self.idf.len(),
                    actual: column + 1,
                })?;
            entries.push((column, tf * idf));
        }

        let norm = match self.norm {
            TfidfNorm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            TfidfNorm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            TfidfNorm::None => 1.0,
        };
        if norm > 0.0 {
            for (_, value) in entries.iter_mut() {
                *value /= norm;
            }
        }

        Ok(FeatureVector::new(self.dimension(), entries))
    }
}
