pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod scoring;
pub mod signals;

use serde::{Deserialize, Serialize};

pub use crate::engine::CredibilityEngine;
pub use crate::error::{EngineError, ModelError};
pub use crate::normalize::normalize;
pub use crate::scoring::{fuse, ScoringFuser, SignalAdjustments};
pub use crate::signals::{extract_signals, SignalSet};

/// Binary verdict of the underlying classifier. Label `0` is fake, `1` is real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    Fake,
    Real,
}

impl Prediction {
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Prediction::Fake),
            1 => Some(Prediction::Real),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Prediction::Fake => "Fake",
            Prediction::Real => "Real",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOutput {
    pub prediction: Prediction,
    pub probability_fake: f64,
    pub probability_real: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityStatus {
    Reliable,
    Questionable,
    Unreliable,
}

impl CredibilityStatus {
    pub fn label(self) -> &'static str {
        match self {
            CredibilityStatus::Reliable => "reliable",
            CredibilityStatus::Questionable => "questionable",
            CredibilityStatus::Unreliable => "unreliable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionalTone {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceCoverage {
    Present,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLevel {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactCheck {
    Verified,
    Unverified,
    Disputed,
}

/// UI-facing labels derived from the final score and the heuristic signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    pub emotional: EmotionalTone,
    pub sources: SourceCoverage,
    pub bias: BiasLevel,
    pub fact_check: FactCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub score: u8,
    pub status: CredibilityStatus,
    pub indicators: Indicators,
    pub recommendations: Vec<String>,
    pub model_prediction: Prediction,
    pub confidence_real: f64,
    pub confidence_fake: f64,
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
