use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::model::{load_capability, ModelCapability};
use crate::normalize::normalize;
use crate::scoring::{AdjustmentScorer, ScoringFuser, SignalAdjustments};
use crate::signals::extract_signals_with_limit;
use crate::{ClassifierOutput, Prediction, Verdict};

/// Entry point of the scoring pipeline. Holds the model capability, or the
/// reason it could not be initialized, and is safe to share between threads.
#[derive(Debug, Clone)]
pub struct CredibilityEngine {
    capability: Result<ModelCapability, String>,
    fuser: ScoringFuser,
}

impl CredibilityEngine {
    pub fn new(capability: ModelCapability, adjustments: SignalAdjustments) -> Self {
        Self {
            capability: Ok(capability),
            fuser: ScoringFuser::new(AdjustmentScorer::new(adjustments)),
        }
    }

    pub fn unavailable(reason: impl Into<String>, adjustments: SignalAdjustments) -> Self {
        Self {
            capability: Err(reason.into()),
            fuser: ScoringFuser::new(AdjustmentScorer::new(adjustments)),
        }
    }

    /// Loads the model artifacts named by `config`. A load failure leaves the
    /// engine in the unavailable state instead of failing startup.
    pub fn from_config(config: &EngineConfig) -> Self {
        match load_capability(&config.model) {
            Ok(capability) => Self::new(capability, config.scoring.clone()),
            Err(err) => {
                tracing::warn!(error = %err, "model artifacts unavailable");
                Self::unavailable(err.to_string(), config.scoring.clone())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.capability.is_ok()
    }

    pub fn capability(&self) -> Option<&ModelCapability> {
        self.capability.as_ref().ok()
    }

    pub fn evaluate(&self, raw_text: &str) -> Result<Verdict, EngineError> {
        if raw_text.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let capability =
            self.capability
                .as_ref()
                .map_err(|reason| EngineError::ClassifierUnavailable {
                    reason: reason.clone(),
                })?;

        let cleaned = normalize(raw_text);
        let output = classify(capability, &cleaned)?;
        let signals =
            extract_signals_with_limit(raw_text, self.fuser.adjustments().exclamation_limit);
        let verdict = self.fuser.fuse(&output, &signals);

        tracing::debug!(
            score = verdict.score,
            status = verdict.status.label(),
            prediction = verdict.model_prediction.label(),
            clickbait = signals.has_clickbait,
            exclamation = signals.has_excessive_exclamation,
            all_caps = signals.has_all_caps_word,
            citation = signals.has_source_citation,
            "evaluated text"
        );

        Ok(verdict)
    }
}

fn classify(capability: &ModelCapability, cleaned: &str) -> Result<ClassifierOutput, EngineError> {
    let raw = capability.predict(cleaned)?;
    let prediction =
        Prediction::from_label(raw.label).ok_or_else(|| EngineError::ClassificationFailure {
            reason: format!("classifier returned unknown label {}", raw.label),
        })?;

    Ok(ClassifierOutput {
        prediction,
        probability_fake: raw.probabilities[0],
        probability_real: raw.probabilities[1],
    })
}
