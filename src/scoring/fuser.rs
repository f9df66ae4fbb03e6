use crate::scoring::adjustments::{seed_score, AdjustmentScorer, SignalAdjustments};
use crate::scoring::bands::{indicators, status_from_score};
use crate::scoring::recommendations::recommendations_for;
use crate::signals::SignalSet;
use crate::{ClassifierOutput, Verdict};

/// Combines the classifier probability with the heuristic signals into a
/// [`Verdict`].
#[derive(Debug, Clone)]
pub struct ScoringFuser {
    adjustment_scorer: AdjustmentScorer,
}

impl Default for ScoringFuser {
    fn default() -> Self {
        Self::new(AdjustmentScorer::new(SignalAdjustments::default()))
    }
}

impl ScoringFuser {
    pub fn new(adjustment_scorer: AdjustmentScorer) -> Self {
        Self { adjustment_scorer }
    }

    pub fn adjustments(&self) -> &SignalAdjustments {
        self.adjustment_scorer.adjustments()
    }

    pub fn fuse(&self, output: &ClassifierOutput, signals: &SignalSet) -> Verdict {
        let seed = seed_score(output.probability_real);
        let score = self.adjustment_scorer.score(seed, signals);
        let status = status_from_score(score);

        Verdict {
            // clamped to 0..=100 by the adjustment scorer
            score: score as u8,
            status,
            indicators: indicators(score, signals),
            recommendations: recommendations_for(status)
                .iter()
                .map(|item| item.to_string())
                .collect(),
            model_prediction: output.prediction,
            confidence_real: to_percent(output.probability_real),
            confidence_fake: to_percent(output.probability_fake),
        }
    }
}

/// Fuses with the default signal adjustments.
pub fn fuse(output: &ClassifierOutput, signals: &SignalSet) -> Verdict {
    ScoringFuser::default().fuse(output, signals)
}

fn to_percent(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 100.0
}
