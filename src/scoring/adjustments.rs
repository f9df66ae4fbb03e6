use serde::{Deserialize, Serialize};

use crate::signals::{SignalSet, EXCLAMATION_LIMIT};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Point adjustments applied for each heuristic signal. Penalties are
/// subtracted, the citation bonus is added. `exclamation_limit` is the number
/// of `!` a text may carry before the exclamation penalty applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SignalAdjustments {
    pub clickbait_penalty: i32,
    pub exclamation_penalty: i32,
    pub all_caps_penalty: i32,
    pub citation_bonus: i32,
    pub exclamation_limit: usize,
}

impl Default for SignalAdjustments {
    fn default() -> Self {
        Self {
            clickbait_penalty: 15,
            exclamation_penalty: 10,
            all_caps_penalty: 5,
            citation_bonus: 10,
            exclamation_limit: EXCLAMATION_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdjustmentScorer {
    adjustments: SignalAdjustments,
}

impl AdjustmentScorer {
    pub fn new(adjustments: SignalAdjustments) -> Self {
        Self { adjustments }
    }

    pub fn adjustments(&self) -> &SignalAdjustments {
        &self.adjustments
    }

    /// Applies every active signal in a fixed order. The score is clamped
    /// after each individual step, so the result near the bounds depends on
    /// that order.
    pub fn score(&self, seed: i32, signals: &SignalSet) -> i32 {
        let mut score = clamp_score(seed);

        if signals.has_clickbait {
            score = clamp_score(score - self.adjustments.clickbait_penalty);
        }
        if signals.has_excessive_exclamation {
            score = clamp_score(score - self.adjustments.exclamation_penalty);
        }
        if signals.has_all_caps_word {
            score = clamp_score(score - self.adjustments.all_caps_penalty);
        }
        if signals.has_source_citation {
            score = clamp_score(score + self.adjustments.citation_bonus);
        }

        score
    }
}

/// Seeds the score from the classifier's probability of the text being real.
/// Non-finite probabilities collapse to the nearest bound.
pub fn seed_score(probability_real: f64) -> i32 {
    if probability_real.is_nan() {
        return MIN_SCORE;
    }
    let scaled = (probability_real * 100.0).round();
    clamp_score(scaled.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as i32)
}

pub fn clamp_score(value: i32) -> i32 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}
