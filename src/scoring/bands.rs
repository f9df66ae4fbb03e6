use crate::signals::SignalSet;
use crate::{BiasLevel, CredibilityStatus, EmotionalTone, FactCheck, Indicators, SourceCoverage};

pub const RELIABLE_THRESHOLD: i32 = 70;
pub const QUESTIONABLE_THRESHOLD: i32 = 40;
pub const MODERATE_BIAS_THRESHOLD: i32 = 50;

pub fn status_from_score(score: i32) -> CredibilityStatus {
    if score >= RELIABLE_THRESHOLD {
        CredibilityStatus::Reliable
    } else if score >= QUESTIONABLE_THRESHOLD {
        CredibilityStatus::Questionable
    } else {
        CredibilityStatus::Unreliable
    }
}

pub fn bias_from_score(score: i32) -> BiasLevel {
    if score < MODERATE_BIAS_THRESHOLD {
        BiasLevel::High
    } else if score < RELIABLE_THRESHOLD {
        BiasLevel::Moderate
    } else {
        BiasLevel::Low
    }
}

// Fact-check bands are exclusive at the top and inclusive at the bottom,
// unlike the status bands.
pub fn fact_check_from_score(score: i32) -> FactCheck {
    if score > RELIABLE_THRESHOLD {
        FactCheck::Verified
    } else if score <= QUESTIONABLE_THRESHOLD {
        FactCheck::Disputed
    } else {
        FactCheck::Unverified
    }
}

pub fn indicators(score: i32, signals: &SignalSet) -> Indicators {
    let emotional = if signals.has_clickbait || signals.has_excessive_exclamation {
        EmotionalTone::High
    } else {
        EmotionalTone::Low
    };
    let sources = if signals.has_source_citation {
        SourceCoverage::Present
    } else {
        SourceCoverage::Missing
    };

    Indicators {
        emotional,
        sources,
        bias: bias_from_score(score),
        fact_check: fact_check_from_score(score),
    }
}
