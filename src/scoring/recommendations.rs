use crate::CredibilityStatus;

pub const UNRELIABLE_RECOMMENDATIONS: [&str; 4] = [
    "Verify this information with trusted news sources",
    "Look for original sources and citations",
    "Check if other reputable outlets are reporting this story",
    "Be extremely cautious before sharing this content",
];

pub const QUESTIONABLE_RECOMMENDATIONS: [&str; 4] = [
    "Cross-reference with multiple reliable sources",
    "Look for expert opinions on this topic",
    "Be cautious about sharing until verified",
    "Check the publication date and author credentials",
];

pub const RELIABLE_RECOMMENDATIONS: [&str; 4] = [
    "This content appears credible based on initial analysis",
    "Still recommended to verify important claims independently",
    "Check publication date for currency of information",
    "Consider the source reputation and bias",
];

pub fn recommendations_for(status: CredibilityStatus) -> &'static [&'static str; 4] {
    match status {
        CredibilityStatus::Unreliable => &UNRELIABLE_RECOMMENDATIONS,
        CredibilityStatus::Questionable => &QUESTIONABLE_RECOMMENDATIONS,
        CredibilityStatus::Reliable => &RELIABLE_RECOMMENDATIONS,
    }
}
