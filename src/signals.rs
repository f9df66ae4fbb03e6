use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const CLICKBAIT_PHRASES: [&str; 8] = [
    "shocking",
    "unbelievable",
    "you won't believe",
    "doctors hate",
    "one trick",
    "breaking",
    "urgent",
    "must see",
];

pub const CITATION_PHRASES: [&str; 7] = [
    "according to",
    "study shows",
    "research",
    "source:",
    "reported by",
    "says",
    "claims",
];

/// More than this many `!` counts as excessive unless configured otherwise.
pub const EXCLAMATION_LIMIT: usize = 3;

static ALL_CAPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").expect("caps pattern compiles"));

/// Surface heuristics computed from the raw, uncleaned text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub has_clickbait: bool,
    pub has_excessive_exclamation: bool,
    pub has_all_caps_word: bool,
    pub has_source_citation: bool,
}

pub fn extract_signals(text: &str) -> SignalSet {
    extract_signals_with_limit(text, EXCLAMATION_LIMIT)
}

/// Like [`extract_signals`], flagging exclamation only above `exclamation_limit`.
pub fn extract_signals_with_limit(text: &str, exclamation_limit: usize) -> SignalSet {
    let lowercase = text.to_lowercase();

    let has_clickbait = CLICKBAIT_PHRASES
        .iter()
        .any(|phrase| lowercase.contains(phrase));
    let has_source_citation = CITATION_PHRASES
        .iter()
        .any(|phrase| lowercase.contains(phrase));

    let exclamations = text.chars().filter(|ch| *ch == '!').count();

    SignalSet {
        has_clickbait,
        has_excessive_exclamation: exclamations > exclamation_limit,
        has_all_caps_word: ALL_CAPS_RE.is_match(text),
        has_source_citation,
    }
}
