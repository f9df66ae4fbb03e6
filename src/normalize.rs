//! Text cleanup applied before vectorization. The output has to match the
//! preprocessing the classifier artifacts were trained with.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("url pattern compiles"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("tag pattern compiles"));
static NON_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("letter pattern compiles"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Lowercases, strips URLs and markup, drops everything that is not an ASCII
/// lowercase letter or whitespace, then collapses whitespace.
///
/// Removing markup or punctuation can splice fragments into a new URL token
/// (`ww<b>w.site` becomes `wwwsite`), so the pass repeats until the text stops
/// changing. The result is always a fixed point of `normalize`.
pub fn normalize(text: &str) -> String {
    let mut current = clean_pass(&text.to_lowercase());
    loop {
        // after one pass only [a-z ] remains, so each further pass can only shrink
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(lowered: &str) -> String {
    let without_urls = URL_RE.replace_all(lowered, "");
    let without_tags = TAG_RE.replace_all(&without_urls, "");
    let letters = NON_LETTER_RE.replace_all(&without_tags, "");
    WHITESPACE_RE.replace_all(&letters, " ").trim().to_string()
}
