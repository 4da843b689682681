use once_cell::sync::Lazy;
use regex::Regex;

/// Characters outside the allow-list: word characters, whitespace, and a
/// small set of sentence/clause punctuation.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:\-()\[\]"']"#).expect("disallowed-char regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Normalize raw document text for chunking and indexing.
///
/// Strips characters outside the allow-list, collapses whitespace runs
/// (including newlines) to a single space, and trims. Stripping happens
/// before the collapse so a removed character between two spaces cannot
/// leave a double space behind; the function is idempotent.
///
/// Empty input yields an empty string.
#[must_use]
pub fn clean(text: &str) -> String {
    let stripped = DISALLOWED.replace_all(text, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Split cleaned text into sentences.
///
/// A sentence ends at `.`, `!`, or `?` followed by whitespace. Fragments are
/// trimmed and empty fragments discarded; trailing text without a terminator
/// counts as a final sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            push_sentence(&mut sentences, &current);
            current.clear();
        }
    }
    push_sentence(&mut sentences, &current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
