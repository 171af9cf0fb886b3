//! Length rules - minimum length from digits or number words.

use regex::Regex;
use std::sync::LazyLock;

use crate::policy::PasswordPolicy;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Number words recognized in policy text, matched case-sensitively.
const NUMBER_WORDS: [(&str, i64); 30] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("twenty one", 21),
    ("twenty two", 22),
    ("twenty three", 23),
    ("twenty four", 24),
    ("twenty five", 25),
    ("twenty six", 26),
    ("twenty seven", 27),
    ("twenty eight", 28),
    ("twenty nine", 29),
    ("thirty", 30),
];

/// Smallest candidate strictly between 3 and 20.
fn plausible_minimum(candidates: impl Iterator<Item = i64>) -> Option<i64> {
    candidates.filter(|&n| n > 3 && n < 20).min()
}

/// Picks the smallest plausible number written in digits.
///
/// Numbers outside the open interval (3, 20) are ignored. When none remain
/// the draft keeps its length.
pub fn numeric_length_rule(text: &str, mut draft: PasswordPolicy) -> PasswordPolicy {
    let candidates = DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .filter_map(|n| i64::try_from(n).ok());

    if let Some(length) = plausible_minimum(candidates) {
        draft.length = length;
    }
    draft
}

/// Same as [`numeric_length_rule`] for spelled-out numbers.
///
/// Runs after the digit rule and overwrites its result when a word qualifies.
/// Matching is a plain substring search, so "often" counts as "ten".
pub fn word_length_rule(text: &str, mut draft: PasswordPolicy) -> PasswordPolicy {
    let candidates = NUMBER_WORDS
        .iter()
        .filter(|(word, _)| text.contains(*word))
        .map(|&(_, n)| n);

    if let Some(length) = plausible_minimum(candidates) {
        draft.length = length;
    }
    draft
}
