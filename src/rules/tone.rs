//! Tone rule - vague "weak"/"strong" feedback with no concrete constraint.

use regex::Regex;
use std::sync::LazyLock;

use crate::policy::PasswordPolicy;

static TONE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)weak|strong").unwrap());

/// Falls back to [`PasswordPolicy::strong`] for text like "make it stronger".
///
/// Must run last: it only fires while the draft is still the baseline.
pub fn tone_fallback_rule(text: &str, draft: PasswordPolicy) -> PasswordPolicy {
    if draft.is_baseline() && TONE_WORD.is_match(text) {
        return PasswordPolicy::strong();
    }
    draft
}
