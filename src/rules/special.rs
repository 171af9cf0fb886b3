//! Special character rule - symbols with or without brackets.

use regex::Regex;
use std::sync::LazyLock;

use super::has_paren_group;
use crate::policy::PasswordPolicy;

/// "symbol(s)" or "special (character)(s)", plus an optional parenthesized
/// list right after it.
static SPECIAL_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:symbol|special (?:character)?)s?(?:\s*\(.+?\))?").unwrap()
});

/// Requires symbols when the text mentions them.
///
/// A parenthesized example list attached to the phrase also enables the
/// bracket set.
pub fn special_rule(text: &str, mut draft: PasswordPolicy) -> PasswordPolicy {
    if let Some(phrase) = SPECIAL_PHRASE.find(text) {
        draft.include_special_no_brackets = true;
        if has_paren_group(phrase.as_str()) {
            draft.include_special_brackets = true;
        }
    }
    draft
}
