//! Uppercase rule.

use regex::Regex;
use std::sync::LazyLock;

use crate::policy::PasswordPolicy;

static UPPERCASE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:uppercase|upper case|capital|upper)").unwrap());

pub fn uppercase_rule(text: &str, mut draft: PasswordPolicy) -> PasswordPolicy {
    if UPPERCASE_PHRASE.is_match(text) {
        draft.include_uppercase = true;
    }
    draft
}
