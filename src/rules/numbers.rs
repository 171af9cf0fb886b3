//! Numbers rule.

use regex::Regex;
use std::sync::LazyLock;

use crate::policy::PasswordPolicy;

static NUMBER_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:number|numeral|digit)s?").unwrap());

pub fn numbers_rule(text: &str, mut draft: PasswordPolicy) -> PasswordPolicy {
    if NUMBER_PHRASE.is_match(text) {
        draft.include_numbers = true;
    }
    draft
}
