//! Policy extraction rules
//!
//! Each rule looks for one kind of requirement in the text and returns the
//! updated policy draft. Rules only ever set flags, never clear them.

use regex::Regex;
use std::sync::LazyLock;

use crate::policy::PasswordPolicy;

mod inclusion;
mod length;
mod numbers;
mod special;
mod tone;
mod uppercase;

pub use inclusion::inclusion_rule;
pub use length::{numeric_length_rule, word_length_rule};
pub use numbers::numbers_rule;
pub use special::special_rule;
pub use tone::tone_fallback_rule;
pub use uppercase::uppercase_rule;

/// Signature shared by all extraction rules: text in, updated draft out.
pub type RuleFn = fn(&str, PasswordPolicy) -> PasswordPolicy;

/// A parenthesized group such as `(e.g. !, #, {)`.
static PAREN_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.+?\)").unwrap());

pub(crate) fn has_paren_group(text: &str) -> bool {
    PAREN_GROUP.is_match(text)
}
