//! Policy extractor - infers password requirements from free-form text.

use crate::policy::PasswordPolicy;
use crate::rules::{
    RuleFn, inclusion_rule, numbers_rule, numeric_length_rule, special_rule, tone_fallback_rule,
    uppercase_rule, word_length_rule,
};

/// Extraction rules in application order.
///
/// `word_length` overwrites `numeric_length`, and `tone_fallback` has to
/// see the result of every other rule.
const RULES: [(&str, RuleFn); 7] = [
    ("numeric_length", numeric_length_rule),
    ("word_length", word_length_rule),
    ("special", special_rule),
    ("uppercase", uppercase_rule),
    ("numbers", numbers_rule),
    ("inclusion", inclusion_rule),
    ("tone_fallback", tone_fallback_rule),
];

/// Infers a [`PasswordPolicy`] from policy text such as a sign-up form hint.
///
/// Never fails: dimensions the text says nothing about keep the values of
/// [`PasswordPolicy::default`]. The result depends only on `text`.
///
/// # Example
///
/// ```rust
/// use passforge_core::extract_password_policy;
///
/// let policy = extract_password_policy("Use 10 or more characters with a number");
/// assert_eq!(policy.length, 10);
/// assert!(policy.include_numbers);
/// ```
pub fn extract_password_policy(text: &str) -> PasswordPolicy {
    let mut policy = PasswordPolicy::default();

    for (rule_name, rule_fn) in RULES {
        let next = rule_fn(text, policy);

        #[cfg(feature = "tracing")]
        {
            if next != policy {
                tracing::debug!(rule = rule_name, ?next, "policy rule matched");
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = rule_name;

        policy = next;
    }

    policy
}
