//! Inclusion rule - requirements phrased as "include ..." or "contains ...".

use regex::Regex;
use std::sync::LazyLock;

use super::has_paren_group;
use crate::policy::PasswordPolicy;

/// "include"/"contain(s)" followed by a clause that ends at a comma, the end
/// of the text, or a parenthesized group.
static INCLUSION_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:include|contains?)\s+[^,]+?(?:,|$|\(.+?\))").unwrap()
});

/// Rescans the first inclusion clause for numbers and symbols.
///
/// Catches requirements such as "must contain a digit or symbol (!@#)" that
/// list everything in one clause. Only flags are ever set here.
pub fn inclusion_rule(text: &str, mut draft: PasswordPolicy) -> PasswordPolicy {
    let Some(clause) = INCLUSION_CLAUSE.find(text) else {
        return draft;
    };
    let clause = clause.as_str().to_lowercase();

    if ["number", "numeral", "digit"].iter().any(|w| clause.contains(*w)) {
        draft.include_numbers = true;
    }
    if clause.contains("symbol") || clause.contains("special character") {
        draft.include_special_no_brackets = true;
        if has_paren_group(&clause) {
            draft.include_special_brackets = true;
        }
    }
    draft
}
