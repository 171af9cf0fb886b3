//! Structured password requirements.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: i64 = 8;
pub const MAX_LENGTH: i64 = 50;
pub const STRONG_LENGTH: i64 = 12;

/// Length and character-class flags a password must satisfy.
///
/// Lowercase letters are always allowed and have no flag. The field names
/// serialize in camelCase, the shape of the extension's stored settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub length: i64,
    pub include_special_no_brackets: bool,
    pub include_special_brackets: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
}

impl Default for PasswordPolicy {
    /// The baseline returned for text with no recognizable requirement.
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_special_no_brackets: false,
            include_special_brackets: false,
            include_uppercase: false,
            include_numbers: false,
        }
    }
}

impl PasswordPolicy {
    /// Policy used when the text only asks for a "stronger" password.
    pub fn strong() -> Self {
        Self {
            length: STRONG_LENGTH,
            include_special_no_brackets: true,
            include_special_brackets: false,
            include_uppercase: true,
            include_numbers: true,
        }
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::default()
    }

    /// Length the generator targets: out of `0..=50` falls back to 8.
    pub fn normalized_length(&self) -> usize {
        if (0..=MAX_LENGTH).contains(&self.length) {
            self.length as usize
        } else {
            DEFAULT_LENGTH as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_baseline() {
        let policy = PasswordPolicy::default();
        assert!(policy.is_baseline());
        assert_eq!(policy.length, 8);
        assert!(!policy.include_numbers);
    }

    #[test]
    fn test_strong_is_not_baseline() {
        assert!(!PasswordPolicy::strong().is_baseline());
    }

    #[test]
    fn test_normalized_length() {
        let with = |length| PasswordPolicy { length, ..Default::default() };
        assert_eq!(with(-2).normalized_length(), 8);
        assert_eq!(with(51).normalized_length(), 8);
        assert_eq!(with(0).normalized_length(), 0);
        assert_eq!(with(1).normalized_length(), 1);
        assert_eq!(with(50).normalized_length(), 50);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(PasswordPolicy::strong()).unwrap();
        assert_eq!(json["length"], 12);
        assert_eq!(json["includeSpecialNoBrackets"], true);
        assert_eq!(json["includeSpecialBrackets"], false);
        assert_eq!(json["includeUppercase"], true);
        assert_eq!(json["includeNumbers"], true);
    }
}
