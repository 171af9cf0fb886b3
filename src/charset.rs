//! Character classes used by the generator and the strength classifier.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_NO_BRACKETS: &str = "!@#$%^&*_+-=;':\",.?/\\`";
pub const SPECIAL_BRACKETS: &str = "{}()<>[]";

/// A set of characters a policy can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    SpecialNoBrackets,
    SpecialBrackets,
}

impl CharClass {
    /// The characters belonging to this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::SpecialNoBrackets => SPECIAL_NO_BRACKETS,
            CharClass::SpecialBrackets => SPECIAL_BRACKETS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::SpecialNoBrackets | CharClass::SpecialBrackets => {
                self.alphabet().contains(c)
            }
        }
    }
}

/// True for any character of either special set.
pub fn is_special(c: char) -> bool {
    CharClass::SpecialNoBrackets.contains(c) || CharClass::SpecialBrackets.contains(c)
}
