//! Password generator - random passwords that satisfy a policy.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::CharClass;
use crate::policy::PasswordPolicy;

/// Generates a random password for `policy` using the thread-local RNG.
///
/// See [`generate_password_with_rng`].
pub fn generate_password(policy: &PasswordPolicy) -> SecretString {
    generate_password_with_rng(policy, &mut rand::thread_rng())
}

/// Generates a random password for `policy` from the given random source.
///
/// The length is normalized first (outside `0..=50` becomes 8). Lowercase
/// letters are always in the pool. Every enabled class is guaranteed to
/// appear at least once: whenever one is still missing after a draw, a
/// character of that class is appended right away.
///
/// Those extra characters are never trimmed, so for short lengths with
/// several classes enabled the result can be longer than requested. From
/// length 5 up the result has exactly the requested length.
pub fn generate_password_with_rng<R: Rng>(policy: &PasswordPolicy, rng: &mut R) -> SecretString {
    let length = policy.normalized_length();
    let required = required_classes(policy);

    let mut pool: Vec<char> = CharClass::Lowercase.alphabet().chars().collect();
    for class in pool_order(policy) {
        pool.extend(class.alphabet().chars());
    }

    let mut password: Vec<char> = Vec::with_capacity(length + required.len());
    while password.len() < length {
        password.push(pick(&pool, rng));

        for &class in &required {
            if !password.iter().any(|&c| class.contains(c)) {
                let alphabet: Vec<char> = class.alphabet().chars().collect();
                password.push(pick(&alphabet, rng));
            }
        }
    }

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        requested = policy.length,
        normalized = length,
        generated = password.len(),
        "password generated"
    );

    SecretString::new(password.into_iter().collect::<String>().into())
}

/// Enabled classes in the order they are appended to the pool.
fn pool_order(policy: &PasswordPolicy) -> Vec<CharClass> {
    [
        (policy.include_special_no_brackets, CharClass::SpecialNoBrackets),
        (policy.include_special_brackets, CharClass::SpecialBrackets),
        (policy.include_uppercase, CharClass::Uppercase),
        (policy.include_numbers, CharClass::Digit),
    ]
    .into_iter()
    .filter_map(|(enabled, class)| enabled.then_some(class))
    .collect()
}

/// Enabled classes in the order missing ones are injected.
fn required_classes(policy: &PasswordPolicy) -> Vec<CharClass> {
    [
        (policy.include_uppercase, CharClass::Uppercase),
        (policy.include_numbers, CharClass::Digit),
        (policy.include_special_no_brackets, CharClass::SpecialNoBrackets),
        (policy.include_special_brackets, CharClass::SpecialBrackets),
    ]
    .into_iter()
    .filter_map(|(enabled, class)| enabled.then_some(class))
    .collect()
}

// `alphabet` is never empty: every class has a fixed non-empty alphabet.
fn pick<R: Rng>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}
