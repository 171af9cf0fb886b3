//! Strength classifier - maps a password to a display tier.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::is_special;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 16;

/// Strength tier shown as feedback next to a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthTier {
    TooShort,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::TooShort => "Too short",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// Key under which the UI looks up the localized label.
    pub fn message_key(self) -> &'static str {
        match self {
            StrengthTier::TooShort => "password_strength_too_short",
            StrengthTier::Weak => "password_strength_weak",
            StrengthTier::Moderate => "password_strength_moderate",
            StrengthTier::Strong => "password_strength_strong",
            StrengthTier::VeryStrong => "password_strength_very_strong",
        }
    }

    fn from_score(score: i32) -> Self {
        match score {
            2 => StrengthTier::Moderate,
            3 | 4 => StrengthTier::Strong,
            5 => StrengthTier::VeryStrong,
            _ => StrengthTier::Weak,
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a password into a [`StrengthTier`].
///
/// Anything shorter than 8 characters is [`StrengthTier::TooShort`].
/// Otherwise one point is given per character class present (lowercase,
/// uppercase, digit, special) and one for 16+ characters. Repeated
/// characters cost 1 point and an ascending run like "abc" costs 2.
pub fn classify_password_strength(password: &SecretString) -> StrengthTier {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < MIN_LENGTH {
        return StrengthTier::TooShort;
    }

    let checks = [
        chars.iter().any(|c| c.is_ascii_lowercase()),
        chars.iter().any(|c| c.is_ascii_uppercase()),
        chars.iter().any(|c| c.is_ascii_digit()),
        chars.iter().any(|&c| is_special(c)),
        chars.len() >= LONG_LENGTH,
    ];
    let mut score = checks.iter().filter(|&&hit| hit).count() as i32;

    if has_repeats(&chars) {
        score -= 1;
    }
    if has_ascending_run(&chars) {
        score -= 2;
    }

    StrengthTier::from_score(score)
}

/// True once two positions hold a character that occurs again later on.
///
/// A single duplicated character is tolerated.
fn has_repeats(chars: &[char]) -> bool {
    let mut repeated = 0;
    for (i, c) in chars.iter().enumerate() {
        if chars[i + 1..].contains(c) {
            repeated += 1;
            if repeated >= 2 {
                return true;
            }
        }
    }
    false
}

/// Three consecutive characters with ascending code points, e.g. "abc" or "123".
fn has_ascending_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as u32, w[1] as u32, w[2] as u32);
        a + 1 == b && b + 1 == c
    })
}

/// Classifies after a short debounce and sends the tier via channel.
///
/// Nothing is sent when `token` gets cancelled during the debounce, e.g.
/// because the user kept typing.
#[cfg(feature = "async")]
pub async fn classify_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthTier>,
) {
    use std::time::Duration;

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength classification cancelled");
        return;
    }

    let tier = classify_password_strength(password);

    if let Err(e) = tx.send(tier).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength tier: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_classify_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("aDeFj1AcEfT!$*DtK".to_string().into());

        classify_password_strength_tx(&pwd, token, tx).await;

        let tier = rx.recv().await.expect("Should receive tier");
        assert_eq!(tier, StrengthTier::VeryStrong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_classify_password_strength_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        classify_password_strength_tx(&pwd, token, tx).await;

        // sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
