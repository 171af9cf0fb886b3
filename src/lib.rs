//! Password generation library
//!
//! This library generates random passwords under character-class
//! constraints, infers those constraints from natural-language policy text
//! and rates passwords for display feedback.
//!
//! # Features
//!
//! - `async` (default): Enables debounced strength feedback with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASSFORGE_SETTINGS_PATH`: Custom path to the settings file
//!   (default: `./passforge_settings.json`)
//!
//! # Example
//!
//! ```rust
//! use passforge_core::{
//!     classify_password_strength, extract_password_policy, generate_password,
//! };
//! use secrecy::ExposeSecret;
//!
//! // Infer the requirements from a site's policy hint
//! let policy = extract_password_policy("At least 10 characters, including a number");
//!
//! let password = generate_password(&policy);
//! assert!(password.expose_secret().chars().count() >= 10);
//! assert!(password.expose_secret().chars().any(|c| c.is_ascii_digit()));
//!
//! println!("Strength: {}", classify_password_strength(&password));
//! ```

// Internal modules
mod charset;
mod extractor;
mod generator;
mod policy;
mod rules;
mod settings;
mod strength;

// Public API
pub use charset::{CharClass, is_special};
pub use extractor::extract_password_policy;
pub use generator::{generate_password, generate_password_with_rng};
pub use policy::{DEFAULT_LENGTH, MAX_LENGTH, PasswordPolicy};
pub use settings::{
    SETTINGS_PATH_ENV, SettingsError, default_settings, get_settings_path, load_settings,
    load_settings_from_path, load_settings_or_default, save_settings_to_path,
};
pub use strength::{StrengthTier, classify_password_strength};

#[cfg(feature = "async")]
pub use strength::classify_password_strength_tx;
