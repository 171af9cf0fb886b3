//! Settings management module
//!
//! Loads and stores the user's generator settings. The settings are a
//! [`PasswordPolicy`] kept as JSON; callers own the loaded value.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::policy::{DEFAULT_LENGTH, PasswordPolicy};

pub const SETTINGS_PATH_ENV: &str = "PASSFORGE_SETTINGS_PATH";
const DEFAULT_SETTINGS_PATH: &str = "./passforge_settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings file is empty")]
    EmptyFile,
    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings used until the user changes anything.
///
/// Unlike [`PasswordPolicy::default`], symbols, uppercase and numbers are on.
pub fn default_settings() -> PasswordPolicy {
    PasswordPolicy {
        length: DEFAULT_LENGTH,
        include_special_no_brackets: true,
        include_special_brackets: false,
        include_uppercase: true,
        include_numbers: true,
    }
}

/// Returns the settings file path.
///
/// Priority:
/// 1. Environment variable `PASSFORGE_SETTINGS_PATH`
/// 2. Default path `./passforge_settings.json`
pub fn get_settings_path() -> PathBuf {
    std::env::var(SETTINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH))
}

/// Loads the settings from [`get_settings_path`].
pub fn load_settings() -> Result<PasswordPolicy, SettingsError> {
    load_settings_from_path(get_settings_path())
}

/// Loads the settings from a specific file path.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
/// - File is not a valid settings object
pub fn load_settings_from_path<P: AsRef<Path>>(path: P) -> Result<PasswordPolicy, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Settings load FAILED: FileNotFound {:?}", path);
        return Err(SettingsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Settings load FAILED: Empty file {:?}", path);
        return Err(SettingsError::EmptyFile);
    }

    let settings: PasswordPolicy = serde_json::from_str(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Settings loaded from {:?}", path);

    Ok(settings)
}

/// Loads the settings, falling back to [`default_settings`] on any error.
pub fn load_settings_or_default() -> PasswordPolicy {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Using default settings: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
            default_settings()
        }
    }
}

/// Writes the settings as pretty-printed JSON, replacing any existing file.
pub fn save_settings_to_path<P: AsRef<Path>>(
    path: P,
    settings: &PasswordPolicy,
) -> Result<(), SettingsError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Settings saved to {:?}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn settings_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", content).expect("Failed to write");
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_settings_path_default() {
        remove_env(SETTINGS_PATH_ENV);

        let path = get_settings_path();
        assert_eq!(path, PathBuf::from("./passforge_settings.json"));
    }

    #[test]
    #[serial]
    fn test_get_settings_path_from_env() {
        let custom_path = "/custom/path/settings.json";
        set_env(SETTINGS_PATH_ENV, custom_path);

        let path = get_settings_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(SETTINGS_PATH_ENV);
    }

    #[test]
    fn test_load_settings_file_not_found() {
        let result = load_settings_from_path("/nonexistent/path/settings.json");
        match result {
            Err(SettingsError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_settings_empty_file() {
        let temp_file = settings_file("  \n");
        let result = load_settings_from_path(temp_file.path());
        assert!(matches!(result, Err(SettingsError::EmptyFile)));
    }

    #[test]
    fn test_load_settings_invalid_json() {
        let temp_file = settings_file(r#"{"length": "long"}"#);
        let result = load_settings_from_path(temp_file.path());
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_load_settings_success() {
        let temp_file = settings_file(
            r#"{
                "length": 16,
                "includeSpecialNoBrackets": false,
                "includeSpecialBrackets": true,
                "includeUppercase": true,
                "includeNumbers": false
            }"#,
        );

        let settings = load_settings_from_path(temp_file.path()).expect("Should load settings");
        assert_eq!(
            settings,
            PasswordPolicy {
                length: 16,
                include_special_no_brackets: false,
                include_special_brackets: true,
                include_uppercase: true,
                include_numbers: false,
            }
        );
    }

    #[test]
    fn test_save_then_load_settings() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let settings = PasswordPolicy { length: 20, ..default_settings() };

        save_settings_to_path(temp_file.path(), &settings).expect("Should save settings");
        let loaded = load_settings_from_path(temp_file.path()).expect("Should load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    #[serial]
    fn test_load_settings_from_env() {
        let temp_file = settings_file(
            r#"{"length": 10, "includeSpecialNoBrackets": true, "includeSpecialBrackets": true,
                "includeUppercase": false, "includeNumbers": true}"#,
        );
        set_env(SETTINGS_PATH_ENV, temp_file.path().to_str().unwrap());

        let settings = load_settings().expect("Should load settings");
        assert_eq!(settings.length, 10);
        assert!(settings.include_special_brackets);

        remove_env(SETTINGS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_settings_or_default_falls_back() {
        set_env(SETTINGS_PATH_ENV, "/nonexistent/path/settings.json");

        assert_eq!(load_settings_or_default(), default_settings());

        remove_env(SETTINGS_PATH_ENV);
    }

    #[test]
    fn test_default_settings() {
        let settings = default_settings();
        assert_eq!(settings.length, 8);
        assert!(settings.include_special_no_brackets);
        assert!(!settings.include_special_brackets);
        assert!(settings.include_uppercase);
        assert!(settings.include_numbers);
    }
}
