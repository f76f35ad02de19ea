//! User settings for the expense ledger
//!
//! Holds the closed set of expense categories offered by the entry form and
//! how amounts are displayed.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings for the expense ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Categories offered by the selector, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Currency symbol used when `show_currency` is on
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Prefix displayed amounts with the currency symbol
    #[serde(default)]
    pub show_currency: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    vec![
        "Food".to_string(),
        "Entertainment".to_string(),
        "Internet Service".to_string(),
    ]
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
            currency_symbol: default_currency(),
            show_currency: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Whether a reason is one of the configured categories (exact match)
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Check a reason against the configured categories
    pub fn require_category(&self, name: &str) -> Result<(), LedgerError> {
        if self.has_category(name) {
            Ok(())
        } else {
            Err(LedgerError::Validation(format!(
                "Unknown category '{}'. Choose one of: {}",
                name,
                self.categories.join(", ")
            )))
        }
    }

    /// Format an amount for display
    pub fn format_amount(&self, amount: f64) -> String {
        if self.show_currency {
            format!("{}{:.2}", self.currency_symbol, amount)
        } else {
            format!("{:.2}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.categories,
            vec!["Food", "Entertainment", "Internet Service"]
        );
        assert!(!settings.show_currency);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.categories.push("Rent".to_string());
        settings.show_currency = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.has_category("Rent"));
        assert!(loaded.show_currency);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("fresh"));

        let settings = Settings::load_or_create(&paths).unwrap();

        let contents = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert!(contents.contains("Internet Service"));
        assert_eq!(settings.categories.len(), 3);
    }

    #[test]
    fn test_edited_categories_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        Settings::load_or_create(&paths).unwrap();

        let json = r#"{"categories": ["Rent", "Food"]}"#;
        std::fs::write(paths.settings_file(), json).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.categories, vec!["Rent", "Food"]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"show_currency": true}"#).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.categories.len(), 3);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_require_category() {
        let settings = Settings::default();
        assert!(settings.require_category("Food").is_ok());
        let err = settings.require_category("food").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_format_amount() {
        let mut settings = Settings::default();
        assert_eq!(settings.format_amount(15.5), "15.50");
        settings.show_currency = true;
        assert_eq!(settings.format_amount(15.5), "$15.50");
    }
}
