//! Configuration module for `cgpacalc`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use super::export::ExportFormat;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Export configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory export files are written to
    #[serde(default)]
    pub out_dir: String,
    /// Format used when the export action does not name one
    #[serde(default)]
    pub default_format: String,
    /// Browser binary used for PDF/PNG conversion (auto-detected when empty)
    #[serde(default)]
    pub pdf_converter: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override export output directory
    pub out_dir: Option<String>,
    /// Override default export format
    pub default_format: Option<String>,
    /// Override PDF/PNG converter binary
    pub pdf_converter: Option<String>,
}

impl Config {
    /// Get the `$CGPA_CALC` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/cgpacalc`
    /// - macOS: `~/Library/Application Support/cgpacalc`
    /// - Windows: `%APPDATA%\cgpacalc`
    #[must_use]
    pub fn get_cgpacalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cgpacalc")
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_cgpacalc_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CGPA_CALC` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CGPA_CALC") {
            let cgpacalc_dir = Self::get_cgpacalc_dir();
            value.replace("$CGPA_CALC", cgpacalc_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty in the current config and non-empty in
    /// defaults are updated, so older config files gain newly added keys.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.export.out_dir.is_empty() && !defaults.export.out_dir.is_empty() {
            self.export.out_dir.clone_from(&defaults.export.out_dir);
            changed = true;
        }
        if self.export.default_format.is_empty() && !defaults.export.default_format.is_empty() {
            self.export
                .default_format
                .clone_from(&defaults.export.default_format);
            changed = true;
        }
        if self.export.pdf_converter.is_empty() && !defaults.export.pdf_converter.is_empty() {
            self.export
                .pdf_converter
                .clone_from(&defaults.export.pdf_converter);
            changed = true;
        }

        changed
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.export.out_dir = Self::expand_variables(&config.export.out_dir);
        config.export.pdf_converter = Self::expand_variables(&config.export.pdf_converter);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Apply CLI overrides to this configuration
    ///
    /// # Arguments
    /// * `overrides` - A `ConfigOverrides` struct with optional override values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.export.out_dir = Self::expand_variables(out_dir);
        }
        if let Some(default_format) = &overrides.default_format {
            self.export.default_format.clone_from(default_format);
        }
        if let Some(pdf_converter) = &overrides.pdf_converter {
            self.export.pdf_converter = Self::expand_variables(pdf_converter);
        }
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "out_dir" => Some(self.export.out_dir.clone()),
            "default_format" => Some(self.export.default_format.clone()),
            "pdf_converter" => Some(self.export.pdf_converter.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "out_dir" => self.export.out_dir = value.to_string(),
            "default_format" => {
                // Only accept formats the exporter understands
                ExportFormat::from_str(value)?;
                self.export.default_format = value.to_string();
            }
            "pdf_converter" => self.export.pdf_converter = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "out_dir" => self.export.out_dir.clone_from(&defaults.export.out_dir),
            "default_format" => self
                .export
                .default_format
                .clone_from(&defaults.export.default_format),
            "pdf_converter" => self
                .export
                .pdf_converter
                .clone_from(&defaults.export.pdf_converter),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[export]")?;
        writeln!(f, "  out_dir = \"{}\"", self.export.out_dir)?;
        writeln!(f, "  default_format = \"{}\"", self.export.default_format)?;
        writeln!(f, "  pdf_converter = \"{}\"", self.export.pdf_converter)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_and_carry_export_section() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(!config.export.out_dir.is_empty());
        assert!(!config.export.default_format.is_empty());
    }

    #[test]
    fn set_rejects_unknown_format() {
        let mut config = Config::from_defaults();
        assert!(config.set("default_format", "docx").is_err());
        assert!(config.set("default_format", "pdf").is_ok());
        assert_eq!(config.export.default_format, "pdf");
    }

    #[test]
    fn merge_defaults_fills_only_empty_fields() {
        let mut config = Config::default();
        config.logging.level = "info".to_string();
        let defaults = Config::from_defaults();

        assert!(config.merge_defaults(&defaults));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export.out_dir, defaults.export.out_dir);
    }
}
