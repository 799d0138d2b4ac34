//! Loading, saving and environment overrides.
//!
//! Sources are applied in order, later ones winning:
//!
//! 1. built-in defaults
//! 2. the configuration file (`--config PATH`, or the per-user default path)
//! 3. `FINCALC_*` environment variables

use std::fmt;
use std::path::{Path, PathBuf};

use fincalc_core::Currency;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::settings::FincalcConfig;

/// Overrides `display.currency`.
pub const ENV_CURRENCY: &str = "FINCALC_CURRENCY";
/// Overrides `debt_payoff.max_months`.
pub const ENV_MAX_PAYOFF_MONTHS: &str = "FINCALC_MAX_PAYOFF_MONTHS";
/// Overrides `clamp_inputs`.
pub const ENV_CLAMP_INPUTS: &str = "FINCALC_CLAMP_INPUTS";

/// Every recognized environment variable.
pub const ENV_VARS: [&str; 3] = [ENV_CURRENCY, ENV_MAX_PAYOFF_MONTHS, ENV_CLAMP_INPUTS];

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (`.toml`).
    Toml,
    /// JSON (`.json`).
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FincalcConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a configuration file. The extension selects the
    /// format.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        log::debug!("loading {format} configuration from {}", path.display());
        match format {
            ConfigFormat::Toml => Self::from_toml_str(&content),
            ConfigFormat::Json => Self::from_json_str(&content),
        }
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories. The
    /// extension selects the format.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = match format {
            ConfigFormat::Toml => self.to_toml_string()?,
            ConfigFormat::Json => self.to_json_string()?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
    }

    /// `<config dir>/fincalc/config.toml`, e.g. `~/.config/fincalc/config.toml`
    /// on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fincalc").join("config.toml"))
    }

    /// Loads the per-user configuration file, or the defaults when there is
    /// none.
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            Some(path) => {
                log::debug!("no configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads `path` if given, else the per-user file, then applies
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::load_default()?,
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies `FINCALC_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup, then revalidates.
    /// Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_CURRENCY) {
            self.display.currency = Currency::from_code(&value).ok_or_else(|| {
                ConfigError::invalid_override(ENV_CURRENCY, &value, "unknown currency code")
            })?;
        }

        if let Some(value) = get(ENV_MAX_PAYOFF_MONTHS) {
            self.debt_payoff.max_months = value.trim().parse().map_err(|_| {
                ConfigError::invalid_override(ENV_MAX_PAYOFF_MONTHS, &value, "expected a month count")
            })?;
        }

        if let Some(value) = get(ENV_CLAMP_INPUTS) {
            self.clamp_inputs = parse_bool(&value).ok_or_else(|| {
                ConfigError::invalid_override(ENV_CLAMP_INPUTS, &value, "expected true or false")
            })?;
        }

        self.validate_or_error()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/config.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("CONFIG.JSON")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("config.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_partial_toml() {
        let config = FincalcConfig::from_toml_str(
            r#"
            [display]
            currency = "GBP"

            [debt_payoff]
            max_months = 600
            "#,
        )
        .unwrap();
        assert_eq!(config.display.currency, Currency::GBP);
        assert_eq!(config.display.placeholder, "-");
        assert_eq!(config.debt_payoff.max_months, 600);
        assert!(config.clamp_inputs);
    }

    #[test]
    fn test_empty_documents_are_defaults() {
        assert_eq!(FincalcConfig::from_toml_str("").unwrap(), FincalcConfig::default());
        assert_eq!(FincalcConfig::from_json_str("{}").unwrap(), FincalcConfig::default());
    }

    #[test]
    fn test_invalid_document_is_rejected() {
        let err = FincalcConfig::from_toml_str("[debt_payoff]\nmax_months = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "debt_payoff.max_months"));

        let err = FincalcConfig::from_toml_str("[display]\ncurrency = \"XXX\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FincalcConfig::default()
            .with_currency(Currency::CAD)
            .with_max_payoff_months(360);
        let text = config.to_toml_string().unwrap();
        assert_eq!(FincalcConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let mut config = FincalcConfig::default();
        config
            .apply_overrides(env(&[
                (ENV_CURRENCY, "eur"),
                (ENV_MAX_PAYOFF_MONTHS, " 120 "),
                (ENV_CLAMP_INPUTS, "off"),
            ]))
            .unwrap();
        assert_eq!(config.display.currency, Currency::EUR);
        assert_eq!(config.debt_payoff.max_months, 120);
        assert!(!config.clamp_inputs);
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut config = FincalcConfig::default();
        config
            .apply_overrides(env(&[(ENV_CURRENCY, ""), (ENV_CLAMP_INPUTS, "  ")]))
            .unwrap();
        assert_eq!(config, FincalcConfig::default());
    }

    #[test]
    fn test_bad_overrides() {
        let mut config = FincalcConfig::default();
        let err = config
            .apply_overrides(env(&[(ENV_MAX_PAYOFF_MONTHS, "forever")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverride { ref key, .. } if key == ENV_MAX_PAYOFF_MONTHS));

        let err = config
            .apply_overrides(env(&[(ENV_MAX_PAYOFF_MONTHS, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));

        let err = FincalcConfig::default()
            .apply_overrides(env(&[(ENV_CURRENCY, "doubloons")]))
            .unwrap_err();
        assert!(err.to_string().contains("FINCALC_CURRENCY"));
    }
}
