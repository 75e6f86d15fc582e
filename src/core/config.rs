//! Configuration management

use crate::core::{ApplianceKind, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("energy-estimator").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults without writing anything.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Check that every constant is usable by the estimator and pricing engine
    pub fn validate(&self) -> Result<()> {
        self.estimator.validate()?;
        self.pricing.validate()
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Constants behind the energy formulas.
///
/// The defaults reproduce the calculator's published figures; they carry no
/// documented derivation, so they stay tunable instead of being hard-coded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Rooms counted per dwelling beyond the BHK number (1BHK -> 2 rooms)
    #[serde(default = "default_room_offset")]
    pub room_offset: u32,
    /// kWh/day per room; each coefficient is applied to the room count and summed
    #[serde(default = "default_room_coefficients")]
    pub room_coefficients: Vec<f64>,
    #[serde(default = "default_air_conditioner")]
    pub air_conditioner: ApplianceSpec,
    #[serde(default = "default_refrigerator")]
    pub refrigerator: ApplianceSpec,
    #[serde(default = "default_washing_machine")]
    pub washing_machine: ApplianceSpec,
}

fn default_room_offset() -> u32 { 1 }
fn default_room_coefficients() -> Vec<f64> { vec![0.4, 0.8] }
fn default_air_conditioner() -> ApplianceSpec { ApplianceSpec { unit_load_kwh: 3.0, max_count: 10 } }
fn default_refrigerator() -> ApplianceSpec { ApplianceSpec { unit_load_kwh: 4.0, max_count: 5 } }
fn default_washing_machine() -> ApplianceSpec { ApplianceSpec { unit_load_kwh: 2.0, max_count: 3 } }

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            room_offset: default_room_offset(),
            room_coefficients: default_room_coefficients(),
            air_conditioner: default_air_conditioner(),
            refrigerator: default_refrigerator(),
            washing_machine: default_washing_machine(),
        }
    }
}

impl EstimatorConfig {
    /// Unit load and count limit for an appliance
    pub fn appliance(&self, kind: ApplianceKind) -> &ApplianceSpec {
        match kind {
            ApplianceKind::AirConditioner => &self.air_conditioner,
            ApplianceKind::Refrigerator => &self.refrigerator,
            ApplianceKind::WashingMachine => &self.washing_machine,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self
            .room_coefficients
            .iter()
            .any(|c| !c.is_finite() || *c < 0.0)
        {
            return Err(Error::Config(
                "room_coefficients must be finite and non-negative".to_string(),
            ));
        }

        for kind in ApplianceKind::ALL {
            let appliance = self.appliance(kind);
            if !appliance.unit_load_kwh.is_finite() || appliance.unit_load_kwh <= 0.0 {
                return Err(Error::Config(format!(
                    "{}: unit_load_kwh must be positive",
                    kind
                )));
            }
            if appliance.max_count == 0 {
                return Err(Error::Config(format!("{}: max_count must be at least 1", kind)));
            }
        }

        Ok(())
    }
}

/// Per-appliance load constant and form limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSpec {
    /// kWh/day drawn by a single unit
    pub unit_load_kwh: f64,
    /// Largest accepted count (the minimum is always 1)
    pub max_count: u32,
}

/// Pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code (INR, EUR, USD, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,
    /// Tariff slider settings
    #[serde(default)]
    pub rate: RateConfig,
}

fn default_currency() -> String { "INR".to_string() }
fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign
fn default_days_per_month() -> f64 { 30.0 }
fn default_days_per_year() -> f64 { 365.0 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            days_per_month: default_days_per_month(),
            days_per_year: default_days_per_year(),
            rate: RateConfig::default(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<()> {
        self.rate.validate()?;
        if self.days_per_month <= 0.0 || self.days_per_year <= 0.0 {
            return Err(Error::Config("days_per_month and days_per_year must be positive".to_string()));
        }
        Ok(())
    }
}

/// Tariff slider bounds, per kWh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    #[serde(default = "default_rate")]
    pub default_per_kwh: f64,
    #[serde(default = "default_min_rate")]
    pub min_per_kwh: f64,
    #[serde(default = "default_max_rate")]
    pub max_per_kwh: f64,
    #[serde(default = "default_rate_step")]
    pub step: f64,
}

fn default_rate() -> f64 { 5.5 }
fn default_min_rate() -> f64 { 3.0 }
fn default_max_rate() -> f64 { 10.0 }
fn default_rate_step() -> f64 { 0.5 }

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            default_per_kwh: default_rate(),
            min_per_kwh: default_min_rate(),
            max_per_kwh: default_max_rate(),
            step: default_rate_step(),
        }
    }
}

/// Tolerance when checking that a rate sits on the step grid
const STEP_EPSILON: f64 = 1e-9;

impl RateConfig {
    /// Whether `rate` is a whole number of steps above the minimum
    pub fn is_on_step(&self, rate: f64) -> bool {
        let steps = (rate - self.min_per_kwh) / self.step;
        (steps - steps.round()).abs() <= STEP_EPSILON
    }

    pub fn validate(&self) -> Result<()> {
        let values = [self.default_per_kwh, self.min_per_kwh, self.max_per_kwh, self.step];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::Config("rate settings must be finite".to_string()));
        }
        if self.min_per_kwh < 0.0 || self.min_per_kwh > self.max_per_kwh {
            return Err(Error::Config(format!(
                "invalid rate range {}..={}",
                self.min_per_kwh, self.max_per_kwh
            )));
        }
        if self.step <= 0.0 {
            return Err(Error::Config("rate step must be positive".to_string()));
        }
        if !(self.min_per_kwh..=self.max_per_kwh).contains(&self.default_per_kwh) {
            return Err(Error::Config(format!(
                "default rate {} outside {}..={}",
                self.default_per_kwh, self.min_per_kwh, self.max_per_kwh
            )));
        }
        if !self.is_on_step(self.default_per_kwh) {
            return Err(Error::Config(format!(
                "default rate {} is not a multiple of {} above {}",
                self.default_per_kwh, self.step, self.min_per_kwh
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.estimator.room_coefficients, vec![0.4, 0.8]);
        assert_eq!(config.estimator.appliance(ApplianceKind::AirConditioner).max_count, 10);
        assert_eq!(config.estimator.appliance(ApplianceKind::Refrigerator).unit_load_kwh, 4.0);
        assert_eq!(config.pricing.rate.default_per_kwh, 5.5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [general]
            language = "fr"

            [pricing.rate]
            max_per_kwh = 12.0
            "#,
        )
        .unwrap();

        assert_eq!(config.general.language, "fr");
        assert_eq!(config.pricing.rate.max_per_kwh, 12.0);
        assert_eq!(config.pricing.rate.min_per_kwh, 3.0);
        assert_eq!(config.estimator, EstimatorConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.estimator.washing_machine.unit_load_kwh = 2.5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.estimator.refrigerator.max_count = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.pricing.rate.min_per_kwh = 11.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.estimator.room_coefficients = vec![0.4, -0.8];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_rate_must_sit_on_step() {
        let mut config = Config::default();
        config.pricing.rate.default_per_kwh = 5.25;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.pricing.rate.default_per_kwh = 9.5;
        assert!(config.validate().is_ok());
        assert!(config.pricing.rate.is_on_step(3.0));
        assert!(!config.pricing.rate.is_on_step(3.25));
    }

    #[test]
    fn test_unparseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pricing\ncurrency = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
