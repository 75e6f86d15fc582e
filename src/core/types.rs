//! Common types used across the application

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dwelling size as a bedroom-hall-kitchen count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Bhk {
    One,
    Two,
    Three,
}

impl Bhk {
    /// Numeric BHK value (1, 2 or 3)
    pub fn value(self) -> u8 {
        match self {
            Bhk::One => 1,
            Bhk::Two => 2,
            Bhk::Three => 3,
        }
    }
}

impl TryFrom<u8> for Bhk {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Bhk::One),
            2 => Ok(Bhk::Two),
            3 => Ok(Bhk::Three),
            other => Err(Error::InvalidInput(format!(
                "BHK must be 1, 2 or 3 (got {})",
                other
            ))),
        }
    }
}

impl From<Bhk> for u8 {
    fn from(bhk: Bhk) -> u8 {
        bhk.value()
    }
}

impl FromStr for Bhk {
    type Err = Error;

    /// Accepts "2", "2bhk" and "2 BHK"
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_alphabetic())
            .trim();
        let value: u8 = digits
            .parse()
            .map_err(|_| Error::InvalidInput(format!("Unknown BHK size: {}", s)))?;
        Bhk::try_from(value)
    }
}

impl fmt::Display for Bhk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BHK", self.value())
    }
}

/// Kind of dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    Flat,
    Tenement,
}

impl PropertyType {
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Flat => "Flat",
            PropertyType::Tenement => "Tenement",
        }
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(PropertyType::Flat),
            "tenement" => Ok(PropertyType::Tenement),
            _ => Err(Error::InvalidInput(format!("Unknown property type: {}", s))),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cities offered by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    #[default]
    Ahmedabad,
    Mumbai,
    Delhi,
    Bangalore,
    Chennai,
    Pune,
}

impl City {
    pub const ALL: [City; 6] = [
        City::Ahmedabad,
        City::Mumbai,
        City::Delhi,
        City::Bangalore,
        City::Chennai,
        City::Pune,
    ];

    pub fn label(self) -> &'static str {
        match self {
            City::Ahmedabad => "Ahmedabad",
            City::Mumbai => "Mumbai",
            City::Delhi => "Delhi",
            City::Bangalore => "Bangalore",
            City::Chennai => "Chennai",
            City::Pune => "Pune",
        }
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        City::ALL
            .into_iter()
            .find(|city| city.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown city: {}", s)))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Household attributes that determine the base load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub bhk: Bhk,
    pub property_type: PropertyType,
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            bhk: Bhk::One,
            property_type: PropertyType::Flat,
        }
    }
}

/// Minimum and maximum accepted age on the profile form
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 100;

/// Personal details shown in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub age: u8,
    pub city: City,
    pub area: String,
}

impl UserInfo {
    /// Reject ages outside `MIN_AGE..=MAX_AGE`
    pub fn validate_age(age: u8) -> Result<u8> {
        if (MIN_AGE..=MAX_AGE).contains(&age) {
            Ok(age)
        } else {
            Err(Error::InvalidInput(format!(
                "Age must be between {} and {} (got {})",
                MIN_AGE, MAX_AGE, age
            )))
        }
    }
}

impl Default for UserInfo {
    fn default() -> Self {
        Self {
            name: "Khush".to_string(),
            age: 19,
            city: City::Ahmedabad,
            area: "South Bopal".to_string(),
        }
    }
}

/// Appliances the estimator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceKind {
    AirConditioner,
    Refrigerator,
    WashingMachine,
}

impl ApplianceKind {
    pub const ALL: [ApplianceKind; 3] = [
        ApplianceKind::AirConditioner,
        ApplianceKind::Refrigerator,
        ApplianceKind::WashingMachine,
    ];

    /// Contributor name used as the breakdown key
    pub fn label(self) -> &'static str {
        match self {
            ApplianceKind::AirConditioner => "Air Conditioner",
            ApplianceKind::Refrigerator => "Refrigerator",
            ApplianceKind::WashingMachine => "Washing Machine",
        }
    }

    /// Translation key for the appliance name
    pub fn i18n_key(self) -> &'static str {
        match self {
            ApplianceKind::AirConditioner => "appliance.air_conditioner",
            ApplianceKind::Refrigerator => "appliance.refrigerator",
            ApplianceKind::WashingMachine => "appliance.washing_machine",
        }
    }
}

impl FromStr for ApplianceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "ac" | "air_conditioner" => Ok(ApplianceKind::AirConditioner),
            "fridge" | "refrigerator" => Ok(ApplianceKind::Refrigerator),
            "wm" | "washing_machine" => Ok(ApplianceKind::WashingMachine),
            _ => Err(Error::InvalidInput(format!("Unknown appliance: {}", s))),
        }
    }
}

impl fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the appliance inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceEntry {
    pub kind: ApplianceKind,
    pub present: bool,
    /// Number of units; only meaningful while `present` is set
    pub count: u32,
}

impl ApplianceEntry {
    /// An unchecked appliance with the form's initial count of 1
    pub fn absent(kind: ApplianceKind) -> Self {
        Self {
            kind,
            present: false,
            count: 1,
        }
    }

    pub fn present(kind: ApplianceKind, count: u32) -> Self {
        Self {
            kind,
            present: true,
            count,
        }
    }
}

/// Daily, monthly and yearly cost at a given tariff, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bhk_parsing() {
        assert_eq!("2".parse::<Bhk>().unwrap(), Bhk::Two);
        assert_eq!("3bhk".parse::<Bhk>().unwrap(), Bhk::Three);
        assert_eq!("1 BHK".parse::<Bhk>().unwrap(), Bhk::One);
        assert!("4".parse::<Bhk>().is_err());
        assert!("two".parse::<Bhk>().is_err());
        assert_eq!(Bhk::Two.to_string(), "2 BHK");
    }

    #[test]
    fn test_bhk_serde_as_number() {
        let json = serde_json::to_string(&Bhk::Three).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<Bhk>("0").is_err());
    }

    #[test]
    fn test_city_and_property_parsing() {
        assert_eq!("mumbai".parse::<City>().unwrap(), City::Mumbai);
        assert!("Kolkata".parse::<City>().is_err());
        assert_eq!("Tenement".parse::<PropertyType>().unwrap(), PropertyType::Tenement);
        assert!("villa".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_appliance_aliases() {
        assert_eq!("ac".parse::<ApplianceKind>().unwrap(), ApplianceKind::AirConditioner);
        assert_eq!("washing-machine".parse::<ApplianceKind>().unwrap(), ApplianceKind::WashingMachine);
        assert_eq!("Fridge".parse::<ApplianceKind>().unwrap(), ApplianceKind::Refrigerator);
    }

    #[test]
    fn test_age_bounds() {
        assert!(UserInfo::validate_age(1).is_ok());
        assert!(UserInfo::validate_age(100).is_ok());
        assert!(UserInfo::validate_age(0).unwrap_err().is_invalid_input());
        assert!(UserInfo::validate_age(101).is_err());
    }
}
