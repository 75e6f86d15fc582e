//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{ApplianceSpec, Config, EstimatorConfig, GeneralConfig, PricingConfig, RateConfig};
pub use error::{Error, Result};
pub use types::{
    ApplianceEntry, ApplianceKind, Bhk, City, CostEstimate, HouseholdProfile, PropertyType,
    UserInfo, MAX_AGE, MIN_AGE,
};
