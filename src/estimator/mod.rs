//! Household energy estimation
//!
//! Turns a household profile and appliance inventory into a daily
//! consumption figure:
//! - Base load: derived from the room count of the dwelling
//! - Appliances: unit load times count, one breakdown entry per appliance present
//! - Total: sum of every breakdown entry

mod breakdown;

pub use breakdown::{Contributor, EnergyBreakdown, BASE_CONSUMPTION};

use crate::core::{ApplianceEntry, ApplianceKind, Bhk, Error, EstimatorConfig, HouseholdProfile, Result};

/// Energy estimator holding the load constants
pub struct EnergyEstimator {
    config: EstimatorConfig,
}

impl EnergyEstimator {
    /// Create a new estimator with the given constants
    pub fn new(config: &EstimatorConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Rooms counted for a BHK size (1BHK -> 2 rooms with the default offset)
    pub fn rooms(&self, bhk: Bhk) -> u32 {
        u32::from(bhk.value()) + self.config.room_offset
    }

    /// Base load in kWh/day for a dwelling size
    pub fn compute_base_load(&self, bhk: Bhk) -> f64 {
        let rooms = self.rooms(bhk) as f64;
        self.config
            .room_coefficients
            .iter()
            .map(|coefficient| rooms * coefficient)
            .sum()
    }

    /// Check an appliance count against `1..=max_count`
    pub fn validate_count(&self, kind: ApplianceKind, count: u32) -> Result<u32> {
        let max = self.config.appliance(kind).max_count;
        if (1..=max).contains(&count) {
            Ok(count)
        } else {
            Err(Error::InvalidInput(format!(
                "{} count must be between 1 and {} (got {})",
                kind, max, count
            )))
        }
    }

    /// Energy drawn by `count` units of an appliance, in kWh/day
    pub fn appliance_load(&self, kind: ApplianceKind, count: u32) -> Result<f64> {
        let count = self.validate_count(kind, count)?;
        Ok(self.config.appliance(kind).unit_load_kwh * count as f64)
    }

    /// Return a copy of `breakdown` reflecting one appliance toggle.
    ///
    /// A present appliance gets `unit_load * count`; an absent one loses its
    /// key. The count is only checked when the appliance is present. On
    /// error the input breakdown is untouched.
    pub fn update_appliance(
        &self,
        breakdown: &EnergyBreakdown,
        kind: ApplianceKind,
        present: bool,
        count: u32,
    ) -> Result<EnergyBreakdown> {
        let mut updated = breakdown.clone();
        if present {
            let load = self.appliance_load(kind, count)?;
            updated.set_appliance(kind, load);
        } else {
            updated.remove_appliance(kind);
        }
        Ok(updated)
    }

    /// Base load plus every appliance entry of `breakdown`
    pub fn compute_total(&self, base: f64, breakdown: &EnergyBreakdown) -> f64 {
        base + breakdown.appliance_total()
    }

    /// Full breakdown for a profile and inventory, base load included.
    ///
    /// Every present entry is validated before anything is built, so one bad
    /// count rejects the whole inventory.
    pub fn estimate(
        &self,
        profile: &HouseholdProfile,
        appliances: &[ApplianceEntry],
    ) -> Result<EnergyBreakdown> {
        for entry in appliances.iter().filter(|entry| entry.present) {
            self.validate_count(entry.kind, entry.count)?;
        }

        let base = self.compute_base_load(profile.bhk);
        let mut breakdown = EnergyBreakdown::with_base(base);
        for entry in appliances {
            breakdown = self.update_appliance(&breakdown, entry.kind, entry.present, entry.count)?;
        }

        log::debug!(
            "Estimated {} ({}): base {:.2} kWh, total {:.2} kWh",
            profile.bhk,
            profile.property_type,
            base,
            breakdown.total()
        );
        Ok(breakdown)
    }
}

impl Default for EnergyEstimator {
    fn default() -> Self {
        Self::new(&EstimatorConfig::default())
    }
}
