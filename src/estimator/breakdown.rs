//! Per-contributor energy breakdown

use crate::core::ApplianceKind;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Contributor name for the fixed per-property load
pub const BASE_CONSUMPTION: &str = "Base Consumption";

/// Something that contributes to daily consumption.
///
/// Ordering puts the base load first and appliances in declaration order,
/// which is the order charts and summaries list them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Contributor {
    Base,
    Appliance(ApplianceKind),
}

impl Contributor {
    pub fn label(self) -> &'static str {
        match self {
            Contributor::Base => BASE_CONSUMPTION,
            Contributor::Appliance(kind) => kind.label(),
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            Contributor::Base => "breakdown.base",
            Contributor::Appliance(kind) => kind.i18n_key(),
        }
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from contributor to kWh/day.
///
/// A contributor only has an entry while it contributes: removing an
/// appliance drops its key rather than storing zero. The total is always
/// derived from the entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyBreakdown {
    entries: BTreeMap<Contributor, f64>,
}

impl EnergyBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breakdown holding only the base load
    pub fn with_base(base_kwh: f64) -> Self {
        let mut breakdown = Self::new();
        breakdown.entries.insert(Contributor::Base, base_kwh);
        breakdown
    }

    pub fn get(&self, contributor: Contributor) -> Option<f64> {
        self.entries.get(&contributor).copied()
    }

    pub fn appliance(&self, kind: ApplianceKind) -> Option<f64> {
        self.get(Contributor::Appliance(kind))
    }

    pub fn base(&self) -> Option<f64> {
        self.get(Contributor::Base)
    }

    pub fn contains(&self, contributor: Contributor) -> bool {
        self.entries.contains_key(&contributor)
    }

    pub(crate) fn set_appliance(&mut self, kind: ApplianceKind, kwh: f64) {
        self.entries.insert(Contributor::Appliance(kind), kwh);
    }

    pub(crate) fn remove_appliance(&mut self, kind: ApplianceKind) -> Option<f64> {
        self.entries.remove(&Contributor::Appliance(kind))
    }

    /// Sum of the appliance entries, excluding the base load
    pub fn appliance_total(&self) -> f64 {
        self.entries
            .iter()
            .filter(|(contributor, _)| !matches!(contributor, Contributor::Base))
            .map(|(_, kwh)| kwh)
            .sum()
    }

    /// Sum of every entry
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Entries in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Contributor, f64)> + '_ {
        self.entries.iter().map(|(contributor, kwh)| (*contributor, *kwh))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as `{ "Base Consumption": 3.6, "Air Conditioner": 6.0, ... }`
impl Serialize for EnergyBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (contributor, kwh) in &self.entries {
            map.serialize_entry(contributor.label(), kwh)?;
        }
        map.end()
    }
}
