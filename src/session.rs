//! Calculator and per-session state
//!
//! `Calculator::recompute` is the single derivation from inputs to
//! breakdown, total and costs. `EstimatorSession` owns one user's inputs and
//! re-runs it after every input event, committing only validated changes.

use crate::core::{
    ApplianceEntry, ApplianceKind, Bhk, City, Config, CostEstimate, HouseholdProfile,
    PropertyType, Result, UserInfo,
};
use crate::estimator::{EnergyBreakdown, EnergyEstimator};
use crate::pricing::PricingEngine;
use serde::Serialize;

/// Derived output of one recompute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSnapshot {
    pub breakdown: EnergyBreakdown,
    /// kWh/day, always equal to the breakdown's sum
    pub total_kwh: f64,
    pub rate: f64,
    pub costs: CostEstimate,
}

/// Estimator and pricing engine bundled behind one recompute entry point
pub struct Calculator {
    estimator: EnergyEstimator,
    pricing: PricingEngine,
}

impl Calculator {
    pub fn new(config: &Config) -> Self {
        Self {
            estimator: EnergyEstimator::new(&config.estimator),
            pricing: PricingEngine::new(&config.pricing),
        }
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Recompute breakdown, total and costs from scratch.
    ///
    /// The tariff and every appliance count are validated first; any
    /// invalid input fails the whole call with no partial result.
    pub fn recompute(
        &self,
        profile: &HouseholdProfile,
        appliances: &[ApplianceEntry],
        rate: f64,
    ) -> Result<EstimateSnapshot> {
        let rate = self.pricing.validate_tariff(rate)?;
        let breakdown = self.estimator.estimate(profile, appliances)?;
        let total_kwh = breakdown.total();
        let costs = self.pricing.compute_costs(total_kwh, rate)?;

        Ok(EstimateSnapshot {
            breakdown,
            total_kwh,
            rate,
            costs,
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// A single user interaction with the form
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SetName(String),
    SetAge(u8),
    SetCity(City),
    SetArea(String),
    SetPropertyType(PropertyType),
    SetBhk(Bhk),
    SetAppliancePresent { kind: ApplianceKind, present: bool },
    SetApplianceCount { kind: ApplianceKind, count: u32 },
    SetRate(f64),
}

/// Everything the user has entered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionInputs {
    pub user: UserInfo,
    pub profile: HouseholdProfile,
    pub appliances: Vec<ApplianceEntry>,
    pub rate: f64,
}

impl SessionInputs {
    /// Form defaults: 1 BHK flat, nothing checked, slider at the default rate
    pub fn new(default_rate: f64) -> Self {
        Self {
            user: UserInfo::default(),
            profile: HouseholdProfile::default(),
            appliances: ApplianceKind::ALL
                .into_iter()
                .map(ApplianceEntry::absent)
                .collect(),
            rate: default_rate,
        }
    }

    pub fn appliance(&self, kind: ApplianceKind) -> Option<&ApplianceEntry> {
        self.appliances.iter().find(|entry| entry.kind == kind)
    }

    fn appliance_mut(&mut self, kind: ApplianceKind) -> &mut ApplianceEntry {
        if let Some(index) = self.appliances.iter().position(|entry| entry.kind == kind) {
            return &mut self.appliances[index];
        }
        self.appliances.push(ApplianceEntry::absent(kind));
        let last = self.appliances.len() - 1;
        &mut self.appliances[last]
    }

    /// Stage an event on these inputs; validation happens on recompute
    fn stage(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::SetName(name) => self.user.name = name,
            InputEvent::SetAge(age) => self.user.age = UserInfo::validate_age(age)?,
            InputEvent::SetCity(city) => self.user.city = city,
            InputEvent::SetArea(area) => self.user.area = area,
            InputEvent::SetPropertyType(property_type) => self.profile.property_type = property_type,
            InputEvent::SetBhk(bhk) => self.profile.bhk = bhk,
            InputEvent::SetAppliancePresent { kind, present } => {
                self.appliance_mut(kind).present = present;
            }
            InputEvent::SetApplianceCount { kind, count } => {
                self.appliance_mut(kind).count = count;
            }
            InputEvent::SetRate(rate) => self.rate = rate,
        }
        Ok(())
    }
}

/// State owned by one user session. Sessions never share state.
pub struct EstimatorSession {
    calculator: Calculator,
    inputs: SessionInputs,
    snapshot: EstimateSnapshot,
}

impl EstimatorSession {
    /// Start a session with form defaults
    pub fn new(config: &Config) -> Result<Self> {
        let calculator = Calculator::new(config);
        let inputs = SessionInputs::new(calculator.pricing().default_rate());
        Self::with_inputs(calculator, inputs)
    }

    /// Start a session from pre-filled inputs, rejecting invalid ones
    pub fn with_inputs(calculator: Calculator, inputs: SessionInputs) -> Result<Self> {
        let snapshot = calculator.recompute(&inputs.profile, &inputs.appliances, inputs.rate)?;
        Ok(Self {
            calculator,
            inputs,
            snapshot,
        })
    }

    /// Apply one input event and return the refreshed snapshot.
    ///
    /// On error nothing changes: inputs and snapshot stay as they were.
    pub fn apply(&mut self, event: InputEvent) -> Result<&EstimateSnapshot> {
        let mut staged = self.inputs.clone();
        let outcome = staged.stage(event.clone()).and_then(|_| {
            self.calculator
                .recompute(&staged.profile, &staged.appliances, staged.rate)
        });

        match outcome {
            Ok(snapshot) => {
                log::debug!("Applied {:?}: total {:.2} kWh/day", event, snapshot.total_kwh);
                self.inputs = staged;
                self.snapshot = snapshot;
                Ok(&self.snapshot)
            }
            Err(e) => {
                log::warn!("Rejected {:?}: {}", event, e);
                Err(e)
            }
        }
    }

    /// Apply events in order, stopping at the first rejection
    pub fn apply_all<I>(&mut self, events: I) -> Result<&EstimateSnapshot>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event)?;
        }
        Ok(&self.snapshot)
    }

    pub fn inputs(&self) -> &SessionInputs {
        &self.inputs
    }

    pub fn snapshot(&self) -> &EstimateSnapshot {
        &self.snapshot
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
