//! Pricing engine for electricity cost calculation
//!
//! A single flat tariff per kWh, chosen on a bounded slider, projected over
//! a day, a month and a year.

use crate::core::{CostEstimate, Error, PricingConfig, Result};

/// Pricing engine that calculates electricity costs
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// The slider's starting rate per kWh
    pub fn default_rate(&self) -> f64 {
        self.config.rate.default_per_kwh
    }

    /// Calculate cost for a given energy consumption in kWh at the default rate
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        kwh * self.default_rate()
    }

    /// Reject rates that are negative or not finite
    pub fn validate_rate(&self, rate: f64) -> Result<f64> {
        if rate.is_finite() && rate >= 0.0 {
            Ok(rate)
        } else {
            Err(Error::InvalidInput(format!(
                "Rate must be a non-negative number (got {})",
                rate
            )))
        }
    }

    /// Reject rates the tariff slider cannot produce: outside
    /// `min..=max` or off the step grid
    pub fn validate_tariff(&self, rate: f64) -> Result<f64> {
        let rate = self.validate_rate(rate)?;
        let bounds = &self.config.rate;

        if rate < bounds.min_per_kwh || rate > bounds.max_per_kwh {
            return Err(Error::InvalidInput(format!(
                "Rate must be between {:.1} and {:.1} per kWh (got {})",
                bounds.min_per_kwh, bounds.max_per_kwh, rate
            )));
        }

        if !bounds.is_on_step(rate) {
            return Err(Error::InvalidInput(format!(
                "Rate must be a multiple of {} above {:.1} (got {})",
                bounds.step, bounds.min_per_kwh, rate
            )));
        }

        Ok(rate)
    }

    /// Daily, monthly and yearly cost of `total_kwh` per day at `rate`
    pub fn compute_costs(&self, total_kwh: f64, rate: f64) -> Result<CostEstimate> {
        let rate = self.validate_rate(rate)?;
        if !total_kwh.is_finite() || total_kwh < 0.0 {
            return Err(Error::InvalidInput(format!(
                "Daily energy must be a non-negative number (got {})",
                total_kwh
            )));
        }

        let daily = total_kwh * rate;
        Ok(CostEstimate {
            daily,
            monthly: daily * self.config.days_per_month,
            yearly: daily * self.config.days_per_year,
        })
    }

    /// Get the currency symbol
    pub fn get_currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Format an amount with the currency symbol and two decimals
    pub fn format_cost(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RateConfig;

    fn euro_pricing_config() -> PricingConfig {
        PricingConfig {
            currency: "EUR".to_string(),
            currency_symbol: "\u{20AC}".to_string(),
            rate: RateConfig {
                default_per_kwh: 0.25,
                min_per_kwh: 0.0,
                max_per_kwh: 1.0,
                step: 0.05,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_cost_projection() {
        let engine = PricingEngine::default();
        let costs = engine.compute_costs(13.6, 5.5).unwrap();

        assert!((costs.daily - 74.8).abs() < 0.001);
        assert!((costs.monthly - 2244.0).abs() < 0.001);
        assert!((costs.yearly - 27302.0).abs() < 0.001);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let engine = PricingEngine::default();

        assert!(engine.compute_costs(10.0, -0.5).unwrap_err().is_invalid_input());
        assert!(engine.compute_costs(-1.0, 5.0).is_err());
        assert!(engine.compute_costs(10.0, f64::NAN).is_err());
        assert_eq!(engine.compute_costs(10.0, 0.0).unwrap().yearly, 0.0);
    }

    #[test]
    fn test_tariff_slider_bounds() {
        let engine = PricingEngine::default();

        assert!(engine.validate_tariff(3.0).is_ok());
        assert!(engine.validate_tariff(5.5).is_ok());
        assert!(engine.validate_tariff(10.0).is_ok());
        assert!(engine.validate_tariff(2.5).is_err());
        assert!(engine.validate_tariff(10.5).is_err());
        assert!(engine.validate_tariff(3.25).is_err());
        assert!(engine.validate_tariff(-1.0).is_err());
    }

    #[test]
    fn test_fine_grained_step() {
        let engine = PricingEngine::new(&euro_pricing_config());

        assert!(engine.validate_tariff(0.35).is_ok());
        assert!(engine.validate_tariff(0.37).is_err());
        assert!((engine.calculate_cost(10.0) - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_format_cost() {
        let engine = PricingEngine::default();
        assert_eq!(engine.format_cost(74.8), "\u{20B9}74.80");

        let engine = PricingEngine::new(&euro_pricing_config());
        assert_eq!(engine.get_currency_symbol(), "\u{20AC}");
        assert_eq!(engine.format_cost(2244.0), "\u{20AC}2244.00");
    }
}
