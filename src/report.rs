//! Presentation-ready views of an estimate
//!
//! Chart slices, per-appliance readouts, the profile summary and the
//! efficiency tips. Numbers are rounded here and nowhere else.

use crate::core::{ApplianceKind, HouseholdProfile, PropertyType, UserInfo};
use crate::estimator::Contributor;
use crate::i18n::I18n;
use crate::pricing::PricingEngine;
use crate::session::EstimateSnapshot;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Timestamp format for the report footer
pub const GENERATED_ON_FORMAT: &str = "%B %d, %Y at %I:%M %p";

const SMART_TIP_KEYS: [&str; 4] = ["tips.smart.1", "tips.smart.2", "tips.smart.3", "tips.smart.4"];
const ECO_TIP_KEYS: [&str; 4] = ["tips.eco.1", "tips.eco.2", "tips.eco.3", "tips.eco.4"];

/// One pie-chart slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    /// Contributor name as used in the breakdown
    pub contributor: String,
    /// Translated display label
    pub label: String,
    pub kwh: f64,
    pub share_percent: f64,
}

/// Slices in canonical order. Shares are zero when the total is zero.
pub fn chart_slices(snapshot: &EstimateSnapshot, i18n: &I18n) -> Vec<ChartSlice> {
    let total = snapshot.breakdown.total();
    snapshot
        .breakdown
        .iter()
        .map(|(contributor, kwh)| ChartSlice {
            contributor: contributor.label().to_string(),
            label: i18n.get(contributor.i18n_key()),
            kwh,
            share_percent: if total > 0.0 { kwh / total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// "Energy: 6.0 kWh" line shown under an appliance toggle; 0.0 when absent
pub fn appliance_readout(snapshot: &EstimateSnapshot, kind: ApplianceKind, i18n: &I18n) -> String {
    let kwh = snapshot
        .breakdown
        .get(Contributor::Appliance(kind))
        .unwrap_or(0.0);
    format!(
        "{}: {:.1} {}",
        i18n.get("appliance.energy"),
        kwh,
        i18n.get("unit.kilowatt_hours")
    )
}

/// Live meter value, e.g. "13.60 kWh"
pub fn meter_reading(snapshot: &EstimateSnapshot, i18n: &I18n) -> String {
    format!("{:.2} {}", snapshot.total_kwh, i18n.get("unit.kilowatt_hours"))
}

/// Efficiency tips grouped under their headings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipGroup {
    pub title: String,
    pub tips: Vec<String>,
}

pub fn efficiency_tips(i18n: &I18n) -> Vec<TipGroup> {
    [("tips.smart.title", SMART_TIP_KEYS), ("tips.eco.title", ECO_TIP_KEYS)]
        .into_iter()
        .map(|(title, keys)| TipGroup {
            title: i18n.get(title),
            tips: keys.iter().map(|key| i18n.get(key)).collect(),
        })
        .collect()
}

/// Profile and totals combined into the closing summary card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergySummary {
    pub name: String,
    pub property: String,
    pub location: String,
    pub total_kwh_per_day: f64,
    pub daily_cost: String,
    pub monthly_bill: String,
    pub yearly_cost: String,
    pub generated_on: String,
}

impl EnergySummary {
    pub fn new(
        user: &UserInfo,
        profile: &HouseholdProfile,
        snapshot: &EstimateSnapshot,
        pricing: &PricingEngine,
        i18n: &I18n,
        generated_at: DateTime<Local>,
    ) -> Self {
        let property_key = match profile.property_type {
            PropertyType::Flat => "property.flat",
            PropertyType::Tenement => "property.tenement",
        };

        Self {
            name: user.name.clone(),
            property: format!("{} - {}", i18n.get(property_key), profile.bhk),
            location: format!("{}, {}", user.area, user.city),
            total_kwh_per_day: snapshot.total_kwh,
            daily_cost: pricing.format_cost(snapshot.costs.daily),
            monthly_bill: pricing.format_cost(snapshot.costs.monthly),
            yearly_cost: pricing.format_cost(snapshot.costs.yearly),
            generated_on: generated_at.format(GENERATED_ON_FORMAT).to_string(),
        }
    }

    /// Multi-line text rendering of the summary card
    pub fn render(&self, i18n: &I18n) -> String {
        let lines = [
            format!("{} {}", i18n.get("summary.title"), self.name),
            format!("{}: {}", i18n.get("summary.property"), self.property),
            format!("{}: {}", i18n.get("summary.location"), self.location),
            format!(
                "{}: {:.2} {} {}",
                i18n.get("summary.total"),
                self.total_kwh_per_day,
                i18n.get("unit.kilowatt_hours"),
                i18n.get("summary.per_day")
            ),
            format!("{}: {}", i18n.get("cost.daily"), self.daily_cost),
            format!("{}: {}", i18n.get("summary.monthly_bill"), self.monthly_bill),
            format!("{}: {}", i18n.get("cost.yearly"), self.yearly_cost),
            format!("{} {}", i18n.get("summary.generated_on"), self.generated_on),
        ];
        lines.join("\n")
    }
}

/// Everything a front end needs to draw the results section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub snapshot: EstimateSnapshot,
    pub chart: Vec<ChartSlice>,
    pub summary: EnergySummary,
}

impl EstimateReport {
    pub fn new(
        user: &UserInfo,
        profile: &HouseholdProfile,
        snapshot: &EstimateSnapshot,
        pricing: &PricingEngine,
        i18n: &I18n,
    ) -> Self {
        Self {
            snapshot: snapshot.clone(),
            chart: chart_slices(snapshot, i18n),
            summary: EnergySummary::new(user, profile, snapshot, pricing, i18n, Local::now()),
        }
    }

    /// Full text report: meter, breakdown with shares, costs and summary
    pub fn render(&self, pricing: &PricingEngine, i18n: &I18n) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", i18n.get("app.title")));
        out.push_str(&format!(
            "{}: {}\n\n",
            i18n.get("meter.current"),
            meter_reading(&self.snapshot, i18n)
        ));

        out.push_str(&format!("{}\n", i18n.get("breakdown.title")));
        for slice in &self.chart {
            out.push_str(&format!(
                "  {:<28} {:>7.2} {}  {:>5.1}%\n",
                slice.label,
                slice.kwh,
                i18n.get("unit.kilowatt_hours"),
                slice.share_percent
            ));
        }

        out.push_str(&format!(
            "\n{} ({}: {})\n",
            i18n.get("cost.title"),
            i18n.get("cost.rate"),
            pricing.format_cost(self.snapshot.rate)
        ));
        let costs = &self.snapshot.costs;
        for (key, amount) in [
            ("cost.daily", costs.daily),
            ("cost.monthly", costs.monthly),
            ("cost.yearly", costs.yearly),
        ] {
            out.push_str(&format!("  {:<16} {}\n", i18n.get(key), pricing.format_cost(amount)));
        }

        out.push('\n');
        out.push_str(&self.summary.render(i18n));
        out.push('\n');
        out
    }
}

/// Text rendering of the efficiency tips
pub fn render_tips(i18n: &I18n) -> String {
    let mut out = format!("{}\n", i18n.get("tips.title"));
    for group in efficiency_tips(i18n) {
        out.push_str(&format!("\n{}:\n", group.title));
        for tip in group.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApplianceEntry, Bhk};
    use crate::session::Calculator;
    use chrono::TimeZone;

    fn scenario() -> (HouseholdProfile, EstimateSnapshot) {
        let profile = HouseholdProfile {
            bhk: Bhk::Two,
            property_type: PropertyType::Flat,
        };
        let appliances = [
            ApplianceEntry::present(ApplianceKind::AirConditioner, 2),
            ApplianceEntry::present(ApplianceKind::Refrigerator, 1),
            ApplianceEntry::absent(ApplianceKind::WashingMachine),
        ];
        let snapshot = Calculator::default()
            .recompute(&profile, &appliances, 5.5)
            .unwrap();
        (profile, snapshot)
    }

    #[test]
    fn test_chart_shares() {
        let (_, snapshot) = scenario();
        let slices = chart_slices(&snapshot, &I18n::new("en"));

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].contributor, "Base Consumption");
        assert_eq!(slices[1].label, "Air Conditioner");
        let share_sum: f64 = slices.iter().map(|s| s.share_percent).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
        assert!((slices[2].share_percent - 4.0 / 13.6 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_readouts() {
        let (_, snapshot) = scenario();
        let i18n = I18n::new("en");

        assert_eq!(meter_reading(&snapshot, &i18n), "13.60 kWh");
        assert_eq!(
            appliance_readout(&snapshot, ApplianceKind::AirConditioner, &i18n),
            "Energy: 6.0 kWh"
        );
        assert_eq!(
            appliance_readout(&snapshot, ApplianceKind::WashingMachine, &i18n),
            "Energy: 0.0 kWh"
        );
    }

    #[test]
    fn test_summary_lines() {
        let (profile, snapshot) = scenario();
        let i18n = I18n::new("en");
        let generated_at = Local.with_ymd_and_hms(2026, 3, 4, 15, 7, 0).unwrap();

        let summary = EnergySummary::new(
            &UserInfo::default(),
            &profile,
            &snapshot,
            &PricingEngine::default(),
            &i18n,
            generated_at,
        );

        assert_eq!(summary.property, "Flat - 2 BHK");
        assert_eq!(summary.location, "South Bopal, Ahmedabad");
        assert_eq!(summary.monthly_bill, "\u{20B9}2244.00");
        assert_eq!(summary.generated_on, "March 04, 2026 at 03:07 PM");

        let text = summary.render(&i18n);
        assert!(text.starts_with("Energy Summary for Khush"));
        assert!(text.contains("Total Energy Consumption: 13.60 kWh per day"));
        assert!(text.contains("Estimated Monthly Bill: \u{20B9}2244.00"));
    }

    #[test]
    fn test_french_labels() {
        let (profile, snapshot) = scenario();
        let i18n = I18n::new("fr");
        let report = EstimateReport::new(
            &UserInfo::default(),
            &profile,
            &snapshot,
            &PricingEngine::default(),
            &i18n,
        );

        assert_eq!(report.chart[0].label, "Consommation de base");
        assert_eq!(report.chart[0].contributor, "Base Consumption");
        assert!(report.summary.property.starts_with("Appartement"));
    }

    #[test]
    fn test_full_render_and_json() {
        let (profile, snapshot) = scenario();
        let i18n = I18n::new("en");
        let pricing = PricingEngine::default();
        let report = EstimateReport::new(&UserInfo::default(), &profile, &snapshot, &pricing, &i18n);

        let text = report.render(&pricing, &i18n);
        assert!(text.contains("Current Energy Consumption: 13.60 kWh"));
        let base_row = text
            .lines()
            .find(|line| line.trim_start().starts_with("Base Consumption"))
            .unwrap();
        assert!(base_row.contains("3.60 kWh"));
        assert!(base_row.ends_with("26.5%"));
        assert!(text.contains("\u{20B9}74.80"));
        assert!(text.contains("\u{20B9}27302.00"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["snapshot"]["breakdown"]["Refrigerator"], 4.0);
        assert_eq!(json["chart"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_tips() {
        let groups = efficiency_tips(&I18n::new("en"));
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.tips.len() == 4));
        assert!(render_tips(&I18n::new("en")).contains("Use LED bulbs instead of traditional ones"));
    }
}
