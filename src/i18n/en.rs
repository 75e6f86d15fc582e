//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Smart Energy Consumption Calculator".into());

    // Property
    t.insert("property.flat".into(), "Flat".into());
    t.insert("property.tenement".into(), "Tenement".into());

    // Appliances
    t.insert("appliance.air_conditioner".into(), "Air Conditioner".into());
    t.insert("appliance.refrigerator".into(), "Refrigerator".into());
    t.insert("appliance.washing_machine".into(), "Washing Machine".into());
    t.insert("appliance.energy".into(), "Energy".into());

    // Meter and breakdown
    t.insert("meter.current".into(), "Current Energy Consumption".into());
    t.insert("breakdown.title".into(), "Energy Consumption Breakdown".into());
    t.insert("breakdown.base".into(), "Base Consumption".into());

    // Costs
    t.insert("cost.title".into(), "Cost Estimation".into());
    t.insert("cost.rate".into(), "Rate per kWh".into());
    t.insert("cost.daily".into(), "Daily Cost".into());
    t.insert("cost.monthly".into(), "Monthly Cost".into());
    t.insert("cost.yearly".into(), "Yearly Cost".into());

    // Summary
    t.insert("summary.title".into(), "Energy Summary for".into());
    t.insert("summary.property".into(), "Property".into());
    t.insert("summary.location".into(), "Location".into());
    t.insert("summary.total".into(), "Total Energy Consumption".into());
    t.insert("summary.per_day".into(), "per day".into());
    t.insert("summary.monthly_bill".into(), "Estimated Monthly Bill".into());
    t.insert("summary.generated_on".into(), "Generated on".into());

    // Tips
    t.insert("tips.title".into(), "Energy Efficiency Tips".into());
    t.insert("tips.smart.title".into(), "Smart Tips".into());
    t.insert("tips.smart.1".into(), "Use LED bulbs instead of traditional ones".into());
    t.insert("tips.smart.2".into(), "Set AC temperature to 24\u{00B0}C for optimal efficiency".into());
    t.insert("tips.smart.3".into(), "Regular maintenance of appliances".into());
    t.insert("tips.smart.4".into(), "Use natural light during daytime".into());
    t.insert("tips.eco.title".into(), "Eco-Friendly".into());
    t.insert("tips.eco.1".into(), "Unplug devices when not in use".into());
    t.insert("tips.eco.2".into(), "Use energy-efficient appliances".into());
    t.insert("tips.eco.3".into(), "Consider solar panels for roof-top installation".into());
    t.insert("tips.eco.4".into(), "Use timers for water heaters".into());

    // Units
    t.insert("unit.kilowatt_hours".into(), "kWh".into());

    t
}
