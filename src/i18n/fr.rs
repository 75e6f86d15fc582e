//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculateur de consommation \u{00E9}nerg\u{00E9}tique".into());

    // Property
    t.insert("property.flat".into(), "Appartement".into());
    t.insert("property.tenement".into(), "Maison mitoyenne".into());

    // Appliances
    t.insert("appliance.air_conditioner".into(), "Climatiseur".into());
    t.insert("appliance.refrigerator".into(), "R\u{00E9}frig\u{00E9}rateur".into());
    t.insert("appliance.washing_machine".into(), "Lave-linge".into());
    t.insert("appliance.energy".into(), "\u{00C9}nergie".into());

    // Meter and breakdown
    t.insert("meter.current".into(), "Consommation actuelle".into());
    t.insert("breakdown.title".into(), "R\u{00E9}partition de la consommation".into());
    t.insert("breakdown.base".into(), "Consommation de base".into());

    // Costs
    t.insert("cost.title".into(), "Estimation des co\u{00FB}ts".into());
    t.insert("cost.rate".into(), "Tarif par kWh".into());
    t.insert("cost.daily".into(), "Co\u{00FB}t journalier".into());
    t.insert("cost.monthly".into(), "Co\u{00FB}t mensuel".into());
    t.insert("cost.yearly".into(), "Co\u{00FB}t annuel".into());

    // Summary
    t.insert("summary.title".into(), "Bilan \u{00E9}nerg\u{00E9}tique pour".into());
    t.insert("summary.property".into(), "Logement".into());
    t.insert("summary.location".into(), "Adresse".into());
    t.insert("summary.total".into(), "Consommation totale".into());
    t.insert("summary.per_day".into(), "par jour".into());
    t.insert("summary.monthly_bill".into(), "Facture mensuelle estim\u{00E9}e".into());
    t.insert("summary.generated_on".into(), "G\u{00E9}n\u{00E9}r\u{00E9} le".into());

    // Tips
    t.insert("tips.title".into(), "Conseils d'efficacit\u{00E9} \u{00E9}nerg\u{00E9}tique".into());
    t.insert("tips.smart.title".into(), "Astuces".into());
    t.insert("tips.smart.1".into(), "Remplacez les ampoules classiques par des LED".into());
    t.insert("tips.smart.2".into(), "R\u{00E9}glez la climatisation \u{00E0} 24\u{00B0}C".into());
    t.insert("tips.smart.3".into(), "Entretenez r\u{00E9}guli\u{00E8}rement vos appareils".into());
    t.insert("tips.smart.4".into(), "Profitez de la lumi\u{00E8}re naturelle en journ\u{00E9}e".into());
    t.insert("tips.eco.title".into(), "\u{00C9}co-responsable".into());
    t.insert("tips.eco.1".into(), "D\u{00E9}branchez les appareils inutilis\u{00E9}s".into());
    t.insert("tips.eco.2".into(), "Choisissez des appareils \u{00E9}conomes".into());
    t.insert("tips.eco.3".into(), "Envisagez des panneaux solaires en toiture".into());
    t.insert("tips.eco.4".into(), "Programmez vos chauffe-eau".into());

    // Units
    t.insert("unit.kilowatt_hours".into(), "kWh".into());

    t
}
