//! Energy Estimator - Demo CLI
//!
//! Replays a scripted sequence of form interactions against a session and
//! prints the live meter after each one, including a rejected input.

use energy_estimator_lib::core::{ApplianceKind, Bhk, Config};
use energy_estimator_lib::i18n::I18n;
use energy_estimator_lib::report::{appliance_readout, meter_reading, EstimateReport};
use energy_estimator_lib::session::{EstimatorSession, InputEvent};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Energy Estimator - Demo CLI");
    println!("==============================================\n");

    let config = Config::default();
    let i18n = I18n::new("en");
    let mut session = match EstimatorSession::new(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Could not start session: {}", e);
            std::process::exit(1);
        }
    };

    println!("  Start:  {}", meter_reading(session.snapshot(), &i18n));
    println!("----------------------------------------------");

    let script = [
        ("Select 2 BHK", InputEvent::SetBhk(Bhk::Two)),
        (
            "Check AC",
            InputEvent::SetAppliancePresent { kind: ApplianceKind::AirConditioner, present: true },
        ),
        (
            "Set 2 ACs",
            InputEvent::SetApplianceCount { kind: ApplianceKind::AirConditioner, count: 2 },
        ),
        (
            "Check fridge",
            InputEvent::SetAppliancePresent { kind: ApplianceKind::Refrigerator, present: true },
        ),
        (
            "Set 11 ACs",
            InputEvent::SetApplianceCount { kind: ApplianceKind::AirConditioner, count: 11 },
        ),
        ("Rate 5.5", InputEvent::SetRate(5.5)),
    ];

    for (step, event) in script {
        match session.apply(event) {
            Ok(snapshot) => println!("  {:<14} -> {}", step, meter_reading(snapshot, &i18n)),
            Err(e) => println!("  {:<14} -> rejected ({})", step, e),
        }
    }

    println!("----------------------------------------------\n");

    for kind in ApplianceKind::ALL {
        println!(
            "  {:<16} {}",
            kind.label(),
            appliance_readout(session.snapshot(), kind, &i18n)
        );
    }
    println!();

    let inputs = session.inputs();
    let pricing = session.calculator().pricing();
    let report = EstimateReport::new(&inputs.user, &inputs.profile, session.snapshot(), pricing, &i18n);
    print!("{}", report.render(pricing, &i18n));

    println!("\n==============================================\n");
}
