//! Energy Estimator - Main entry point
//!
//! Estimates a household's daily electricity consumption and what it costs
//! per day, month and year.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use energy_estimator_lib::core::{ApplianceKind, Bhk, City, Config, PropertyType};
use energy_estimator_lib::i18n::I18n;
use energy_estimator_lib::report::{render_tips, EstimateReport};
use energy_estimator_lib::session::{EstimatorSession, InputEvent};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "energy-estimator", version, about = "Household energy consumption and cost estimator")]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output language: auto, en, fr (overrides the configured one)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate consumption and cost for a household
    Estimate(EstimateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct EstimateArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    age: Option<u8>,
    /// Ahmedabad, Mumbai, Delhi, Bangalore, Chennai or Pune
    #[arg(long)]
    city: Option<City>,
    #[arg(long)]
    area: Option<String>,
    /// flat or tenement
    #[arg(long)]
    property: Option<PropertyType>,
    /// 1, 2 or 3
    #[arg(long)]
    bhk: Option<Bhk>,
    /// Number of air conditioners (omit if none)
    #[arg(long)]
    ac: Option<u32>,
    /// Number of refrigerators (omit if none)
    #[arg(long)]
    fridge: Option<u32>,
    /// Number of washing machines (omit if none)
    #[arg(long)]
    washing_machine: Option<u32>,
    /// Tariff per kWh
    #[arg(long)]
    rate: Option<f64>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Append energy efficiency tips
    #[arg(long)]
    tips: bool,
}

impl EstimateArgs {
    /// Translate flags into the same events the form would emit
    fn events(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(name) = &self.name {
            events.push(InputEvent::SetName(name.clone()));
        }
        if let Some(age) = self.age {
            events.push(InputEvent::SetAge(age));
        }
        if let Some(city) = self.city {
            events.push(InputEvent::SetCity(city));
        }
        if let Some(area) = &self.area {
            events.push(InputEvent::SetArea(area.clone()));
        }
        if let Some(property_type) = self.property {
            events.push(InputEvent::SetPropertyType(property_type));
        }
        if let Some(bhk) = self.bhk {
            events.push(InputEvent::SetBhk(bhk));
        }

        for (kind, count) in [
            (ApplianceKind::AirConditioner, self.ac),
            (ApplianceKind::Refrigerator, self.fridge),
            (ApplianceKind::WashingMachine, self.washing_machine),
        ] {
            if let Some(count) = count {
                events.push(InputEvent::SetApplianceCount { kind, count });
                events.push(InputEvent::SetAppliancePresent { kind, present: true });
            }
        }

        if let Some(rate) = self.rate {
            events.push(InputEvent::SetRate(rate));
        }
        events
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the default configuration file path
    Path,
    /// Write the configuration file if it does not exist yet
    Init,
    /// Overwrite the configuration file with defaults
    Reset,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let language = cli.lang.as_deref().unwrap_or(&config.general.language);
    let i18n = I18n::new(language);

    match cli.command {
        Commands::Estimate(args) => estimate(&config, &i18n, &args),
        Commands::Config { action } => config_command(&config, action),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        })),
    }
}

fn estimate(config: &Config, i18n: &I18n, args: &EstimateArgs) -> Result<()> {
    let mut session = EstimatorSession::new(config).context("invalid default inputs")?;
    session.apply_all(args.events())?;

    let inputs = session.inputs();
    let pricing = session.calculator().pricing();
    let report = EstimateReport::new(&inputs.user, &inputs.profile, session.snapshot(), pricing, i18n);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(pricing, i18n));
        if args.tips {
            println!();
            print!("{}", render_tips(i18n));
        }
    }
    Ok(())
}

fn config_command(config: &Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Path => println!("{}", Config::config_path()?.display()),
        ConfigAction::Init => {
            let path = Config::config_path()?;
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("Wrote default config to {}", path.display());
            }
        }
        ConfigAction::Reset => {
            let path = Config::default().save()?;
            log::info!("Configuration reset");
            println!("Reset config at {}", path.display());
        }
    }
    Ok(())
}
