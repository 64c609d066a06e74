use clap::Parser;
use tracing_subscriber::EnvFilter;

use energy_balance_rs::cli::{CalcArgs, Cli, Command};
use energy_balance_rs::error::{BalanceError, Result};
use energy_balance_rs::interface::{
    Action, display_error, display_instructions, display_report, prompt_action,
    prompt_food_entry, prompt_profile,
};
use energy_balance_rs::lookup::{LookupConfig, OpenFoodFacts};
use energy_balance_rs::models::{FoodEntry, ProfileInput};
use energy_balance_rs::session::Session;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("energy_balance_rs=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.lookup_config();

    match cli.command.unwrap_or_default() {
        Command::Session => cmd_session(&config),
        Command::Calc(args) => cmd_calc(&config, &args),
    }
}

/// Interactive session: add foods, calculate totals, exit.
fn cmd_session(config: &LookupConfig) -> Result<()> {
    let mut session = Session::new(OpenFoodFacts::new(config)?);
    let mut profile = ProfileInput::default();

    display_instructions();

    loop {
        match prompt_action(session.entry_count())? {
            Action::AddFood => {
                let (food, grams) = prompt_food_entry()?;
                match session.add_food_raw(&food, &grams) {
                    Ok(count) => println!("Food Items Entered: {}", count),
                    Err(BalanceError::InvalidEntry(msg)) => display_error(&msg),
                    Err(e) => return Err(e),
                }
            }
            Action::CalculateTotals => {
                profile = prompt_profile(&profile)?;
                match session.calculate(&profile) {
                    Ok(report) => display_report(&report),
                    Err(BalanceError::InputValidation(msg)) => display_error(&msg),
                    Err(e) => return Err(e),
                }
            }
            Action::Exit => break,
        }
    }

    Ok(())
}

/// One-shot calculation from command-line arguments.
fn cmd_calc(config: &LookupConfig, args: &CalcArgs) -> Result<()> {
    let mut session = Session::new(OpenFoodFacts::new(config)?);

    for raw in &args.foods {
        let entry: FoodEntry = raw.parse()?;
        session.add_food(entry.name(), entry.grams())?;
    }

    let report = session.calculate(&args.profile_input())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}
