use clap::{Args, Parser, Subcommand};

use crate::lookup::LookupConfig;
use crate::lookup::openfoodfacts::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::models::ProfileInput;

/// Energy balance: food intake versus calories burned walking, with BMR context.
#[derive(Parser, Debug)]
#[command(name = "energy_balance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the Open Food Facts compatible food database.
    #[arg(long, global = true, env = "ENERGY_BALANCE_FOOD_DB_URL", default_value = DEFAULT_BASE_URL)]
    pub food_db_url: String,

    /// User-Agent header sent to the food database.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            base_url: self.food_db_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Log foods and calculate totals interactively.
    #[default]
    Session,

    /// Calculate totals for foods and a walk given on the command line.
    Calc(CalcArgs),
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Food portion as NAME=GRAMS. Repeat for each item.
    #[arg(long = "food", value_name = "NAME=GRAMS")]
    pub foods: Vec<String>,

    /// Age in years.
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,

    /// Height in inches.
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,

    /// Weight in pounds.
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Gender (M/F).
    #[arg(long)]
    pub gender: String,

    /// Distance walked in miles.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub distance: String,

    /// Terrain difficulty (1-10).
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub terrain: String,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    pub fn profile_input(&self) -> ProfileInput {
        ProfileInput {
            age: self.age.clone(),
            height: self.height.clone(),
            weight: self.weight.clone(),
            gender: self.gender.clone(),
            distance: self.distance.clone(),
            terrain: self.terrain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_session() {
        let cli = Cli::try_parse_from(["energy_balance"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Session));
    }

    #[test]
    fn test_calc_args() {
        let cli = Cli::try_parse_from([
            "energy_balance",
            "calc",
            "--food",
            "apple=150",
            "--food",
            "rice=200",
            "--age",
            "30",
            "--height",
            "70",
            "--weight",
            "180",
            "--gender",
            "m",
            "--distance",
            "5",
            "--terrain",
            "-2",
            "--food-db-url",
            "http://localhost:9000",
        ])
        .unwrap();

        assert_eq!(cli.lookup_config().base_url, "http://localhost:9000");
        let Some(Command::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.foods, ["apple=150", "rice=200"]);
        assert_eq!(args.profile_input().terrain, "-2");
        assert!(!args.json);
    }
}
