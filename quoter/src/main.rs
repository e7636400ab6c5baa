//! CLI entry point for the boostbook quoter.

use std::path::{Path, PathBuf};
use std::process;

use boostbook::BoostType;
use clap::{Parser, Subcommand};

use boostbook_quoter::error::Result;
use boostbook_quoter::profile::BoosterProfile;
use boostbook_quoter::quote::{self, QuoteRequest};

#[derive(Parser)]
#[command(name = "boost-quote")]
#[command(about = "Price rank boosts from a booster's price table")]
#[command(version)]
struct Cli {
    /// Booster profile (.toml or .json)
    #[arg(long, default_value = "booster.toml")]
    profile: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the profile's price table and list every problem
    Validate,

    /// Price a boost, e.g. `quote "Gold II" "Platinum IV"`
    Quote {
        /// Starting rank ("Gold II", or "Master" with --from-lp)
        from: String,

        /// Target rank ("Emerald IV", or "Grandmaster" with --to-lp)
        to: String,

        #[arg(long)]
        from_lp: Option<u32>,

        #[arg(long)]
        to_lp: Option<u32>,

        /// Apply the profile's duo discount
        #[arg(long)]
        duo: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every rung of the rank ladder
    Ladder,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate => validate(&cli.profile),
        Command::Quote {
            from,
            to,
            from_lp,
            to_lp,
            duo,
            json,
        } => {
            let request = QuoteRequest {
                from,
                to,
                from_lp,
                to_lp,
                boost_type: if duo { BoostType::Duo } else { BoostType::Solo },
            };
            run_quote(&cli.profile, &request, json)
        }
        Command::Ladder => {
            print!("{}", quote::render_ladder());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn validate(path: &Path) -> Result<()> {
    let profile = BoosterProfile::load_unchecked(path)?;
    let report = profile.pricing.validate();
    print!("{report}");
    quote::validation_outcome(&report)
}

fn run_quote(path: &Path, request: &QuoteRequest, json: bool) -> Result<()> {
    let profile = BoosterProfile::load(path)?;
    let result = quote::run_quote(&profile, request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{result}");
    }
    Ok(())
}
