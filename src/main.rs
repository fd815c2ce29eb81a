mod generator;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};

use generator::SeedInputs;

#[derive(Parser)]
#[command(name = "pwforge", about = "Seed-based password generator and pattern checker")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a password from personal seed strings
    Generate {
        #[arg(long, default_value = "khuzaifa", help = "First name (2+ characters)")]
        first_name: String,

        #[arg(long, default_value = "awan", help = "Last name (2+ characters)")]
        last_name: String,

        #[arg(
            long,
            env = "PWFORGE_REG_NUMBER",
            default_value = "020",
            help = "Registration number, used verbatim"
        )]
        reg_number: String,

        #[arg(long, default_value = "The Last Kingdom", help = "Movie title (2+ characters)")]
        movie: String,

        #[arg(long, default_value = "Chinese Rice", help = "Food name (2+ characters)")]
        food: String,
    },

    /// Check candidate strings against the fixed validation pattern
    Validate {
        #[arg(value_name = "CANDIDATE", help = "Candidates to check (built-in set when omitted)")]
        candidates: Vec<String>,
    },
}

/// Candidates checked when `validate` is run without arguments.
const DEMO_CANDIDATES: &[&str] = &[
    "SP!@khu",
    "SP@#Khuz",
    "SP#khuza",
    "sp!@khu",
    "SP!khu",
    "SP!@xyz",
];

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Generate {
            first_name,
            last_name,
            reg_number,
            movie,
            food,
        } => {
            let seeds = SeedInputs {
                first_name,
                last_name,
                reg_number,
                movie,
                food,
            };
            let password = generator::generate(&seeds)?;
            println!("Generated Password: {}", password);
        }
        Command::Validate { candidates } => {
            let candidates: Vec<String> = if candidates.is_empty() {
                DEMO_CANDIDATES.iter().map(|s| s.to_string()).collect()
            } else {
                candidates
            };
            for candidate in &candidates {
                let verdict = if validation::is_valid(candidate) {
                    "valid"
                } else {
                    "invalid"
                };
                println!("\"{}\" is {}", candidate, verdict);
            }
        }
    }

    Ok(())
}
