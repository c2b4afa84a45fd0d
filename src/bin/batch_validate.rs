use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use visitcheck::models::IdentityCredential;
use visitcheck::utils::{mask, ValidatorError};
use visitcheck::validation::DocumentValidator;

/// Validate a JSON array of {"document_type", "number"} objects.
#[derive(Parser)]
#[command(name = "batch_validate")]
struct Args {
    input: PathBuf,

    /// Print full numbers instead of masked ones
    #[arg(long)]
    unmasked: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
    }
}

// Returns the number of rejected entries.
fn run(args: &Args) -> Result<usize, ValidatorError> {
    let contents = fs::read_to_string(&args.input)?;
    let credentials: Vec<IdentityCredential> = serde_json::from_str(&contents)?;
    info!(
        "validating {} credential(s) from {}",
        credentials.len(),
        args.input.display()
    );

    let validator = DocumentValidator::new();
    let mut rejected = 0;

    for (index, credential) in credentials.iter().enumerate() {
        let result = validator.validate_credential(credential);
        if !result.is_valid {
            rejected += 1;
        }
        let shown = if args.unmasked {
            credential.number.clone()
        } else {
            mask(credential.number.trim())
        };
        println!(
            "{:>4}  {:<30} {:<20} {}",
            index + 1,
            credential.document_type,
            shown,
            result
        );
    }

    println!(
        "\n{} checked, {} passed, {} failed",
        credentials.len(),
        credentials.len() - rejected,
        rejected
    );
    Ok(rejected)
}
