// Command line front end for the visitor form validators

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::error;

use visitcheck::{
    models::{
        DocumentType, RegistrationForm, RegistrationReport, ReservationForm, ReservationReport,
        ValidationIssue, ValidationResult,
    },
    utils::{Clock, FixedClock, SystemClock, ValidatorError},
    validation::{validate_document_with_clock, validate_phone, validate_visit_date},
    RegistrationValidator, ValidatorConfig,
};

#[derive(Parser)]
#[command(
    name = "visitcheck",
    about = "Validate visitor identity, phone and visit-date input"
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, env = "VISITCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Log each rejection
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an identity document number
    Document {
        #[arg(long = "type", value_name = "TYPE")]
        document_type: String,
        number: String,
        /// Reference date for the birth-date bound (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Validate a mobile phone number
    Phone { number: String },
    /// Validate a visit date against the configured date rules
    VisitDate {
        date: String,
        #[arg(long)]
        today: Option<String>,
    },
    /// Validate a full registration form
    Register {
        #[arg(long = "type", value_name = "TYPE")]
        document_type: String,
        #[arg(long)]
        number: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        name: String,
    },
    /// Validate a reservation request
    Reserve {
        #[arg(long)]
        date: String,
        #[arg(long)]
        campus: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool, ValidatorError> {
    let config = ValidatorConfig::load(cli.config.as_deref())?;

    let passed = match cli.command {
        Command::Document {
            document_type,
            number,
            today,
        } => {
            let kind = DocumentType::from_tag(&document_type);
            let clock = clock_for(today.as_deref())?;
            let result = validate_document_with_clock(kind, &number, &clock);
            print_result(&format!("Document ({})", kind), &result);
            result.is_valid
        }
        Command::Phone { number } => {
            let result = validate_phone(&number);
            print_result("Phone", &result);
            result.is_valid
        }
        Command::VisitDate { date, today } => {
            let today = clock_for(today.as_deref())?.today();
            let result = validate_visit_date(&date, today, &config.visit_dates);
            print_result("Visit date", &result);
            result.is_valid
        }
        Command::Register {
            document_type,
            number,
            phone,
            name,
        } => {
            let form = RegistrationForm {
                document_type: DocumentType::from_tag(&document_type),
                document_number: number,
                phone,
                name,
            };
            let report = RegistrationValidator::new(config).validate_registration(&form);
            print_registration_report(&report);
            report.is_valid
        }
        Command::Reserve {
            date,
            campus,
            time,
            today,
        } => {
            let form = ReservationForm {
                visit_date: date,
                campus,
                visit_time: time,
            };
            let clock = clock_for(today.as_deref())?;
            let validator = RegistrationValidator::with_clock(config, clock);
            let report = validator.validate_reservation(&form);
            print_reservation_report(&report);
            report.is_valid
        }
    };

    Ok(passed)
}

// Either the given date or the local calendar date.
fn clock_for(today: Option<&str>) -> Result<FixedClock, ValidatorError> {
    match today {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(FixedClock)
            .map_err(|e| ValidatorError::InvalidDate(format!("{}: {}", raw, e))),
        None => Ok(FixedClock(SystemClock.today())),
    }
}

fn status(passed: bool) -> &'static str {
    if passed { "PASSED" } else { "FAILED" }
}

fn print_result(label: &str, result: &ValidationResult) {
    println!("{}: {} ({})", label, status(result.is_valid), result.reason);
}

fn print_issues(issues: &[ValidationIssue]) {
    if !issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in issues {
            println!("  - {}", issue);
        }
    }
}

fn print_registration_report(report: &RegistrationReport) {
    println!("REGISTRATION CHECK");
    println!("  Document Number: {}", report.normalized_number);
    println!(
        "  1. Phone: {} ({})",
        status(report.phone_validation.is_valid),
        report.phone_validation.reason
    );
    println!(
        "  2. Document: {} ({})",
        status(report.document_validation.is_valid),
        report.document_validation.reason
    );
    print_issues(&report.issues);
    let verdict = if report.is_valid { "VALID" } else { "INVALID" };
    println!("\nRegistration result: {}", verdict);
}

fn print_reservation_report(report: &ReservationReport) {
    println!("RESERVATION CHECK");
    println!(
        "  Visit Date: {} ({})",
        status(report.date_validation.is_valid),
        report.date_validation.reason
    );
    print_issues(&report.issues);
    let verdict = if report.is_valid { "VALID" } else { "INVALID" };
    println!("\nReservation result: {}", verdict);
}
