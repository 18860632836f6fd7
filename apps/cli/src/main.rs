//! # intermed CLI
//!
//! Exploratory harness for the intermed76 portal: logs a patient in and runs
//! one lookup chain, printing the decoded replies as JSON.

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use intermed_client::{ClientConfig, ClientIdentity, SessionClient};

use logging::LoggingConfig;

#[derive(Parser, Debug)]
#[command(name = "intermed")]
#[command(about = "Query the intermed76 medical appointment portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// TOML config file layered under INTERMED_* environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Also write logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Skip TLS certificate validation
    #[arg(long)]
    insecure: bool,

    #[command(flatten)]
    patient: PatientArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
pub struct PatientArgs {
    #[arg(long, env = "INTERMED_FIRST_NAME")]
    first_name: String,
    #[arg(long, env = "INTERMED_LAST_NAME")]
    last_name: String,
    #[arg(long, env = "INTERMED_MIDDLE_NAME", default_value = "")]
    middle_name: String,
    /// Birth date, YYYY-MM-DD
    #[arg(long, env = "INTERMED_BIRTH_DATE")]
    birth_date: NaiveDate,
    /// OMS insurance policy number
    #[arg(long, env = "INTERMED_OMS")]
    oms: String,
}

impl PatientArgs {
    fn identity(&self) -> ClientIdentity {
        ClientIdentity::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.middle_name.clone(),
            self.birth_date.format("%Y-%m-%d").to_string(),
            self.oms.clone(),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look the patient up and print the session
    Login,
    /// List medical organisations
    Facilities,
    /// Print the extended session record
    Session,
    /// List specialties of an organisation
    Specialties {
        /// Organisation OID (`oid` of a facility)
        #[arg(long)]
        oid: String,
        /// Organisation registry id (`id_mo` of a facility)
        #[arg(long)]
        reg_id: String,
    },
    /// List doctors for a specialty
    Resources {
        /// Specialty id
        #[arg(long)]
        spec: String,
    },
    /// List free slots of a doctor
    Schedule {
        /// Resource id
        #[arg(long)]
        resource: String,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// Availability table of an organisation
    ScheduleTable {
        #[arg(long)]
        reg_id: String,
        /// Specialty code, repeatable
        #[arg(long = "spec", required = true)]
        specs: Vec<String>,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// List booked appointments
    Records {
        /// Include past, declined and deleted bookings
        #[arg(long)]
        all: bool,
    },
    /// Book a slot
    Book {
        #[arg(long)]
        slot: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        level: LoggingConfig::level_for_verbosity(cli.verbose).to_string(),
        json: cli.log_json,
        file_enabled: cli.log_dir.is_some(),
        file_directory: cli.log_dir.clone().unwrap_or_else(|| PathBuf::from("logs")),
        ..LoggingConfig::default()
    };
    let _log_guard =
        logging::init_logging(&logging_config).context("Failed to initialize logging")?;

    let mut config =
        ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.insecure {
        config.accept_invalid_certs = true;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "Starting intermed client"
    );

    let mut client = SessionClient::new(cli.patient.identity(), config)
        .context("Failed to create portal client")?;

    commands::run(&mut client, cli.command).await
}
