#[macro_use]
extern crate log;

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use healthlog::{DashboardInput, Report, config, grants};
use healthlog_algos::{SleepScoreCalculator, analyze_health};
use healthlog_types::{GrantDetails, SleepQuality};
use uuid::Uuid;

#[derive(Parser)]
pub struct HealthLogCli {
    /// JSON file with symptom/diagnosis weight overrides
    #[arg(env = "HEALTHLOG_WEIGHTS", long)]
    pub weights: Option<PathBuf>,
    #[clap(subcommand)]
    pub subcommand: HealthLogCommand,
}

#[derive(Subcommand)]
pub enum HealthLogCommand {
    ///
    /// Score a night of sleep
    ///
    SleepScore {
        hours: f64,
        quality: SleepQuality,
    },
    ///
    /// Run the risk analysis on a dashboard snapshot file
    ///
    Analyze {
        dashboard: PathBuf,
        /// Print the raw analysis as JSON
        #[arg(long)]
        json: bool,
    },
    ///
    /// Issue a one-time access key for sharing data with a clinician
    ///
    GenerateKey {
        #[arg(long, env = "HEALTHLOG_PATIENT")]
        patient: Uuid,
        #[arg(long)]
        doctor: Option<String>,
        #[arg(long)]
        hospital: Option<String>,
        #[arg(long)]
        purpose: Option<String>,
        /// Write the grant here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    ///
    /// Redeem an access key against a stored grant
    ///
    RedeemKey {
        #[arg(long)]
        grant: PathBuf,
        key: String,
    },
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = HealthLogCli::parse();
    config::install_weight_tables(cli.weights.as_deref())?;

    match cli.subcommand {
        HealthLogCommand::SleepScore { hours, quality } => {
            let score = SleepScoreCalculator::calculate(hours, quality);
            println!("Sleep score: {}/100", score);
            Ok(())
        }
        HealthLogCommand::Analyze { dashboard, json } => {
            let raw = std::fs::read_to_string(&dashboard)
                .with_context(|| format!("failed to read {}", dashboard.display()))?;
            let input = DashboardInput::from_json(&raw)
                .with_context(|| format!("invalid dashboard in {}", dashboard.display()))?;

            let result = analyze_health(&input.snapshot());
            info!(
                "{}: risk {}/100, urgency {}",
                dashboard.display(),
                result.risk_score,
                result.urgency
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", Report(&result));
            }
            Ok(())
        }
        HealthLogCommand::GenerateKey {
            patient,
            doctor,
            hospital,
            purpose,
            out,
        } => {
            let details = GrantDetails {
                doctor_name: doctor,
                hospital_name: hospital,
                purpose,
            };
            let grant = grants::issue_grant(patient, details, Utc::now());

            match out {
                Some(path) => {
                    grants::save_grant(&path, &grant)?;
                    println!("Access key: {}", grant.key.display_key);
                    println!("Expires: {}", grant.expires_at);
                }
                None => println!("{}", serde_json::to_string_pretty(&grant)?),
            }
            Ok(())
        }
        HealthLogCommand::RedeemKey { grant, key } => {
            let grant = grants::redeem_grant_file(&grant, &key, Utc::now())?;
            println!("Access granted to patient {}", grant.patient_id);
            Ok(())
        }
        HealthLogCommand::Completions { shell } => {
            let mut command = HealthLogCli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
