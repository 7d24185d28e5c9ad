//! Persona Assessment binary entry point.
//!
//! Logs go to stderr; stdout carries questions, prompts and the report.
//!
//! Coverage is excluded because the commands drive a terminal session.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use persona_assessment::assessor::ConfiguredAssessor;
use persona_assessment::config::Config;
use persona_assessment::error::AppError;
use persona_assessment::session::{daily_questions, AssessmentSession, Interview};
use persona_assessment::traits::{
    RandomSource, RealTimeProvider, SeededRandom, ThreadRandom, TimeProvider,
};

#[derive(Parser, Debug)]
#[command(name = "persona-assessment", version, about = "Daily personality self-assessment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the questions for a day
    Questions {
        /// Day to draw questions for (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Generate a report from a saved session JSON file
    Report {
        /// Session file
        #[arg(long)]
        session: PathBuf,
        /// Seed for the dimensions table
        #[arg(long)]
        seed: Option<u64>,
        /// Do not write the JSON record
        #[arg(long)]
        no_export: bool,
    },
    /// Answer today's questions interactively, then report
    Interview {
        /// Seed for the dimensions table
        #[arg(long)]
        seed: Option<u64>,
        /// Do not write the JSON record
        #[arg(long)]
        no_export: bool,
    },
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    // Initialize logging to stderr only (stdout is for the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Questions { date } => {
            let date = date.unwrap_or_else(|| RealTimeProvider.now().date_naive());
            println!("Questions for {}", date.format("%B %d, %Y"));
            for (i, question) in daily_questions(date).iter().enumerate() {
                println!("{}. {question}", i + 1);
            }
            Ok(())
        }
        Command::Report {
            session,
            seed,
            no_export,
        } => {
            let config = Config::from_env()?;
            let text = std::fs::read_to_string(&session)?;
            let loaded: AssessmentSession = serde_json::from_str(&text)?;
            tracing::info!(path = %session.display(), session_id = %loaded.id, "Session loaded");
            report(&config, &loaded, seed, no_export).await
        }
        Command::Interview { seed, no_export } => {
            let config = Config::from_env()?;
            let now = RealTimeProvider.now();
            let questions = daily_questions(now.date_naive())
                .into_iter()
                .map(String::from)
                .collect();
            let mut interview =
                Interview::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
            let session = interview.run(questions, now).await?;
            report(&config, &session, seed, no_export).await
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn report(
    config: &Config,
    session: &AssessmentSession,
    seed: Option<u64>,
    no_export: bool,
) -> Result<(), AppError> {
    let assessor = ConfiguredAssessor::from_config(config)?;
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let assessment = assessor.assess(session, rng.as_mut()).await?;
    println!("{}", assessment.markdown);

    if !no_export {
        let record = assessment.to_record(session);
        match record.write_to(&config.results_dir) {
            Ok(path) => eprintln!("Results saved to {}", path.display()),
            Err(e) => tracing::warn!(error = %e, "Could not save results"),
        }
    }
    Ok(())
}
