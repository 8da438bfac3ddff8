// ABOUTME: workout-planner CLI for planning, comparing, and explaining weekly workouts
// ABOUTME: Dispatches subcommands to the rule-based and model-backed planners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a week with the rule engine
//! workout-planner plan --profile client.json
//!
//! # Plan with the language model (falls back to the rule engine on failure)
//! workout-planner plan --profile client.json --planner model --format json
//!
//! # Compare both planners on the built-in sample users
//! workout-planner compare
//!
//! # Show the rule engine's intermediate parameters
//! workout-planner explain --profile client.json
//!
//! # Print the built-in sample users
//! workout-planner samples
//!
//! # Check the model endpoint
//! workout-planner check
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use workout_planner::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "workout-planner",
    about = "Weekly workout planner",
    long_about = "Builds weekly workout schedules with a deterministic rule engine and a language-model planner, and compares the two."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Plan a week for each profile in a file
    Plan {
        /// JSON file with one profile or a list of profiles
        #[arg(long)]
        profile: PathBuf,

        /// Planner to use
        #[arg(long, value_enum, default_value_t = PlannerKind::Rules)]
        planner: PlannerKind,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare both planners side by side
    Compare {
        /// JSON file with profiles (defaults to the built-in samples)
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the rule engine's tier, overrides and activity list
    Explain {
        /// JSON file with one profile or a list of profiles
        #[arg(long)]
        profile: PathBuf,
    },

    /// Print the built-in sample profiles as JSON
    Samples,

    /// Check that the configured model endpoint is reachable
    Check,
}

/// Planner selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlannerKind {
    /// Deterministic rule engine
    Rules,
    /// Language model with rule-engine fallback
    Model,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    debug!("workout-planner CLI started");

    match cli.command {
        Command::Plan {
            profile,
            planner,
            format,
        } => commands::plan::run(&profile, planner, format).await,
        Command::Compare { profiles, format } => {
            commands::compare::run(profiles.as_deref(), format).await
        }
        Command::Explain { profile } => commands::explain::run(&profile).await,
        Command::Samples => commands::samples::run(),
        Command::Check => commands::check::run().await,
    }
}
