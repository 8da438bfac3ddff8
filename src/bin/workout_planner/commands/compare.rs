// ABOUTME: `compare` subcommand: runs both planners over a set of profiles
// ABOUTME: Defaults to the built-in sample users when no file is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use tracing::warn;
use workout_planner::comparison::{compare_profiles, render_json, render_text};
use workout_planner::planners::{ModelPlanner, RuleBasedPlanner};
use workout_planner::profiles::{load_profiles, sample_profiles};

use crate::OutputFormat;

/// Compare both planners over the given profiles or the samples
pub async fn run(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let profiles = match path {
        Some(path) => load_profiles(path).await?,
        None => sample_profiles()?,
    };

    let report = compare_profiles(
        &profiles,
        &RuleBasedPlanner::new(),
        &ModelPlanner::from_env(),
    )
    .await;

    let fallbacks = report.fallback_count();
    if fallbacks > 0 {
        warn!(
            fallbacks,
            total = report.entries.len(),
            "Some model plans fell back to the rule engine"
        );
    }

    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}
