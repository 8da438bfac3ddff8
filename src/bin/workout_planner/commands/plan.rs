// ABOUTME: `plan` subcommand: plans a week for every profile in a file
// ABOUTME: Uses the rule engine or the model planner and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use tracing::info;
use workout_planner::comparison::{render_json, PlanText};
use workout_planner::planners::{ModelPlanner, PlannerOutput, RuleBasedPlanner, WorkoutPlanner};
use workout_planner::profiles::load_profiles;

use crate::{OutputFormat, PlannerKind};

/// Plan a week for every profile in the file
pub async fn run(path: &Path, kind: PlannerKind, format: OutputFormat) -> Result<()> {
    let profiles = load_profiles(path).await?;
    let planner: Box<dyn WorkoutPlanner> = match kind {
        PlannerKind::Rules => Box::new(RuleBasedPlanner::new()),
        PlannerKind::Model => Box::new(ModelPlanner::from_env()),
    };

    let mut outputs: Vec<PlannerOutput> = Vec::with_capacity(profiles.len());
    for profile in &profiles {
        let output = planner.plan(profile).await;
        info!(profile_id = %profile.id(), source = %output.source, days = output.weekly_schedule.len(), "Planned week");
        outputs.push(output);
    }

    match format {
        OutputFormat::Json => {
            if let [single] = outputs.as_slice() {
                println!("{}", render_json(single)?);
            } else {
                println!("{}", render_json(&outputs)?);
            }
        }
        OutputFormat::Text => {
            for (profile, output) in profiles.iter().zip(&outputs) {
                println!("{}", PlanText { profile, output });
            }
        }
    }
    Ok(())
}
