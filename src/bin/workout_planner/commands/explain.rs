// ABOUTME: `explain` subcommand: prints the rule engine's intermediate parameters
// ABOUTME: Shows tier, limitation overrides, and the activity list per profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use workout_planner::comparison::render_json;
use workout_planner::profiles::load_profiles;
use workout_planner::RuleEngine;

/// Print the rule engine parameters for each profile
pub async fn run(path: &Path) -> Result<()> {
    let engine = RuleEngine::new();
    let explanations: Vec<_> = load_profiles(path)
        .await?
        .iter()
        .map(|profile| {
            let parameters = engine.explain(profile);
            json!({
                "profile_id": profile.id(),
                "scheduled_days": parameters.scheduled_days(),
                "parameters": parameters,
            })
        })
        .collect();

    println!("{}", render_json(&explanations)?);
    Ok(())
}
