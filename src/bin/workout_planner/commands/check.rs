// ABOUTME: `check` subcommand: verifies the configured model endpoint is reachable
// ABOUTME: Uses the environment configuration and the provider health check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use workout_planner::planners::ModelPlanner;

/// Report whether the model endpoint answers with a success status
pub async fn run() -> Result<()> {
    if ModelPlanner::from_env().health_check().await? {
        println!("Model endpoint is reachable");
        Ok(())
    } else {
        bail!("Model endpoint responded with an error status")
    }
}
