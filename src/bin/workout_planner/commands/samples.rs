// ABOUTME: `samples` subcommand: prints the built-in demonstration profiles
// ABOUTME: Output is a valid profiles file for the other subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use workout_planner::comparison::render_json;
use workout_planner::profiles::sample_profiles;

/// Print the sample profiles
pub fn run() -> Result<()> {
    println!("{}", render_json(&sample_profiles()?)?);
    Ok(())
}
