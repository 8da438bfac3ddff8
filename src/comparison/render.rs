// ABOUTME: Human-readable and JSON rendering of comparison reports and single plans
// ABOUTME: Text layout lists each profile, the rule plan, and the model plan's reasoning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use serde_json::Value;
use workout_core::errors::AppResult;
use workout_core::models::{Profile, WeeklySchedule};

use super::ComparisonReport;
use crate::planners::PlannerOutput;

const SEPARATOR_WIDTH: usize = 80;

/// Text view of a [`ComparisonReport`]
pub struct ReportText<'a>(pub &'a ComparisonReport);

/// Text view of one profile's plan
pub struct PlanText<'a> {
    /// Profile planned for
    pub profile: &'a Profile,
    /// Planner output
    pub output: &'a PlannerOutput,
}

/// Render a report as text
#[must_use]
pub fn render_text(report: &ComparisonReport) -> String {
    ReportText(report).to_string()
}

/// Render any serializable report or plan as pretty JSON
///
/// # Errors
///
/// Returns a serialization error if the value cannot be encoded.
pub fn render_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

impl Display for ReportText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "===== WORKOUT PLAN COMPARISON =====")?;
        for (number, entry) in self.0.entries.iter().enumerate() {
            let profile = &entry.profile;
            writeln!(f)?;
            writeln!(f, "--- User {}: {} ---", number + 1, profile.id())?;
            write_profile(f, profile)?;

            writeln!(f)?;
            writeln!(f, "[Deterministic Planner]")?;
            write_schedule(f, &entry.deterministic.weekly_schedule, false)?;

            writeln!(f)?;
            writeln!(f, "[Model Planner with Chain-of-Thought]")?;
            write_model_output(f, &entry.model)?;
            writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }
        Ok(())
    }
}

impl Display for PlanText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.profile)?;
        write_profile(f, self.profile)?;
        writeln!(f)?;
        if self.output.chain_of_thought.is_empty() && self.output.reasoning.is_none() {
            write_schedule(f, &self.output.weekly_schedule, true)
        } else {
            write_model_output(f, self.output)
        }
    }
}

fn write_profile(f: &mut Formatter<'_>, profile: &Profile) -> fmt::Result {
    writeln!(
        f,
        "Age: {} | Fitness Level: {}/5",
        profile.age(),
        profile.fitness_level()
    )?;
    writeln!(f, "Goals: {}", profile.goals().join(", "))?;
    writeln!(f, "Preferences: {}", profile.preferences().join(", "))?;
    writeln!(f, "Limitations: {}", profile.limitations().join(", "))
}

fn write_schedule(
    f: &mut Formatter<'_>,
    schedule: &WeeklySchedule,
    with_descriptions: bool,
) -> fmt::Result {
    for (day, workout) in schedule {
        writeln!(
            f,
            "- {day}: {} ({}, {} min)",
            workout.activity_type, workout.intensity, workout.duration_minutes
        )?;
        if with_descriptions {
            writeln!(f, "  → {}", workout.description)?;
        }
    }
    Ok(())
}

fn write_model_output(f: &mut Formatter<'_>, output: &PlannerOutput) -> fmt::Result {
    if !output.chain_of_thought.is_empty() {
        writeln!(f)?;
        writeln!(f, "THINKING PROCESS:")?;
        for (step, value) in &output.chain_of_thought {
            writeln!(f, "  {}:", title_case(step))?;
            match value {
                Value::String(text) => writeln!(f, "    {text}")?,
                other => writeln!(f, "    {other}")?,
            }
        }
    }

    writeln!(f)?;
    writeln!(
        f,
        "REASONING: {}",
        output.reasoning.as_deref().unwrap_or("No reasoning provided")
    )?;

    writeln!(f)?;
    writeln!(f, "WEEKLY SCHEDULE:")?;
    write_schedule(f, &output.weekly_schedule, true)?;

    writeln!(f)?;
    writeln!(
        f,
        "CONSIDERATIONS: {}",
        output.considerations.as_deref().unwrap_or("None")
    )
}

/// `step_1_fitness_assessment` → `Step 1 Fitness Assessment`
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
