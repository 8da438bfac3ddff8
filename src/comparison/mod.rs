// ABOUTME: Side-by-side comparison of the rule-based and model-backed planners
// ABOUTME: Plans every profile with both planners and collects the results in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Comparison
//!
//! [`compare_profiles`] runs both planners over each profile, one profile at
//! a time, and returns a [`ComparisonReport`]. Rendering lives in [`render`].

/// Text and JSON output for reports and single plans
pub mod render;

pub use render::{render_json, render_text, PlanText, ReportText};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use workout_core::models::Profile;

use crate::planners::{PlanSource, PlannerOutput, WorkoutPlanner};

/// Both plans for one profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileComparison {
    /// The profile planned for
    pub profile: Profile,
    /// Rule engine plan
    pub deterministic: PlannerOutput,
    /// Model plan, or the rule engine's plan after a model failure
    pub model: PlannerOutput,
    /// Where the model column's schedule came from
    pub model_source: PlanSource,
}

impl ProfileComparison {
    /// Whether both columns hold the same schedule
    #[must_use]
    pub fn schedules_match(&self) -> bool {
        self.deterministic.weekly_schedule == self.model.weekly_schedule
    }
}

/// Comparison of every profile, in input order
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// One entry per profile
    pub entries: Vec<ProfileComparison>,
}

impl ComparisonReport {
    /// Number of profiles whose model column fell back to the rule engine
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.model.is_fallback())
            .count()
    }
}

/// Plan every profile with both planners
pub async fn compare_profiles(
    profiles: &[Profile],
    deterministic: &dyn WorkoutPlanner,
    model: &dyn WorkoutPlanner,
) -> ComparisonReport {
    let mut entries = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let deterministic_plan = deterministic.plan(profile).await;
        let model_plan = model.plan(profile).await;
        info!(
            profile_id = %profile.id(),
            deterministic = deterministic.name(),
            model = model.name(),
            model_source = %model_plan.source,
            "Compared plans"
        );
        entries.push(ProfileComparison {
            profile: profile.clone(),
            model_source: model_plan.source,
            deterministic: deterministic_plan,
            model: model_plan,
        });
    }

    ComparisonReport {
        generated_at: Utc::now(),
        entries,
    }
}
