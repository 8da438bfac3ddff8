// ABOUTME: Rule engine turning a profile into a weekly schedule in four ordered stages
// ABOUTME: Tier parameters, limitation overrides, activity selection, per-day refinement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::debug;
use workout_core::models::{
    ActivityType, Intensity, PlanEnvelope, Profile, WeeklySchedule, Weekday, WorkoutDescriptor,
};

use crate::rules::{apply_limitations, select_activity_types};
use crate::tiers::{FitnessTier, TierParameters};

/// HIIT sessions never run longer than this
const HIIT_MAX_MINUTES: u32 = 30;

/// Yoga sessions never run shorter than this
const YOGA_MIN_MINUTES: u32 = 45;

/// Intermediate values the engine derived for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanningParameters {
    /// Tier the fitness level falls in
    pub tier: FitnessTier,
    /// Workout days after limitation overrides
    pub workout_days: usize,
    /// Base intensity after limitation overrides
    pub intensity: Intensity,
    /// Base duration after limitation overrides
    pub duration_minutes: u32,
    /// Weekdays the tier fills, in order
    pub designated_days: &'static [Weekday],
    /// Activity types cycled over the workout days
    pub activity_types: Vec<ActivityType>,
    /// Limitation keywords that changed the base parameters
    pub fired_limitations: Vec<&'static str>,
}

impl PlanningParameters {
    /// Number of days the schedule will actually contain
    #[must_use]
    pub fn scheduled_days(&self) -> usize {
        self.workout_days.min(self.designated_days.len())
    }
}

/// Deterministic rule-based planner
///
/// Stateless: every call reads only its profile and the static rule tables,
/// so a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Create the engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Derive tier, overrides and activity list without building the schedule
    #[must_use]
    pub fn explain(&self, profile: &Profile) -> PlanningParameters {
        let base = TierParameters::for_level(profile.fitness_level());
        let adjusted = apply_limitations(base, profile.limitations());
        let activity_types = select_activity_types(profile.goals(), profile.preferences());

        PlanningParameters {
            tier: base.tier,
            workout_days: adjusted.workout_days,
            intensity: adjusted.intensity,
            duration_minutes: adjusted.duration_minutes,
            designated_days: base.designated_days,
            activity_types,
            fired_limitations: adjusted.fired_rules,
        }
    }

    /// Build the weekly schedule for a profile
    #[must_use]
    pub fn plan(&self, profile: &Profile) -> WeeklySchedule {
        let params = self.explain(profile);
        debug!(
            profile_id = %profile.id(),
            tier = ?params.tier,
            workout_days = params.workout_days,
            intensity = %params.intensity,
            duration_minutes = params.duration_minutes,
            activity_types = params.activity_types.len(),
            fired_limitations = ?params.fired_limitations,
            "Derived planning parameters"
        );
        assign_days(&params)
    }

    /// Build the schedule wrapped for collaborators
    #[must_use]
    pub fn plan_envelope(&self, profile: &Profile) -> PlanEnvelope {
        PlanEnvelope::from(self.plan(profile))
    }
}

/// Stage D: place activities on designated days round-robin and refine each day
fn assign_days(params: &PlanningParameters) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::new();
    for (i, day) in params
        .designated_days
        .iter()
        .take(params.scheduled_days())
        .enumerate()
    {
        let activity = params.activity_types[i % params.activity_types.len()].clone();
        schedule.insert(
            *day,
            refine_workout(activity, params.intensity, params.duration_minutes),
        );
    }
    schedule
}

/// Apply the per-activity intensity and duration adjustments to one day
#[must_use]
pub fn refine_workout(
    activity_type: ActivityType,
    base_intensity: Intensity,
    base_duration: u32,
) -> WorkoutDescriptor {
    let intensity = match activity_type {
        ActivityType::ActiveRecovery => Intensity::Light,
        ActivityType::Hiit if base_intensity == Intensity::Light => Intensity::Moderate,
        _ => base_intensity,
    };

    let duration_minutes = match activity_type {
        ActivityType::Hiit => base_duration.min(HIIT_MAX_MINUTES),
        ActivityType::Yoga => base_duration.max(YOGA_MIN_MINUTES),
        _ => base_duration,
    };

    WorkoutDescriptor {
        description: activity_type.description().to_owned(),
        activity_type,
        duration_minutes,
        intensity,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use workout_core::models::ProfileBuilder;

    #[test]
    fn test_refine_active_recovery_is_always_light() {
        let day = refine_workout(ActivityType::ActiveRecovery, Intensity::High, 60);
        assert_eq!(day.intensity, Intensity::Light);
        assert_eq!(day.duration_minutes, 60);
    }

    #[test]
    fn test_refine_hiit_raises_light_and_caps_duration() {
        let light = refine_workout(ActivityType::Hiit, Intensity::Light, 30);
        assert_eq!(light.intensity, Intensity::Moderate);

        let high = refine_workout(ActivityType::Hiit, Intensity::High, 60);
        assert_eq!(high.intensity, Intensity::High);
        assert_eq!(high.duration_minutes, 30);
    }

    #[test]
    fn test_refine_yoga_floors_duration() {
        assert_eq!(
            refine_workout(ActivityType::Yoga, Intensity::Light, 30).duration_minutes,
            45
        );
        assert_eq!(
            refine_workout(ActivityType::Yoga, Intensity::High, 60).duration_minutes,
            60
        );
    }

    #[test]
    fn test_refine_custom_type_gets_fallback_description() {
        let day = refine_workout(
            ActivityType::Custom("rowing".to_owned()),
            Intensity::Moderate,
            45,
        );
        assert_eq!(day.description, "Custom workout");
        assert_eq!(day.activity_type.label(), "rowing");
    }

    #[test]
    fn test_explain_reports_stage_results() {
        let profile = ProfileBuilder::new("U001", 35, 2)
            .goal("weight management")
            .goal("stress reduction")
            .preference("home workouts")
            .limitation("time constraints (max 30 min/day)")
            .build()
            .unwrap();
        let params = RuleEngine::new().explain(&profile);

        assert_eq!(params.tier, FitnessTier::Intermediate);
        assert_eq!(params.workout_days, 4);
        assert_eq!(params.duration_minutes, 30);
        assert_eq!(params.fired_limitations, vec!["time"]);
        assert_eq!(params.scheduled_days(), 4);
        assert_eq!(params.activity_types.len(), 5);
    }

    #[test]
    fn test_round_robin_cycles_short_activity_lists() {
        let profile = ProfileBuilder::new("U3", 28, 4)
            .goal("endurance")
            .build()
            .unwrap();
        let schedule = RuleEngine::new().plan(&profile);

        let types: Vec<_> = schedule
            .iter()
            .map(|(_, w)| w.activity_type.clone())
            .collect();
        assert_eq!(
            types,
            vec![
                ActivityType::Cardio,
                ActivityType::Swimming,
                ActivityType::Cardio,
                ActivityType::Swimming,
                ActivityType::Cardio,
            ]
        );
    }
}
