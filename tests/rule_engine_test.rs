// ABOUTME: Integration tests for the deterministic rule engine
// ABOUTME: Covers tier properties, limitation overrides, activity selection, and scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use workout_planner::models::{
    ActivityType, Intensity, Profile, ProfileBuilder, WeeklySchedule, Weekday,
};
use workout_planner::RuleEngine;

fn plan(profile: &Profile) -> WeeklySchedule {
    RuleEngine::new().plan(profile)
}

fn profile(level: i32, goals: &[&str], preferences: &[&str], limitations: &[&str]) -> Profile {
    let mut builder = ProfileBuilder::new("T1", 40, level);
    for goal in goals {
        builder = builder.goal(*goal);
    }
    for preference in preferences {
        builder = builder.preference(*preference);
    }
    for limitation in limitations {
        builder = builder.limitation(*limitation);
    }
    builder.build().unwrap()
}

fn day_types(schedule: &WeeklySchedule) -> Vec<(Weekday, ActivityType)> {
    schedule
        .iter()
        .map(|(day, workout)| (*day, workout.activity_type.clone()))
        .collect()
}

// ============================================================================
// Tier properties
// ============================================================================

#[test]
fn test_day_count_and_intensity_follow_tier() {
    for level in -2..=8 {
        let p = profile(level, &["endurance"], &[], &[]);
        let params = RuleEngine::new().explain(&p);
        let schedule = plan(&p);
        let (days, intensity) = match level {
            i32::MIN..=1 => (3, Intensity::Light),
            2..=3 => (4, Intensity::Moderate),
            _ => (5, Intensity::High),
        };
        assert_eq!(schedule.len(), days, "level {level}");
        assert_eq!(params.intensity, intensity, "level {level}");
    }
}

#[test]
fn test_schedule_uses_designated_weekdays() {
    let beginner = plan(&profile(1, &["muscle gain"], &[], &[]));
    assert_eq!(
        beginner.days().collect::<Vec<_>>(),
        [Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
    );

    let advanced = plan(&profile(4, &["muscle gain"], &[], &[]));
    assert_eq!(
        advanced.days().collect::<Vec<_>>(),
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Thursday,
            Weekday::Saturday,
            Weekday::Sunday
        ]
    );
}

// ============================================================================
// Limitation properties
// ============================================================================

#[test]
fn test_time_limitation_caps_days_and_non_yoga_durations() {
    for level in 0..=6 {
        for goals in [&["muscle gain"][..], &["stress reduction"], &["weight management"]] {
            let p = profile(level, goals, &[], &["Short on TIME"]);
            let params = RuleEngine::new().explain(&p);
            let schedule = plan(&p);

            assert!(params.duration_minutes <= 30);
            assert!(schedule.len() <= 4);
            for (_, workout) in &schedule {
                if workout.activity_type != ActivityType::Yoga {
                    assert!(workout.duration_minutes <= 30, "{workout:?}");
                }
            }
        }
    }
}

#[test]
fn test_joint_limitation_removes_high_intensity() {
    for goals in [&["muscle gain"][..], &["weight management"], &["endurance"]] {
        let schedule = plan(&profile(5, goals, &[], &["knee joint pain"]));
        assert!(schedule
            .iter()
            .all(|(_, workout)| workout.intensity != Intensity::High));
    }
}

// ============================================================================
// Activity selection
// ============================================================================

#[test]
fn test_overlapping_goals_are_deduplicated_in_first_occurrence_order() {
    let p = profile(2, &["weight management", "stress reduction", "endurance"], &[], &[]);
    let types = RuleEngine::new().explain(&p).activity_types;
    assert_eq!(
        types,
        [
            ActivityType::Cardio,
            ActivityType::Hiit,
            ActivityType::StrengthTraining,
            ActivityType::Yoga,
            ActivityType::ActiveRecovery,
            ActivityType::Swimming,
        ]
    );
}

#[test]
fn test_unknown_goal_falls_back_to_default_activities() {
    let p = profile(1, &["unknown goal xyz"], &[], &[]);
    assert_eq!(
        RuleEngine::new().explain(&p).activity_types,
        [
            ActivityType::Cardio,
            ActivityType::StrengthTraining,
            ActivityType::Flexibility
        ]
    );

    let schedule = plan(&p);
    assert_eq!(
        day_types(&schedule),
        [
            (Weekday::Monday, ActivityType::Cardio),
            (Weekday::Wednesday, ActivityType::StrengthTraining),
            (Weekday::Friday, ActivityType::Flexibility),
        ]
    );
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_busy_intermediate_scenario() {
    let schedule = plan(&common::busy_intermediate());

    assert_eq!(
        day_types(&schedule),
        [
            (Weekday::Monday, ActivityType::Cardio),
            (Weekday::Wednesday, ActivityType::Hiit),
            (Weekday::Friday, ActivityType::StrengthTraining),
            (Weekday::Sunday, ActivityType::Yoga),
        ]
    );
    for day in [Weekday::Monday, Weekday::Wednesday, Weekday::Friday] {
        assert_eq!(schedule.get(day).unwrap().duration_minutes, 30);
    }
    // yoga floor is applied after the time cap
    assert_eq!(schedule.get(Weekday::Sunday).unwrap().duration_minutes, 45);
    assert!(schedule
        .iter()
        .all(|(_, workout)| workout.intensity == Intensity::Moderate));
}

#[test]
fn test_muscle_gain_with_joint_stiffness_scenario() {
    let schedule = plan(&profile(5, &["muscle gain"], &[], &["joint stiffness"]));

    assert_eq!(schedule.len(), 5);
    for (_, workout) in &schedule {
        assert_eq!(workout.activity_type, ActivityType::StrengthTraining);
        assert_eq!(workout.intensity, Intensity::Moderate);
        assert_eq!(workout.duration_minutes, 60);
    }
}

#[test]
fn test_mobility_swimmer_scenario() {
    let p = common::mobility_swimmer();
    let params = RuleEngine::new().explain(&p);
    assert_eq!(params.activity_types.last(), Some(&ActivityType::Cardio));

    let schedule = plan(&p);
    assert_eq!(
        day_types(&schedule),
        [
            (Weekday::Monday, ActivityType::Flexibility),
            (Weekday::Wednesday, ActivityType::Swimming),
            (Weekday::Friday, ActivityType::Yoga),
            (Weekday::Sunday, ActivityType::StrengthTraining),
        ]
    );
    assert!(schedule
        .iter()
        .all(|(_, w)| w.duration_minutes == 45 && w.intensity == Intensity::Moderate));
}

#[test]
fn test_beginner_hiit_is_raised_to_moderate_and_recovery_is_light() {
    let schedule = plan(&profile(1, &["weight management"], &[], &[]));
    let hiit = schedule.get(Weekday::Wednesday).unwrap();
    assert_eq!(hiit.activity_type, ActivityType::Hiit);
    assert_eq!(hiit.intensity, Intensity::Moderate);

    let schedule = plan(&profile(4, &["stress reduction"], &[], &[]));
    let recovery = schedule.get(Weekday::Tuesday).unwrap();
    assert_eq!(recovery.activity_type, ActivityType::ActiveRecovery);
    assert_eq!(recovery.intensity, Intensity::Light);
    assert_eq!(recovery.duration_minutes, 60);
}

// ============================================================================
// Purity and interchange shape
// ============================================================================

#[test]
fn test_planning_is_idempotent() {
    let p = common::busy_intermediate();
    let first = serde_json::to_string(&RuleEngine::new().plan_envelope(&p)).unwrap();
    let second = serde_json::to_string(&RuleEngine::new().plan_envelope(&p)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_envelope_json_shape() {
    let envelope = RuleEngine::new().plan_envelope(&profile(0, &["muscle gain"], &[], &[]));
    let json = serde_json::to_value(&envelope).unwrap();
    let monday = &json["weekly_schedule"]["Monday"];

    assert_eq!(monday["type"], "strength training");
    assert_eq!(monday["duration"], 30);
    assert_eq!(monday["intensity"], "light");
    assert_eq!(
        monday["description"],
        "Focus on building muscle with weights or bodyweight exercises"
    );
    assert!(json["weekly_schedule"].get("Tuesday").is_none());
}
