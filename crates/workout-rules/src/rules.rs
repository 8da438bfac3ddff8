// ABOUTME: Declarative matching rules for limitations, goals and preferences
// ABOUTME: Ordered (matcher, effect) tables evaluated by case-insensitive substring match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rule Tables
//!
//! Every free-text classifier in the engine is one of the tables below. Table
//! order is evaluation order. Keywords and phrases are stored lower-case and
//! matched as substrings of the lower-cased user text; unmatched text has no
//! effect.

use serde::Serialize;
use workout_core::models::{ActivityType, Intensity};

use crate::tiers::TierParameters;

// ============================================================================
// Limitations
// ============================================================================

/// Effect of a matched limitation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitationEffect {
    /// Cap session length and weekly day count
    CapVolume {
        /// Upper bound on the base duration in minutes
        max_minutes: u32,
        /// Upper bound on workout days
        max_days: usize,
    },
    /// Step high intensity down to moderate
    SoftenHighIntensity,
}

/// A limitation keyword and what it does
#[derive(Debug, Clone, Copy)]
pub struct LimitationRule {
    /// Lower-case substring to look for
    pub keyword: &'static str,
    /// Applied once when any limitation contains the keyword
    pub effect: LimitationEffect,
}

/// Limitation rules in evaluation order
pub const LIMITATION_RULES: &[LimitationRule] = &[
    LimitationRule {
        keyword: "time",
        effect: LimitationEffect::CapVolume {
            max_minutes: 30,
            max_days: 4,
        },
    },
    LimitationRule {
        keyword: "joint",
        effect: LimitationEffect::SoftenHighIntensity,
    },
];

/// Tier parameters after limitation overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustedParameters {
    /// Workout days per week
    pub workout_days: usize,
    /// Base intensity for every day
    pub intensity: Intensity,
    /// Base session length in minutes
    pub duration_minutes: u32,
    /// Keywords of the limitation rules that fired, in table order
    pub fired_rules: Vec<&'static str>,
}

/// Apply every limitation rule whose keyword appears in any limitation
#[must_use]
pub fn apply_limitations(base: &TierParameters, limitations: &[String]) -> AdjustedParameters {
    let lowered: Vec<String> = limitations.iter().map(|l| l.to_lowercase()).collect();
    let mut adjusted = AdjustedParameters {
        workout_days: base.workout_days,
        intensity: base.intensity,
        duration_minutes: base.duration_minutes,
        fired_rules: Vec::new(),
    };

    for rule in LIMITATION_RULES {
        if !lowered.iter().any(|l| l.contains(rule.keyword)) {
            continue;
        }
        match rule.effect {
            LimitationEffect::CapVolume {
                max_minutes,
                max_days,
            } => {
                adjusted.duration_minutes = adjusted.duration_minutes.min(max_minutes);
                adjusted.workout_days = adjusted.workout_days.min(max_days);
            }
            LimitationEffect::SoftenHighIntensity => {
                if adjusted.intensity == Intensity::High {
                    adjusted.intensity = Intensity::Moderate;
                }
            }
        }
        adjusted.fired_rules.push(rule.keyword);
    }

    adjusted
}

// ============================================================================
// Goals
// ============================================================================

/// A canonical goal phrase and the activities that serve it
#[derive(Debug)]
pub struct GoalRule {
    /// Lower-case phrase looked for inside each user goal
    pub phrase: &'static str,
    /// Activities appended, in order, when the phrase matches
    pub activities: &'static [ActivityType],
}

/// Goal table in evaluation order
pub const GOAL_RULES: &[GoalRule] = &[
    GoalRule {
        phrase: "weight management",
        activities: &[
            ActivityType::Cardio,
            ActivityType::Hiit,
            ActivityType::StrengthTraining,
        ],
    },
    GoalRule {
        phrase: "stress reduction",
        activities: &[
            ActivityType::Yoga,
            ActivityType::ActiveRecovery,
            ActivityType::Cardio,
        ],
    },
    GoalRule {
        phrase: "strength building",
        activities: &[ActivityType::StrengthTraining, ActivityType::Hiit],
    },
    GoalRule {
        phrase: "joint mobility",
        activities: &[
            ActivityType::Flexibility,
            ActivityType::Swimming,
            ActivityType::Yoga,
        ],
    },
    GoalRule {
        phrase: "endurance",
        activities: &[ActivityType::Cardio, ActivityType::Swimming],
    },
    GoalRule {
        phrase: "muscle gain",
        activities: &[ActivityType::StrengthTraining],
    },
    GoalRule {
        phrase: "flexibility",
        activities: &[ActivityType::Yoga, ActivityType::Flexibility],
    },
];

/// Used when no goal matches any phrase
pub const DEFAULT_ACTIVITIES: &[ActivityType] = &[
    ActivityType::Cardio,
    ActivityType::StrengthTraining,
    ActivityType::Flexibility,
];

/// Collect activities for the goals, in goal order, with duplicates removed
///
/// Duplicates are dropped keeping the first occurrence. Never returns an
/// empty list.
#[must_use]
pub fn activities_for_goals(goals: &[String]) -> Vec<ActivityType> {
    let mut collected: Vec<ActivityType> = Vec::new();
    for goal in goals {
        let goal = goal.to_lowercase();
        for rule in GOAL_RULES.iter().filter(|r| goal.contains(r.phrase)) {
            collected.extend_from_slice(rule.activities);
        }
    }

    if collected.is_empty() {
        return DEFAULT_ACTIVITIES.to_vec();
    }

    let mut unique = Vec::with_capacity(collected.len());
    for activity in collected {
        if !unique.contains(&activity) {
            unique.push(activity);
        }
    }
    unique
}

// ============================================================================
// Preferences
// ============================================================================

/// A preference keyword that can add one activity
#[derive(Debug)]
pub struct PreferenceRule {
    /// Lower-case substring looked for inside the preference
    pub keyword: &'static str,
    /// Activity appended when the rule fires
    pub append: ActivityType,
    /// The rule only fires when none of these are already selected
    pub unless_present: &'static [ActivityType],
}

impl PreferenceRule {
    fn fires(&self, preference: &str, selected: &[ActivityType]) -> bool {
        preference.contains(self.keyword)
            && !self.unless_present.iter().any(|a| selected.contains(a))
    }
}

/// Preference rules in evaluation order; at most one fires per preference
pub const PREFERENCE_RULES: &[PreferenceRule] = &[
    PreferenceRule {
        keyword: "swimming",
        append: ActivityType::Swimming,
        unless_present: &[ActivityType::Swimming],
    },
    PreferenceRule {
        keyword: "outdoor",
        append: ActivityType::Cardio,
        unless_present: &[ActivityType::Cardio],
    },
    PreferenceRule {
        keyword: "home",
        append: ActivityType::Hiit,
        unless_present: &[ActivityType::Yoga, ActivityType::Hiit],
    },
];

/// Extend `selected` from the preferences, in order
///
/// For each preference the first rule whose keyword matches and whose
/// exclusion list is clear appends its activity; later rules are skipped for
/// that preference. Each preference sees the list as extended by the
/// preferences before it. Nothing is ever removed.
pub fn apply_preferences(selected: &mut Vec<ActivityType>, preferences: &[String]) {
    for preference in preferences {
        let preference = preference.to_lowercase();
        if let Some(rule) = PREFERENCE_RULES
            .iter()
            .find(|rule| rule.fires(&preference, selected))
        {
            selected.push(rule.append.clone());
        }
    }
}

/// Full activity selection: goals, de-duplication, then preferences
#[must_use]
pub fn select_activity_types(goals: &[String], preferences: &[String]) -> Vec<ActivityType> {
    let mut selected = activities_for_goals(goals);
    apply_preferences(&mut selected, preferences);
    selected
}
