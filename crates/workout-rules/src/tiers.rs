// ABOUTME: Fitness tier buckets and their base schedule parameters
// ABOUTME: Static table mapping beginner/intermediate/advanced to days, intensity, duration, weekdays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_core::models::{Intensity, Weekday};

/// Fitness level bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessTier {
    /// Level 1 and below
    Beginner,
    /// Levels 2 and 3
    Intermediate,
    /// Level 4 and above
    Advanced,
}

impl FitnessTier {
    /// Bucket a fitness level; boundaries belong to the lower tier
    #[must_use]
    pub const fn from_level(level: i32) -> Self {
        if level <= 1 {
            Self::Beginner
        } else if level <= 3 {
            Self::Intermediate
        } else {
            Self::Advanced
        }
    }

    /// Base parameters for this tier
    #[must_use]
    pub fn parameters(self) -> &'static TierParameters {
        match self {
            Self::Beginner => &TIER_TABLE[0],
            Self::Intermediate => &TIER_TABLE[1],
            Self::Advanced => &TIER_TABLE[2],
        }
    }
}

/// Base schedule parameters before limitation overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierParameters {
    /// Tier these parameters belong to
    pub tier: FitnessTier,
    /// Workout days per week
    pub workout_days: usize,
    /// Starting intensity for every day
    pub intensity: Intensity,
    /// Starting session length in minutes
    pub duration_minutes: u32,
    /// Weekdays filled in order, one per workout day
    pub designated_days: &'static [Weekday],
}

impl TierParameters {
    /// Parameters for a raw fitness level
    #[must_use]
    pub fn for_level(level: i32) -> &'static Self {
        FitnessTier::from_level(level).parameters()
    }
}

static TIER_TABLE: [TierParameters; 3] = [
    TierParameters {
        tier: FitnessTier::Beginner,
        workout_days: 3,
        intensity: Intensity::Light,
        duration_minutes: 30,
        designated_days: &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
    },
    TierParameters {
        tier: FitnessTier::Intermediate,
        workout_days: 4,
        intensity: Intensity::Moderate,
        duration_minutes: 45,
        designated_days: &[
            Weekday::Monday,
            Weekday::Wednesday,
            Weekday::Friday,
            Weekday::Sunday,
        ],
    },
    TierParameters {
        tier: FitnessTier::Advanced,
        workout_days: 5,
        intensity: Intensity::High,
        duration_minutes: 60,
        designated_days: &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Thursday,
            Weekday::Saturday,
            Weekday::Sunday,
        ],
    },
];
