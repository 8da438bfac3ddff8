// ABOUTME: Weekly schedule models shared by the rule engine and the model-backed planner
// ABOUTME: Weekday, Intensity, ActivityType, WorkoutDescriptor, WeeklySchedule and PlanEnvelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::constants::descriptions;
use crate::errors::AppError;

/// Day of the week, ordered Monday first
///
/// Ordering is significant: a [`WeeklySchedule`] iterates its days in this
/// order regardless of the order in which they were inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Weekday {
    /// Monday (index 0)
    Monday,
    /// Tuesday (index 1)
    Tuesday,
    /// Wednesday (index 2)
    Wednesday,
    /// Thursday (index 3)
    Thursday,
    /// Friday (index 4)
    Friday,
    /// Saturday (index 5)
    Saturday,
    /// Sunday (index 6)
    Sunday,
}

impl Weekday {
    /// The canonical seven days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Day for a zero-based index where 0 is Monday
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Full English day name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_lowercase();
                lower == name || lower == name[..3]
            })
            .ok_or_else(|| AppError::invalid_input(format!("unknown weekday '{s}'")))
    }
}

impl TryFrom<String> for Weekday {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Session intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Intensity {
    /// Light effort
    Light,
    /// Moderate effort
    Moderate,
    /// High effort
    High,
}

impl Intensity {
    /// Lower-case label used in schedules and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl Display for Intensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "low" => Ok(Self::Light),
            "moderate" | "medium" => Ok(Self::Moderate),
            "high" | "vigorous" | "intense" => Ok(Self::High),
            _ => Err(AppError::invalid_input(format!("unknown intensity '{s}'"))),
        }
    }
}

impl TryFrom<String> for Intensity {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Category of workout
///
/// The seven named variants form the fixed vocabulary of the rule engine.
/// `Custom` carries any other label, which only appears in schedules
/// produced by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    /// Weights or bodyweight strength work
    StrengthTraining,
    /// Aerobic conditioning
    Cardio,
    /// Stretching and range of motion
    Flexibility,
    /// High-intensity interval training
    Hiit,
    /// Easy movement for recovery
    ActiveRecovery,
    /// Yoga practice
    Yoga,
    /// Pool or open-water swimming
    Swimming,
    /// Any label outside the fixed vocabulary
    Custom(String),
}

impl ActivityType {
    /// Label as it appears in schedules
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::StrengthTraining => "strength training",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Hiit => "HIIT",
            Self::ActiveRecovery => "active recovery",
            Self::Yoga => "yoga",
            Self::Swimming => "swimming",
            Self::Custom(label) => label,
        }
    }

    /// Static description for this activity type
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::StrengthTraining => descriptions::STRENGTH_TRAINING,
            Self::Cardio => descriptions::CARDIO,
            Self::Flexibility => descriptions::FLEXIBILITY,
            Self::Hiit => descriptions::HIIT,
            Self::ActiveRecovery => descriptions::ACTIVE_RECOVERY,
            Self::Yoga => descriptions::YOGA,
            Self::Swimming => descriptions::SWIMMING,
            Self::Custom(_) => descriptions::CUSTOM,
        }
    }
}

impl Display for ActivityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for ActivityType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "strength training" => Self::StrengthTraining,
            "cardio" => Self::Cardio,
            "flexibility" => Self::Flexibility,
            "hiit" => Self::Hiit,
            "active recovery" => Self::ActiveRecovery,
            "yoga" => Self::Yoga,
            "swimming" => Self::Swimming,
            _ => Self::Custom(value.to_owned()),
        }
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Custom(label) => label,
            known => known.label().to_owned(),
        }
    }
}

/// A single day's workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDescriptor {
    /// Activity performed
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Session length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Session intensity
    pub intensity: Intensity,
    /// Human-readable description
    pub description: String,
}

/// Mapping from workout day to workout; absent days are rest days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<Weekday, WorkoutDescriptor>);

impl WeeklySchedule {
    /// Create an empty schedule (every day a rest day)
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Assign a workout to a day, returning the workout it replaced
    pub fn insert(
        &mut self,
        day: Weekday,
        workout: WorkoutDescriptor,
    ) -> Option<WorkoutDescriptor> {
        self.0.insert(day, workout)
    }

    /// Workout for a day, `None` for rest days
    #[must_use]
    pub fn get(&self, day: Weekday) -> Option<&WorkoutDescriptor> {
        self.0.get(&day)
    }

    /// Number of workout days
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the schedule has no workout days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Workout days in weekday order
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.keys().copied()
    }

    /// `(day, workout)` pairs in weekday order
    pub fn iter(&self) -> btree_map::Iter<'_, Weekday, WorkoutDescriptor> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a WeeklySchedule {
    type Item = (&'a Weekday, &'a WorkoutDescriptor);
    type IntoIter = btree_map::Iter<'a, Weekday, WorkoutDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Interchange wrapper: `{ "weekly_schedule": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEnvelope {
    /// The wrapped schedule
    pub weekly_schedule: WeeklySchedule,
}

impl From<WeeklySchedule> for PlanEnvelope {
    fn from(weekly_schedule: WeeklySchedule) -> Self {
        Self { weekly_schedule }
    }
}
