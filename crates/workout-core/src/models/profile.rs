// ABOUTME: Immutable user profile consumed by both planners
// ABOUTME: Validates identifier and age on construction and on deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Raw wire shape of a profile before validation
#[derive(Debug, Clone, Deserialize)]
struct ProfileRecord {
    id: String,
    age: u32,
    fitness_level: i32,
    #[serde(default)]
    goals: Vec<String>,
    #[serde(default)]
    preferences: Vec<String>,
    #[serde(default)]
    limitations: Vec<String>,
}

/// A fitness-app user as seen by the planners
///
/// Fields are read-only once constructed. The rule engine reads
/// `fitness_level`, `goals`, `preferences` and `limitations`; `id` and `age`
/// are carried for reporting and for the model prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord")]
pub struct Profile {
    id: String,
    age: u32,
    fitness_level: i32,
    goals: Vec<String>,
    preferences: Vec<String>,
    limitations: Vec<String>,
}

impl Profile {
    /// Create a validated profile
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is blank or `age` is zero.
    pub fn new(
        id: impl Into<String>,
        age: u32,
        fitness_level: i32,
        goals: Vec<String>,
        preferences: Vec<String>,
        limitations: Vec<String>,
    ) -> AppResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AppError::missing_field("profile id"));
        }
        if age == 0 {
            return Err(
                AppError::new(ErrorCode::ValueOutOfRange, "age must be a positive integer")
                    .with_resource_id(id),
            );
        }
        Ok(Self {
            id,
            age,
            fitness_level,
            goals,
            preferences,
            limitations,
        })
    }

    /// Opaque identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Self-reported fitness level, nominally 1 to 5
    #[must_use]
    pub const fn fitness_level(&self) -> i32 {
        self.fitness_level
    }

    /// Goals in the user's priority order
    #[must_use]
    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Preferences in the user's order
    #[must_use]
    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    /// Physical or schedule limitations, possibly empty
    #[must_use]
    pub fn limitations(&self) -> &[String] {
        &self.limitations
    }
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = AppError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.age,
            record.fitness_level,
            record.goals,
            record.preferences,
            record.limitations,
        )
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {}: Level {}, Goals: {}",
            self.id,
            self.fitness_level,
            self.goals.join(", ")
        )
    }
}

/// Incremental builder for [`Profile`]
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    id: String,
    age: u32,
    fitness_level: i32,
    goals: Vec<String>,
    preferences: Vec<String>,
    limitations: Vec<String>,
}

impl ProfileBuilder {
    /// Start a builder with the required fields
    #[must_use]
    pub fn new(id: impl Into<String>, age: u32, fitness_level: i32) -> Self {
        Self {
            id: id.into(),
            age,
            fitness_level,
            ..Self::default()
        }
    }

    /// Append a goal
    #[must_use]
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    /// Append a preference
    #[must_use]
    pub fn preference(mut self, preference: impl Into<String>) -> Self {
        self.preferences.push(preference.into());
        self
    }

    /// Append a limitation
    #[must_use]
    pub fn limitation(mut self, limitation: impl Into<String>) -> Self {
        self.limitations.push(limitation.into());
        self
    }

    /// Validate and build the profile
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is blank or `age` is zero.
    pub fn build(self) -> AppResult<Profile> {
        Profile::new(
            self.id,
            self.age,
            self.fitness_level,
            self.goals,
            self.preferences,
            self.limitations,
        )
    }
}
