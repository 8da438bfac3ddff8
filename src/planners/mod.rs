// ABOUTME: Planner abstraction shared by the rule engine and the model-backed planner
// ABOUTME: Defines the common PlannerOutput shape and the WorkoutPlanner trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planners
//!
//! Both planners take a [`Profile`] and return a [`PlannerOutput`]. Neither
//! can fail: the model planner answers every error with the rule engine's plan
//! and records why in the output's reasoning fields.

mod model;
mod rule_based;

pub use model::ModelPlanner;
pub use rule_based::RuleBasedPlanner;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use workout_core::models::{Profile, WeeklySchedule};

/// Reasoning text attached to a fallback plan
pub const FALLBACK_REASONING: &str = "Fallback to rule-based plan due to error";

/// Considerations text attached to a fallback plan
pub const FALLBACK_CONSIDERATIONS: &str = "Using deterministic planner as backup.";

/// Where a plan's schedule came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Deterministic rule engine, requested directly
    #[default]
    RuleEngine,
    /// Language model reply
    Model,
    /// Rule engine standing in after a model failure
    RuleFallback,
}

impl Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleEngine => write!(f, "rule_engine"),
            Self::Model => write!(f, "model"),
            Self::RuleFallback => write!(f, "rule_fallback"),
        }
    }
}

/// Output shared by every planner
///
/// Serializes to `{"weekly_schedule": ...}` for a rule-engine plan and adds
/// `chain_of_thought`, `reasoning` and `considerations` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOutput {
    /// Step-by-step reasoning keyed by step name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub chain_of_thought: BTreeMap<String, Value>,
    /// Short summary of the approach
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub reasoning: Option<String>,
    /// The plan itself
    pub weekly_schedule: WeeklySchedule,
    /// Adaptations and progression advice
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub considerations: Option<String>,
    /// Origin of the schedule
    #[serde(skip)]
    pub source: PlanSource,
}

impl PlannerOutput {
    /// Wrap a rule-engine schedule
    #[must_use]
    pub fn from_rules(weekly_schedule: WeeklySchedule) -> Self {
        Self {
            chain_of_thought: BTreeMap::new(),
            reasoning: None,
            weekly_schedule,
            considerations: None,
            source: PlanSource::RuleEngine,
        }
    }

    /// Wrap a rule-engine schedule used in place of a failed model call
    #[must_use]
    pub fn fallback(weekly_schedule: WeeklySchedule, reason: &str) -> Self {
        let mut chain_of_thought = BTreeMap::new();
        chain_of_thought.insert(
            "error".to_owned(),
            Value::String(format!("LLM failed: {reason}")),
        );
        Self {
            chain_of_thought,
            reasoning: Some(FALLBACK_REASONING.to_owned()),
            weekly_schedule,
            considerations: Some(FALLBACK_CONSIDERATIONS.to_owned()),
            source: PlanSource::RuleFallback,
        }
    }

    /// Whether the schedule came from the fallback path
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == PlanSource::RuleFallback
    }
}

/// Accept a string, a list of strings, or any other JSON value as text
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    })
}

/// A source of weekly plans
#[async_trait]
pub trait WorkoutPlanner: Send + Sync {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Plan a week for one profile
    async fn plan(&self, profile: &Profile) -> PlannerOutput;
}
