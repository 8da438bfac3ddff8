// ABOUTME: WorkoutPlanner adapter over the deterministic rule engine
// ABOUTME: Wraps RuleEngine schedules in the shared PlannerOutput shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use workout_core::models::Profile;
use workout_rules::RuleEngine;

use super::{PlannerOutput, WorkoutPlanner};

/// Deterministic planner
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedPlanner {
    engine: RuleEngine,
}

impl RuleBasedPlanner {
    /// Create a planner over the standard rule tables
    #[must_use]
    pub const fn new() -> Self {
        Self {
            engine: RuleEngine::new(),
        }
    }

    /// Plan without going through the async trait
    #[must_use]
    pub fn plan_now(&self, profile: &Profile) -> PlannerOutput {
        PlannerOutput::from_rules(self.engine.plan(profile))
    }
}

#[async_trait]
impl WorkoutPlanner for RuleBasedPlanner {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn plan(&self, profile: &Profile) -> PlannerOutput {
        self.plan_now(profile)
    }
}
