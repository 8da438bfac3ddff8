// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample profiles, and a scripted LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `workout_planner`

use std::collections::VecDeque;
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use workout_planner::errors::{AppError, ErrorCode};
use workout_planner::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use workout_planner::models::{Profile, ProfileBuilder};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
///
/// Set `TEST_LOG=DEBUG` to see planner logs.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Level-2 user with weight and stress goals, working out at home with little time
pub fn busy_intermediate() -> Profile {
    ProfileBuilder::new("U001", 35, 2)
        .goal("weight management")
        .goal("stress reduction")
        .preference("home workouts")
        .preference("morning routines")
        .limitation("limited equipment")
        .limitation("time constraints (max 30 min/day)")
        .build()
        .unwrap()
}

/// Level-3 user focused on mobility who likes swimming and being outdoors
pub fn mobility_swimmer() -> Profile {
    ProfileBuilder::new("U002", 55, 3)
        .goal("joint mobility")
        .goal("strength building")
        .preference("outdoor activities")
        .preference("swimming")
        .limitation("mild joint stiffness")
        .build()
        .unwrap()
}

/// What the scripted provider does on one call
pub enum Scripted {
    /// Reply with this content
    Reply(String),
    /// Fail with this error code
    Fail(ErrorCode),
}

/// LLM provider that replays scripted outcomes and records requests
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ChatRequest>>,
    healthy: bool,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
            healthy: true,
        }
    }

    /// Report an unhealthy endpoint from `health_check`
    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn replying(content: impl Into<String>) -> Self {
        Self::new(vec![Scripted::Reply(content.into())])
    }

    pub fn failing(code: ErrorCode) -> Self {
        Self::new(vec![Scripted::Fail(code)])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted (Test)"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(content)) => Ok(ChatResponse {
                content,
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Some(Scripted::Fail(code)) => Err(AppError::new(code, "scripted failure")),
            None => Err(AppError::internal("script exhausted")),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(self.healthy)
    }
}

/// A well-formed model reply with the full reasoning structure
pub const MODEL_REPLY: &str = r#"{
    "chain_of_thought": {
        "step_1_fitness_assessment": "Intermediate client in mid-thirties.",
        "step_2_goal_analysis": "Weight management first, stress reduction second.",
        "step_3_limitations_impact": "Sessions capped at 30 minutes.",
        "step_4_preferences_integration": "Home workouts in the morning.",
        "step_5_weekly_structure": "Three sessions with recovery between.",
        "step_6_final_decisions": "Alternate circuits with yoga."
    },
    "reasoning": "Short home sessions balancing calorie burn and recovery.",
    "weekly_schedule": {
        "Monday": {"type": "HIIT", "duration": 25, "intensity": "moderate", "description": "Bodyweight circuit"},
        "Wednesday": {"type": "yoga", "duration": 30, "intensity": "light", "description": "Vinyasa flow"},
        "Saturday": {"type": "cardio", "duration": 30, "intensity": "moderate", "description": "Brisk walk"}
    },
    "considerations": "Add five minutes per session after four weeks."
}"#;
