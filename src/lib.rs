// ABOUTME: Main library entry point for the weekly workout planner
// ABOUTME: Compares a deterministic rule engine with a language-model planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Planner
//!
//! Builds a weekly workout schedule for a fitness-app user from age, fitness
//! level, goals, preferences and limitations.
//!
//! ## Architecture
//!
//! - **`workout_core`**: profile and schedule models, errors, constants
//! - **`workout_rules`**: the deterministic rule engine
//! - **Planners**: rule-based and model-backed planners behind one trait
//! - **LLM**: `OpenAI`-compatible chat completions client and prompts
//! - **Comparison**: runs both planners per profile and renders the result
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_planner::comparison::{compare_profiles, render_text};
//! use workout_planner::errors::AppResult;
//! use workout_planner::planners::{ModelPlanner, RuleBasedPlanner};
//! use workout_planner::profiles::sample_profiles;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let profiles = sample_profiles()?;
//!     let report = compare_profiles(
//!         &profiles,
//!         &RuleBasedPlanner::new(),
//!         &ModelPlanner::from_env(),
//!     )
//!     .await;
//!     print!("{}", render_text(&report));
//!     Ok(())
//! }
//! ```

/// Side-by-side planner comparison and report rendering
pub mod comparison;

/// Environment-driven configuration
pub mod config;

/// Language-model provider abstraction and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Rule-based and model-backed planners
pub mod planners;

/// Built-in sample profiles and profile file loading
pub mod profiles;

/// Unified error handling, shared with the workspace crates
pub mod errors {
    pub use workout_core::errors::{AppError, AppResult, ErrorCode};
}

/// Profile and schedule models
pub mod models {
    pub use workout_core::models::{
        ActivityType, Intensity, PlanEnvelope, Profile, ProfileBuilder, WeeklySchedule, Weekday,
        WorkoutDescriptor,
    };
}

pub use workout_rules::{PlanningParameters, RuleEngine};
