// ABOUTME: Deterministic rule-based weekly workout planning engine
// ABOUTME: Pure Profile -> WeeklySchedule transformation over static rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Rules
//!
//! The engine applies four stages in order:
//!
//! 1. **Tier parameters**: fitness level → days, intensity, duration, weekdays
//! 2. **Limitation overrides**: `time` caps volume, `joint` softens high intensity
//! 3. **Activity selection**: goal table, de-duplication, preference additions
//! 4. **Per-day refinement**: round-robin placement, activity-specific adjustments
//!
//! No I/O, no randomness, no shared mutable state. Unrecognized goal,
//! preference or limitation text is ignored rather than reported.
//!
//! ```rust
//! use workout_core::models::{ProfileBuilder, Weekday};
//! use workout_rules::RuleEngine;
//!
//! let profile = ProfileBuilder::new("U042", 29, 1)
//!     .goal("endurance")
//!     .build()
//!     .unwrap();
//! let schedule = RuleEngine::new().plan(&profile);
//! assert_eq!(schedule.len(), 3);
//! assert!(schedule.get(Weekday::Monday).is_some());
//! ```

/// Stage orchestration and per-day refinement
pub mod engine;

/// Limitation, goal and preference rule tables
pub mod rules;

/// Fitness tiers and their base parameters
pub mod tiers;

pub use engine::{refine_workout, PlanningParameters, RuleEngine};
pub use rules::{apply_limitations, select_activity_types, AdjustedParameters};
pub use tiers::{FitnessTier, TierParameters};
