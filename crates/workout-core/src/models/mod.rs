// ABOUTME: Core data models for the workout planner
// ABOUTME: Re-exports Profile and the weekly schedule types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Profile`: immutable description of one user
//! - `WeeklySchedule`: day → `WorkoutDescriptor`, rest days absent
//! - `PlanEnvelope`: the `{ "weekly_schedule": ... }` interchange wrapper

mod profile;
mod schedule;

pub use profile::{Profile, ProfileBuilder};
pub use schedule::{
    ActivityType, Intensity, PlanEnvelope, WeeklySchedule, Weekday, WorkoutDescriptor,
};
