// ABOUTME: Core types and constants for the weekly workout planner
// ABOUTME: Foundation crate with error handling, profile and schedule models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate shared by the rule engine and the planner service. It
//! changes rarely, so the workspace keeps it separate for incremental builds.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `Profile`, `WeeklySchedule` and the descriptor types
//! - **constants**: Descriptions, duration bounds, model defaults, env var names

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Profile and schedule data models
pub mod models;
