// ABOUTME: Configuration management module for the workout planner
// ABOUTME: Environment-only settings for the model planner and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration comes from environment variables; there are no config
//! files. The rule engine needs no configuration at all.

/// Model planner settings
pub mod llm;
/// Shared configuration enums
pub mod types;

pub use llm::LlmConfig;
pub use types::{Environment, LlmProviderType};
