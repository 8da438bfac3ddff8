// ABOUTME: Subcommand implementations for the workout-planner CLI
// ABOUTME: One module per subcommand: plan, compare, explain, samples, check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod check;
pub mod compare;
pub mod explain;
pub mod plan;
pub mod samples;
