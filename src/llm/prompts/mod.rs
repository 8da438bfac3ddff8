// ABOUTME: Prompts for the model-backed planner loaded at compile time
// ABOUTME: Renders a client profile into the step-by-step planning request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Prompts
//!
//! Prompts live in markdown files next to this module so they can be edited
//! without touching code. The request template uses `{name}` placeholders.

use workout_core::models::Profile;

/// System instruction sent ahead of every planning request
pub const PLANNER_SYSTEM_PROMPT: &str = include_str!("planner_system.md");

/// Planning request template
const PLAN_REQUEST_TEMPLATE: &str = include_str!("plan_request.md");

/// Get the system prompt for the planner
#[must_use]
pub const fn get_planner_system_prompt() -> &'static str {
    PLANNER_SYSTEM_PROMPT
}

/// Render the planning request for one client
///
/// Empty limitations render as `None`; empty goals and preferences render
/// as an empty list.
#[must_use]
pub fn build_plan_prompt(profile: &Profile) -> String {
    let limitations = if profile.limitations().is_empty() {
        "None".to_owned()
    } else {
        profile.limitations().join(", ")
    };

    let age = profile.age().to_string();
    let fitness_level = profile.fitness_level().to_string();
    let goals = profile.goals().join(", ");
    let preferences = profile.preferences().join(", ");

    render_template(
        PLAN_REQUEST_TEMPLATE,
        &[
            ("age", &age),
            ("fitness_level", &fitness_level),
            ("goals", &goals),
            ("preferences", &preferences),
            ("limitations", &limitations),
        ],
    )
}

/// Substitute `{name}` placeholders in one left-to-right pass
///
/// Inserted values are never scanned again, so user text that looks like a
/// placeholder is kept verbatim. Braces that do not start a known
/// placeholder (the JSON schema in the template) are copied as is.
fn render_template(template: &str, fields: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let matched = fields.iter().find_map(|(name, value)| {
            tail.strip_prefix(name)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match matched {
            Some((value, after)) => {
                rendered.push_str(value);
                rest = after;
            }
            None => {
                rendered.push('{');
                rest = tail;
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
