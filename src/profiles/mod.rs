// ABOUTME: Profile sources for the CLI: built-in samples and JSON profile files
// ABOUTME: Accepts either a JSON array of profiles or a single profile object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde_json::Value;
use tracing::debug;
use workout_core::errors::{AppError, AppResult, ErrorCode};
use workout_core::models::Profile;

/// Built-in demonstration profiles
const SAMPLE_PROFILES_JSON: &str = include_str!("samples.json");

/// The two demonstration users `U001` and `U002`
///
/// # Errors
///
/// Returns an error only if the embedded sample document is malformed.
pub fn sample_profiles() -> AppResult<Vec<Profile>> {
    parse_profiles(SAMPLE_PROFILES_JSON)
}

/// Parse profiles from JSON text
///
/// # Errors
///
/// Returns `InvalidFormat` if the text is neither a profile nor an array of
/// profiles, or if any profile fails validation.
pub fn parse_profiles(json: &str) -> AppResult<Vec<Profile>> {
    let document: Value = serde_json::from_str(json).map_err(invalid_profiles)?;
    match document {
        Value::Array(_) => serde_json::from_value(document).map_err(invalid_profiles),
        Value::Object(_) => serde_json::from_value(document)
            .map(|profile| vec![profile])
            .map_err(invalid_profiles),
        _ => Err(AppError::new(
            ErrorCode::InvalidFormat,
            "Expected a profile or a list of profiles",
        )),
    }
}

fn invalid_profiles(e: serde_json::Error) -> AppError {
    AppError::new(ErrorCode::InvalidFormat, format!("Invalid profile document: {e}"))
}

/// Load profiles from a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file and `InvalidFormat` for
/// content that does not describe profiles.
pub async fn load_profiles(path: impl AsRef<Path>) -> AppResult<Vec<Profile>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let profiles =
        parse_profiles(&contents).map_err(|e| e.with_resource_id(path.display().to_string()))?;
    debug!(path = %path.display(), count = profiles.len(), "Loaded profiles");
    Ok(profiles)
}
