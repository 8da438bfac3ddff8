// ABOUTME: Extraction of JSON payloads from free-form model replies
// ABOUTME: Strips markdown code fences and locates the outermost JSON object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Remove a surrounding markdown code fence
///
/// Trims, drops a leading ```` ```json ```` or ```` ``` ````, drops a trailing
/// ```` ``` ````, and trims again. Text without fences is only trimmed.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    }
    if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Decode a model reply into `T`
///
/// The fence-stripped reply is tried first. If that is not JSON at all, the
/// slice between the first `{` and the last `}` is tried, which recovers
/// replies that wrap the object in a sentence of prose.
///
/// # Errors
///
/// Returns a serialization error when no JSON object can be found, or when
/// the JSON does not match `T`.
pub fn parse_json_reply<T: DeserializeOwned>(reply: &str) -> AppResult<T> {
    let body = strip_code_fences(reply);

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(original) => embedded_object(body).ok_or_else(|| {
            AppError::serialization(format!("Model reply is not valid JSON: {original}"))
        })?,
    };

    serde_json::from_value(value)
        .map_err(|e| AppError::serialization(format!("Model reply has unexpected shape: {e}")))
}

fn embedded_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
