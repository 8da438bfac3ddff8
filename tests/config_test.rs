// ABOUTME: Tests for environment-driven model planner configuration
// ABOUTME: Covers provider selection, overrides, clamping, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use serial_test::serial;
use workout_planner::config::{LlmConfig, LlmProviderType};
use workout_planner::errors::ErrorCode;
use workout_planner::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};

const MANAGED_VARS: &[&str] = &[
    "WORKOUT_LLM_PROVIDER",
    "WORKOUT_LLM_MODEL",
    "WORKOUT_LLM_TEMPERATURE",
    "WORKOUT_LLM_TIMEOUT_SECS",
    "WORKOUT_LLM_MAX_RETRIES",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "LOCAL_LLM_BASE_URL",
    "LOCAL_LLM_API_KEY",
];

/// Run `f` with every planner variable cleared, restoring the previous values afterwards
fn with_clean_env<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    let saved: Vec<(&str, Option<String>)> = MANAGED_VARS
        .iter()
        .map(|name| (*name, env::var(name).ok()))
        .collect();
    for name in MANAGED_VARS {
        env::remove_var(name);
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(v) => env::set_var(name, v),
            None => env::remove_var(name),
        }
    }
    result
}

#[test]
#[serial]
fn test_defaults_select_openai() {
    with_clean_env(|| {
        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.provider, LlmProviderType::OpenAi);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert!(config.api_key.is_none());
    });
}

#[test]
#[serial]
fn test_local_provider_reads_local_variables() {
    with_clean_env(|| {
        env::set_var("WORKOUT_LLM_PROVIDER", "ollama");
        env::set_var("LOCAL_LLM_BASE_URL", "http://gpu-box:8000/v1");
        env::set_var("OPENAI_API_KEY", "sk-ignored");

        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.provider, LlmProviderType::Local);
        assert_eq!(config.base_url, "http://gpu-box:8000/v1");
        assert_eq!(config.model, "qwen2.5:14b-instruct");
        assert!(config.api_key.is_none());
    });
}

#[test]
#[serial]
fn test_overrides_and_temperature_clamp() {
    with_clean_env(|| {
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("WORKOUT_LLM_MODEL", "gpt-4o");
        env::set_var("WORKOUT_LLM_TEMPERATURE", "3.5");
        env::set_var("WORKOUT_LLM_TIMEOUT_SECS", "15");
        env::set_var("WORKOUT_LLM_MAX_RETRIES", "4");

        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 2.0);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.max_retries, 4);
    });
}

#[test]
#[serial]
fn test_invalid_number_is_config_error() {
    with_clean_env(|| {
        env::set_var("WORKOUT_LLM_TIMEOUT_SECS", "soon");
        let err = LlmConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("WORKOUT_LLM_TIMEOUT_SECS"));
    });
}

#[test]
#[serial]
fn test_non_finite_temperature_is_config_error() {
    for raw in ["NaN", "inf", "-infinity"] {
        let err = with_clean_env(|| {
            env::set_var("WORKOUT_LLM_TEMPERATURE", raw);
            LlmConfig::from_env().unwrap_err()
        });
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "value {raw}");
        assert!(err.message.contains("WORKOUT_LLM_TEMPERATURE"));
    }
}

#[test]
fn test_provider_type_parsing() {
    assert_eq!(LlmProviderType::from_str_or_default("vLLM"), LlmProviderType::Local);
    assert_eq!(LlmProviderType::from_str_or_default("openai"), LlmProviderType::OpenAi);
    assert_eq!(LlmProviderType::from_str_or_default("unknown"), LlmProviderType::OpenAi);
}

// =============================================================================
// Provider construction from configuration
// =============================================================================

#[test]
fn test_openai_requires_api_key() {
    let config = LlmConfig::for_provider(LlmProviderType::OpenAi);
    let err = OpenAiCompatibleConfig::from_llm_config(&config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[test]
fn test_openai_config_supports_json_mode() {
    let mut config = LlmConfig::for_provider(LlmProviderType::OpenAi);
    config.api_key = Some("sk-test".to_owned());
    config.request_timeout = Duration::from_secs(5);

    let provider_config = OpenAiCompatibleConfig::from_llm_config(&config).unwrap();
    assert_eq!(provider_config.provider_name, "openai");
    assert!(provider_config.capabilities.supports_json_mode());
    assert_eq!(provider_config.request_timeout, Duration::from_secs(5));

    let provider = OpenAiCompatibleProvider::new(provider_config).unwrap();
    assert_eq!(provider.name(), "openai");
    assert_eq!(provider.default_model(), "gpt-4o-mini");
}

#[test]
fn test_local_config_without_key() {
    let config = LlmConfig::for_provider(LlmProviderType::Local);
    let provider = OpenAiCompatibleProvider::from_config(&config).unwrap();
    assert_eq!(provider.name(), "ollama");
    assert_eq!(provider.display_name(), "Ollama (Local)");
    assert!(provider.config().api_key.is_none());
    assert!(!provider.capabilities().supports_json_mode());
}

#[test]
fn test_non_ollama_local_url_is_generic_local() {
    let mut config = LlmConfig::for_provider(LlmProviderType::Local);
    config.base_url = "http://localhost:8000/v1".to_owned();
    let provider_config = OpenAiCompatibleConfig::from_llm_config(&config).unwrap();
    assert_eq!(provider_config.provider_name, "local");
    assert_eq!(provider_config.base_url, "http://localhost:8000/v1");
}
