// ABOUTME: Language-model planner configuration loaded from environment variables
// ABOUTME: Endpoint, credentials, model, sampling temperature, timeouts and retry budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;
use workout_core::constants::{env_vars, llm_defaults};
use workout_core::errors::{AppError, AppResult, ErrorCode};

use super::LlmProviderType;

/// Highest temperature accepted by `OpenAI`-compatible endpoints
const MAX_TEMPERATURE: f32 = 2.0;

/// Settings for the model-backed planner
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Which provider implementation to build
    pub provider: LlmProviderType,
    /// Base URL of the chat completions API
    pub base_url: String,
    /// Bearer token, absent for keyless local servers
    pub api_key: Option<String>,
    /// Model requested for plan generation
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Extra attempts after a rate-limited or unavailable response
    pub max_retries: u32,
}

impl LlmConfig {
    /// Defaults for a provider type with no credentials
    #[must_use]
    pub fn for_provider(provider: LlmProviderType) -> Self {
        Self {
            provider,
            base_url: provider.default_base_url().to_owned(),
            api_key: None,
            model: provider.default_model().to_owned(),
            temperature: llm_defaults::TEMPERATURE,
            request_timeout: Duration::from_secs(llm_defaults::REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(llm_defaults::CONNECT_TIMEOUT_SECS),
            max_retries: llm_defaults::MAX_RETRIES,
        }
    }

    /// Load configuration from the environment
    ///
    /// A missing API key is not an error here; the provider reports it when
    /// the planner first tries to use it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let provider = LlmProviderType::from_env();
        let mut config = Self::for_provider(provider);

        let (url_var, key_var) = match provider {
            LlmProviderType::OpenAi => (env_vars::OPENAI_BASE_URL, env_vars::OPENAI_API_KEY),
            LlmProviderType::Local => (env_vars::LOCAL_LLM_BASE_URL, env_vars::LOCAL_LLM_API_KEY),
        };
        if let Some(url) = non_empty_var(url_var) {
            config.base_url = url;
        }
        config.api_key = non_empty_var(key_var);
        if let Some(model) = non_empty_var(env_vars::LLM_MODEL) {
            config.model = model;
        }
        if let Some(temperature) = parse_var::<f32>(env_vars::LLM_TEMPERATURE)? {
            if !temperature.is_finite() {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!(
                        "{} must be a finite number, got '{temperature}'",
                        env_vars::LLM_TEMPERATURE
                    ),
                ));
            }
            config.temperature = temperature.clamp(0.0, MAX_TEMPERATURE);
        }
        if let Some(secs) = parse_var::<u64>(env_vars::LLM_TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = parse_var::<u32>(env_vars::LLM_MAX_RETRIES)? {
            config.max_retries = retries;
        }

        debug!(
            provider = %config.provider,
            base_url = %config.base_url,
            model = %config.model,
            temperature = config.temperature,
            has_api_key = config.api_key.is_some(),
            "Loaded LLM configuration"
        );
        Ok(config)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::for_provider(LlmProviderType::default())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> AppResult<Option<T>> {
    non_empty_var(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{name} has invalid value '{raw}'"),
                )
            })
        })
        .transpose()
}
