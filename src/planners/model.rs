// ABOUTME: Language-model planner with step-by-step prompting and rule-engine fallback
// ABOUTME: Retries transient provider failures and never surfaces an error to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use workout_core::constants::durations::{MAX_REALISTIC_MINUTES, MIN_REALISTIC_MINUTES};
use workout_core::constants::llm_defaults;
use workout_core::errors::{AppError, AppResult, ErrorCode};
use workout_core::models::Profile;
use workout_rules::RuleEngine;

use super::{PlanSource, PlannerOutput, WorkoutPlanner};
use crate::config::LlmConfig;
use crate::llm::{
    build_plan_prompt, get_planner_system_prompt, parse_json_reply, ChatMessage, ChatRequest,
    LlmProvider, OpenAiCompatibleProvider,
};

/// Base delay before the first retry; doubles on each further attempt
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Provider handle, or the reason one could not be built
#[derive(Clone)]
enum ProviderState {
    Ready(Arc<dyn LlmProvider>),
    Unavailable { code: ErrorCode, message: String },
}

/// Planner that asks a language model for the schedule
///
/// Every failure (missing credentials, network, HTTP status, unusable reply)
/// is logged and answered with the rule engine's plan for the same profile.
#[derive(Clone)]
pub struct ModelPlanner {
    provider: ProviderState,
    model: Option<String>,
    temperature: f32,
    max_retries: u32,
    retry_backoff: Duration,
    fallback: RuleEngine,
}

impl ModelPlanner {
    /// Create a planner over an existing provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: ProviderState::Ready(provider),
            model: None,
            temperature: llm_defaults::TEMPERATURE,
            max_retries: 0,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            fallback: RuleEngine::new(),
        }
    }

    /// Create a planner from configuration
    ///
    /// A provider that cannot be built is remembered; every plan request then
    /// falls back with that error as the reason.
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        let provider = match OpenAiCompatibleProvider::from_config(config) {
            Ok(provider) => ProviderState::Ready(Arc::new(provider)),
            Err(e) => {
                warn!("LLM provider unavailable, plans will use the rule engine: {e}");
                ProviderState::Unavailable {
                    code: e.code,
                    message: e.message,
                }
            }
        };
        Self {
            provider,
            model: Some(config.model.clone()),
            temperature: config.temperature,
            max_retries: config.max_retries,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            fallback: RuleEngine::new(),
        }
    }

    /// Create a planner from environment configuration
    #[must_use]
    pub fn from_env() -> Self {
        match LlmConfig::from_env() {
            Ok(config) => Self::from_config(&config),
            Err(e) => {
                warn!("Invalid LLM configuration, plans will use the rule engine: {e}");
                Self {
                    provider: ProviderState::Unavailable {
                        code: e.code,
                        message: e.message,
                    },
                    model: None,
                    temperature: llm_defaults::TEMPERATURE,
                    max_retries: 0,
                    retry_backoff: DEFAULT_RETRY_BACKOFF,
                    fallback: RuleEngine::new(),
                }
            }
        }
    }

    /// Override the model requested from the provider
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Retry budget and base delay for transient failures
    #[must_use]
    pub const fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff = backoff;
        self
    }

    /// Whether a provider was built
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.provider, ProviderState::Ready(_))
    }

    /// Ask the provider whether the endpoint is reachable with our credentials
    ///
    /// # Errors
    ///
    /// Returns the construction error when no provider could be built, or the
    /// provider's error when the endpoint cannot be reached.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> AppResult<bool> {
        let provider = self.provider()?;
        let healthy = provider.health_check().await?;
        info!(provider = provider.name(), healthy, "LLM health check finished");
        Ok(healthy)
    }

    fn provider(&self) -> AppResult<&Arc<dyn LlmProvider>> {
        match &self.provider {
            ProviderState::Ready(provider) => Ok(provider),
            ProviderState::Unavailable { code, message } => {
                Err(AppError::new(*code, message.clone()))
            }
        }
    }

    fn build_request(&self, profile: &Profile) -> ChatRequest {
        let request = ChatRequest::new(vec![
            ChatMessage::system(get_planner_system_prompt()),
            ChatMessage::user(build_plan_prompt(profile)),
        ])
        .with_temperature(self.temperature)
        .with_json_mode();

        match &self.model {
            Some(model) => request.with_model(model.clone()),
            None => request,
        }
    }

    async fn try_plan(&self, profile: &Profile, request_id: Uuid) -> AppResult<PlannerOutput> {
        let provider = self.provider()?;
        let request = self.build_request(profile);

        let mut attempt = 0_u32;
        let response = loop {
            match provider.complete(&request).await {
                Ok(response) => break response,
                Err(e) if is_transient(&e) && attempt < self.max_retries => {
                    let delay = self.retry_backoff.saturating_mul(2_u32.saturating_pow(attempt));
                    attempt += 1;
                    warn!(
                        %request_id,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Transient LLM failure, retrying: {e}"
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        };

        debug!(
            %request_id,
            model = %response.model,
            chars = response.content.len(),
            tokens = response.usage.map(|u| u.total_tokens),
            "Received model reply"
        );

        let mut output: PlannerOutput = parse_json_reply(&response.content)?;
        if output.weekly_schedule.is_empty() {
            return Err(AppError::new(
                ErrorCode::InvalidFormat,
                "Model returned an empty weekly schedule",
            ));
        }
        warn_on_unrealistic_durations(&output, request_id);
        output.source = PlanSource::Model;
        Ok(output)
    }
}

fn is_transient(error: &AppError) -> bool {
    matches!(
        error.code,
        ErrorCode::ExternalRateLimited | ErrorCode::ExternalServiceUnavailable
    )
}

fn warn_on_unrealistic_durations(output: &PlannerOutput, request_id: Uuid) {
    for (day, workout) in &output.weekly_schedule {
        if !(MIN_REALISTIC_MINUTES..=MAX_REALISTIC_MINUTES).contains(&workout.duration_minutes) {
            warn!(
                %request_id,
                %day,
                duration = workout.duration_minutes,
                "Model scheduled a session outside {MIN_REALISTIC_MINUTES}-{MAX_REALISTIC_MINUTES} minutes"
            );
        }
    }
}

#[async_trait]
impl WorkoutPlanner for ModelPlanner {
    fn name(&self) -> &'static str {
        "model"
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id()))]
    async fn plan(&self, profile: &Profile) -> PlannerOutput {
        let request_id = Uuid::new_v4();
        info!(%request_id, "Requesting model plan");

        match self.try_plan(profile, request_id).await {
            Ok(output) => output,
            Err(e) => {
                warn!(%request_id, error_code = ?e.code, "Model planner failed, using rule engine: {e}");
                PlannerOutput::fallback(self.fallback.plan(profile), &e.to_string())
            }
        }
    }
}
