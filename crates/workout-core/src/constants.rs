// ABOUTME: Application constants shared by the workout planner crates
// ABOUTME: Activity descriptions, duration bounds, model defaults and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Static descriptions keyed by activity type
pub mod descriptions {
    /// Strength training description
    pub const STRENGTH_TRAINING: &str =
        "Focus on building muscle with weights or bodyweight exercises";
    /// Cardio description
    pub const CARDIO: &str = "Aerobic exercises to improve heart health and endurance";
    /// Flexibility description
    pub const FLEXIBILITY: &str = "Stretching exercises to improve range of motion";
    /// HIIT description
    pub const HIIT: &str = "High-intensity interval training for efficient calorie burn";
    /// Active recovery description
    pub const ACTIVE_RECOVERY: &str = "Light activity to promote recovery and reduce soreness";
    /// Yoga description
    pub const YOGA: &str = "Combination of strength, flexibility, and mindfulness";
    /// Swimming description
    pub const SWIMMING: &str = "Low-impact full-body workout in water";
    /// Fallback for labels outside the fixed vocabulary
    pub const CUSTOM: &str = "Custom workout";
}

/// Session length bounds in minutes
pub mod durations {
    /// Shortest session considered realistic
    pub const MIN_REALISTIC_MINUTES: u32 = 20;
    /// Longest session considered realistic
    pub const MAX_REALISTIC_MINUTES: u32 = 60;
}

/// Defaults for the language-model planner
pub mod llm_defaults {
    /// Default `OpenAI` endpoint
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default `OpenAI` model
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";
    /// Default local endpoint (Ollama)
    pub const LOCAL_BASE_URL: &str = "http://localhost:11434/v1";
    /// Default local model
    pub const LOCAL_MODEL: &str = "qwen2.5:14b-instruct";
    /// Sampling temperature for plan generation
    pub const TEMPERATURE: f32 = 0.3;
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Retries after a rate-limited or unavailable response
    pub const MAX_RETRIES: u32 = 1;
}

/// Environment variable names
pub mod env_vars {
    /// Provider selection (`openai`, `local`)
    pub const LLM_PROVIDER: &str = "WORKOUT_LLM_PROVIDER";
    /// Model override
    pub const LLM_MODEL: &str = "WORKOUT_LLM_MODEL";
    /// Sampling temperature override
    pub const LLM_TEMPERATURE: &str = "WORKOUT_LLM_TEMPERATURE";
    /// Request timeout override in seconds
    pub const LLM_TIMEOUT_SECS: &str = "WORKOUT_LLM_TIMEOUT_SECS";
    /// Transient-failure retry budget
    pub const LLM_MAX_RETRIES: &str = "WORKOUT_LLM_MAX_RETRIES";
    /// `OpenAI` API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// `OpenAI` base URL override
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Local server base URL
    pub const LOCAL_LLM_BASE_URL: &str = "LOCAL_LLM_BASE_URL";
    /// Local server API key (optional)
    pub const LOCAL_LLM_API_KEY: &str = "LOCAL_LLM_API_KEY";
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const WORKOUT_PLANNER: &str = "workout-planner";
}
