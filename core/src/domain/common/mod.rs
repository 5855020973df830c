use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MenuforgeConfig {
    pub llm: LLMConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LLMProviderKind {
    Gemini,
    OpenAi,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProviderKind,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub request_timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub menu_generations_per_window: u32,
    pub alternatives_per_window: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(60 * 60),
            menu_generations_per_window: 10,
            alternatives_per_window: 30,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
