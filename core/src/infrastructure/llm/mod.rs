use crate::domain::{
    common::{LLMConfig, LLMProviderKind, entities::app_errors::CoreError},
    menu_generation::{ports::LLMClient, value_objects::GenerationRequest},
};

pub mod gemini_client;
pub mod openai_client;

use gemini_client::GeminiLLMClient;
use openai_client::OpenAiLLMClient;

/// The configured text-generation backend.
#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini(GeminiLLMClient),
    OpenAi(OpenAiLLMClient),
}

impl LLMProvider {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        match config.provider {
            LLMProviderKind::Gemini => {
                if config.gemini_api_key.is_empty() {
                    tracing::error!("GEMINI_API_KEY is required when LLM_PROVIDER=gemini");
                    return Err(CoreError::InternalServerError);
                }
                Ok(Self::Gemini(GeminiLLMClient::new(
                    config.gemini_api_key.clone(),
                    config.gemini_model.clone(),
                    config.max_tokens,
                    config.temperature,
                )))
            }
            LLMProviderKind::OpenAi => {
                if config.openai_api_key.is_empty() {
                    tracing::error!("OPENAI_API_KEY is required when LLM_PROVIDER=openai");
                    return Err(CoreError::InternalServerError);
                }
                Ok(Self::OpenAi(OpenAiLLMClient::new(
                    config.openai_api_key.clone(),
                    config.openai_model.clone(),
                    config.max_tokens,
                    config.temperature,
                )))
            }
        }
    }
}

impl LLMClient for LLMProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        match self {
            LLMProvider::Gemini(client) => client.generate(request).await,
            LLMProvider::OpenAi(client) => client.generate(request).await,
        }
    }
}
