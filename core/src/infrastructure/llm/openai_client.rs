use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_generation::{ports::LLMClient, value_objects::GenerationRequest},
};

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completions backend. JSON mode only; the response schema is carried by the prompt.
#[derive(Debug, Clone)]
pub struct OpenAiLLMClient {
    api_key: String,
    model_name: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
    }
}

impl OpenAiLLMClient {
    pub fn new(api_key: String, model_name: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            api_key,
            model_name,
            max_tokens,
            temperature,
            client: Client::new(),
        }
    }

    fn build_request(&self, request: GenerationRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl LLMClient for OpenAiLLMClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        let timeout = request.timeout;

        let response = self
            .client
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .json(&self.build_request(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode OpenAI response envelope: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read LLM response: {}", e))
        })?;

        Ok(completion.into_text())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_uses_json_mode() {
        let client = OpenAiLLMClient::new("sk".to_string(), "gpt-4o-mini".to_string(), 8000, 0.7);
        let body = serde_json::to_value(client.build_request(GenerationRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            response_schema: json!({}),
            timeout: Duration::from_secs(30),
        }))
        .unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["max_tokens"], 8000);
    }

    #[test]
    fn test_content_extraction() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "{}"}}]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "{}");

        let refused: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null, "refusal": "no"}}]
        }))
        .unwrap();
        assert_eq!(refused.into_text(), "");

        let empty: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.into_text(), "");
    }
}
