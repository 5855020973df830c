use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_generation::{ports::LLMClient, value_objects::GenerationRequest},
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    max_output_tokens: u32,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    /// First part of the first candidate, or empty when the model returned nothing.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default()
    }
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            api_key,
            model_name,
            max_output_tokens,
            temperature,
            client: Client::new(),
        }
    }

    fn build_request(&self, request: GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_prompt,
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.user_prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema,
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model_name, self.api_key
        );
        let timeout = request.timeout;

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(&self.build_request(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode Gemini response envelope: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read LLM response: {}", e))
        })?;

        Ok(gemini_response.into_text())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_layout() {
        let client = GeminiLLMClient::new("key".to_string(), "gemini-2.0-flash".to_string(), 8000, 0.7);
        let request = client.build_request(GenerationRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            response_schema: json!({"type": "object"}),
            timeout: Duration::from_secs(30),
        });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["system_instruction"]["parts"][0]["text"], "system");
        assert!(body["system_instruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "user");
        assert_eq!(
            body["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert_eq!(body["generation_config"]["max_output_tokens"], 8000);
        assert_eq!(body["generation_config"]["response_schema"]["type"], "object");
    }

    #[test]
    fn test_first_candidate_text_is_returned() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"days\": []}"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(response.into_text(), "{\"days\": []}");
    }

    #[test]
    fn test_missing_candidates_yield_empty_text() {
        let blocked: GeminiResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(blocked.into_text(), "");

        let no_content: GeminiResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}))
                .unwrap();
        assert_eq!(no_content.into_text(), "");
    }
}
