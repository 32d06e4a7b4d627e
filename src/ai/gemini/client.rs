use super::types::{
    Content, GeminiError, GenerateRequest, GenerateResponse, GenerationConfig, Part,
    GEMINI_API_URL,
};
use crate::ai::TextGenerator;
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::Client;

/// Client for interacting with the Gemini API.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client with API key authentication.
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model: crate::config::DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a client from startup configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.clone()).with_model(&config.model)
    }

    /// Set the model to use for generation.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Generate content using the Gemini API.
    pub async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let url = format!("{}/{}:generateContent", GEMINI_API_URL, self.model);
        tracing::debug!("Making Gemini API request to: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!("Gemini API error ({}): {}", status, error_text);

            let error_msg = if let Ok(json) = serde_json::from_str::<serde_json::Value>(&error_text)
            {
                if let Some(message) = json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    message.to_string()
                } else {
                    error_text
                }
            } else {
                error_text
            };

            return Err(GeminiError::Api(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_msg
            )));
        }

        let body: GenerateResponse = response.json().await?;
        if let Some(usage) = &body.usage_metadata {
            tracing::debug!(
                "Gemini usage: {} prompt + {} candidate = {} tokens",
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.total_token_count
            );
        }

        Ok(body)
    }

    /// Generate text from a prompt.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: None,
            }),
        };

        let response = self.generate(request).await?;

        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| GeminiError::Parse("No text in response".into()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        GeminiClient::generate_text(self, prompt).await
    }
}
