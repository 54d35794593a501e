use reqwest::Client;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::sync::Arc;
use async_trait::async_trait;
use crate::config::constants::DEFAULT_RETRY_AFTER_SECS;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::groq::groq_message::GroqMessage;
use crate::structs::ai::groq::groq_request::GroqRequest;
use crate::structs::ai::groq::groq_response::GroqResponse;
use crate::structs::chat_request::ChatRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::raw_model_response::RawModelResponse;
use crate::structs::token_usage::TokenUsage;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GroqProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl GroqProvider {
    pub fn new(api_key: String, ai_config: &AiConfig, rate_limiter: Arc<ApiRateLimiter>) -> Self {
        Self {
            api_key,
            base_url: ai_config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: ai_config.model.clone(),
            rate_limiter,
        }
    }

    fn get_groq_messages(&self, request: &ChatRequest) -> Vec<GroqMessage> {
        let mut messages = Vec::new();

        if !request.system_prompt.is_empty() {
            messages.push(GroqMessage {
                role: "system".to_string(),
                content: request.system_prompt.clone(),
            });
        }

        messages.push(GroqMessage {
            role: "user".to_string(),
            content: request.user_prompt.clone(),
        });

        messages
    }

    fn get_request(&self, request: &ChatRequest) -> GroqRequest {
        GroqRequest {
            model: self.model.clone(),
            messages: self.get_groq_messages(request),
            max_tokens: Some(request.max_tokens),
            temperature: Some(request.temperature),
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: GroqRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    /// Seconds to wait as announced by the provider, or the default pause.
    pub fn retry_after_secs(headers: &HeaderMap) -> u64 {
        headers
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(|secs| secs.ceil() as u64)
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
    }

    pub fn error_for_status(status: u16, retry_after_secs: u64, body: String) -> AiProviderError {
        match status {
            401 | 403 => AiProviderError::AuthenticationError(body),
            429 => AiProviderError::RateLimited { retry_after_secs, message: body },
            500..=599 => AiProviderError::ServerError { status, body },
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }

    pub fn parse_completion(body: &str) -> Result<RawModelResponse, AiProviderError> {
        let response: GroqResponse = serde_json::from_str(body)
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        let raw = RawModelResponse::new(content);
        Ok(match response.usage {
            Some(usage) => raw.with_usage(TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            }),
            None => raw,
        })
    }
}

#[async_trait]
impl AiProvider for GroqProvider {

    async fn chat(&self, request: ChatRequest) -> Result<RawModelResponse, AiProviderError> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(&request);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let retry_after = Self::retry_after_secs(response.headers());
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::warn!("❌ Groq API error response (HTTP {}): {}", status, error_text);
            return Err(Self::error_for_status(status, retry_after, error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        let raw = Self::parse_completion(&body)?;
        if let Some(usage) = raw.usage {
            log::info!("🔢 Tokens used: {} prompt, {} completion", usage.prompt_tokens, usage.completion_tokens);
        }
        Ok(raw)
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}
