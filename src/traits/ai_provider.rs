use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::chat_request::ChatRequest;
use crate::structs::raw_model_response::RawModelResponse;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    async fn chat(&self, request: ChatRequest) -> Result<RawModelResponse, AiProviderError>;

    /// Model identifier, part of every cache key.
    fn model(&self) -> String;
}
