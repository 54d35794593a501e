use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use codequal::enums::ai_provider_error::AiProviderError;
use codequal::services::analysis_service::AnalysisService;
use codequal::services::response_cache::ResponseCache;
use codequal::structs::chat_request::ChatRequest;
use codequal::structs::config::ai_config::AiConfig;
use codequal::structs::raw_model_response::RawModelResponse;
use codequal::traits::ai_provider::AiProvider;

/// Answers every call with the same scripted reply and counts calls.
pub struct CountingProvider {
    reply: Result<String, AiProviderError>,
    calls: AtomicUsize,
}

impl CountingProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for CountingProvider {
    async fn chat(&self, _request: ChatRequest) -> Result<RawModelResponse, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map(RawModelResponse::new)
    }

    fn model(&self) -> String {
        "fake-model".to_string()
    }
}

pub fn test_config() -> AiConfig {
    AiConfig {
        request_timeout_secs: 2,
        max_retries: 1,
        retry_backoff_ms: 1,
        ..AiConfig::default()
    }
}

pub fn service_with(provider: Arc<CountingProvider>, cache_capacity: Option<usize>) -> AnalysisService {
    let cache = cache_capacity.map(|capacity| Arc::new(ResponseCache::new(capacity)));
    AnalysisService::new(provider, cache, test_config())
}
