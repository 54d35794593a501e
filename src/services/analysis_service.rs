use std::sync::Arc;
use chrono::Utc;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{sleep_duration_millis, timeout_duration_secs, GROQ_PROVIDER};
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::diagnostic_kind::DiagnosticKind;
use crate::errors::{CodeQualityError, CodeQualityResult};
use crate::services::ai_providers::groq::GroqProvider;
use crate::services::prompt_builder::PromptBuilder;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::services::response_cache::ResponseCache;
use crate::services::response_extractor::ResponseExtractor;
use crate::services::response_repairer::ResponseRepairer;
use crate::structs::analysis::structured_analysis::StructuredAnalysis;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::chat_request::ChatRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;
use crate::structs::diagnostic::Diagnostic;
use crate::structs::raw_model_response::RawModelResponse;
use crate::structs::token_usage::TokenUsage;
use crate::traits::ai_provider::AiProvider;

/// Runs one analysis end to end: cache, provider call with retry and
/// timeout, extraction, repair, and the fallbacks around them.
pub struct AnalysisService {
    provider: Arc<dyn AiProvider>,
    cache: Option<Arc<ResponseCache>>,
    ai_config: AiConfig,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn AiProvider>, cache: Option<Arc<ResponseCache>>, ai_config: AiConfig) -> Self {
        Self {
            provider,
            cache,
            ai_config,
        }
    }

    /// Wires the Groq provider, throttle and cache from configuration.
    /// Fails when the API key is missing.
    pub fn from_config(config: &Config) -> CodeQualityResult<Self> {
        if config.ai.provider != GROQ_PROVIDER {
            return Err(CodeQualityError::config_error(
                &format!("unsupported provider '{}'", config.ai.provider),
                Some("ai.provider"),
                Some("Set provider = \"groq\""),
            ));
        }

        let api_key = ConfigManager::api_key(&config.ai)?;
        let rate_limiter = Arc::new(ApiRateLimiter::new(config.ai.requests_per_minute));
        let provider = Arc::new(GroqProvider::new(api_key, &config.ai, rate_limiter));

        let cache = if config.cache.enabled {
            log::info!("🗃️ Response cache enabled with capacity {}", config.cache.capacity);
            Some(Arc::new(ResponseCache::new(config.cache.capacity)))
        } else {
            None
        };

        Ok(Self::new(provider, cache, config.ai.clone()))
    }

    pub fn cache(&self) -> Option<&Arc<ResponseCache>> {
        self.cache.as_ref()
    }

    /// Rejects requests the pipeline must never see.
    pub fn validate(request: &AnalysisRequest) -> CodeQualityResult<()> {
        if request.source_code.trim().is_empty() {
            return Err(CodeQualityError::validation_error("code", "", "must not be empty", Some("Send the source code to analyze")));
        }
        if request.language.trim().is_empty() {
            return Err(CodeQualityError::validation_error("language", "", "must not be empty", Some("Send a language name such as \"python\"")));
        }
        Ok(())
    }

    /// Only request-shape errors and provider rate limits come back as
    /// `Err`; every other failure yields a fallback report.
    pub async fn analyze(&self, request: &AnalysisRequest) -> CodeQualityResult<AnalysisOutcome> {
        Self::validate(request)?;

        let kind = request.kind;
        let model = self.provider.model();
        let key = ResponseCache::fingerprint(&model, request);

        if let Some(raw) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            log::info!("🎯 Cache hit for {} analysis ({})", kind, request.language);
            return Ok(Self::resolve(request, &raw, true, None, model));
        }

        let chat = PromptBuilder::build(request, &self.ai_config);

        match self.call_with_retry(chat).await {
            Ok(raw) => {
                let outcome = Self::resolve(request, &raw, false, raw.usage, model);
                // Replies that only produced a fallback are not replayed.
                match &self.cache {
                    Some(cache) if !outcome.fallback => {
                        log::debug!("🗃️ Cache miss stored for {}", key);
                        cache.put(key, raw);
                    }
                    _ => {}
                }
                Ok(outcome)
            }
            Err(AiProviderError::RateLimited { retry_after_secs, message }) => {
                log::warn!("🚦 Provider rate limit hit, retry after {}s", retry_after_secs);
                Err(CodeQualityError::rate_limited(GROQ_PROVIDER, retry_after_secs, &message))
            }
            Err(AiProviderError::Timeout(secs)) => {
                log::warn!("⏱️ Provider call for {} timed out after {}s, using fallback", kind, secs);
                let diagnostic = Diagnostic::new(
                    DiagnosticKind::Timeout,
                    format!("The model did not answer within {} seconds", secs),
                );
                Ok(Self::outcome(StructuredAnalysis::with_diagnostic(kind, diagnostic), true, false, None, model))
            }
            Err(e) => {
                log::error!("❌ Provider unavailable for {} analysis: {}", kind, e);
                Ok(Self::outcome(StructuredAnalysis::unavailable(kind, &e.to_string()), true, false, None, model))
            }
        }
    }

    fn resolve(
        request: &AnalysisRequest,
        raw: &RawModelResponse,
        cached: bool,
        usage: Option<TokenUsage>,
        model: String,
    ) -> AnalysisOutcome {
        let extraction = ResponseExtractor::extract(&raw.text);
        let resolved = ResponseRepairer::resolve(request.kind, &raw.text, extraction);

        Self::outcome(resolved.analysis, resolved.fallback, cached, usage, model)
    }

    fn outcome(
        analysis: StructuredAnalysis,
        fallback: bool,
        cached: bool,
        usage: Option<TokenUsage>,
        model: String,
    ) -> AnalysisOutcome {
        AnalysisOutcome {
            analysis,
            fallback,
            cached,
            usage,
            model,
            generated_at: Utc::now(),
        }
    }

    /// Provider call bounded by the configured timeout. Transient failures
    /// are retried with a fixed pause; timeouts and rate limits are not.
    async fn call_with_retry(&self, chat: ChatRequest) -> Result<RawModelResponse, AiProviderError> {
        let timeout_secs = self.ai_config.request_timeout_secs;
        let max_retries = self.ai_config.max_retries;
        let mut attempt = 0;

        loop {
            let call = self.provider.chat(chat.clone());
            let result = match tokio::time::timeout(timeout_duration_secs(timeout_secs), call).await {
                Ok(result) => result,
                Err(_) => Err(AiProviderError::Timeout(timeout_secs)),
            };

            match result {
                Err(e) if e.is_transient() && attempt < max_retries => {
                    attempt += 1;
                    log::warn!("🔄 Transient provider failure ({}), retry {}/{}", e, attempt, max_retries);
                    tokio::time::sleep(sleep_duration_millis(self.ai_config.retry_backoff_ms)).await;
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::enums::analysis_kind::AnalysisKind;
    use crate::traits::ai_provider::MockAiProvider;

    fn fast_config() -> AiConfig {
        AiConfig {
            request_timeout_secs: 1,
            retry_backoff_ms: 1,
            ..AiConfig::default()
        }
    }

    fn mock_with_model() -> MockAiProvider {
        let mut mock = MockAiProvider::new();
        mock.expect_model().return_const("test-model".to_string());
        mock
    }

    fn service(mock: MockAiProvider, cache: bool) -> AnalysisService {
        let cache = if cache { Some(Arc::new(ResponseCache::new(8))) } else { None };
        AnalysisService::new(Arc::new(mock), cache, fast_config())
    }

    fn syntax_request() -> AnalysisRequest {
        AnalysisRequest::new("print('hi')", "python", AnalysisKind::Syntax)
    }

    #[tokio::test]
    async fn identical_requests_reach_the_provider_once() {
        let mut mock = mock_with_model();
        mock.expect_chat()
            .times(1)
            .returning(|_| Ok(RawModelResponse::new(r#"{"errors": [], "warnings": [], "suggestions": ["ok"]}"#)));
        let service = service(mock, true);

        let first = service.analyze(&syntax_request()).await.unwrap();
        let second = service.analyze(&syntax_request()).await.unwrap();

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.analysis, second.analysis);
    }

    #[tokio::test]
    async fn transient_failures_are_retried_then_succeed() {
        let mut mock = mock_with_model();
        let mut seq = mockall::Sequence::new();
        mock.expect_chat()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(AiProviderError::ServerError { status: 502, body: "bad gateway".into() }));
        mock.expect_chat()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(RawModelResponse::new(r#"{"errors": []}"#)));

        let outcome = service(mock, false).analyze(&syntax_request()).await.unwrap();
        assert!(!outcome.fallback);
    }

    #[tokio::test]
    async fn exhausted_retries_degrade_to_static_fallback() {
        let mut mock = mock_with_model();
        mock.expect_chat()
            .times(3)
            .returning(|_| Err(AiProviderError::NetworkError("connection refused".into())));

        let outcome = service(mock, true).analyze(&syntax_request()).await.unwrap();

        assert!(outcome.fallback);
        assert_eq!(outcome.analysis.diagnostics()[0].kind, DiagnosticKind::UpstreamUnavailable);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let mut mock = mock_with_model();
        mock.expect_chat()
            .times(2)
            .returning(|_| Err(AiProviderError::AuthenticationError("invalid key".into())));
        let service = service(mock, true);

        service.analyze(&syntax_request()).await.unwrap();
        service.analyze(&syntax_request()).await.unwrap();

        assert!(service.cache().map(|cache| cache.is_empty()).unwrap_or(false));
    }

    #[tokio::test]
    async fn unparseable_replies_are_not_replayed_from_cache() {
        let mut mock = mock_with_model();
        let mut seq = mockall::Sequence::new();
        mock.expect_chat()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(RawModelResponse::new("Sorry, I cannot help with that.")));
        mock.expect_chat()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(RawModelResponse::new(r#"{"errors": [], "warnings": [], "suggestions": []}"#)));
        let service = service(mock, true);

        let first = service.analyze(&syntax_request()).await.unwrap();
        let second = service.analyze(&syntax_request()).await.unwrap();
        let third = service.analyze(&syntax_request()).await.unwrap();

        assert!(first.fallback);
        assert!(!first.cached);
        assert!(!second.fallback);
        assert!(!second.cached);
        assert!(third.cached);
        assert!(!third.fallback);
    }

    #[tokio::test]
    async fn rate_limits_short_circuit_without_retry() {
        let mut mock = mock_with_model();
        mock.expect_chat()
            .times(1)
            .returning(|_| Err(AiProviderError::RateLimited { retry_after_secs: 12, message: "slow down".into() }));

        let err = service(mock, false).analyze(&syntax_request()).await.unwrap_err();

        assert!(matches!(err, CodeQualityError::RateLimited { retry_after_secs: 12, .. }));
        assert_eq!(err.status_code(), 429);
    }

    #[tokio::test]
    async fn malformed_output_becomes_parse_error_fallback() {
        let mut mock = mock_with_model();
        mock.expect_chat().times(1).returning(|_| Ok(RawModelResponse::new(r#"{"errors": ["#)));

        let outcome = service(mock, false).analyze(&syntax_request()).await.unwrap();

        assert!(outcome.fallback);
        let diagnostics = outcome.analysis.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::ParseError);
        assert!(diagnostics[0].message.contains(r#"{"errors": ["#));
    }

    #[tokio::test]
    async fn empty_code_is_rejected_before_the_provider() {
        let mut mock = MockAiProvider::new();
        mock.expect_chat().times(0);
        mock.expect_model().times(0);

        let request = AnalysisRequest::new("   ", "python", AnalysisKind::Syntax);
        let err = service(mock, false).analyze(&request).await.unwrap_err();

        assert_eq!(err.status_code(), 400);
    }

    struct SlowProvider;

    #[async_trait]
    impl AiProvider for SlowProvider {
        async fn chat(&self, _request: ChatRequest) -> Result<RawModelResponse, AiProviderError> {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Ok(RawModelResponse::new("{}"))
        }

        fn model(&self) -> String {
            "slow".to_string()
        }
    }

    #[tokio::test]
    async fn timeouts_follow_the_fallback_path() {
        let service = AnalysisService::new(Arc::new(SlowProvider), None, fast_config());

        let outcome = service.analyze(&syntax_request()).await.unwrap();

        assert!(outcome.fallback);
        assert!(matches!(outcome.analysis, StructuredAnalysis::Syntax(_)));
        assert_eq!(outcome.analysis.diagnostics()[0].kind, DiagnosticKind::Timeout);
    }
}
