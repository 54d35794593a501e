pub mod ai_providers;
pub mod analysis_service;
pub mod prompt_builder;
pub mod rate_limiter;
pub mod response_cache;
pub mod response_extractor;
pub mod response_repairer;
