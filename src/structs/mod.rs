pub mod ai;
pub mod analysis;
pub mod analysis_outcome;
pub mod analysis_request;
pub mod analyze_payload;
pub mod cache_entry;
pub mod chat_request;
pub mod cli;
pub mod config;
pub mod config_overrides;
pub mod diagnostic;
pub mod raw_model_response;
pub mod resolved_analysis;
pub mod token_usage;
