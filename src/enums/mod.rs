pub mod ai_provider_error;
pub mod analysis_kind;
pub mod commands;
pub mod diagnostic_kind;
pub mod extraction_result;
pub mod extraction_stage;
pub mod severity;
