use serde::Deserialize;
use crate::structs::config_overrides::ConfigOverrides;

/// Body accepted by the analysis endpoints. Fields are optional so that
/// missing ones can be reported as a 400 instead of a body rejection.
#[derive(Debug, Deserialize, Default)]
pub struct AnalyzePayload {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub config: Option<ConfigOverrides>,
}
