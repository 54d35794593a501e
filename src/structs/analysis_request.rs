use crate::enums::analysis_kind::AnalysisKind;
use crate::structs::config_overrides::ConfigOverrides;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub source_code: String,
    pub language: String,
    pub kind: AnalysisKind,
    pub config_overrides: ConfigOverrides,
}

impl AnalysisRequest {
    pub fn new(source_code: impl Into<String>, language: impl Into<String>, kind: AnalysisKind) -> Self {
        Self {
            source_code: source_code.into(),
            language: language.into(),
            kind,
            config_overrides: ConfigOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, config_overrides: ConfigOverrides) -> Self {
        self.config_overrides = config_overrides;
        self
    }
}
