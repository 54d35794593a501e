use crate::structs::token_usage::TokenUsage;

#[derive(Debug, Clone, PartialEq)]
pub struct RawModelResponse {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl RawModelResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}
