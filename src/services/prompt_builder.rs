use crate::prompts::language_guidance::guidance_for;
use crate::prompts::output_schemas::schema_for;
use crate::prompts::system_prompt::SYSTEM_PROMPT;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::chat_request::ChatRequest;
use crate::structs::config::ai_config::AiConfig;

pub struct PromptBuilder;

impl PromptBuilder {

    /// Builds the instruction text for a request. Pure and infallible; the
    /// source code is embedded verbatim, even when empty.
    pub fn build_user_prompt(request: &AnalysisRequest) -> String {
        let fence_tag = Self::fence_tag(&request.language);
        let fence = Self::fence_for(&request.source_code);

        format!(
            "{schema}\n\nLANGUAGE: {language}\nLANGUAGE GUIDANCE: {guidance}\n\nCODE:\n{fence}{fence_tag}\n{code}\n{fence}\n\nRespond with the JSON document only.",
            schema = schema_for(request.kind),
            language = request.language,
            guidance = guidance_for(&request.language),
            fence = fence,
            fence_tag = fence_tag,
            code = request.source_code,
        )
    }

    /// Combines the prompt with sampling settings, applying per-request
    /// overrides over the configured defaults.
    pub fn build(request: &AnalysisRequest, ai_config: &AiConfig) -> ChatRequest {
        let overrides = &request.config_overrides;

        ChatRequest {
            system_prompt: overrides
                .system_prompt
                .as_deref()
                .filter(|prompt| !prompt.trim().is_empty())
                .unwrap_or(SYSTEM_PROMPT)
                .trim()
                .to_string(),
            user_prompt: Self::build_user_prompt(request),
            temperature: overrides.temperature.unwrap_or(ai_config.temperature).clamp(0.0, 2.0),
            max_tokens: overrides.max_tokens.filter(|t| *t > 0).unwrap_or(ai_config.max_tokens),
        }
    }

    /// Backtick fence one longer than the longest backtick run in the code,
    /// and never shorter than three.
    fn fence_for(code: &str) -> String {
        let longest_run = code
            .split(|c: char| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);

        "`".repeat(longest_run.max(2) + 1)
    }

    fn fence_tag(language: &str) -> String {
        language
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '-'))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::analysis_kind::AnalysisKind;
    use crate::prompts::language_guidance::GENERIC_GUIDANCE;
    use crate::structs::config_overrides::ConfigOverrides;

    #[test]
    fn embeds_code_in_a_language_tagged_fence() {
        let request = AnalysisRequest::new("print('hi')", "Python", AnalysisKind::Syntax);
        let prompt = PromptBuilder::build_user_prompt(&request);

        assert!(prompt.contains("```python\nprint('hi')\n```"));
        assert!(prompt.contains("\"errors\""));
        assert!(prompt.contains("PEP 8"));
    }

    #[test]
    fn code_containing_a_fence_gets_a_longer_one() {
        let code = "doc = \"\"\"\n```python\nx = 1\n```\n\"\"\"";
        let request = AnalysisRequest::new(code, "python", AnalysisKind::Syntax);
        let prompt = PromptBuilder::build_user_prompt(&request);

        assert!(prompt.contains(&format!("````python\n{}\n````", code)));
        assert_eq!(PromptBuilder::fence_for("a ````` b"), "``````");
        assert_eq!(PromptBuilder::fence_for("no ticks"), "```");
    }

    #[test]
    fn unknown_language_uses_generic_guidance() {
        let request = AnalysisRequest::new("x", "cobol", AnalysisKind::Comprehensive);
        assert!(PromptBuilder::build_user_prompt(&request).contains(GENERIC_GUIDANCE));
    }

    #[test]
    fn empty_code_is_passed_through() {
        let request = AnalysisRequest::new("", "rust", AnalysisKind::Complexity);
        assert!(PromptBuilder::build_user_prompt(&request).contains("```rust\n\n```"));
    }

    #[test]
    fn overrides_take_precedence_over_config() {
        let ai_config = AiConfig::default();
        let request = AnalysisRequest::new("x", "go", AnalysisKind::Testgen).with_overrides(ConfigOverrides {
            temperature: Some(0.9),
            max_tokens: Some(512),
            system_prompt: Some("Be terse.".to_string()),
        });

        let chat = PromptBuilder::build(&request, &ai_config);

        assert_eq!(chat.system_prompt, "Be terse.");
        assert_eq!(chat.temperature, 0.9);
        assert_eq!(chat.max_tokens, 512);
    }

    #[test]
    fn defaults_come_from_config() {
        let ai_config = AiConfig::default();
        let request = AnalysisRequest::new("x", "go", AnalysisKind::Testgen);

        let chat = PromptBuilder::build(&request, &ai_config);

        assert!(chat.system_prompt.starts_with("You are an expert code reviewer"));
        assert_eq!(chat.max_tokens, ai_config.max_tokens);
    }
}
