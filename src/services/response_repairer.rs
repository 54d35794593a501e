use serde_json::Value;
use crate::config::constants::DIAGNOSTIC_EXCERPT_CHARS;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::diagnostic_kind::DiagnosticKind;
use crate::enums::extraction_result::ExtractionResult;
use crate::enums::extraction_stage::ExtractionStage;
use crate::services::response_extractor::{first_block, first_json_block, scan_balanced, ScanOutcome};
use crate::structs::analysis::structured_analysis::StructuredAnalysis;
use crate::structs::diagnostic::Diagnostic;
use crate::structs::resolved_analysis::ResolvedAnalysis;

pub struct ResponseRepairer;

impl ResponseRepairer {

    /// Turns an extraction result into a report. Shape mismatches and
    /// unparseable text get one repair pass; if that fails the result is a
    /// neutral report carrying a parse-error diagnostic.
    pub fn resolve(kind: AnalysisKind, raw_text: &str, extraction: ExtractionResult) -> ResolvedAnalysis {
        let (stage, reason) = match extraction {
            ExtractionResult::Parsed { value, .. } if Self::matches_shape(kind, &value) => {
                return ResolvedAnalysis {
                    analysis: StructuredAnalysis::normalize(kind, &value),
                    repaired: false,
                    fallback: false,
                };
            }
            ExtractionResult::Parsed { value, .. } => (
                ExtractionStage::ShapeCheck,
                format!("expected {} but found {}", Self::expected_shape(kind), Self::describe(&value)),
            ),
            ExtractionResult::Unparseable { stage, reason, .. } => (stage, reason),
        };

        if let Some(value) = Self::try_repair(kind, raw_text) {
            log::info!("🩹 Repaired model output for {} after {} failure", kind, stage);
            return ResolvedAnalysis {
                analysis: StructuredAnalysis::normalize(kind, &value),
                repaired: true,
                fallback: false,
            };
        }

        log::warn!("⚠️ Model output for {} could not be repaired ({}: {}), using fallback", kind, stage, reason);
        ResolvedAnalysis {
            analysis: Self::parse_failure(kind, raw_text, stage, &reason),
            repaired: false,
            fallback: true,
        }
    }

    /// Single repair pass over the region most likely to hold the payload.
    pub fn try_repair(kind: AnalysisKind, raw_text: &str) -> Option<Value> {
        let candidate = Self::candidate(kind, raw_text)?;
        let repaired = Self::repair_text(candidate);

        serde_json::from_str::<Value>(&repaired)
            .ok()
            .filter(|value| Self::matches_shape(kind, value))
    }

    /// Strips trailing commas, then appends the closer matching the opening
    /// delimiter when the text does not already end with it. Valid JSON is
    /// returned unchanged and applying the pass twice equals applying it once.
    pub fn repair_text(text: &str) -> String {
        let stripped = Self::strip_trailing_commas(text.trim());

        let closer = match stripped.chars().next() {
            Some('{') => Some('}'),
            Some('[') => Some(']'),
            _ => None,
        };

        match closer {
            Some(closer) if !stripped.ends_with(closer) => format!("{}{}", stripped, closer),
            _ => stripped,
        }
    }

    /// Removes commas that are followed (after optional whitespace and further
    /// commas) by a closing delimiter or by the end of the text. Commas inside
    /// string literals are kept.
    pub fn strip_trailing_commas(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut in_string = false;
        let mut escaped = false;

        for (index, c) in chars.iter().enumerate() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if *c == '\\' {
                    escaped = true;
                } else if *c == '"' {
                    in_string = false;
                }
                output.push(*c);
                continue;
            }

            if *c == ',' {
                let next = chars[index + 1..].iter().find(|n| !n.is_whitespace() && **n != ',');
                if matches!(next, None | Some('}') | Some(']')) {
                    continue;
                }
            }

            if *c == '"' {
                in_string = true;
            }
            output.push(*c);
        }

        output.trim_end().to_string()
    }

    pub fn matches_shape(kind: AnalysisKind, value: &Value) -> bool {
        value.is_object() || (kind.accepts_array() && value.is_array())
    }

    /// Neutral report whose only diagnostic quotes a bounded excerpt of the
    /// text that could not be parsed.
    pub fn parse_failure(kind: AnalysisKind, raw_text: &str, stage: ExtractionStage, reason: &str) -> StructuredAnalysis {
        let message = format!(
            "Failed to parse model response ({}: {}). Response excerpt: {}",
            stage,
            reason,
            Self::excerpt(raw_text, DIAGNOSTIC_EXCERPT_CHARS)
        );

        StructuredAnalysis::with_diagnostic(kind, Diagnostic::new(DiagnosticKind::ParseError, message))
    }

    pub fn excerpt(text: &str, max_chars: usize) -> String {
        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        let head: String = chars.by_ref().take(max_chars).collect();

        if chars.next().is_some() {
            format!("{}…", head)
        } else {
            head
        }
    }

    /// Fenced JSON first, then any fence, then the whole text; from there the
    /// first acceptable opening delimiter up to its matching closer, or to the
    /// end of the text when the payload is truncated.
    fn candidate(kind: AnalysisKind, raw_text: &str) -> Option<&str> {
        let sources = [
            first_json_block(raw_text).map(|block| block.body),
            first_block(raw_text).map(|block| block.body),
            Some(raw_text),
        ];

        sources.into_iter().flatten().find_map(|source| {
            let start = source.find(|c: char| c == '{' || (kind.accepts_array() && c == '['))?;
            let region = match scan_balanced(source, start) {
                ScanOutcome::Balanced(region) => region,
                ScanOutcome::Unterminated(region) | ScanOutcome::Mismatched(region) => region,
            };
            Some(region.trim())
        })
    }

    fn expected_shape(kind: AnalysisKind) -> &'static str {
        if kind.accepts_array() {
            "a JSON object or array"
        } else {
            "a JSON object"
        }
    }

    fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
