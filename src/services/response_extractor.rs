use serde_json::Value;
use crate::enums::extraction_result::ExtractionResult;
use crate::enums::extraction_stage::ExtractionStage;

const FENCE: &str = "```";

/// Upper bound on opening delimiters tried by the scanner before giving up.
const MAX_SCAN_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    pub tag: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome<'a> {
    Balanced(&'a str),
    Unterminated(&'a str),
    Mismatched(&'a str),
}

/// Splits the text into fenced blocks. An unclosed fence runs to the end of
/// the text.
pub fn fenced_blocks(text: &str) -> Vec<FencedBlock<'_>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(FENCE) {
        let after_fence = cursor + offset + FENCE.len();
        let rest = &text[after_fence..];

        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '#' | '.')))
            .unwrap_or(rest.len());
        let tag = &rest[..tag_len];

        let mut body_start = after_fence + tag_len;
        let line_rest = &text[body_start..];
        let line_end = line_rest.find('\n').unwrap_or(line_rest.len());
        if line_rest[..line_end].trim().is_empty() {
            body_start = (body_start + line_end + 1).min(text.len());
        }

        match text[body_start..].find(FENCE) {
            Some(close) => {
                blocks.push(FencedBlock { tag, body: &text[body_start..body_start + close] });
                cursor = body_start + close + FENCE.len();
            }
            None => {
                blocks.push(FencedBlock { tag, body: &text[body_start..] });
                break;
            }
        }
    }

    blocks
}

/// First block explicitly tagged as JSON.
pub fn first_json_block(text: &str) -> Option<FencedBlock<'_>> {
    fenced_blocks(text).into_iter().find(|block| block.tag.eq_ignore_ascii_case("json"))
}

pub fn first_block(text: &str) -> Option<FencedBlock<'_>> {
    fenced_blocks(text).into_iter().next()
}

/// Walks from an opening delimiter to its matching closer, ignoring
/// delimiters inside string literals and honouring backslash escapes.
pub fn scan_balanced(text: &str, start: usize) -> ScanOutcome<'_> {
    let mut expected_closers: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        let position = start + offset;

        if in_string {
            if escaped {
                escaped = false;
            } else if *byte == b'\\' {
                escaped = true;
            } else if *byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => expected_closers.push(b'}'),
            b'[' => expected_closers.push(b']'),
            b'}' | b']' => {
                if expected_closers.pop() != Some(*byte) {
                    return ScanOutcome::Mismatched(&text[start..=position]);
                }
                if expected_closers.is_empty() {
                    return ScanOutcome::Balanced(&text[start..=position]);
                }
            }
            _ => {}
        }
    }

    ScanOutcome::Unterminated(&text[start..])
}

/// Byte offsets of every `{` / `[` in the text, in order.
pub fn opening_positions(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.bytes()
        .enumerate()
        .filter(|(_, byte)| matches!(byte, b'{' | b'['))
        .map(|(position, _)| position)
}

/// Whether the region starts the way a JSON container does, as opposed to a
/// stray brace in prose such as `{name here`.
fn opens_json_value(region: &str) -> bool {
    let Some(body) = region.strip_prefix('{').or_else(|| region.strip_prefix('[')) else {
        return false;
    };
    let body = body.trim_start();

    if region.starts_with('{') {
        return body.starts_with(['"', '}']);
    }
    body.starts_with(['{', '[', '"', ']', '-'])
        || body.starts_with(|c: char| c.is_ascii_digit())
        || ["true", "false", "null"].iter().any(|literal| body.starts_with(*literal))
}

pub struct ResponseExtractor;

impl ResponseExtractor {

    /// Locates the JSON payload in raw model text. Never fails: every
    /// failure is described by `ExtractionResult::Unparseable`.
    pub fn extract(text: &str) -> ExtractionResult {
        let trimmed = text.trim();

        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            return Self::parsed(value, ExtractionStage::Direct);
        }

        let tagged = first_json_block(text);
        if let Some(value) = tagged.and_then(|block| serde_json::from_str::<Value>(block.body.trim()).ok()) {
            return Self::parsed(value, ExtractionStage::TaggedFence);
        }

        let untagged = first_block(text).filter(|block| Some(*block) != tagged);
        if let Some(value) = untagged.and_then(|block| serde_json::from_str::<Value>(block.body.trim()).ok()) {
            return Self::parsed(value, ExtractionStage::AnyFence);
        }

        match Self::scan_for_json(text) {
            Ok(value) => Self::parsed(value, ExtractionStage::DelimiterScan),
            Err(reason) => {
                log::debug!("🧩 No JSON payload found: {}", reason);
                ExtractionResult::Unparseable {
                    raw_text: text.to_string(),
                    stage: ExtractionStage::DelimiterScan,
                    reason,
                }
            }
        }
    }

    fn parsed(value: Value, stage: ExtractionStage) -> ExtractionResult {
        log::debug!("🧩 JSON payload extracted via {}", stage);
        ExtractionResult::Parsed { value, stage }
    }

    fn scan_for_json(text: &str) -> Result<Value, String> {
        let mut reason = "no JSON object or array delimiters found".to_string();
        // Openers nested in a rejected region would only yield fragments of it.
        let mut resume_at = 0;
        let mut attempts = 0;

        for start in opening_positions(text) {
            if start < resume_at {
                continue;
            }
            if attempts == MAX_SCAN_ATTEMPTS {
                break;
            }
            attempts += 1;

            match scan_balanced(text, start) {
                ScanOutcome::Balanced(candidate) => match serde_json::from_str::<Value>(candidate) {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        reason = format!("balanced region at byte {} is not valid JSON: {}", start, e);
                        resume_at = start + candidate.len();
                    }
                },
                ScanOutcome::Mismatched(region) => {
                    reason = format!("mismatched brackets in region starting at byte {}", start);
                    resume_at = start + region.len();
                }
                ScanOutcome::Unterminated(region) => {
                    reason = format!("unterminated JSON starting at byte {}", start);
                    // A truncated payload must not yield one of its inner values.
                    if opens_json_value(region) {
                        break;
                    }
                }
            }
        }

        Err(reason)
    }
}
