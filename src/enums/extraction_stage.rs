use std::fmt;
use serde::{Deserialize, Serialize};

/// Ordered strategies used to pull a JSON payload out of model text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStage {
    Direct,
    TaggedFence,
    AnyFence,
    DelimiterScan,
    ShapeCheck,
}

impl fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionStage::Direct => "direct parse",
            ExtractionStage::TaggedFence => "json fenced block",
            ExtractionStage::AnyFence => "fenced block",
            ExtractionStage::DelimiterScan => "delimiter scan",
            ExtractionStage::ShapeCheck => "shape check",
        };
        f.write_str(name)
    }
}
