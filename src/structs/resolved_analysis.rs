use crate::structs::analysis::structured_analysis::StructuredAnalysis;

/// Terminal result of turning one model reply into a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAnalysis {
    pub analysis: StructuredAnalysis,
    pub repaired: bool,
    pub fallback: bool,
}
