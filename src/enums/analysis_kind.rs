use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The analysis flavours exposed by the service, one endpoint each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    Comprehensive,
    Syntax,
    Complexity,
    Testgen,
    Improvement,
    ExecutionSimulation,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 6] = [
        AnalysisKind::Comprehensive,
        AnalysisKind::Syntax,
        AnalysisKind::Complexity,
        AnalysisKind::Testgen,
        AnalysisKind::Improvement,
        AnalysisKind::ExecutionSimulation,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisKind::Comprehensive => "comprehensive",
            AnalysisKind::Syntax => "syntax",
            AnalysisKind::Complexity => "complexity",
            AnalysisKind::Testgen => "testgen",
            AnalysisKind::Improvement => "improvement",
            AnalysisKind::ExecutionSimulation => "execution-simulation",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.slug() == slug)
    }

    /// Test generation replies may be a bare array of cases.
    pub fn accepts_array(&self) -> bool {
        matches!(self, AnalysisKind::Testgen)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AnalysisKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(&s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown analysis kind '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for kind in AnalysisKind::ALL {
            assert_eq!(kind.slug().parse::<AnalysisKind>(), Ok(kind));
        }
        assert!("lint".parse::<AnalysisKind>().is_err());
    }

    #[test]
    fn serde_uses_the_slug() {
        let json = serde_json::to_string(&AnalysisKind::ExecutionSimulation).unwrap();
        assert_eq!(json, "\"execution-simulation\"");
    }
}
