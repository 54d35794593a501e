use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::analysis_kind::AnalysisKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the analysis HTTP API
    Serve {
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Analyze a single source file and print the report as JSON
    Analyze {
        file: PathBuf,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long, value_enum, default_value_t = AnalysisKind::Comprehensive)]
        kind: AnalysisKind,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the configuration for mistakes
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
