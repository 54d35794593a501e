use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "codequal")]
#[clap(about = "LLM-backed code quality analysis service", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
