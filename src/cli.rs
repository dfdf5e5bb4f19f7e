use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "group-skill-ranking: skill estimation from multiplayer game history")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct InputArgs {
    /// Participation table (CSV, one column per player)
    #[arg(short, long)]
    pub participation: Option<PathBuf>,
    /// Results table (CSV, same shape as the participation table)
    #[arg(short, long)]
    pub results: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Estimate skills, project every matchup and write the JSON report
    Process {
        #[command(flatten)]
        input: InputArgs,
        /// Report path (defaults to $SKILL_REPORT_PATH or skill_report.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Largest per-player skill change still counted as converged
        #[arg(long)]
        tolerance: Option<f64>,
        /// Iteration cap before giving up
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// Show expected scores, actual scores and a single update step
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl InputArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.participation {
            config.input.participation_path = path.clone();
        }
        if let Some(path) = &self.results {
            config.input.results_path = path.clone();
        }
    }
}
