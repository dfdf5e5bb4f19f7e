pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod matchups;
pub mod rating;
pub mod report;
pub mod services;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, InputArgs};

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::inspection::InspectionService;
use crate::services::processing::ProcessingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_process(
    input: &InputArgs,
    output: Option<&PathBuf>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
) -> Result<()> {
    let mut config = AppConfig::new();
    input.apply(&mut config);

    if let Some(path) = output {
        config.input.report_path = path.clone();
    }
    if let Some(tolerance) = tolerance {
        config.solver.convergence_tolerance = tolerance;
    }
    if let Some(max_iterations) = max_iterations {
        config.solver.max_iterations = max_iterations;
    }

    let service = ProcessingService::new(config);
    service.run()
}

pub fn handle_inspect(input: &InputArgs) -> Result<()> {
    let mut config = AppConfig::new();
    input.apply(&mut config);

    let service = InspectionService::new(config);
    service.run()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    write_completions(shell, &mut std::io::stdout());
    Ok(())
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_cover_subcommands() {
        let mut buffer = Vec::new();
        write_completions(Shell::Bash, &mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("group_skill_ranking"));
        assert!(script.contains("process"));
        assert!(script.contains("inspect"));
    }
}
