use anyhow::Result;

use group_skill_ranking::cli::Command;
use group_skill_ranking::{handle_completions, handle_inspect, handle_process, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Process {
            input,
            output,
            tolerance,
            max_iterations,
        } => handle_process(input, output.as_ref(), *tolerance, *max_iterations),
        Command::Inspect { input } => handle_inspect(input),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
