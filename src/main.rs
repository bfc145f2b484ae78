use anyhow::Result;

use video_ranking::cli::Command;
use video_ranking::{handle_completions, handle_rank, handle_score, interpret};

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
        Command::Rank {
            input,
            output,
            now,
            compact,
        } => handle_rank(input.as_deref(), output.as_deref(), now.clone(), *compact),
        Command::Score { input, now } => handle_score(input.as_deref(), now.clone()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
