pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ranking;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::ranking::RankingService;
use crate::services::report::ScoreReportService;

pub use domain::{ScoreBreakdown, ScoredVideo, Video};
pub use errors::MalformedInputError;
pub use ranking::{calculate_score, rank_videos, rank_videos_now};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(
    input: Option<&Path>,
    output: Option<&Path>,
    now: Option<String>,
    compact: bool,
) -> Result<()> {
    let config = AppConfig::new()
        .with_reference_time(now)
        .with_pretty_output(!compact);
    let service = RankingService::new(config);
    service.run(input, output)
}

pub fn handle_score(input: Option<&Path>, now: Option<String>) -> Result<()> {
    let config = AppConfig::new().with_reference_time(now);
    let service = ScoreReportService::new(RankingService::new(config));
    service.run(input)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
