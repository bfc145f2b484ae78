use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ranks videos by recency and engagement")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Read a JSON array of videos and print it sorted by score
    Rank {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Reference time for video age, e.g. 2024-01-10T00:00:00Z (defaults to now)
        #[arg(long)]
        now: Option<String>,
        /// Write single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the ranking as a table with each video's score
    Score {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Reference time for video age (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
