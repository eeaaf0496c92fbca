use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bogey")]
#[command(about = "Log golf rounds hole by hole and find the mistake that costs you the most")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Golfer identity to act as
    #[arg(long, global = true, value_name = "ID")]
    pub golfer: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start, list, finish and delete rounds
    Round {
        #[command(subcommand)]
        command: RoundCommands,
    },
    /// Record and inspect holes
    Hole {
        #[command(subcommand)]
        command: HoleCommands,
    },
    /// Lifetime stats and the biggest problem
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
    /// Configure the CLI
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum RoundCommands {
    /// Start a new round
    #[command(alias = "new")]
    Start {
        /// Course name
        course: Vec<String>,
    },
    /// List recent rounds
    List {
        /// Number of rounds to show (0 uses the default)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a round with its scorecard
    Show {
        /// Round ID or unique ID prefix
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Complete a round using the totals of its logged holes
    Finish {
        /// Round ID or unique ID prefix
        id: String,
    },
    /// Delete a round and its holes
    Delete {
        /// Round ID or unique ID prefix
        id: String,
    },
    /// Delete every round you have logged
    Purge {
        /// Confirm the bulk delete
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum HoleCommands {
    /// Record a hole, replacing anything saved for it before
    Save {
        /// Round ID or unique ID prefix
        round: String,
        /// Hole number (1-18)
        number: u8,
        /// Par (3-5)
        #[arg(long)]
        par: u8,
        /// Strokes taken
        #[arg(long)]
        strokes: u32,
        #[command(flatten)]
        events: HoleEventFlags,
    },
    /// Show one recorded hole
    Show {
        /// Round ID or unique ID prefix
        round: String,
        /// Hole number (1-18)
        number: u8,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// What went wrong (or right) on a hole
#[derive(Args, Debug, Default)]
pub struct HoleEventFlags {
    /// Ended up out of position off the tee, optionally why
    #[arg(long, value_name = "REASON", num_args = 0..=1)]
    pub out_of_position: Option<Option<String>>,
    /// Missed an easy up and down, optionally why
    #[arg(long, value_name = "REASON", num_args = 0..=1)]
    pub failed_up_down: Option<Option<String>>,
    /// What caused a double bogey or worse
    #[arg(long, value_name = "CAUSE")]
    pub double_cause: Option<String>,
    /// Three-putted, optionally with the first putt distance in feet
    #[arg(long, value_name = "FEET", num_args = 0..=1)]
    pub three_putt: Option<Option<u32>>,
    /// Took a penalty, optionally of the given type (OB, water, ...)
    #[arg(long, value_name = "TYPE", num_args = 0..=1)]
    pub penalty: Option<Option<String>>,
    /// Why the penalty happened
    #[arg(long, value_name = "REASON", requires = "penalty")]
    pub penalty_reason: Option<String>,
    /// Shots taken to hole out from wedge range
    #[arg(long, value_name = "SHOTS")]
    pub wedge_shots: Option<u32>,
    /// Why wedge range took too many shots
    #[arg(long, value_name = "REASON", requires = "wedge_shots")]
    pub wedge_reason: Option<String>,
    /// Avoided a hero shot, optionally describing it
    #[arg(long, value_name = "DESCRIPTION", num_args = 0..=1)]
    pub hero_shot_avoided: Option<Option<String>>,
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Lifetime averages over every completed round
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// The most frequent problem over your recent rounds
    Problem {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Most recent completed rounds and their average score
    Recent {
        /// Number of rounds to include (0 uses the default)
        #[arg(short, long)]
        count: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Create or update the config file
    Init {
        /// Golfer identity used when --golfer and BOGEY_GOLFER are unset
        #[arg(long, value_name = "ID")]
        golfer: String,
    },
    /// Print the active configuration
    Show,
}
