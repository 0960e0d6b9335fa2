//! CLI argument definitions using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::SearchPreference;

/// Venue seat allocation: contiguous blocks, lodges with VIP reserve, seasonal row exclusion
#[derive(Parser, Debug)]
#[command(name = "seatalloc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reserve contiguous seats
    Reserve {
        /// Number of places
        #[arg(short, long)]
        places: u32,

        /// orchestra, parterre or balcony
        #[arg(short, long)]
        location: String,

        /// Row scan order (default: from config)
        #[arg(short, long, value_enum)]
        search_preference: Option<ScanOrder>,

        /// Balcony only: lodges or nothing
        #[arg(long)]
        lodge_only: bool,

        /// Venue file (overrides venue_file from config)
        #[arg(long, value_hint = ValueHint::FilePath)]
        venue: Option<PathBuf>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the ticket as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Template,

    /// Show global config path
    Path,
}

/// Row scan order as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOrder {
    BackToFront,
    FrontToBack,
}

impl From<ScanOrder> for SearchPreference {
    fn from(order: ScanOrder) -> Self {
        match order {
            ScanOrder::BackToFront => SearchPreference::BackToFront,
            ScanOrder::FrontToBack => SearchPreference::FrontToBack,
        }
    }
}
