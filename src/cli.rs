//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::frequency::Entry;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sales log to count, one item per line
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Snapshot file written by `persist` and `histogram`
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/produce-tally/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a summary of the records read to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every item with its quantity sold
    List {
        /// Print a JSON array of {name, count} objects
        #[arg(long)]
        json: bool,
    },

    /// Show the quantity sold of one item
    Lookup {
        name: String,

        /// Match the name exactly, without capitalizing it first
        #[arg(long)]
        exact: bool,
    },

    /// Write the snapshot and print a histogram of it
    Histogram {
        /// Row order
        #[arg(long, value_enum, default_value_t = SortOrder::Input)]
        sort: SortOrder,

        /// Render straight from the counted log without writing the snapshot
        #[arg(long)]
        direct: bool,
    },

    /// Write the snapshot file
    Persist,
}

/// Row order for histograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// First-seen order from the sales log
    #[default]
    Input,
    /// Alphabetical by item name
    Name,
    /// Highest quantity first
    Count,
}

impl SortOrder {
    /// Sort in place; ties keep their existing order.
    pub fn apply(&self, entries: &mut [Entry]) {
        match self {
            SortOrder::Input => {}
            SortOrder::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::Count => entries.sort_by(|a, b| b.count.cmp(&a.count)),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
