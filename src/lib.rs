//! Produce sales tally
//!
//! Builds a per-item frequency table from a sales log (one item per line),
//! answers lookups against it, persists it as a `name count` snapshot and
//! renders text histograms and listings.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod histogram;
pub mod report;
pub mod snapshot;
mod text;

pub use error::TallyError;
pub use frequency::{BuildReport, Entries, Entry, FrequencyTable, Record};
pub use histogram::{Histogram, HistogramStyle, NameAlign, render};
pub use snapshot::{parse_snapshot, read_snapshot};
