//! Command runner
//!
//! Binds the parsed [`Cli`] to the frequency table, snapshot, report and
//! histogram operations. All output goes to the supplied writers.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Cli, Command};
use crate::config::{Config, LookupCase};
use crate::error::TallyError;
use crate::frequency::{Entry, FrequencyTable};
use crate::histogram::{Histogram, HistogramStyle};
use crate::report;
use crate::snapshot::read_snapshot;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// A looked-up item was not in the sales log
    NotFound,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::from(1),
        }
    }
}

/// Effective settings: command-line flags over config over defaults
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lookup_case: LookupCase,
    pub style: HistogramStyle,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Settings {
            input: cli.input.clone().unwrap_or_else(|| config.files.input.clone()),
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| config.files.output.clone()),
            lookup_case: config.lookup.case,
            style: config.histogram.style(),
        }
    }
}

pub fn run<W: Write, E: Write>(
    cli: &Cli,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<Outcome, TallyError> {
    let settings = Settings::resolve(cli, config);
    let table = FrequencyTable::from_path(&settings.input)?;

    if cli.verbose {
        writeln!(err, "{}: {}", settings.input.display(), table.report())?;
    }

    match &cli.command {
        Command::List { json } => {
            if *json {
                serde_json::to_writer_pretty(&mut *out, &table.to_entries())
                    .map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                write_lines(out, &report::list_table(table.entries()))?;
            }
        }
        Command::Lookup { name, exact } => {
            let case = if *exact {
                LookupCase::Exact
            } else {
                settings.lookup_case
            };
            let name = case.apply(name.trim());

            match table.lookup(&name) {
                Some(count) => write_lines(out, &report::lookup_box(&name, count))?,
                None => {
                    writeln!(out, "{}", report::not_found_message(&name))?;
                    return Ok(Outcome::NotFound);
                }
            }
        }
        Command::Histogram { sort, direct } => {
            let mut entries = if *direct {
                table.to_entries()
            } else {
                table.write_to_path(&settings.output)?;
                read_snapshot(&settings.output)?
            };
            sort.apply(&mut entries);

            let chart = Histogram::new(settings.style).render(entries.iter().map(Entry::as_pair));
            write_lines(out, &chart)?;
        }
        Command::Persist => {
            table.write_to_path(&settings.output)?;
            let location =
                std::path::absolute(&settings.output).unwrap_or_else(|_| settings.output.clone());
            writeln!(
                out,
                "Wrote {} items to {}",
                table.len(),
                location.display()
            )?;
        }
    }

    Ok(Outcome::Success)
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
