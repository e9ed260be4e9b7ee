//! Persisted aggregate snapshot
//!
//! Reads back the `name count` file written by
//! [`FrequencyTable::write_to_path`](crate::FrequencyTable::write_to_path).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TallyError;
use crate::frequency::Entry;

/// Read the snapshot at `path`
///
/// # Returns
/// * `Ok(Vec<Entry>)` - Entries in file order
/// * `Err(TallyError::SourceUnavailable)` - If the file cannot be opened or read
/// * `Err(TallyError::MalformedSnapshot)` - If a line is not `name count`
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, TallyError> {
    let path = path.as_ref();
    let unavailable = |source| TallyError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unavailable)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(unavailable)?;

    parse_snapshot(&contents)
}

/// Parse snapshot text, one `name count` entry per line.
///
/// Blank lines are ignored. Each line is split at its first space.
pub fn parse_snapshot(content: &str) -> Result<Vec<Entry>, TallyError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).ok_or_else(|| malformed(idx + 1, line)))
        .collect()
}

fn parse_line(line: &str) -> Option<Entry> {
    let (name, count) = line.split_once(' ')?;
    if name.is_empty() {
        return None;
    }
    let count = count.trim_end().parse::<u64>().ok()?;
    // Counts are drawn as bars, so they must be addressable
    usize::try_from(count).ok()?;
    Some(Entry::new(name, count))
}

fn malformed(line: usize, content: &str) -> TallyError {
    TallyError::MalformedSnapshot {
        line,
        content: content.to_string(),
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
