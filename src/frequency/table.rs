use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::slice;

use crate::error::TallyError;

use super::entry::Entry;
use super::record::Record;

/// Line counts gathered while building a [`FrequencyTable`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Lines read from the record stream
    pub records: usize,
    /// Lines that incremented a count
    pub counted: usize,
    /// Empty or whitespace-only lines
    pub blank: usize,
    /// Lines skipped as malformed
    pub malformed: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records read: {} counted, {} blank, {} malformed",
            self.records, self.counted, self.blank, self.malformed
        )
    }
}

/// Item name to occurrence count, in first-seen order.
///
/// Constructed once by [`FrequencyTable::build`] (or one of the reader
/// constructors) and never mutated afterwards. Every stored count is at
/// least 1; names that never appeared are absent rather than zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    items: Vec<(String, u64)>,
    index: HashMap<String, usize>,
    report: BuildReport,
}

impl FrequencyTable {
    /// Count every record in `records`.
    ///
    /// Blank and malformed lines are skipped; building never fails.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for line in records {
            table.count_line(line.as_ref());
        }
        table.finish();
        table
    }

    /// Count every line of `reader`.
    ///
    /// # Returns
    /// * `Ok(FrequencyTable)` - Table over the whole stream
    /// * `Err(TallyError::Io)` - If a line cannot be read (including invalid UTF-8)
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TallyError> {
        let mut table = Self::default();
        for line in reader.lines() {
            table.count_line(&line?);
        }
        table.finish();
        Ok(table)
    }

    /// Open the sales log at `path` and count it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TallyError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| source_unavailable(path, source))?;

        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            TallyError::Io(source) => source_unavailable(path, source),
            other => other,
        })
    }

    fn count_line(&mut self, line: &str) {
        self.report.records += 1;

        match Record::classify(line) {
            Record::Item(name) => {
                self.report.counted += 1;
                match self.index.get(name) {
                    Some(&slot) => self.items[slot].1 += 1,
                    None => {
                        self.index.insert(name.to_string(), self.items.len());
                        self.items.push((name.to_string(), 1));
                    }
                }
            }
            Record::Blank => self.report.blank += 1,
            Record::Malformed => {
                self.report.malformed += 1;
                log::debug!(
                    "Skipping malformed record {}: {:?}",
                    self.report.records,
                    line
                );
            }
        }
    }

    fn finish(&self) {
        log::info!("Counted {} distinct items ({})", self.len(), self.report);
    }

    /// Exact, case-sensitive count for `name`; `None` if it never appeared.
    pub fn lookup(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&slot| self.items[slot].1)
    }

    /// Iterate `(name, count)` pairs in first-seen order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.items.iter(),
        }
    }

    /// Owned copy of [`FrequencyTable::entries`].
    pub fn to_entries(&self) -> Vec<Entry> {
        self.entries().map(Entry::from).collect()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|(_, count)| count).sum()
    }

    pub fn report(&self) -> BuildReport {
        self.report
    }

    /// Write one `name count` line per entry to `sink`.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<(), TallyError> {
        for (name, count) in self.entries() {
            writeln!(sink, "{} {}", name, count)?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Replace the file at `path` with the table's snapshot.
    ///
    /// A failure leaves the table untouched; nothing is retried.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), TallyError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| persist_failed(path, source))?;

        self.write_to(BufWriter::new(file)).map_err(|e| match e {
            TallyError::Io(source) => persist_failed(path, source),
            other => other,
        })?;

        log::info!("Wrote {} items to {}", self.len(), path.display());
        Ok(())
    }
}

/// Tables are equal when they hold the same entries in the same order.
impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for FrequencyTable {}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a str, u64);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over a table's `(name, count)` pairs
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, (String, u64)>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, count)| (name.as_str(), *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

fn source_unavailable(path: &Path, source: io::Error) -> TallyError {
    TallyError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

fn persist_failed(path: &Path, source: io::Error) -> TallyError {
    TallyError::Persist {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
