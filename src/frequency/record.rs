/// Classification of one raw line of the sales log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// A usable item name, trimmed
    Item(&'a str),
    /// Empty or whitespace-only line
    Blank,
    /// A line that cannot be stored as a single `name count` token
    Malformed,
}

impl<'a> Record<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Record::Blank;
        }

        // The snapshot format splits on the first space
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Record::Malformed;
        }

        Record::Item(trimmed)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
