use std::fmt;

use serde::{Deserialize, Serialize};

/// An owned `(name, count)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub count: u64,
}

impl Entry {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    pub fn as_pair(&self) -> (&str, u64) {
        (self.name.as_str(), self.count)
    }
}

impl From<(&str, u64)> for Entry {
    fn from((name, count): (&str, u64)) -> Self {
        Self::new(name, count)
    }
}

/// Formats as one snapshot line, without the newline
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.count)
    }
}
