//! Frequency aggregation
//!
//! The [`FrequencyTable`] is built once from a record stream and is read-only
//! afterwards. Enumeration follows first-seen order.

mod entry;
mod record;
mod table;

pub use entry::Entry;
pub use record::Record;
pub use table::{BuildReport, Entries, FrequencyTable};
