//! Text histogram rendering
//!
//! Turns ordered `(name, count)` pairs into an aligned bar chart:
//!
//! ```text
//!  ==============
//! |  Apple | *** |
//! | Banana | *   |
//!  ==============
//! ```

mod chart;
mod style;

pub use chart::{Histogram, MAX_UNSCALED_BAR, render};
pub use style::{HistogramStyle, NameAlign};
