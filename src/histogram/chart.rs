use crate::text::{display_width, pad_left, pad_right, repeat_char};

use super::style::{HistogramStyle, NameAlign};

/// Columns taken by the row glyphs around the name and bar fields.
/// A row is `| name | bar |`; borders are the same width.
const CHART_PADDING: usize = 5;

/// Longest bar drawn when no `max_bar_width` is configured. Counts beyond it
/// are scaled so the chart still fits in memory.
pub const MAX_UNSCALED_BAR: usize = 4096;

/// Render `entries` with the default [`HistogramStyle`].
pub fn render<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    Histogram::default().render(entries)
}

/// Bar-chart renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct Histogram {
    style: HistogramStyle,
}

impl Histogram {
    pub fn new(style: HistogramStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &HistogramStyle {
        &self.style
    }

    /// Render one row per entry, in input order, between two border lines.
    ///
    /// Entries are not sorted. An empty input renders only the borders.
    pub fn render<'a, I>(&self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let entries: Vec<(&str, u64)> = entries.into_iter().collect();

        let name_width = entries
            .iter()
            .map(|(name, _)| display_width(name))
            .max()
            .unwrap_or(0);
        let max_count = entries.iter().map(|&(_, count)| count).max().unwrap_or(0);
        let bar_field = self.bar_len(max_count, max_count);

        let chart_width = name_width
            .saturating_add(bar_field)
            .saturating_add(CHART_PADDING);
        let border = format!(" {} ", repeat_char(self.style.border, chart_width));

        let mut lines = Vec::with_capacity(entries.len() + 2);
        lines.push(border.clone());
        for &(name, count) in &entries {
            lines.push(self.row(name, count, name_width, max_count, bar_field));
        }
        lines.push(border);
        lines
    }

    fn row(
        &self,
        name: &str,
        count: u64,
        name_width: usize,
        max_count: u64,
        bar_field: usize,
    ) -> String {
        let name = match self.style.align {
            NameAlign::Right => pad_left(name, name_width),
            NameAlign::Left => pad_right(name, name_width),
        };
        let bar = repeat_char(self.style.marker, self.bar_len(count, max_count));

        format!("| {} | {} |", name, pad_right(&bar, bar_field))
    }

    /// Number of markers drawn for `count`.
    ///
    /// Unscaled unless the cap (`max_bar_width`, else [`MAX_UNSCALED_BAR`])
    /// is exceeded; scaled bars round up so a non-zero count never disappears.
    fn bar_len(&self, count: u64, max_count: u64) -> usize {
        let limit = self.style.max_bar_width.unwrap_or(MAX_UNSCALED_BAR);
        if max_count <= limit as u64 {
            return usize::try_from(count).unwrap_or(limit);
        }

        let scaled = (u128::from(count) * limit as u128).div_ceil(u128::from(max_count));
        usize::try_from(scaled).unwrap_or(limit)
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod chart_tests;
