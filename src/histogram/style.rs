use serde::Deserialize;

/// Justification of the name column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameAlign {
    Left,
    #[default]
    Right,
}

/// Glyphs and sizing for a rendered histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramStyle {
    /// Character repeated in the top and bottom border lines
    pub border: char,
    /// Character repeated once per counted unit in a bar
    pub marker: char,
    pub align: NameAlign,
    /// Scale bars down so the longest is at most this many markers.
    /// `None` draws one marker per unit up to `MAX_UNSCALED_BAR`.
    pub max_bar_width: Option<usize>,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        HistogramStyle {
            border: '=',
            marker: '*',
            align: NameAlign::Right,
            max_bar_width: None,
        }
    }
}
