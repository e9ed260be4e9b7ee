//! Display-width aware padding for aligned text columns

use std::iter;

use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn repeat_char(c: char, count: usize) -> String {
    iter::repeat_n(c, count).collect()
}

/// Right-justify `s` to `width` terminal columns
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", repeat_char(' ', pad), s)
}

/// Left-justify `s` to `width` terminal columns
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, repeat_char(' ', pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left_ascii() {
        assert_eq!(pad_left("Kale", 6), "  Kale");
    }

    #[test]
    fn test_pad_right_ascii() {
        assert_eq!(pad_right("Kale", 6), "Kale  ");
    }

    #[test]
    fn test_pad_wider_than_field_is_unchanged() {
        assert_eq!(pad_left("Zucchini", 4), "Zucchini");
        assert_eq!(pad_right("Zucchini", 4), "Zucchini");
    }

    #[test]
    fn test_pad_uses_display_width_for_wide_chars() {
        // Each CJK character occupies two columns
        let padded = pad_left("梨", 4);
        assert_eq!(padded, "  梨");
        assert_eq!(display_width(&padded), 4);
    }

    #[test]
    fn test_repeat_char() {
        assert_eq!(repeat_char('*', 3), "***");
        assert_eq!(repeat_char('*', 0), "");
    }
}
