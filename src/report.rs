//! Item listing and single-item lookup boxes

use crate::text::{display_width, pad_left, pad_right, repeat_char};

const NAME_HEADER: &str = "Produce Name";
const QUANTITY_HEADER: &str = "Quantity";

/// Narrowest name and quantity columns, matching the header labels
const MIN_NAME_WIDTH: usize = 12;
const MIN_QUANTITY_WIDTH: usize = 8;

/// Spaces between the name and quantity columns
const COLUMN_GAP: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    quantity: usize,
}

impl Columns {
    fn fit<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut columns = Columns {
            name: MIN_NAME_WIDTH,
            quantity: MIN_QUANTITY_WIDTH,
        };
        for (name, count) in rows {
            columns.name = columns.name.max(display_width(name));
            columns.quantity = columns.quantity.max(count.to_string().len());
        }
        columns
    }

    fn inner_width(&self) -> usize {
        self.name + COLUMN_GAP + self.quantity
    }

    fn row(&self, name: &str, quantity: &str) -> String {
        format!(
            "|{}{}{}|",
            pad_right(name, self.name),
            repeat_char(' ', COLUMN_GAP),
            pad_left(quantity, self.quantity)
        )
    }

    fn rule(&self, edge: char, fill: char) -> String {
        format!("{}{}{}", edge, repeat_char(fill, self.inner_width()), edge)
    }
}

/// Every item with its quantity, under a `Produce Name` / `Quantity` header.
pub fn list_table<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let entries: Vec<(&str, u64)> = entries.into_iter().collect();
    let columns = Columns::fit(entries.iter().copied());

    let mut lines = Vec::with_capacity(entries.len() + 4);
    lines.push(columns.rule(' ', '='));
    lines.push(columns.row(NAME_HEADER, QUANTITY_HEADER));
    lines.push(columns.rule('|', '='));
    for (name, count) in entries {
        lines.push(columns.row(name, &count.to_string()));
    }
    lines.push(columns.rule('|', '-'));
    lines
}

/// Boxed result for a single item lookup.
pub fn lookup_box(name: &str, count: u64) -> Vec<String> {
    let columns = Columns::fit([(name, count)]);
    vec![
        columns.rule(' ', '='),
        columns.row(name, &count.to_string()),
        columns.rule(' ', '-'),
    ]
}

pub fn not_found_message(name: &str) -> String {
    format!("\"{}\" not found in today's sales!", name)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
