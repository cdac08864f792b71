//! Parser for the column aligned format table printed by `<engine> -F`.
//!
//! Column boundaries are taken from the header row only. A column starts where
//! a header word starts and ends right before the next header word, the last
//! one runs to the end of the line. Data rows are sliced at those offsets, so a
//! cell wider than its column spills into the neighbouring one.

use crate::format::FormatRecord;

struct Column {
    name: String,
    start: usize,
    end: Option<usize>,
}

/// Drops engine log lines such as `[youtube] abc: Downloading webpage`.
pub fn strip_log_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('['))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the raw `-F` output, log lines included, into format records.
pub fn parse_formats(text: &str) -> Vec<FormatRecord> {
    parse_columns(&strip_log_lines(text))
}

/// Parses a header row followed by data rows into records, one per non blank
/// data row, in input order.
pub fn parse_columns(text: &str) -> Vec<FormatRecord> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let columns = match lines.next() {
        Some(header) => header_columns(header),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let chars = line.chars().collect::<Vec<_>>();
            FormatRecord::new(
                columns
                    .iter()
                    .map(|column| (column.name.clone(), slice(&chars, column)))
                    .collect(),
            )
        })
        .collect()
}

fn header_columns(header: &str) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    let mut word = String::new();
    let mut start = 0;

    for (offset, c) in header.chars().enumerate() {
        if c.is_whitespace() {
            if !word.is_empty() {
                columns.push(Column {
                    name: std::mem::take(&mut word),
                    start,
                    end: None,
                });
            }
        } else {
            if word.is_empty() {
                start = offset;
                if let Some(previous) = columns.last_mut() {
                    previous.end = Some(offset);
                }
            }
            word.push(c);
        }
    }

    if !word.is_empty() {
        columns.push(Column {
            name: word,
            start,
            end: None,
        });
    }

    columns
}

fn slice(chars: &[char], column: &Column) -> String {
    let start = column.start.min(chars.len());
    let end = column.end.unwrap_or(chars.len()).min(chars.len());
    chars[start..end]
        .iter()
        .collect::<String>()
        .trim()
        .to_owned()
}
