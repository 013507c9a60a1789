//! Table-spec parser: tab-separated text → ordered [`Row`] sequence.
//!
//! Strict by design: a non-blank line that does not match
//! `index<TAB>name[<TAB>value]`, or an index that breaks the contiguous
//! 1,2,3,... sequence, fails the whole parse. A silently dropped row would
//! produce a codec that is wire-incompatible with HPACK peers.

use thiserror::Error;

use crate::table::Row;

/// Errors produced by the table parser.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed table row at line {line}: {text:?}")]
    MalformedRow { line: usize, text: String },
    #[error("non-contiguous index at line {line}: expected {expected}, found {found}")]
    NonContiguousIndex {
        line: usize,
        expected: u16,
        found: u16,
    },
}

/// Parse spec text into rows. Blank lines are skipped; leading/trailing
/// whitespace (including a trailing delimiter on name-only rows) is stripped
/// before matching. Row order is preserved and indices must count up from 1.
pub fn parse_table(text: &str) -> Result<Vec<Row>, ParseError> {
    let mut rows = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = line_no + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let row = parse_row(trimmed).ok_or_else(|| ParseError::MalformedRow {
            line,
            text: raw.to_string(),
        })?;

        let expected = rows.len() as u16 + 1;
        if row.index != expected {
            return Err(ParseError::NonContiguousIndex {
                line,
                expected,
                found: row.index,
            });
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Match one trimmed, non-empty line against `index<TAB>name[<TAB>value]`.
fn parse_row(line: &str) -> Option<Row> {
    let mut fields = line.splitn(3, '\t');

    let index_field = fields.next()?;
    if !index_field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u16 = index_field.parse().ok()?;
    let name = fields.next()?;
    if name.is_empty() {
        return None;
    }
    // Third field is optional; absent means a name-only entry. A fourth
    // delimiter would end up inside the remainder, so reject it here.
    let value = fields.next().unwrap_or("");
    if value.contains('\t') {
        return None;
    }

    Some(Row {
        index,
        name: name.to_string(),
        value: value.to_string(),
    })
}
