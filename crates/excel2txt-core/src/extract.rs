//! Sheet extraction: turns a worksheet's raw rows into a cleaned header and
//! the data records worth writing.

use crate::cell::CellValue;
use crate::error::{ExtractError, Result};
use crate::normalize::normalize;

/// A worksheet reduced to its output form.
///
/// `records` are aligned with `headers`: every record has exactly
/// `headers.len()` fields, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// Reduces a worksheet to its output table.
///
/// The first row becomes the header after trailing absent cells are trimmed
/// (interior absent cells stay as placeholder columns). Data rows are
/// truncated or padded to the header width, rendered to text, and dropped
/// entirely when every field is empty.
///
/// Returns `Ok(None)` for a worksheet that cannot contribute output: no rows
/// at all, or a header that trims to zero width.
///
/// # Errors
///
/// Returns [`ExtractError::DuplicateHeader`] when two non-placeholder header
/// cells end up with the same name. The original tool silently kept the last
/// colliding column; that is data loss, so it is rejected here instead.
pub fn extract_sheet(
    rows: &[Vec<CellValue>],
    normalize_headers: bool,
) -> Result<Option<SheetTable>> {
    let Some((first, data)) = rows.split_first() else {
        return Ok(None);
    };
    let width = trimmed_width(first);
    if width == 0 {
        return Ok(None);
    }

    let headers: Vec<String> = first[..width]
        .iter()
        .map(|cell| {
            if normalize_headers {
                normalize(&cell.to_text())
            } else {
                cell.to_text()
            }
        })
        .collect();
    if let Some(name) = first_duplicate(&headers) {
        return Err(ExtractError::DuplicateHeader {
            name: name.to_string(),
        });
    }

    let mut records = Vec::new();
    for row in data {
        let record: Vec<String> = (0..width)
            .map(|idx| row.get(idx).map_or_else(String::new, CellValue::to_text))
            .collect();
        if record.iter().all(String::is_empty) {
            continue;
        }
        records.push(record);
    }
    Ok(Some(SheetTable { headers, records }))
}

/// Header width after trimming trailing absent cells: one past the last
/// present cell, computed by a reverse scan.
fn trimmed_width(header: &[CellValue]) -> usize {
    header
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |idx| idx + 1)
}

/// First header name that appears more than once. Empty names are placeholder
/// columns (interior absent cells) and are exempt — they name nothing.
fn first_duplicate(headers: &[String]) -> Option<&str> {
    for (idx, name) in headers.iter().enumerate() {
        if !name.is_empty() && headers[..idx].contains(name) {
            return Some(name);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{CellValue, trimmed_width};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn trimmed_width_drops_trailing_absent_cells() {
        let header = vec![text("A"), text("B"), CellValue::Empty, CellValue::Empty];
        assert_eq!(trimmed_width(&header), 2);
    }

    #[test]
    fn trimmed_width_keeps_interior_absent_cells() {
        let header = vec![text("A"), CellValue::Empty, text("B")];
        assert_eq!(trimmed_width(&header), 3);
    }

    #[test]
    fn trimmed_width_of_all_absent_is_zero() {
        assert_eq!(trimmed_width(&[CellValue::Empty, CellValue::Empty]), 0);
        assert_eq!(trimmed_width(&[]), 0);
    }
}
