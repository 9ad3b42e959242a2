//! Integration tests for sheet extraction.

use excel2txt_core::{CellValue, ExtractError, extract_sheet};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|value| text(value)).collect()
}

#[test]
fn empty_worksheet_contributes_nothing() {
    assert_eq!(extract_sheet(&[], false), Ok(None));
}

#[test]
fn all_absent_header_contributes_nothing() {
    let rows = vec![
        vec![CellValue::Empty, CellValue::Empty],
        text_row(&["x", "y"]),
    ];
    assert_eq!(extract_sheet(&rows, false), Ok(None));
}

#[test]
fn header_only_worksheet_yields_no_records() {
    let rows = vec![text_row(&["Name", "Rank"])];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.headers, vec!["Name", "Rank"]);
    assert!(table.records.is_empty());
}

#[test]
fn raw_headers_are_used_as_given() {
    let rows = vec![
        text_row(&["Name", "Rank", "Serial Number"]),
        text_row(&["Ed", "Capt", "123"]),
        text_row(&["Roy", "Major", "456"]),
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.headers, vec!["Name", "Rank", "Serial Number"]);
    assert_eq!(table.records.len(), 2);
    assert_eq!(table.records[0], vec!["Ed", "Capt", "123"]);
    assert_eq!(table.records[1], vec!["Roy", "Major", "456"]);
}

#[test]
fn normalized_headers_go_through_the_normalizer() {
    let rows = vec![
        text_row(&["Ice Cream Flavor", "Peoples Rank"]),
        text_row(&["chocolate", "1"]),
    ];
    let table = extract_sheet(&rows, true).unwrap().unwrap();
    assert_eq!(table.headers, vec!["ice_cream_flavor", "peoples_rank"]);
}

#[test]
fn trailing_absent_header_cells_bound_the_row_width() {
    let rows = vec![
        vec![text("A"), text("B"), CellValue::Empty, CellValue::Empty],
        text_row(&["x", "y", "z", "w"]),
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.records, vec![vec!["x", "y"]]);
}

#[test]
fn short_rows_are_padded_with_empty_fields() {
    let rows = vec![
        text_row(&["A", "B", "C"]),
        text_row(&["x"]),
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.records, vec![vec!["x", "", ""]]);
}

#[test]
fn blank_rows_are_skipped_entirely() {
    let rows = vec![
        text_row(&["A", "B"]),
        text_row(&["x", "y"]),
        vec![CellValue::Empty, CellValue::Empty],
        vec![text(""), CellValue::Empty],
        text_row(&["z", "w"]),
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.records, vec![vec!["x", "y"], vec!["z", "w"]]);
}

#[test]
fn a_row_with_one_non_empty_cell_is_kept() {
    let rows = vec![
        text_row(&["A", "B"]),
        vec![CellValue::Empty, CellValue::Int(0)],
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.records, vec![vec!["", "0"]]);
}

#[test]
fn cells_beyond_the_header_never_revive_a_blank_row() {
    // Row content only in the trimmed-off columns counts as blank.
    let rows = vec![
        vec![text("A"), text("B"), CellValue::Empty],
        vec![CellValue::Empty, CellValue::Empty, text("stray")],
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert!(table.records.is_empty());
}

#[test]
fn numbers_render_in_canonical_decimal_text() {
    let rows = vec![
        text_row(&["Amount", "Rate"]),
        vec![CellValue::Float(400.0), CellValue::Float(400.3)],
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.records, vec![vec!["400", "400.3"]]);
}

#[test]
fn interior_absent_header_cells_stay_as_placeholders() {
    let rows = vec![
        vec![text("A"), CellValue::Empty, CellValue::Empty, text("B")],
        text_row(&["1", "2", "3", "4"]),
    ];
    let table = extract_sheet(&rows, false).unwrap().unwrap();
    assert_eq!(table.headers, vec!["A", "", "", "B"]);
    assert_eq!(table.records, vec![vec!["1", "2", "3", "4"]]);
}

#[test]
fn duplicate_headers_are_rejected() {
    let rows = vec![text_row(&["Rank", "Rank"])];
    assert_eq!(
        extract_sheet(&rows, false),
        Err(ExtractError::DuplicateHeader {
            name: "Rank".to_string()
        })
    );
}

#[test]
fn normalization_collisions_are_rejected() {
    // Distinct raw headers that normalize to the same name.
    let rows = vec![text_row(&["Peoples Rank", "peoples_rank"])];
    assert!(extract_sheet(&rows, false).is_ok());
    assert_eq!(
        extract_sheet(&rows, true),
        Err(ExtractError::DuplicateHeader {
            name: "peoples_rank".to_string()
        })
    );
}
