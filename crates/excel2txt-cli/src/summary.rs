//! Run summary rendering.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertResult;

/// Prints the per-worksheet summary table, the collected per-file errors,
/// and the closing line naming the resolved output directory.
pub fn print_summary(result: &ConvertResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Worksheet"),
        header_cell("Records"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in &result.files {
        let input = file.input.display().to_string();
        for sheet in &file.sheets {
            table.add_row(vec![
                Cell::new(&input),
                Cell::new(&sheet.sheet),
                Cell::new(sheet.records),
                output_cell(sheet.output.as_deref(), &result.output_dir),
            ]);
        }
        if file.sheets.is_empty() {
            table.add_row(vec![
                Cell::new(&input),
                dim_cell("-"),
                dim_cell(0),
                dim_cell("-"),
            ]);
        }
    }
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
    println!("Done, see output in \"{}\".", result.output_dir.display());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Output paths display relative to the run's output directory.
fn output_cell(path: Option<&Path>, output_dir: &Path) -> Cell {
    match path {
        Some(path) => {
            let shown = path.strip_prefix(output_dir).unwrap_or(path);
            Cell::new(shown.display()).fg(Color::Green)
        }
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
