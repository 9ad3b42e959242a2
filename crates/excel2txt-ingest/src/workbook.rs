//! Workbook source backed by calamine.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader as _, Sheets, open_workbook_auto};
use tracing::debug;

use excel2txt_core::CellValue;

use crate::error::{IngestError, Result};

/// An open workbook and its worksheet titles in source order.
pub struct Workbook {
    path: PathBuf,
    inner: Sheets<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("path", &self.path)
            .field("sheet_names", &self.sheet_names)
            .finish_non_exhaustive()
    }
}

impl Workbook {
    /// Opens a workbook, detecting the format (xlsx/xlsb/xls/ods) from the
    /// file extension.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let inner = open_workbook_auto(path).map_err(|source| IngestError::WorkbookOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet_names = inner.sheet_names().to_vec();
        debug!(
            path = %path.display(),
            sheet_count = sheet_names.len(),
            "opened workbook"
        );
        Ok(Self {
            path: path.to_path_buf(),
            inner,
            sheet_names,
        })
    }

    /// Worksheet titles in workbook order.
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Materializes one worksheet's used range as rows of cell values.
    ///
    /// Every row has the full range width; cells outside a row's used span
    /// come back as [`CellValue::Empty`].
    pub fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<Vec<CellValue>>> {
        let range = self
            .inner
            .worksheet_range(sheet)
            .map_err(|source| IngestError::SheetRead {
                path: self.path.clone(),
                sheet: sheet.to_string(),
                source,
            })?;
        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();
        debug!(
            path = %self.path.display(),
            sheet = %sheet,
            row_count = rows.len(),
            "materialized worksheet"
        );
        Ok(rows)
    }
}

/// Maps a reader-level cell onto the core model.
///
/// Booleans render in Excel's display form, date/time cells through their
/// chrono rendering (serial value when out of range), and cached formula
/// errors as their display text. Formula cells contribute their cached
/// value only — nothing is evaluated.
fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Text(if *value { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => CellValue::Text(datetime.to_string()),
            None => CellValue::Float(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::Text(value.clone()),
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, cell_value};
    use calamine::Data;

    #[test]
    fn scalar_cells_map_directly() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(
            cell_value(&Data::String("foo".to_string())),
            CellValue::Text("foo".to_string())
        );
        assert_eq!(cell_value(&Data::Int(400)), CellValue::Int(400));
        assert_eq!(cell_value(&Data::Float(400.3)), CellValue::Float(400.3));
    }

    #[test]
    fn booleans_render_in_display_form() {
        assert_eq!(
            cell_value(&Data::Bool(true)),
            CellValue::Text("TRUE".to_string())
        );
        assert_eq!(
            cell_value(&Data::Bool(false)),
            CellValue::Text("FALSE".to_string())
        );
    }
}
