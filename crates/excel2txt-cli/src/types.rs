//! Result types for a conversion run.

use std::path::PathBuf;

/// One worksheet's conversion outcome.
#[derive(Debug, Clone)]
pub struct SheetSummary {
    /// Worksheet title as it appears in the workbook.
    pub sheet: String,
    /// Number of data records written.
    pub records: usize,
    /// Path of the committed artifact, absent when the worksheet produced
    /// no records.
    pub output: Option<PathBuf>,
}

/// One input workbook's conversion outcome.
#[derive(Debug, Clone)]
pub struct FileSummary {
    /// Input workbook path as given on the command line.
    pub input: PathBuf,
    /// Per-worksheet outcomes, in workbook order.
    pub sheets: Vec<SheetSummary>,
}

/// Outcome of a whole conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    /// Resolved (absolute) output directory.
    pub output_dir: PathBuf,
    /// Successfully processed inputs, in argument order.
    pub files: Vec<FileSummary>,
    /// Per-file failures: reported, but never fatal to the run.
    pub errors: Vec<String>,
}

impl ConvertResult {
    /// True when at least one input file failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
