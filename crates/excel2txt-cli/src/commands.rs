//! Conversion driver.
//!
//! One run converts every input workbook in argument order. Failures are
//! isolated per file: a bad workbook is recorded and the run moves on, while
//! a worksheet-level failure aborts that file as a unit — there is no
//! resumption model for partially written sheets. Only input validation and
//! directory creation are fatal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use excel2txt_core::{extract_sheet, normalize};
use excel2txt_ingest::Workbook;
use excel2txt_output::{output_file_name, write_sheet};

use crate::cli::Cli;
use crate::types::{ConvertResult, FileSummary, SheetSummary};

/// Immutable option set threaded through the conversion calls.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Resolved (absolute) output directory.
    pub outdir: PathBuf,
    /// Field delimiter for output files.
    pub delimiter: String,
    /// Fan each workbook's outputs into their own subdirectory.
    pub mkdirs: bool,
    /// Pass header cells through the normalizer.
    pub normalize_headers: bool,
}

impl ConvertOptions {
    /// Resolves CLI arguments into an option set. A relative output
    /// directory is made absolute against the current working directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let outdir = match &cli.outdir {
            Some(dir) => std::path::absolute(dir)
                .with_context(|| format!("resolve output directory {}", dir.display()))?,
            None => std::env::current_dir().context("resolve current directory")?,
        };
        Ok(Self {
            outdir,
            delimiter: cli.delimiter.clone(),
            mkdirs: cli.mkdirs,
            normalize_headers: cli.normalize,
        })
    }
}

/// Converts every input workbook and collects the run outcome.
///
/// All inputs are validated before any file is processed; a missing input
/// aborts the whole run. Per-file failures afterwards are collected into
/// [`ConvertResult::errors`] and the run continues with the next file.
pub fn run_convert(files: &[PathBuf], options: &ConvertOptions) -> Result<ConvertResult> {
    for file in files {
        if !file.is_file() {
            bail!("input file not found: {}", file.display());
        }
    }
    std::fs::create_dir_all(&options.outdir).with_context(|| {
        format!("create output directory {}", options.outdir.display())
    })?;

    let mut summaries = Vec::new();
    let mut errors = Vec::new();
    for (index, file) in files.iter().enumerate() {
        let span = info_span!("file", path = %file.display());
        let _guard = span.enter();
        info!(
            index = index + 1,
            total = files.len(),
            path = %file.display(),
            "converting"
        );

        let base = normalize(&file_stem(file));
        let out_dir = if options.mkdirs {
            options.outdir.join(&base)
        } else {
            options.outdir.clone()
        };
        // Directory creation failures are fatal, unlike workbook failures.
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("create output directory {}", out_dir.display()))?;

        match process_file(file, &base, &out_dir, options) {
            Ok(summary) => summaries.push(summary),
            Err(error) => errors.push(format!("{}: {error}", file.display())),
        }
    }

    Ok(ConvertResult {
        output_dir: options.outdir.clone(),
        files: summaries,
        errors,
    })
}

/// Converts one workbook: every worksheet with a usable title becomes at
/// most one output artifact.
fn process_file(
    path: &Path,
    base: &str,
    out_dir: &Path,
    options: &ConvertOptions,
) -> Result<FileSummary> {
    let mut workbook = Workbook::open(path)?;
    let mut sheets = Vec::new();
    for sheet in workbook.sheet_names().to_vec() {
        let slug = normalize(&sheet);
        if slug.is_empty() {
            debug!(sheet = %sheet, "worksheet title normalizes to nothing, skipped");
            continue;
        }
        let rows = workbook.sheet_rows(&sheet)?;
        let Some(table) = extract_sheet(&rows, options.normalize_headers)? else {
            debug!(sheet = %sheet, "empty worksheet, skipped");
            sheets.push(SheetSummary {
                sheet,
                records: 0,
                output: None,
            });
            continue;
        };
        let out_path = out_dir.join(output_file_name(base, &slug, &options.delimiter));
        let kept = write_sheet(&out_path, &table, &options.delimiter)?;
        debug!(
            sheet = %sheet,
            record_count = table.records.len(),
            kept,
            "worksheet converted"
        );
        sheets.push(SheetSummary {
            sheet,
            records: table.records.len(),
            output: kept.then_some(out_path),
        });
    }
    Ok(FileSummary {
        input: path.to_path_buf(),
        sheets,
    })
}

/// Input file name without its final extension.
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
