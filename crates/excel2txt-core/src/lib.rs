//! Core conversion pipeline: cell model, name normalization, and sheet
//! extraction.
//!
//! This crate is pure — no I/O. The workbook source (`excel2txt-ingest`)
//! feeds rows in, the text sink (`excel2txt-output`) serializes what comes
//! out.

pub mod cell;
pub mod error;
pub mod extract;
pub mod normalize;

pub use cell::CellValue;
pub use error::{ExtractError, Result};
pub use extract::{SheetTable, extract_sheet};
pub use normalize::normalize;
