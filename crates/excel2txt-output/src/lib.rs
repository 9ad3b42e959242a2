//! Text sink: output artifact naming and delimited-text serialization.

pub mod error;
pub mod naming;
pub mod writer;

pub use error::{OutputError, Result};
pub use naming::{extension_for, output_file_name};
pub use writer::write_sheet;
