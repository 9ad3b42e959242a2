//! Delimited-text serialization of extracted worksheets.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use excel2txt_core::SheetTable;

use crate::error::{OutputError, Result};

/// Writes one worksheet's table to `path`, fields joined by `delimiter`.
///
/// Fields are written verbatim: a value containing the delimiter is not
/// quoted or escaped. Downstream fixtures parse the unescaped form, so this
/// stays compatible with the outputs consumers already rely on.
///
/// The header line is always written and the file closed before the commit
/// decision: a table with no records is removed again afterwards, so an
/// empty worksheet leaves no artifact behind. Returns true when the
/// artifact was kept.
pub fn write_sheet(path: &Path, table: &SheetTable, delimiter: &str) -> Result<bool> {
    {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        write_line(&mut out, &table.headers, delimiter)
            .and_then(|()| {
                table
                    .records
                    .iter()
                    .try_for_each(|record| write_line(&mut out, record, delimiter))
            })
            .and_then(|()| out.flush())
            .map_err(|source| OutputError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }

    if table.records.is_empty() {
        fs::remove_file(path).map_err(|source| OutputError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "removed record-less output");
        return Ok(false);
    }
    debug!(
        path = %path.display(),
        record_count = table.records.len(),
        "wrote output"
    );
    Ok(true)
}

fn write_line<W: Write>(out: &mut W, fields: &[String], delimiter: &str) -> std::io::Result<()> {
    out.write_all(fields.join(delimiter).as_bytes())?;
    out.write_all(b"\n")
}
