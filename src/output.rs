//! CSV persistence of a merged summary table.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{EntityCode, FsError};
use crate::table::FinTable;

/// UTF-8 byte-order mark; spreadsheet tools use it to detect the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// `<dir>/<code>.csv`
pub fn output_path(dir: &Path, code: &EntityCode) -> PathBuf {
    dir.join(format!("{code}.csv"))
}

/// Writes `table` as BOM-prefixed UTF-8 CSV at `path`, creating parent directories.
///
/// The header row is the index label followed by the column labels; each following row is
/// a metric name and its values, with missing values left empty. The file is assembled
/// next to `path` and renamed into place, so `path` is never left half-written.
///
/// # Errors
///
/// Returns [`FsError::Io`] or [`FsError::Csv`] if the file cannot be written.
pub fn write_csv(table: &FinTable, path: &Path) -> Result<(), FsError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".part");
    let tmp = PathBuf::from(tmp_name);

    if let Err(e) = write_to(table, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)?;

    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), rows = table.len(), "summary written");

    Ok(())
}

fn write_to(table: &FinTable, path: &Path) -> Result<(), FsError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    let header = std::iter::once(table.index_name()).chain(table.columns().iter().map(String::as_str));
    wtr.write_record(header)?;

    for row in table.rows() {
        let record = std::iter::once(row.metric.as_str())
            .chain(row.values.iter().map(|v| v.as_deref().unwrap_or("")));
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}
