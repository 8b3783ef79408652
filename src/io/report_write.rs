use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;

/// Report location for a run on `date`: `<output_dir>/<YYYYMMDD>.txt`.
pub fn report_path(output_dir: &Path, date: NaiveDate) -> PathBuf {
    output_dir.join(format!("{}.txt", date.format("%Y%m%d")))
}

/// Writes the report lines as UTF-8 without a byte-order mark, replacing any
/// existing file. Every line, including the last, ends with a newline.
pub fn write_report(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}
