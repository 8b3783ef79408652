//! Workbook discovery in the input folder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolError};

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Sub-directories are ignored. Every file is treated as a workbook; the
/// reader reports anything that is not one.
pub fn list_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ToolError::MissingInput(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_files_sorted_and_skips_directories() {
        let dir = tempdir().expect("temporary directory");
        for name in ["b.xlsx", "a.xlsx", "C.xlsx"] {
            fs::write(dir.path().join(name), b"x").expect("file written");
        }
        fs::create_dir(dir.path().join("nested")).expect("directory created");

        let names: Vec<String> = list_workbooks(dir.path())
            .expect("listing")
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["C.xlsx", "a.xlsx", "b.xlsx"]);
    }

    #[test]
    fn missing_folder_is_reported() {
        let dir = tempdir().expect("temporary directory");
        let missing = dir.path().join("nope");
        let err = list_workbooks(&missing).expect_err("missing folder");
        assert!(matches!(err, ToolError::MissingInput(path) if path == missing));
    }
}
