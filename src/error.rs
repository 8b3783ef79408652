use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool reads settings, scans cabling workbooks, or writes the report.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the settings file is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a workbook cannot be opened, typically because another
    /// program holds it open.
    #[error("workbook {path} could not be read (is it open in Excel?): {source}")]
    WorkbookUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a sheet does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when a setting is present but unusable.
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// Raised when the user provides a folder that does not exist.
    #[error("input folder not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    /// Returns true for failures that only affect the current workbook; the
    /// batch logs them and carries on with the next file.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ToolError::WorkbookUnreadable { .. })
    }
}

/// Problems with a single spreadsheet row. These never abort a run: the row
/// is logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The cable ID cell holds text that does not parse as an integer.
    #[error("cable ID '{value}' is not an integer at sheet:{sheet} row:{row}")]
    CableIdNotInteger {
        sheet: String,
        row: u32,
        value: String,
    },

    /// The cable ID cell is neither numeric nor text.
    #[error("cable ID is neither a number nor text at sheet:{sheet} row:{row}")]
    CableIdUnsupported { sheet: String, row: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_error_names_sheet_and_row() {
        let err = RowError::CableIdNotInteger {
            sheet: "B1F".into(),
            row: 12,
            value: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "cable ID 'abc' is not an integer at sheet:B1F row:12"
        );
    }

    #[test]
    fn only_unreadable_workbooks_are_recoverable() {
        let locked = ToolError::WorkbookUnreadable {
            path: PathBuf::from("site.xlsx"),
            source: std::io::Error::other("locked"),
        };
        assert!(locked.is_recoverable());
        assert!(!ToolError::MissingInput(PathBuf::from("in")).is_recoverable());
    }
}
