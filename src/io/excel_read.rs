//! Record extraction from cabling workbooks.

use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, XlsxError, open_workbook};
use tracing::{error, trace};

use crate::config::{ColumnLayout, CountConfig};
use crate::error::{Result, RowError, ToolError};
use crate::model::{CableId, CablePortRecord, PortEnd};

/// Records pulled from one workbook, plus the rows that had to be skipped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<CablePortRecord>,
    pub row_errors: Vec<RowError>,
}

impl Extraction {
    /// True when every qualifying row produced a record.
    pub fn all_rows_ok(&self) -> bool {
        self.row_errors.is_empty()
    }
}

/// Reads every worksheet of the workbook at `path` into cable records.
///
/// Only rows whose connect cell holds the connected or disconnected token are
/// kept. A workbook that cannot be opened because of an I/O failure yields
/// [`ToolError::WorkbookUnreadable`]; other reader failures are returned as-is.
pub fn read_records(path: &Path, config: &CountConfig) -> Result<Extraction> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|err| match err {
        XlsxError::Io(source) => ToolError::WorkbookUnreadable {
            path: path.to_path_buf(),
            source,
        },
        other => ToolError::from(other),
    })?;

    let mut extraction = Extraction::default();
    for sheet_name in workbook.sheet_names().to_vec() {
        let range = read_sheet(&mut workbook, &sheet_name)?;
        ingest_sheet(&range, &sheet_name, config, &mut extraction);
    }

    for record in &extraction.records {
        trace!(
            cable_id = record.cable_id,
            connect = %record.connect_state,
            from_device = %record.from.device_name,
            from_host = %record.from.host_name,
            from_model = %record.from.model_name,
            from_port = %record.from.port_name,
            to_device = %record.to.device_name,
            to_host = %record.to.host_name,
            to_model = %record.to.model_name,
            to_port = %record.to.port_name,
            "extracted cable"
        );
    }

    Ok(extraction)
}

fn read_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

/// Walks rows 1..=last used row of one sheet.
fn ingest_sheet(
    range: &Range<DataType>,
    sheet_name: &str,
    config: &CountConfig,
    extraction: &mut Extraction,
) {
    let Some((last_row, _)) = range.end() else {
        return;
    };
    let columns = &config.columns;

    for row in 0..=last_row {
        let cell = |column: u32| cell_at(range, row, column);

        let connect = cell_to_string(cell(columns.device_from_connect_column));
        if connect.is_empty()
            || (connect != config.word_connect && connect != config.word_disconnect)
        {
            continue;
        }

        let cable_id = match parse_cable_id(
            cell(columns.device_from_cable_id_column),
            sheet_name,
            row + 1,
        ) {
            Ok(id) => id,
            Err(row_error) => {
                error!(error = %row_error, "[NG] skipping row with invalid cable ID");
                extraction.row_errors.push(row_error);
                continue;
            }
        };

        extraction
            .records
            .push(build_record(connect, cable_id, columns, &cell));
    }
}

/// Cell at a 0-based row and 1-based column. Column 0 addresses nothing.
fn cell_at(range: &Range<DataType>, row: u32, column: u32) -> Option<&DataType> {
    column
        .checked_sub(1)
        .and_then(|index| range.get_value((row, index)))
}

fn build_record<'a>(
    connect_state: String,
    cable_id: CableId,
    columns: &ColumnLayout,
    cell: &impl Fn(u32) -> Option<&'a DataType>,
) -> CablePortRecord {
    let text = |column: u32| cell_to_string(cell(column));
    CablePortRecord {
        connect_state,
        cable_id,
        from: PortEnd {
            floor_name: text(columns.device_from_floor_name_column),
            device_name: text(columns.device_from_device_name_column),
            device_number: text(columns.device_from_device_number_column),
            host_name: text(columns.device_from_host_name_column),
            model_name: text(columns.device_from_model_name_column),
            port_name: text(columns.device_from_port_name_column),
        },
        from_connector_name: text(columns.device_from_connector_name_column),
        from_key_port_name: text(columns.device_from_key_port_name_column),
        to: PortEnd {
            floor_name: text(columns.device_to_floor_name_column),
            device_name: text(columns.device_to_device_name_column),
            device_number: text(columns.device_to_device_number_column),
            host_name: text(columns.device_to_host_name_column),
            model_name: text(columns.device_to_model_name_column),
            port_name: text(columns.device_to_port_name_column),
        },
    }
}

/// Coerces a cable ID cell: numbers are taken as-is (floats rounded), text
/// must parse as an integer, anything else is rejected.
pub fn parse_cable_id(
    cell: Option<&DataType>,
    sheet: &str,
    row: u32,
) -> std::result::Result<CableId, RowError> {
    match cell {
        Some(DataType::Int(value)) => Ok(*value),
        Some(DataType::Float(value)) => Ok(value.round() as CableId),
        Some(DataType::String(value)) => {
            value
                .trim()
                .parse::<CableId>()
                .map_err(|_| RowError::CableIdNotInteger {
                    sheet: sheet.to_string(),
                    row,
                    value: value.clone(),
                })
        }
        _ => Err(RowError::CableIdUnsupported {
            sheet: sheet.to_string(),
            row,
        }),
    }
}

/// Renders a cell as text. Whole floats print without a fractional part.
pub fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
