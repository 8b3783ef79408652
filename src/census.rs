//! Run orchestration: discover workbooks, count each site, write the report.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{error, info, instrument, warn};

use crate::config::{CategoryMatchConfig, CountConfig};
use crate::error::Result;
use crate::io::{discover, excel_read, report_write};
use crate::model::{Category, SiteSummary};
use crate::report::SiteReport;
use crate::site;
use crate::tally;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub report_path: PathBuf,
    pub report: SiteReport,
    /// False once any row was skipped for a bad cable ID.
    pub all_pass: bool,
    /// Workbooks skipped because they could not be opened.
    pub skipped_files: Vec<PathBuf>,
}

/// Counts devices for every workbook in `input_dir` and writes today's report
/// into `output_dir`.
pub fn count_devices(
    input_dir: &Path,
    output_dir: &Path,
    config: &CountConfig,
) -> Result<RunOutcome> {
    count_devices_on(input_dir, output_dir, config, Local::now().date_naive())
}

/// Same as [`count_devices`] with an explicit report date.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input_dir.display(), output = %output_dir.display(), %date)
)]
pub fn count_devices_on(
    input_dir: &Path,
    output_dir: &Path,
    config: &CountConfig,
    date: NaiveDate,
) -> Result<RunOutcome> {
    let workbooks = discover::list_workbooks(input_dir).inspect_err(|err| {
        error!(error = %err, "[NG] input folder not available");
    })?;
    info!(file_count = workbooks.len(), "found workbooks");
    count_workbooks_on(&workbooks, output_dir, config, date)
}

/// Counts the given workbooks in order and writes the report for `date`.
///
/// Workbooks that cannot be opened are logged and listed in
/// [`RunOutcome::skipped_files`]; any other failure aborts before the report
/// is written.
pub fn count_workbooks_on(
    workbooks: &[PathBuf],
    output_dir: &Path,
    config: &CountConfig,
    date: NaiveDate,
) -> Result<RunOutcome> {
    let matcher = config.category_match();
    let mut report = SiteReport::new();
    let mut all_pass = true;
    let mut skipped_files = Vec::new();

    for path in workbooks {
        match count_workbook(path, config, &matcher) {
            Ok((summary, rows_ok)) => {
                all_pass &= rows_ok;
                report.insert(summary);
            }
            Err(err) if err.is_recoverable() => {
                error!(path = %path.display(), error = %err, "[ERROR] skipping workbook");
                skipped_files.push(path.clone());
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "aborting run");
                return Err(err);
            }
        }
    }

    if !all_pass {
        warn!("one or more rows were skipped because of invalid cable IDs");
    }

    let report_path = report_write::report_path(output_dir, date);
    write_site_report(&report_path, &report, &config.device_name_header)?;

    Ok(RunOutcome {
        report_path,
        report,
        all_pass,
        skipped_files,
    })
}

/// Extracts and aggregates one workbook. The flag is false when rows had to
/// be skipped.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
fn count_workbook(
    path: &Path,
    config: &CountConfig,
    matcher: &CategoryMatchConfig,
) -> Result<(SiteSummary, bool)> {
    let extraction = excel_read::read_records(path, config)?;
    let site_key = site::site_key(path, &config.file_name_prefix, &config.file_name_word);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let summary = tally::aggregate(&extraction.records, matcher, &site_key, &file_name);
    if extraction.all_rows_ok() {
        info!(site = %site_key, records = extraction.records.len(), "[OK] devices counted");
    } else {
        warn!(
            site = %site_key,
            records = extraction.records.len(),
            skipped_rows = extraction.row_errors.len(),
            "[NG] devices counted with skipped rows"
        );
    }
    Ok((summary, extraction.all_rows_ok()))
}

fn write_site_report(path: &Path, report: &SiteReport, header: &str) -> Result<()> {
    for summary in report.sorted() {
        info!(
            site = %summary.site_key,
            file = %summary.file_name,
            router = summary.count(Category::Router),
            floor_sw = summary.count(Category::FloorSwitch),
            poe_sw = summary.count(Category::PoeSwitch),
            ap = summary.count(Category::AccessPoint),
            lan = summary.count(Category::Rosette),
            mc = summary.count(Category::MediaConverter),
            floor = summary.floor_count,
            "site summary"
        );
    }
    report_write::write_report(path, &report.render_lines(header))?;
    info!(path = %path.display(), sites = report.len(), "report written");
    Ok(())
}
