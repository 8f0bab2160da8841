//! High-level pipeline API: catalog export in, MOQ update payload out.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_moq::{prepare_file, write_updates_to, PrepareOptions};
//! use std::path::Path;
//!
//! let run = prepare_file(Path::new("catalog.csv"), &PrepareOptions::default())?;
//! write_updates_to(&run.outcome.records, Path::new("moq_updates.json"))?;
//! println!("{}", run.outcome.summary());
//! ```

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::row::try_transform;
use crate::config::{MAX_REASONS_SHOWN, STDOUT_PATH};
use crate::error::PipelineResult;
use crate::logs::{log_info, log_success, log_warning, log_warning_indent};
use crate::models::UpdateRecord;
use crate::parser::{parse_csv_file_auto, ParseResult, Row};

/// Options for a prepare pass
#[derive(Debug, Clone, Default)]
pub struct PrepareOptions {
    /// Force a delimiter instead of detecting it from the header line
    pub delimiter: Option<char>,
}

/// Records produced by one pass plus discard statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrepareOutcome {
    /// Update records in source order
    pub records: Vec<UpdateRecord>,
    /// Rows examined
    pub rows_read: usize,
    /// Discarded rows per reason (e.g. `missing product_sku`)
    pub discarded: BTreeMap<String, usize>,
}

impl PrepareOutcome {
    pub fn discarded_count(&self) -> usize {
        self.discarded.values().sum()
    }

    /// One-line summary printed after the pass.
    pub fn summary(&self) -> String {
        format!("Prepared {} updates.", self.records.len())
    }
}

/// CSV file information
#[derive(Debug, Clone)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

impl From<&ParseResult> for CsvInfo {
    fn from(result: &ParseResult) -> Self {
        Self {
            encoding: result.encoding.clone(),
            delimiter: result.delimiter,
            headers: result.headers.clone(),
            row_count: result.rows.len(),
        }
    }
}

/// Result of [`prepare_file`]
#[derive(Debug, Clone)]
pub struct PrepareRun {
    pub csv_info: CsvInfo,
    pub outcome: PrepareOutcome,
}

/// Run every row through the transformer once, in order.
///
/// Rows that fail a check are counted by reason and dropped; the pass
/// itself never fails.
pub fn prepare_updates<I>(rows: I) -> PrepareOutcome
where
    I: IntoIterator,
    I::Item: Borrow<Row>,
{
    let mut outcome = PrepareOutcome::default();

    for row in rows {
        outcome.rows_read += 1;
        match try_transform(row.borrow()) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => *outcome.discarded.entry(reason.reason_key()).or_insert(0) += 1,
        }
    }

    outcome
}

/// Parse a catalog file and prepare its updates, logging progress.
pub fn prepare_file(path: &Path, options: &PrepareOptions) -> PipelineResult<PrepareRun> {
    log_info(format!("📖 Reading catalog: {}", path.display()));
    let parse_result = parse_csv_file_auto(path, options.delimiter)?;
    let csv_info = CsvInfo::from(&parse_result);

    log_success(format!("Encoding: {}", csv_info.encoding));
    log_success(format!(
        "Delimiter: '{}'{}",
        format_delimiter(csv_info.delimiter),
        if options.delimiter.is_none() { " (auto-detected)" } else { "" }
    ));
    log_success(format!("Read {} rows", csv_info.row_count));

    log_info("⚙️  Preparing MOQ updates...");
    let outcome = prepare_updates(&parse_result.rows);
    print_outcome(&outcome);

    Ok(PrepareRun { csv_info, outcome })
}

/// Serialize records as a pretty-printed JSON array.
pub fn write_updates<W: Write>(records: &[UpdateRecord], mut writer: W) -> PipelineResult<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write records to a file, or to stdout when `path` is `-`.
pub fn write_updates_to(records: &[UpdateRecord], path: &Path) -> PipelineResult<()> {
    if path.as_os_str() == STDOUT_PATH {
        let stdout = std::io::stdout();
        return write_updates(records, stdout.lock());
    }

    let file = File::create(path)?;
    write_updates(records, BufWriter::new(file))?;
    log_success(format!("💾 Output written to: {}", path.display()));
    Ok(())
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn print_outcome(outcome: &PrepareOutcome) {
    log_success(format!("Generated {} update records", outcome.records.len()));

    let discarded = outcome.discarded_count();
    if discarded == 0 {
        return;
    }

    log_warning(format!("{} rows discarded", discarded));
    let mut reasons: Vec<_> = outcome.discarded.iter().collect();
    reasons.sort_by(|a, b| b.1.cmp(a.1));
    for (reason, count) in reasons.iter().take(MAX_REASONS_SHOWN) {
        log_warning_indent(format!("• {} ({} rows)", reason, count), 1);
    }
}
