//! # Batch Processing
//!
//! Runs one calculation per input line and collects the outcomes into a
//! [`BatchReport`]. Rows are independent: a failing row is recorded and the
//! batch moves on.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use steel_core::{calculate, OutputSelection};

use crate::config::DriverConfig;

/// Result of a single row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The enabled quantities, in the usual order
    Ok { values: Vec<f64> },
    /// Not a designation this program knows
    NoResult,
    /// A recognized designation that could not be computed
    Error { code: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    /// 1-based input line number
    pub line: usize,
    pub designation: String,
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

/// Everything produced by one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub density: f64,
    pub outputs: OutputSelection,
    pub rows: Vec<BatchRow>,
    pub ok: usize,
    pub no_result: usize,
    pub errors: usize,
    /// Input had more rows than `max_rows`
    pub truncated: bool,
}

impl BatchReport {
    fn new(config: &DriverConfig) -> Self {
        BatchReport {
            density: config.density.value(),
            outputs: config.outputs,
            rows: Vec::new(),
            ok: 0,
            no_result: 0,
            errors: 0,
            truncated: false,
        }
    }

    fn push(&mut self, row: BatchRow) {
        match row.outcome {
            RowOutcome::Ok { .. } => self.ok += 1,
            RowOutcome::NoResult => self.no_result += 1,
            RowOutcome::Error { .. } => self.errors += 1,
        }
        self.rows.push(row);
    }

    /// `ok / no result / errors` summary line
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} rows: {} ok, {} no result, {} errors",
            self.rows.len(),
            self.ok,
            self.no_result,
            self.errors
        );
        if self.truncated {
            summary.push_str(" (truncated)");
        }
        summary
    }
}

/// Calculate one designation
pub fn run_row(line: usize, designation: &str, config: &DriverConfig) -> BatchRow {
    let designation = designation.trim();
    let outcome = if designation.is_empty() {
        RowOutcome::NoResult
    } else {
        match calculate(designation, config.density.value()) {
            Ok(Some(props)) => RowOutcome::Ok {
                values: props.select(&config.outputs),
            },
            Ok(None) => RowOutcome::NoResult,
            Err(e) => {
                debug!("line {}: {}", line, e);
                RowOutcome::Error {
                    code: e.error_code().to_string(),
                    message: e.to_string(),
                }
            }
        }
    };

    BatchRow {
        line,
        designation: designation.to_string(),
        outcome,
    }
}

/// Run every line, stopping after `config.max_rows`
pub fn run_batch<I, S>(lines: I, config: &DriverConfig) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::new(config);

    for (index, line) in lines.into_iter().enumerate() {
        if index >= config.max_rows {
            warn!("Stopped after {} rows", config.max_rows);
            report.truncated = true;
            break;
        }
        report.push(run_row(index + 1, line.as_ref(), config));
    }

    report
}

// ============================================================================
// Rendering
// ============================================================================

fn header(outputs: &OutputSelection) -> Vec<&'static str> {
    let mut columns = vec!["designation"];
    if outputs.sectional_area {
        columns.push("sectional_area");
    }
    if outputs.theoretical_weight {
        columns.push("theoretical_weight");
    }
    if outputs.surface_area {
        columns.push("surface_area");
    }
    columns
}

/// Tab-separated report with a header line.
///
/// NoResult rows have empty value cells; error rows carry `#ERR <code>` in
/// the first value cell.
pub fn render_tsv(report: &BatchReport) -> String {
    let width = report.outputs.count();
    let mut out = header(&report.outputs).join("\t");
    out.push('\n');

    for row in &report.rows {
        let mut cells = vec![row.designation.clone()];
        match &row.outcome {
            RowOutcome::Ok { values } => cells.extend(values.iter().map(|v| v.to_string())),
            RowOutcome::NoResult => cells.extend(std::iter::repeat(String::new()).take(width)),
            RowOutcome::Error { code, .. } => {
                cells.push(format!("#ERR {}", code));
                cells.extend(std::iter::repeat(String::new()).take(width.saturating_sub(1)));
            }
        }
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    out
}

pub fn render_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
