use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;

use crate::report::AssocReport;

/// Output format for exported result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

/// Neutralize cells a spreadsheet would evaluate as a formula by prefixing a
/// single quote. Cells that already carry one are left alone.
/// # Example
/// ```
/// use word_assoc::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("plain".to_string()), "plain");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=') | Some('+') | Some('-') | Some('@') => format!("'{cell}"),
        _ => cell,
    }
}

/// Write the report's rankings into `dir`, one file per view, named
/// `<stem>_<YYYYmmdd>_<HHMMSS>_<table>.<ext>`. Txt writes the rendered
/// summary as a single file instead. Returns the created paths.
pub fn export_report(
    report: &AssocReport,
    dir: &Path,
    stem: &str,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, String> {
    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let target =
        |table: &str| dir.join(format!("{stem}_{ts}_{table}.{}", format.extension()));

    match format {
        ExportFormat::Txt => {
            let path = target("report");
            std::fs::write(&path, &report.summary)
                .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
            Ok(vec![path])
        }
        ExportFormat::Json => Ok(vec![
            write_json(&target("cooc"), &report.top_cooc)?,
            write_json(&target("mi"), &report.top_mi)?,
            write_json(&target("query"), &report.associates)?,
        ]),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let delim = if format == ExportFormat::Tsv {
                b'\t'
            } else {
                b','
            };
            Ok(vec![
                write_table(
                    &target("cooc"),
                    delim,
                    &["word1", "word2", "count"],
                    &report.top_cooc,
                    |r| {
                        vec![
                            csv_safe_cell(r.word1.clone()),
                            csv_safe_cell(r.word2.clone()),
                            r.count.to_string(),
                        ]
                    },
                )?,
                write_table(
                    &target("mi"),
                    delim,
                    &["word1", "word2", "mi"],
                    &report.top_mi,
                    |r| {
                        vec![
                            csv_safe_cell(r.word1.clone()),
                            csv_safe_cell(r.word2.clone()),
                            format!("{:.5}", r.mi),
                        ]
                    },
                )?,
                write_table(
                    &target("query"),
                    delim,
                    &["word", "mi"],
                    &report.associates,
                    |r| vec![csv_safe_cell(r.word.clone()), format!("{:.5}", r.mi)],
                )?,
            ])
        }
    }
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<PathBuf, String> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| format!("Serialize {} failed: {e}", path.display()))?;
    std::fs::write(path, json).map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    Ok(path.to_path_buf())
}

fn write_table<R>(
    path: &Path,
    delim: u8,
    header: &[&str],
    rows: &[R],
    record: impl Fn(&R) -> Vec<String>,
) -> Result<PathBuf, String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .from_path(path)
        .map_err(|e| format!("Create {} failed: {e}", path.display()))?;
    wtr.write_record(header)
        .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    for row in rows {
        wtr.write_record(record(row))
            .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    }
    wtr.flush()
        .map_err(|e| format!("Flush {} failed: {e}", path.display()))?;
    Ok(path.to_path_buf())
}
