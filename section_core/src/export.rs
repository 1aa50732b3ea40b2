//! # CSV Export
//!
//! Serializes the saved results of a session into one CSV document.
//!
//! ## Layout
//!
//! ```text
//! Section Type,Timestamp,Parameters,Area (mm²),Centroid x (mm),...,ry (mm)
//! solidCircle,2026-10-18T09:30:00.123Z,r=10.0,314,10.0,10.0,7.85e+3,...
//! ```
//!
//! The header is fixed. Every row carries the shape key, the save time, one
//! `symbol=value` cell covering the shape's full parameter schema (pairs
//! joined with `; `) and the eleven result values. All numbers go through
//! [`format_value`] so the file matches what was shown on screen.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use section_core::export::CsvExport;
//! use section_core::session::Session;
//!
//! let mut session = Session::default();
//! session.set_input("r", "10").unwrap();
//! session.save();
//!
//! let export = CsvExport::build(session.saved(), "section-properties", Utc::now()).unwrap();
//! assert_eq!(export.rows, 1);
//! assert!(export.filename.starts_with("section-properties-"));
//! assert!(export.content.starts_with("Section Type,Timestamp,Parameters,"));
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

use crate::calculations::ResultField;
use crate::errors::{CalcError, CalcResult};
use crate::format::format_value;
use crate::session::SavedResult;

/// File name prefix used when none is configured
pub const DEFAULT_FILE_PREFIX: &str = "section-properties";

/// Columns preceding the eleven result values
const LEADING_HEADERS: [&str; 3] = ["Section Type", "Timestamp", "Parameters"];

/// Separator between `symbol=value` pairs in the parameters cell
const PARAMETER_SEPARATOR: &str = "; ";

/// A CSV document ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    /// Suggested file name, `<prefix>-<timestamp>.csv`
    pub filename: String,
    /// Full document including the header row
    pub content: String,
    /// Number of data rows
    pub rows: usize,
}

impl CsvExport {
    /// Build the export of `saved`, stamped with `exported_at`.
    ///
    /// Returns `NothingToExport` when `saved` is empty.
    pub fn build(saved: &[SavedResult], prefix: &str, exported_at: DateTime<Utc>) -> CalcResult<Self> {
        if saved.is_empty() {
            return Err(CalcError::NothingToExport);
        }

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(csv_headers())?;
        for entry in saved {
            writer.write_record(csv_row(entry))?;
        }

        let bytes = writer.into_inner().map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        let content = String::from_utf8(bytes).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;

        Ok(CsvExport {
            filename: export_filename(prefix, exported_at),
            content,
            rows: saved.len(),
        })
    }
}

/// The fixed header row.
pub fn csv_headers() -> Vec<String> {
    LEADING_HEADERS
        .iter()
        .map(|header| header.to_string())
        .chain(ResultField::ALL.iter().map(ResultField::csv_header))
        .collect()
}

/// `r_o=50.0; r_i=40.0`, in schema order.
pub fn parameters_cell(entry: &SavedResult) -> String {
    entry
        .parameters
        .in_schema_order(entry.shape)
        .into_iter()
        .map(|(symbol, value)| format!("{}={}", symbol, format_value(value)))
        .collect::<Vec<_>>()
        .join(PARAMETER_SEPARATOR)
}

/// `<prefix>-20261018T093000.123Z.csv`
///
/// The basic ISO 8601 form has no `:`, so the name is valid everywhere.
pub fn export_filename(prefix: &str, exported_at: DateTime<Utc>) -> String {
    format!("{}-{}.csv", prefix, exported_at.format("%Y%m%dT%H%M%S%.3fZ"))
}

fn csv_row(entry: &SavedResult) -> Vec<String> {
    let mut row = Vec::with_capacity(LEADING_HEADERS.len() + ResultField::ALL.len());
    row.push(entry.shape.key().to_string());
    row.push(entry.created.to_rfc3339_opts(SecondsFormat::Millis, true));
    row.push(parameters_cell(entry));
    row.extend(entry.result.values().iter().map(|(_, value)| format_value(*value)));
    row
}
