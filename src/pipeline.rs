//! Statement processing pipeline
//!
//! Picks a reader for the input file, validates the batch it produces and
//! builds the failed records report:
//!
//! ```text
//! file -> StatementReader -> Batch -> Validator -> FailedRecordsReport
//! ```
//!
//! Fatal input errors stop the pipeline before any report exists.

use crate::cli::InputFormat;
use crate::core::Validator;
use crate::io::{create_reader, FailedRecordsReport};
use crate::types::StatementError;
use std::path::Path;

/// Process one statement file into a report
///
/// `format` overrides detection from the file extension.
///
/// # Errors
///
/// Returns [`StatementError::UnsupportedFileType`] when no format is given and
/// the extension is neither `.csv` nor `.xml`, and any error from the reader.
///
/// # Examples
///
/// ```no_run
/// use statement_validator::pipeline::process_file;
/// use std::path::Path;
///
/// let report = process_file(Path::new("records.csv"), None).unwrap();
/// println!("{}", report);
/// ```
pub fn process_file(
    path: &Path,
    format: Option<InputFormat>,
) -> Result<FailedRecordsReport, StatementError> {
    let format = format
        .or_else(|| InputFormat::from_path(path))
        .ok_or_else(|| StatementError::UnsupportedFileType {
            path: path.display().to_string(),
        })?;

    tracing::info!(path = %path.display(), ?format, "processing statement");

    let batch = create_reader(format).read(path)?;
    let failed = Validator::new().validate(&batch.records);

    let report = FailedRecordsReport::new(failed, batch.rejections);
    tracing::info!(
        clean = report.is_clean(),
        failed = report.failed.len(),
        rejected = report.rejected.len(),
        "report ready"
    );
    Ok(report)
}
