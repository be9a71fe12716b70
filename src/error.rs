// src/error.rs
use std::io;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Everything that can stop a status page from becoming JSON.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// Nothing but whitespace on the input
    #[error("input is empty")]
    EmptyInput,

    /// No table with a `Srv`/`Acc` header row was found
    #[error("worker table not found (is ExtendedStatus On?)")]
    WorkerTableNotFound,

    #[error("worker table is missing columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("worker table has column \"{label}\" more than once")]
    DuplicateColumn { label: String },

    /// The page was rendered by a server built without `HAVE_TIMES`
    #[error("times column \"CPU\" missing; server was built without HAVE_TIMES (use --allow-missing-times)")]
    MissingTimes,

    #[error("row {row}: expected {expected} cells, found {found}")]
    InvalidCellCount { row: usize, expected: usize, found: usize },

    #[error("row {row}, column {column}: cannot parse `{value}`")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
        source: FieldError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problems inside a single scoreboard cell.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("status code must be exactly one character")]
    StatusCodeMustBeChar,

    #[error("unknown status code `{0}`")]
    InvalidStatusCode(char),

    #[error("expected `<server>-<generation>`")]
    SrvFormat,

    #[error("expected `<connection>/<child>/<slot>`")]
    AccessCountsFormat,

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    /// `NaN` and the infinities parse as floats but have no JSON form
    #[error("value is not a finite number")]
    NotFinite,
}

impl ScoreboardError {
    pub fn missing_columns<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScoreboardError::MissingColumns {
            missing: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_field(row: usize, column: &'static str, value: &str, source: FieldError) -> Self {
        ScoreboardError::InvalidField { row, column, value: value.to_string(), source }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ScoreboardError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn field_errors_name_row_and_column() {
        let err = ScoreboardError::invalid_field(3, "M", "X", FieldError::InvalidStatusCode('X'));
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("column M"));
        assert!(msg.contains("`X`"));
        assert!(!msg.contains("unknown status code"));
    }

    #[test]
    fn field_error_is_the_cause() {
        let err = ScoreboardError::invalid_field(2, "CPU", "NaN", FieldError::NotFinite);
        let cause = err.source().expect("cell error should be chained");
        assert_eq!(cause.to_string(), "value is not a finite number");
    }

    #[test]
    fn missing_columns_are_listed() {
        let err = ScoreboardError::missing_columns(["VHost", "Request"]);
        assert_eq!(err.to_string(), "worker table is missing columns: VHost, Request");
        assert!(matches!(err, ScoreboardError::MissingColumns { missing } if missing.len() == 2));
    }

    #[test]
    fn times_error_points_at_flag() {
        assert!(ScoreboardError::MissingTimes.to_string().contains("--allow-missing-times"));
    }
}
