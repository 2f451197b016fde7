use thiserror::Error;

/// Errors raised by matrix construction, mutation and queries.
///
/// Every variant carries the detail that caused it (column name, row index, ...)
/// so callers can report the failure without keeping extra context around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction attempted with zero column names
    #[error("empty header")]
    EmptyHeader,

    /// A column name collides with an existing one
    #[error("duplicate header: {name}")]
    DuplicateHeader { name: String },

    /// Row index outside `[0, len)`, or more per-row values than rows
    #[error("row index out of range: {index} (rows: {len})")]
    RowIndexOutOfRange { index: usize, len: usize },

    /// Referenced column name is absent from the header
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    /// A query selected zero rows
    #[error("no rows found matching criteria in column {column}")]
    NoRowsFound { column: String },

    /// The operation would leave the matrix without columns
    #[error("unable to delete last column")]
    DeleteLastColumn,

    /// Row length does not equal header length
    #[error("row length ({actual}) does not match header length ({expected})")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// No cell of the column contains the requested value
    #[error("value {value:?} not found in column {column}")]
    ValueNotFound { column: String, value: String },

    /// Operator name that is not one of the supported comparison operators
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

impl MatrixError {
    pub fn duplicate_header(name: &str) -> Self {
        MatrixError::DuplicateHeader {
            name: name.to_string(),
        }
    }

    pub fn column_not_found(name: &str) -> Self {
        MatrixError::ColumnNotFound {
            name: name.to_string(),
        }
    }

    /// Returns true for errors that describe a negative but valid result
    /// rather than a misuse of the matrix.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MatrixError::NoRowsFound { .. } | MatrixError::ValueNotFound { .. }
        )
    }
}

/// Errors raised while rendering a matrix to an export format or persisting it.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;
