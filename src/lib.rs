//! In-memory, header-indexed string tables.
//!
//! A [`DataMatrix`] holds a header of unique column names and rows of string
//! cells, one per column. It can be mutated row- and column-wise, filtered
//! with a [`FindRowsQuery`], sorted in place on several keys, previewed as a
//! bordered console table, and exported as CSV, TSV, JSON, YAML or custom
//! separated text.
//!
//! ```
//! use tabmatrix::{DataMatrix, FindRowsQuery, Operator};
//!
//! let mut matrix = DataMatrix::new(["ID", "Name"]).unwrap();
//! matrix.add_rows([["2", "Bob"], ["1", "Alice"], ["3", "alice"]]).unwrap();
//! matrix.sort_by_asc(&["ID"]).unwrap();
//!
//! let query = FindRowsQuery::new("Name", Operator::Equals)
//!     .case_insensitive(true)
//!     .value("ALICE");
//! let found = matrix.find_rows(&query).unwrap();
//! assert_eq!(found.get_column("ID").unwrap(), vec!["1", "3"]);
//!
//! let csv = found.to_csv(true).unwrap();
//! assert_eq!(csv.to_text().unwrap(), "ID,Name\n1,Alice\n3,alice\n");
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod datamodel;
pub mod error;
pub mod exporters;
pub mod preview;
pub mod query;
pub mod sort;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use datamodel::{DataMatrix, Header, Row, Tabular};
pub use error::{ExportError, MatrixError};
pub use exporters::Output;
pub use preview::Preview;
pub use query::{FindRowsOutcome, FindRowsQuery, Operator};
pub use sort::SortOrder;
