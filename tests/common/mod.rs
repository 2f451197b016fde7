use tabmatrix::DataMatrix;
use tabmatrix::test_utils::init_tracing;

pub use tabmatrix::test_utils::fixtures;

/// Logging and fixtures shared by every integration test
pub fn setup() {
    init_tracing();
}

/// Cells of one column, for concise assertions
#[allow(dead_code)] // Not every test binary uses it
pub fn column(matrix: &DataMatrix, name: &str) -> Vec<String> {
    matrix
        .get_column(name)
        .expect("column should exist")
        .into_iter()
        .map(str::to_string)
        .collect()
}
