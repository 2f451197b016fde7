use crate::datamodel::DataMatrix;
use crate::error::Result;

pub const PEOPLE_HEADER: [&str; 3] = ["ID", "Name", "Age"];

/// Three people, two of them named Alice with different casing
pub fn people_rows() -> Vec<Vec<String>> {
    [["1", "Alice", "30"], ["2", "Bob", "25"], ["3", "alice", "28"]]
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub fn people() -> Result<DataMatrix> {
    DataMatrix::with_data(people_rows(), PEOPLE_HEADER)
}

/// Inventory with unsorted ids, duplicated categories and a blank column
pub fn inventory() -> Result<DataMatrix> {
    DataMatrix::with_data(
        [
            ["B-20", "tools", "hammer", " "],
            ["A-10", "garden", "rake", ""],
            ["B-03", "tools", "saw", ""],
            ["A-07", "kitchen", "Whisk", "\t"],
            ["C-01", "garden", "hose", ""],
        ],
        ["sku", "category", "item", "notes"],
    )
}
