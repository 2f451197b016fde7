use crate::datamodel::DataMatrix;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl DataMatrix {
    pub fn sort_by_asc(&mut self, keys: &[&str]) -> Result<()> {
        self.sort_by(SortOrder::Asc, keys)
    }

    pub fn sort_by_desc(&mut self, keys: &[&str]) -> Result<()> {
        self.sort_by(SortOrder::Desc, keys)
    }

    /// Stable in-place sort on `keys`, the first key being the primary one.
    /// An empty `keys` sorts on every column in header order.
    ///
    /// Cells are compared as strings. Every key is resolved before any row
    /// moves, so an unknown column leaves the order untouched.
    pub fn sort_by(&mut self, order: SortOrder, keys: &[&str]) -> Result<()> {
        let positions = if keys.is_empty() {
            (0..self.header.len()).collect()
        } else {
            self.header.require_all(keys)?
        };
        debug!(
            "Sorting {} rows on {} keys ({:?})",
            self.rows.len(),
            positions.len(),
            order
        );

        self.rows.sort_by(|a, b| {
            positions
                .iter()
                .map(|&position| a[position].cmp(&b[position]))
                .find(|ordering| ordering.is_ne())
                .map_or(Ordering::Equal, |ordering| order.apply(ordering))
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    fn unsorted() -> DataMatrix {
        DataMatrix::with_data(
            [["2", "Bob"], ["1", "Alice"], ["2", "Alice"], ["10", "Carol"]],
            ["ID", "Name"],
        )
        .unwrap()
    }

    #[test]
    fn test_sort_asc_and_desc() {
        let mut matrix = DataMatrix::with_data([["2", "Bob"], ["1", "Alice"]], ["ID", "Name"])
            .unwrap();
        matrix.sort_by_asc(&["ID"]).unwrap();
        assert_eq!(matrix.get_cell(0, "ID").unwrap(), "1");
        matrix.sort_by_desc(&["ID"]).unwrap();
        assert_eq!(matrix.get_cell(0, "ID").unwrap(), "2");
    }

    #[test]
    fn test_sort_is_lexicographic_and_multi_key() {
        let mut matrix = unsorted();
        matrix.sort_by_asc(&["ID", "Name"]).unwrap();
        assert_eq!(
            matrix.rows(),
            &[
                vec!["1".to_string(), "Alice".to_string()],
                vec!["10".to_string(), "Carol".to_string()],
                vec!["2".to_string(), "Alice".to_string()],
                vec!["2".to_string(), "Bob".to_string()],
            ]
        );

        matrix.sort_by_desc(&["Name", "ID"]).unwrap();
        assert_eq!(
            matrix.get_column("Name").unwrap(),
            vec!["Carol", "Bob", "Alice", "Alice"]
        );
        assert_eq!(matrix.get_column("ID").unwrap(), vec!["10", "2", "2", "1"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut matrix = unsorted();
        matrix.sort_by_asc(&["ID"]).unwrap();
        // Both "2" rows keep their relative order
        assert_eq!(matrix.get_column("Name").unwrap()[2..], ["Bob", "Alice"]);

        let mut matrix = unsorted();
        matrix.sort_by_desc(&["ID"]).unwrap();
        assert_eq!(matrix.get_column("Name").unwrap()[..2], ["Bob", "Alice"]);
    }

    #[test]
    fn test_sort_without_keys_uses_header_order() {
        let mut matrix = unsorted();
        matrix.sort_by_asc(&[]).unwrap();
        let mut expected = unsorted();
        expected.sort_by_asc(&["ID", "Name"]).unwrap();
        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_sort_unknown_key_leaves_rows() {
        let mut matrix = unsorted();
        let before = matrix.copy();
        assert_eq!(
            matrix.sort_by_asc(&["ID", "Age"]),
            Err(MatrixError::column_not_found("Age"))
        );
        assert_eq!(matrix, before);
        assert!(matrix.sort_by_desc(&["Age"]).is_err());
        assert_eq!(matrix, before);
    }
}
