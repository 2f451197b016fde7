use super::header::Header;
use super::tabular::{Row, Tabular};
use crate::error::{MatrixError, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory table: a header of unique column names and rows of string cells.
///
/// Every row always holds exactly one cell per column. Operations that would
/// break this fail without touching the matrix, batch operations included:
/// they validate the whole batch before applying any of it.
///
/// # Examples
///
/// ```
/// use tabmatrix::DataMatrix;
///
/// let mut matrix = DataMatrix::new(["ID", "Name", "Age"]).unwrap();
/// matrix.add_row(["1", "Alice", "30"]).unwrap();
/// matrix.add_row(["2", "Bob", "25"]).unwrap();
///
/// assert_eq!(matrix.len_rows(), 2);
/// assert_eq!(matrix.get_cell(1, "Name").unwrap(), "Bob");
/// assert!(matrix.add_row(["3", "Carol"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMatrix {
    pub(crate) header: Header,
    pub(crate) rows: Vec<Row>,
}

impl DataMatrix {
    /// Creates an empty matrix with the given column names.
    ///
    /// Fails with `EmptyHeader` when no names are given, or `DuplicateHeader`
    /// when a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            header: Header::new(names)?,
            rows: Vec::new(),
        })
    }

    /// Creates a matrix and fills it with `rows`.
    pub fn with_data<R, I, S, N, H>(rows: R, names: N) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
        N: IntoIterator<Item = H>,
        H: Into<String>,
    {
        let mut matrix = Self::new(names)?;
        matrix.add_rows(rows)?;
        Ok(matrix)
    }

    pub(crate) fn from_parts(header: Header, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == header.len()));
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        self.header.names()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn data(&self, with_header: bool) -> Vec<&[String]> {
        Tabular::data(self, with_header)
    }

    pub fn data_map(&self) -> Vec<BTreeMap<String, String>> {
        Tabular::data_map(self)
    }

    pub fn len_columns(&self) -> usize {
        self.header.len()
    }

    pub fn len_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.position(name)
    }

    /// Removes every row, keeping the header.
    pub fn clear(&mut self) {
        debug!("Clearing {} rows", self.rows.len());
        self.rows.clear();
    }

    /// Deep copy: header, rows and column index are all freshly allocated.
    pub fn copy(&self) -> DataMatrix {
        self.clone()
    }

    pub fn add_row<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = self.checked_row(values)?;
        self.rows.push(row);
        Ok(())
    }

    /// Appends several rows. Nothing is appended if any row has the wrong length.
    pub fn add_rows<R, I, S>(&mut self, rows: R) -> Result<()>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|values| self.checked_row(values))
            .collect::<Result<Vec<_>>>()?;
        debug!("Adding {} rows", rows.len());
        self.rows.extend(rows);
        Ok(())
    }

    pub fn get_row(&self, index: usize) -> Result<&[String]> {
        self.check_row_index(index)?;
        Ok(&self.rows[index])
    }

    /// Returns a new matrix holding copies of the requested rows, in the
    /// requested order. Indexes may repeat.
    pub fn get_rows(&self, indexes: &[usize]) -> Result<DataMatrix> {
        let rows = indexes
            .iter()
            .map(|&index| self.get_row(index).map(<[String]>::to_vec))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(self.header.clone(), rows))
    }

    pub fn get_cell(&self, index: usize, name: &str) -> Result<&str> {
        let column = self.header.require(name)?;
        self.check_row_index(index)?;
        Ok(&self.rows[index][column])
    }

    pub fn get_column(&self, name: &str) -> Result<Vec<&str>> {
        let column = self.header.require(name)?;
        Ok(self.rows.iter().map(|row| row[column].as_str()).collect())
    }

    /// Projects the matrix onto `names`, in that order, as a new matrix.
    pub fn get_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<DataMatrix> {
        let positions = self.header.require_all(names)?;
        let header = Header::new(names.iter().map(|name| name.as_ref()))?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                positions
                    .iter()
                    .map(|&position| row[position].clone())
                    .collect()
            })
            .collect();
        Ok(Self::from_parts(header, rows))
    }

    pub fn update_row<I, S>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check_row_index(index)?;
        let row = self.checked_row(values)?;
        self.rows[index] = row;
        Ok(())
    }

    pub fn update_row_column(
        &mut self,
        index: usize,
        name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let column = self.header.require(name)?;
        self.check_row_index(index)?;
        self.rows[index][column] = value.into();
        Ok(())
    }

    /// Removes and returns the row at `index`, shifting later rows up.
    pub fn delete_row(&mut self, index: usize) -> Result<Row> {
        self.check_row_index(index)?;
        debug!("Deleting row {}", index);
        Ok(self.rows.remove(index))
    }

    /// Adds a column filled with empty cells.
    pub fn add_column(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_column_with_default_value(name, "")
    }

    /// Adds several columns filled with empty cells.
    pub fn add_columns<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_columns_with_default_value(names, "")
    }

    pub fn add_column_with_default_value(
        &mut self,
        name: impl Into<String>,
        default_value: &str,
    ) -> Result<()> {
        self.add_columns_with_default_value([name], default_value)
    }

    /// Adds several columns, every existing row receiving `default_value` in
    /// each of them. Fails without mutation if any name collides with an
    /// existing column or with another name of the batch.
    pub fn add_columns_with_default_value<I, S>(
        &mut self,
        names: I,
        default_value: &str,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = self.header.clone();
        let mut added = 0;
        for name in names {
            header.push(name.into())?;
            added += 1;
        }
        debug!("Adding {} columns to {} rows", added, self.rows.len());
        self.header = header;
        for row in self.rows.iter_mut() {
            row.extend(std::iter::repeat_n(default_value.to_string(), added));
        }
        Ok(())
    }

    /// Adds a column with explicit per-row values. Rows past the end of
    /// `values` receive an empty cell.
    ///
    /// Fails with `RowIndexOutOfRange` if there are more values than rows.
    pub fn add_column_with_values<I, S>(&mut self, name: impl Into<String>, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() > self.rows.len() {
            return Err(MatrixError::RowIndexOutOfRange {
                index: self.rows.len(),
                len: self.rows.len(),
            });
        }
        let mut header = self.header.clone();
        header.push(name.into())?;
        self.header = header;

        let mut values = values.into_iter();
        for row in self.rows.iter_mut() {
            row.push(values.next().unwrap_or_default());
        }
        Ok(())
    }

    pub fn delete_column(&mut self, name: &str) -> Result<()> {
        let column = self.header.require(name)?;
        if self.header.len() == 1 {
            return Err(MatrixError::DeleteLastColumn);
        }
        self.header.remove(column);
        for row in self.rows.iter_mut() {
            row.remove(column);
        }
        debug!("Deleted column {}", name);
        Ok(())
    }

    /// Removes every column whose cells are all empty or whitespace, and
    /// returns how many were removed.
    ///
    /// A matrix without rows has only empty columns, so it fails with
    /// `DeleteLastColumn`, as does any matrix whose columns are all empty.
    pub fn delete_empty_columns(&mut self) -> Result<usize> {
        let mut keep = vec![false; self.header.len()];
        for row in &self.rows {
            for (flag, cell) in keep.iter_mut().zip(row) {
                if !cell.trim().is_empty() {
                    *flag = true;
                }
            }
        }
        if !keep.contains(&true) {
            return Err(MatrixError::DeleteLastColumn);
        }
        let removed = keep.iter().filter(|&&kept| !kept).count();
        if removed == 0 {
            return Ok(0);
        }

        self.header.retain(&keep);
        for row in self.rows.iter_mut() {
            let mut position = 0;
            row.retain(|_| {
                let kept = keep[position];
                position += 1;
                kept
            });
        }
        debug!("Deleted {} empty columns", removed);
        Ok(removed)
    }

    /// Whether any cell of the column contains `needle` (case sensitive).
    pub fn contains_value(&self, name: &str, needle: &str) -> Result<bool> {
        let column = self.header.require(name)?;
        Ok(self.rows.iter().any(|row| row[column].contains(needle)))
    }

    /// Like [`DataMatrix::contains_value`], but reports absence as
    /// `ValueNotFound`.
    pub fn require_value(&self, name: &str, needle: &str) -> Result<()> {
        if self.contains_value(name, needle)? {
            Ok(())
        } else {
            Err(MatrixError::ValueNotFound {
                column: name.to_string(),
                value: needle.to_string(),
            })
        }
    }

    fn check_row_index(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(MatrixError::RowIndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    fn checked_row<I, S>(&self, values: I) -> Result<Row>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Row = values.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(MatrixError::RowLengthMismatch {
                expected: self.header.len(),
                actual: row.len(),
            });
        }
        Ok(row)
    }
}

impl Tabular for DataMatrix {
    fn header(&self) -> &[String] {
        self.header.names()
    }

    fn rows(&self) -> &[Row] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_new() {
        let matrix = DataMatrix::new(["ID", "Name", "Age"]).unwrap();
        assert_eq!(matrix.len_columns(), 3);
        assert_eq!(matrix.len_rows(), 0);

        assert_eq!(
            DataMatrix::new(Vec::<String>::new()),
            Err(MatrixError::EmptyHeader)
        );
        assert_eq!(
            DataMatrix::new(["ID", "Name", "ID"]),
            Err(MatrixError::duplicate_header("ID"))
        );
    }

    #[test]
    fn test_with_data() {
        let matrix = fixtures::people().unwrap();
        assert_eq!(matrix.len_rows(), 3);
        assert_eq!(matrix.get_row(2).unwrap(), &["3", "alice", "28"]);

        let result = DataMatrix::with_data([vec!["1", "Alice"], vec!["2"]], ["ID", "Name"]);
        assert_eq!(
            result,
            Err(MatrixError::RowLengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_add_row_length_mismatch_does_not_mutate() {
        let mut matrix = DataMatrix::new(["ID", "Name"]).unwrap();
        matrix.add_row(["1", "Alice"]).unwrap();
        assert!(matrix.add_row(["2"]).is_err());
        assert!(matrix.add_row(["2", "Bob", "extra"]).is_err());
        assert_eq!(matrix.len_rows(), 1);
    }

    #[test]
    fn test_add_rows_is_atomic() {
        let mut matrix = DataMatrix::new(["ID", "Name"]).unwrap();
        let err = matrix
            .add_rows([vec!["1", "Alice"], vec!["2", "Bob"], vec!["3"]])
            .unwrap_err();
        assert!(matches!(err, MatrixError::RowLengthMismatch { .. }));
        assert_eq!(matrix.len_rows(), 0);

        matrix
            .add_rows([vec!["1", "Alice"], vec!["2", "Bob"]])
            .unwrap();
        assert_eq!(matrix.len_rows(), 2);
    }

    #[test]
    fn test_get_row_out_of_range() {
        let matrix = fixtures::people().unwrap();
        assert_eq!(
            matrix.get_row(3),
            Err(MatrixError::RowIndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_get_rows_order_and_duplicates() {
        let matrix = fixtures::people().unwrap();
        let subset = matrix.get_rows(&[2, 0, 2]).unwrap();
        assert_eq!(subset.header(), matrix.header());
        assert_eq!(subset.len_rows(), 3);
        assert_eq!(subset.get_cell(0, "ID").unwrap(), "3");
        assert_eq!(subset.get_cell(1, "ID").unwrap(), "1");
        assert_eq!(subset.get_cell(2, "ID").unwrap(), "3");

        assert!(matrix.get_rows(&[0, 5]).is_err());
        assert_eq!(matrix.get_rows(&[]).unwrap().len_rows(), 0);
    }

    #[test]
    fn test_get_cell() {
        let matrix = fixtures::people().unwrap();
        assert_eq!(matrix.get_cell(0, "Name").unwrap(), "Alice");
        assert_eq!(
            matrix.get_cell(0, "Class"),
            Err(MatrixError::column_not_found("Class"))
        );
        assert!(matches!(
            matrix.get_cell(9, "Name"),
            Err(MatrixError::RowIndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn test_get_column() {
        let matrix = fixtures::people().unwrap();
        assert_eq!(
            matrix.get_column("Name").unwrap(),
            vec!["Alice", "Bob", "alice"]
        );
        assert!(matrix.get_column("Class").is_err());
    }

    #[test]
    fn test_get_columns() {
        let matrix = fixtures::people().unwrap();
        let projected = matrix.get_columns(&["Age", "ID"]).unwrap();
        assert_eq!(projected.header(), &["Age".to_string(), "ID".to_string()]);
        assert_eq!(projected.get_row(1).unwrap(), &["25", "2"]);
        assert_eq!(projected.column_index("ID"), Some(1));

        assert_eq!(
            matrix.get_columns(&["ID", "Class"]),
            Err(MatrixError::column_not_found("Class"))
        );

        // Unknown columns are reported even when there are no rows
        let empty = DataMatrix::new(["ID"]).unwrap();
        assert!(empty.get_columns(&["Class"]).is_err());
    }

    #[test]
    fn test_update_row() {
        let mut matrix = fixtures::people().unwrap();
        matrix.update_row(1, ["2", "Bobby", "26"]).unwrap();
        assert_eq!(matrix.get_row(1).unwrap(), &["2", "Bobby", "26"]);

        assert!(matches!(
            matrix.update_row(5, ["5", "Eve", "20"]),
            Err(MatrixError::RowIndexOutOfRange { .. })
        ));
        assert!(matches!(
            matrix.update_row(1, ["2", "Bob"]),
            Err(MatrixError::RowLengthMismatch { .. })
        ));
        assert_eq!(matrix.get_row(1).unwrap(), &["2", "Bobby", "26"]);
    }

    #[test]
    fn test_update_row_column() {
        let mut matrix = fixtures::people().unwrap();
        matrix.update_row_column(0, "Name", "Bram").unwrap();
        assert_eq!(matrix.get_cell(0, "Name").unwrap(), "Bram");
        assert!(matrix.update_row_column(0, "Class", "Bram").is_err());
        assert!(matrix.update_row_column(3, "Name", "Bram").is_err());
    }

    #[test]
    fn test_delete_row() {
        let mut matrix = fixtures::people().unwrap();
        let removed = matrix.delete_row(1).unwrap();
        assert_eq!(removed, vec!["2", "Bob", "25"]);
        assert_eq!(matrix.get_column("ID").unwrap(), vec!["1", "3"]);

        assert_eq!(
            matrix.delete_row(2),
            Err(MatrixError::RowIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(matrix.len_rows(), 2);
    }

    #[test]
    fn test_add_column_variants() {
        let mut matrix = DataMatrix::with_data(
            [["1", "Alice"], ["2", "Bram"], ["3", "John"]],
            ["ID", "Name"],
        )
        .unwrap();

        matrix.add_column_with_default_value("Age", "20").unwrap();
        assert_eq!(matrix.get_column("Age").unwrap(), vec!["20", "20", "20"]);

        matrix
            .add_column_with_values("Gender", ["Woman", "Man"])
            .unwrap();
        assert_eq!(matrix.get_column("Gender").unwrap(), vec!["Woman", "Man", ""]);

        assert_eq!(
            matrix.add_column("Age"),
            Err(MatrixError::duplicate_header("Age"))
        );

        let err = matrix
            .add_column_with_values("Class", ["Science", "Math", "Biology", "Physics"])
            .unwrap_err();
        assert!(matches!(err, MatrixError::RowIndexOutOfRange { .. }));
        assert!(matrix.column_index("Class").is_none());
        assert_eq!(matrix.len_columns(), 4);
        assert!(matrix.rows().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_add_columns_is_atomic() {
        let mut matrix = DataMatrix::with_data([["1", "Alice"]], ["ID", "Name"]).unwrap();
        matrix.add_columns(["Age", "Gender"]).unwrap();
        assert_eq!(matrix.len_columns(), 4);
        assert_eq!(matrix.get_row(0).unwrap(), &["1", "Alice", "", ""]);

        assert!(matrix.add_columns(["Class", "Age"]).is_err());
        assert!(matrix.add_columns(["Class", "Class"]).is_err());
        assert_eq!(matrix.len_columns(), 4);
        assert!(matrix.column_index("Class").is_none());

        matrix
            .add_columns_with_default_value(["Class", "Year"], "n/a")
            .unwrap();
        assert_eq!(
            matrix.get_row(0).unwrap(),
            &["1", "Alice", "", "", "n/a", "n/a"]
        );
    }

    #[test]
    fn test_delete_column() {
        let mut matrix = DataMatrix::with_data([["1", "Alice"]], ["ID", "Name"]).unwrap();
        matrix.delete_column("ID").unwrap();
        assert_eq!(matrix.header(), &["Name".to_string()]);
        assert_eq!(matrix.column_index("Name"), Some(0));
        assert_eq!(matrix.get_row(0).unwrap(), &["Alice"]);

        assert_eq!(
            matrix.delete_column("Age"),
            Err(MatrixError::column_not_found("Age"))
        );
        assert_eq!(
            matrix.delete_column("Name"),
            Err(MatrixError::DeleteLastColumn)
        );
        assert_eq!(matrix.len_columns(), 1);
    }

    #[test]
    fn test_delete_empty_columns() {
        let mut matrix = DataMatrix::with_data(
            [["1", " ", "", "x"], ["2", "\t", "", ""]],
            ["ID", "Blank", "Empty", "Sparse"],
        )
        .unwrap();
        assert_eq!(matrix.delete_empty_columns().unwrap(), 2);
        assert_eq!(matrix.header(), &["ID".to_string(), "Sparse".to_string()]);
        assert_eq!(matrix.get_row(1).unwrap(), &["2", ""]);
        assert_eq!(matrix.column_index("Sparse"), Some(1));

        assert_eq!(matrix.delete_empty_columns().unwrap(), 0);

        let mut blank = DataMatrix::with_data([["", " "]], ["A", "B"]).unwrap();
        assert_eq!(
            blank.delete_empty_columns(),
            Err(MatrixError::DeleteLastColumn)
        );
        assert_eq!(blank.len_columns(), 2);
    }

    #[test]
    fn test_contains_value() {
        let matrix = fixtures::people().unwrap();
        assert!(matrix.contains_value("Name", "lic").unwrap());
        assert!(!matrix.contains_value("Name", "Bram").unwrap());
        assert!(!matrix.contains_value("Name", "BOB").unwrap());
        assert!(matrix.contains_value("Class", "x").is_err());

        assert!(matrix.require_value("Name", "Bob").is_ok());
        let err = matrix.require_value("Name", "Bram").unwrap_err();
        assert!(err.is_not_found());
        assert!(!matrix.require_value("Class", "x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_copy_is_independent() {
        let matrix = fixtures::people().unwrap();
        let mut copy = matrix.copy();
        copy.update_row_column(0, "Name", "Changed").unwrap();
        copy.add_column("Extra").unwrap();
        assert_eq!(matrix.get_cell(0, "Name").unwrap(), "Alice");
        assert_eq!(matrix.len_columns(), 3);
        assert!(matrix.column_index("Extra").is_none());
    }

    #[test]
    fn test_header_rows_data() {
        let mut matrix = fixtures::people().unwrap();
        assert_eq!(matrix.data(true).len(), 4);
        assert_eq!(matrix.data(false).len(), 3);
        assert_eq!(matrix.data(true)[0], matrix.header());

        let maps = matrix.data_map();
        assert_eq!(maps.len(), 3);
        assert_eq!(maps[1]["Name"], "Bob");
        assert_eq!(maps[1]["Age"], "25");

        matrix.clear();
        assert_eq!(matrix.len_rows(), 0);
        assert_eq!(matrix.len_columns(), 3);
    }
}
