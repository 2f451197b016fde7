use super::operator::Operator;
use crate::datamodel::DataMatrix;
use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Column of the match history holding the queried value.
pub const HISTORY_ENTRIES: &str = "entries";
/// Column of the match history holding `"true"` or `"false"`.
pub const HISTORY_MEET_CONDITION: &str = "meet_condition";

/// Describes a row search on a single column.
///
/// `value` and `values` are merged into one list of query values, `value`
/// going last. Duplicates are kept: each one gets its own match history entry.
///
/// # Examples
///
/// ```
/// use tabmatrix::{FindRowsQuery, Operator};
///
/// let query = FindRowsQuery::new("Name", Operator::Equals)
///     .case_insensitive(true)
///     .values(["Alice", "Bob"])
///     .value("Carol");
/// assert_eq!(query.effective_values(), vec!["Alice", "Bob", "Carol"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindRowsQuery {
    /// Header name of the column to search
    pub column: String,

    /// Required when deserializing; a query without one is rejected
    pub operator: Operator,

    /// Lower-cases both the cell and the query value before comparing
    #[serde(default)]
    pub case_insensitive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    pub values: Vec<String>,
}

impl FindRowsQuery {
    pub fn new(column: impl Into<String>, operator: Operator) -> Self {
        Self {
            column: column.into(),
            operator,
            ..Default::default()
        }
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// `values` followed by `value`, if any.
    pub fn effective_values(&self) -> Vec<&str> {
        self.values
            .iter()
            .chain(self.value.iter())
            .map(String::as_str)
            .collect()
    }

    fn matches(&self, cell: &str, value: &str) -> bool {
        self.operator.matches(cell, value, self.case_insensitive)
    }

    /// Whether a cell is selected by the whole value list: every value for
    /// `not-equals`, any value otherwise.
    fn selects(&self, cell: &str, values: &[&str]) -> bool {
        if self.operator.is_negated() {
            values.iter().all(|value| self.matches(cell, value))
        } else {
            values.iter().any(|value| self.matches(cell, value))
        }
    }
}

/// Result of [`DataMatrix::find_rows_with_histories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRowsOutcome {
    /// Selected rows, in their original order
    pub rows: DataMatrix,
    /// One `(entries, meet_condition)` row per query value, sorted by
    /// `meet_condition` then `entries`
    pub history: DataMatrix,
}

impl DataMatrix {
    /// Returns a new matrix with the rows selected by `query`.
    ///
    /// Fails with `ColumnNotFound` if the column does not exist, and with
    /// `NoRowsFound` if nothing is selected.
    pub fn find_rows(&self, query: &FindRowsQuery) -> Result<DataMatrix> {
        let column = self.header.require(&query.column)?;
        let values = query.effective_values();
        let selected = self.select_rows(query, column, &values)?;
        self.get_rows(&selected)
    }

    /// Same selection as [`DataMatrix::find_rows`], plus a report telling for
    /// each query value whether at least one row matched it on its own.
    pub fn find_rows_with_histories(&self, query: &FindRowsQuery) -> Result<FindRowsOutcome> {
        let column = self.header.require(&query.column)?;
        let values = query.effective_values();

        let mut history = DataMatrix::new([HISTORY_ENTRIES, HISTORY_MEET_CONDITION])?;
        for value in &values {
            let found = self.rows.iter().any(|row| query.matches(&row[column], value));
            trace!("Query value {:?} matched: {}", value, found);
            history.add_row([value.to_string(), found.to_string()])?;
        }
        history.sort_by_asc(&[HISTORY_MEET_CONDITION, HISTORY_ENTRIES])?;

        let selected = self.select_rows(query, column, &values)?;
        Ok(FindRowsOutcome {
            rows: self.get_rows(&selected)?,
            history,
        })
    }

    /// Indexes of the selected rows, ascending and without duplicates.
    fn select_rows(
        &self,
        query: &FindRowsQuery,
        column: usize,
        values: &[&str],
    ) -> Result<Vec<usize>> {
        let selected: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| query.selects(&row[column], values))
            .map(|(index, _)| index)
            .collect();

        debug!(
            "Query on column {} ({}, {} values): {} of {} rows selected",
            query.column,
            query.operator,
            values.len(),
            selected.len(),
            self.rows.len()
        );

        if selected.is_empty() {
            return Err(MatrixError::NoRowsFound {
                column: query.column.clone(),
            });
        }
        Ok(selected)
    }
}
