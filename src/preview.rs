//! Fixed-width bordered rendering of a table for console display.
//!
//! ```text
//! +----+-------+
//! | ID | Name  |
//! +----+-------+
//! | 1  | Alice |
//! | 2  | Bob   |
//! +----+-------+
//! ...and 3 more rows are not shown (out of 5 total).
//! ```
use crate::config::{self, DEFAULT_PREVIEW_ROWS};
use crate::datamodel::{DataMatrix, Row, Tabular};
use comfy_table::{ColumnConstraint, Table, Width};
use std::fmt;

/// ASCII borders with a plain `-` rule under the header and no rules between rows.
const PREVIEW_STYLE: &str = "||--+-++|    ++++++";

/// Renders the header and up to `limit` rows through `Display`.
pub struct Preview<'a> {
    header: &'a [String],
    rows: &'a [Row],
    limit: usize,
}

impl<'a> Preview<'a> {
    /// `n == 0` falls back to the configured preview size, and to
    /// [`DEFAULT_PREVIEW_ROWS`] when that is zero too.
    pub fn new(data: &'a impl Tabular, n: usize) -> Self {
        let n = rows_to_show(n, config::current().preview_rows);
        let rows = data.rows();
        Self {
            header: data.header(),
            rows,
            limit: n.min(rows.len()),
        }
    }

    /// Column widths in characters, measured over every row, shown or not.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(PREVIEW_STYLE);
        table.set_header(self.header.iter().map(String::as_str));
        table.add_rows(
            self.rows[..self.limit]
                .iter()
                .map(|row| row.iter().map(String::as_str)),
        );
        // Widths include one space of padding on each side
        table.set_constraints(self.widths().into_iter().map(|width| {
            let width = u16::try_from(width + 2).unwrap_or(u16::MAX);
            ColumnConstraint::LowerBoundary(Width::Fixed(width))
        }));
        table
    }
}

fn rows_to_show(requested: usize, configured: usize) -> usize {
    match (requested, configured) {
        (0, 0) => DEFAULT_PREVIEW_ROWS,
        (0, configured) => configured,
        (requested, _) => requested,
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.table())?;

        if self.limit < self.rows.len() {
            writeln!(
                f,
                "...and {} more rows are not shown (out of {} total).",
                self.rows.len() - self.limit,
                self.rows.len()
            )?;
        }
        Ok(())
    }
}

impl DataMatrix {
    pub fn preview(&self, n: usize) -> Preview<'_> {
        Preview::new(self, n)
    }

    /// Preview with the configured number of rows.
    pub fn peek(&self) -> Preview<'_> {
        self.preview(0)
    }
}

impl fmt::Display for DataMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.peek(), f)
    }
}
