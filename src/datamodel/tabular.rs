use std::collections::BTreeMap;

pub type Row = Vec<String>;

/// Read-only view of a header and its rows.
///
/// This is the boundary consumed by the exporters and the preview renderer.
/// Implementors guarantee that every row has exactly `header().len()` cells.
pub trait Tabular {
    fn header(&self) -> &[String];

    fn rows(&self) -> &[Row];

    /// Rows as borrowed slices, optionally preceded by the header.
    fn data(&self, with_header: bool) -> Vec<&[String]> {
        let rows = self.rows();
        let mut data = Vec::with_capacity(rows.len() + usize::from(with_header));
        if with_header {
            data.push(self.header());
        }
        data.extend(rows.iter().map(Vec::as_slice));
        data
    }

    /// Projects each row into a map keyed by column name.
    fn data_map(&self) -> Vec<BTreeMap<String, String>> {
        let header = self.header();
        self.rows()
            .iter()
            .map(|row| {
                header
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<BTreeMap<_, _>>()
            })
            .collect()
    }
}
