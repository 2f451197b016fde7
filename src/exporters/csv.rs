use super::Output;
use crate::datamodel::Tabular;
use crate::error::ExportError;
use csv::{Terminator, WriterBuilder};
use tracing::debug;

/// Converter for tabular data to delimiter-separated values.
///
/// Fields are quoted only when needed (delimiter, quote or line break inside),
/// with embedded quotes doubled. Records end with `\n`.
pub struct CsvConverter;

impl CsvConverter {
    pub fn to_csv(data: &impl Tabular, with_header: bool) -> Result<Output, ExportError> {
        Self::to_delimited(data, with_header, b',')
    }

    pub fn to_tsv(data: &impl Tabular, with_header: bool) -> Result<Output, ExportError> {
        Self::to_delimited(data, with_header, b'\t')
    }

    pub fn to_delimited(
        data: &impl Tabular,
        with_header: bool,
        delimiter: u8,
    ) -> Result<Output, ExportError> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for record in data.data(with_header) {
            writer.write_record(record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        debug!("Rendered {} bytes of delimited text", bytes.len());
        Ok(Output::new(bytes))
    }
}
