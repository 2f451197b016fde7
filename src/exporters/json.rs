use super::Output;
use crate::config;
use crate::datamodel::Tabular;
use crate::error::ExportError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Converter for tabular data to JSON.
pub struct JsonConverter;

impl JsonConverter {
    /// Array of objects keyed by column name.
    pub fn to_json(data: &impl Tabular, compact: bool) -> Result<Output, ExportError> {
        Self::serialize(&data.data_map(), compact)
    }

    /// Array of arrays, the header first when `with_header` is set.
    pub fn to_json_rows(
        data: &impl Tabular,
        with_header: bool,
        compact: bool,
    ) -> Result<Output, ExportError> {
        Self::serialize(&data.data(with_header), compact)
    }

    fn serialize<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<Output, ExportError> {
        if compact {
            return Ok(Output::new(serde_json::to_vec(value)?));
        }

        let indent = " ".repeat(config::current().json_indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        value.serialize(&mut serializer)?;
        Ok(Output::new(buffer))
    }
}
