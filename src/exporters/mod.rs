pub mod csv;
pub mod json;
pub mod output;
pub mod text;
pub mod yaml;

pub use self::csv::CsvConverter;
pub use json::JsonConverter;
pub use output::Output;
pub use text::TextConverter;
pub use yaml::YamlConverter;

use crate::datamodel::DataMatrix;
use crate::error::ExportError;

impl DataMatrix {
    pub fn to_csv(&self, with_header: bool) -> Result<Output, ExportError> {
        CsvConverter::to_csv(self, with_header)
    }

    pub fn to_tsv(&self, with_header: bool) -> Result<Output, ExportError> {
        CsvConverter::to_tsv(self, with_header)
    }

    pub fn to_custom(&self, with_header: bool, separator: &str) -> Output {
        TextConverter::to_custom(self, with_header, separator)
    }

    /// Array of objects keyed by column name, pretty-printed unless `compact`.
    pub fn to_json(&self, compact: bool) -> Result<Output, ExportError> {
        JsonConverter::to_json(self, compact)
    }

    pub fn to_json_rows(&self, with_header: bool, compact: bool) -> Result<Output, ExportError> {
        JsonConverter::to_json_rows(self, with_header, compact)
    }

    pub fn to_yaml(&self) -> Result<Output, ExportError> {
        YamlConverter::to_yaml(self)
    }
}
