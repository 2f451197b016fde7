use super::Output;
use crate::datamodel::Tabular;
use crate::error::ExportError;

/// Converter for tabular data to a YAML sequence of mappings keyed by column name.
pub struct YamlConverter;

impl YamlConverter {
    pub fn to_yaml(data: &impl Tabular) -> Result<Output, ExportError> {
        Ok(Output::from(serde_yaml::to_string(&data.data_map())?))
    }
}
