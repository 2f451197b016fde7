use super::Output;
use crate::datamodel::Tabular;

/// Converter for tabular data to plain text joined by an arbitrary separator.
///
/// No quoting is applied, so cells containing the separator are ambiguous.
pub struct TextConverter;

impl TextConverter {
    /// Joins cells with `separator` and rows with `\n`, without a trailing
    /// line break.
    pub fn to_custom(data: &impl Tabular, with_header: bool, separator: &str) -> Output {
        let text = data
            .data(with_header)
            .iter()
            .map(|row| row.join(separator))
            .collect::<Vec<_>>()
            .join("\n");
        Output::from(text)
    }
}
