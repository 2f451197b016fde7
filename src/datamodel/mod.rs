pub mod header;
pub mod matrix;
pub mod tabular;

pub use header::Header;
pub use matrix::DataMatrix;
pub use tabular::{Row, Tabular};
