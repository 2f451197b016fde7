pub mod find_rows;
pub mod operator;

pub use find_rows::{FindRowsOutcome, FindRowsQuery, HISTORY_ENTRIES, HISTORY_MEET_CONDITION};
pub use operator::Operator;
