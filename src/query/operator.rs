use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comparison applied between a cell and a query value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    /// Exact string equality
    #[default]
    Equals,

    /// Exact string inequality
    ///
    /// With several query values, a row is selected only when it differs
    /// from every one of them.
    NotEquals,

    /// Substring containment
    Contains,

    /// Prefix match
    StartsWith,

    /// Suffix match
    EndsWith,
}

impl Operator {
    /// Returns true if selection requires the cell to satisfy every query
    /// value instead of any of them.
    #[inline]
    pub fn is_negated(&self) -> bool {
        matches!(self, Self::NotEquals)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not-equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts-with",
            Operator::EndsWith => "ends-with",
        }
    }

    /// Compares a cell against one query value.
    pub fn matches(&self, cell: &str, value: &str, case_insensitive: bool) -> bool {
        if case_insensitive {
            self.compare(&cell.to_lowercase(), &value.to_lowercase())
        } else {
            self.compare(cell, value)
        }
    }

    fn compare(&self, cell: &str, value: &str) -> bool {
        match self {
            Operator::Equals => cell == value,
            Operator::NotEquals => cell != value,
            Operator::Contains => cell.contains(value),
            Operator::StartsWith => cell.starts_with(value),
            Operator::EndsWith => cell.ends_with(value),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Operator::Equals),
            "not-equals" => Ok(Operator::NotEquals),
            "contains" => Ok(Operator::Contains),
            "starts-with" => Ok(Operator::StartsWith),
            "ends-with" => Ok(Operator::EndsWith),
            other => Err(MatrixError::UnknownOperator(other.to_string())),
        }
    }
}
