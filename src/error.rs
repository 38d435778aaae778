// src/error.rs

use thiserror::Error;

/// Schema and configuration errors raised while building a tree map.
///
/// Rows whose codes are missing from a lookup table are not errors; they are
/// dropped by [`crate::enrich::enrich`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A column the join depends on is not in the table headers
    #[error("column `{0}` not found in table headers")]
    MissingColumn(String),

    /// A data row does not have one value per header
    #[error("row {row} has {found} values, expected {expected}")]
    RowArity {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The current depth level is not part of the depth chain
    #[error("depth `{0}` is not in the depth chain")]
    DepthNotFound(String),

    /// The current depth level occurs more than once in the depth chain
    #[error("depth `{0}` occurs more than once in the depth chain")]
    DuplicateDepth(String),

    /// A fetched payload does not have the expected shape
    #[error("invalid payload from `{locator}`: {reason}")]
    InvalidPayload { locator: String, reason: String },

    /// The view configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
