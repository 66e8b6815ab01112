//! Error types for view extraction.

use cf_axes::AxisKind;
use thiserror::Error;

/// Errors that can occur while extracting a view.
///
/// All of these describe deterministic facts about the request or the
/// variable's metadata; none are transient, so none are worth retrying.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The named data variable is not in the dataset.
    #[error("variable not found: {0}")]
    VariableNotFound(String),

    /// The variable's dimensionality is outside the supported range.
    #[error("cannot extract from a variable with {ndim} dimensions")]
    InvalidDimensionality { ndim: usize },

    /// A required coordinate axis did not resolve.
    #[error("variable has no {0} axis")]
    MissingAxis(AxisKind),

    /// A 3-D variable where neither a vertical nor a time axis resolved,
    /// so there is no way to know what the third dimension means.
    #[error("variable is 3-D but has neither a vertical nor a time axis")]
    AmbiguousAxes,

    /// A coordinate variable has no values to search.
    #[error("coordinate variable '{0}' has no values")]
    EmptyCoordinate(String),

    /// A requested index does not fit the axis it indexes.
    #[error("index {index} is out of range for the {axis} axis (length {len})")]
    IndexOutOfRange {
        axis: AxisKind,
        index: usize,
        len: usize,
    },

    /// An unrecognized section direction string.
    #[error("unrecognized section direction '{0}' (expected 'NS' or 'EW')")]
    InvalidDirection(String),
}

/// Result type for view extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;
