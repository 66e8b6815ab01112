//! Error types for axis classification and search.

use thiserror::Error;

use crate::AxisKind;

/// Errors raised while resolving or searching coordinate axes.
#[derive(Debug, Error)]
pub enum AxisError {
    /// The requested axis kind is not among the variable's dimensions.
    #[error("no {0} axis found among the variable's dimensions")]
    MissingAxis(AxisKind),

    /// A coordinate variable has no values to search.
    #[error("coordinate variable '{name}' has no values")]
    EmptyCoordinate { name: String },

    /// Vertical orientation was asked of a non-vertical variable.
    #[error("'{name}' has neither pressure units nor a 'positive' attribute; not a vertical axis")]
    NotVertical { name: String },

    /// The `positive` attribute holds something other than up/down.
    #[error("invalid 'positive' attribute value '{value}' (expected 'up' or 'down')")]
    InvalidPositive { value: String },
}
