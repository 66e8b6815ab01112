//! Common data model shared across the grid-views workspace.
//!
//! A [`Dataset`] is the handoff point from whatever opened the file: a map
//! of named [`Variable`]s, each carrying its dimension names, an attribute
//! map and an N-dimensional payload. The model is read-only as far as the
//! rest of the workspace is concerned; classification and extraction never
//! mutate it.

pub mod attr;
pub mod dataset;
pub mod time;
pub mod variable;

pub use attr::AttrValue;
pub use dataset::Dataset;
pub use time::{decode_time_axis, TimeStep, TimeUnits, TimeUnitsError};
pub use variable::Variable;
