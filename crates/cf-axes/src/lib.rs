//! Axis semantics for CF-convention gridded datasets.
//!
//! Under the Climate and Forecast conventions a coordinate variable's role
//! is declared by its attributes, never by its name: longitude and latitude
//! by a closed set of unit spellings, vertical axes by pressure units or a
//! `positive` attribute, time axes by a `"<step> since <datetime>"` units
//! string. This crate implements those rules and the searches built on
//! them:
//!
//! - [`classify()`] — attribute-based classification into an [`AxisKind`]
//! - [`is_positive_up`] — vertical orientation (pressure axes point down)
//! - [`find_axis`] / [`resolve_axes`] — locating the coordinate variables
//!   for a data variable's dimensions
//! - [`nearest_index`] / [`nearest_longitude_index`] /
//!   [`nearest_axis_index`] — nearest-value coordinate lookup, with
//!   longitude handled on the circle
//!
//! Everything here is stateless and recomputed per call; classifying or
//! resolving the same variable twice always yields the same answer.

pub mod classify;
pub mod error;
pub mod resolve;
pub mod search;

pub use classify::{classify, is_positive_up, AxisKind};
pub use error::AxisError;
pub use resolve::{find_axis, resolve_axes, ResolvedAxes};
pub use search::{nearest_axis_index, nearest_index, nearest_longitude_index};
