//! Extraction of display-ready views from gridded variables.
//!
//! Given a dataset and the name of a data variable, the engine resolves
//! the variable's coordinate axes, then slices its 2–4-D payload down to
//! the shape a renderer needs:
//!
//! - a **map**: a 2-D (latitude, longitude) field at a fixed time/level
//! - a **vertical section**: (vertical, latitude-or-longitude) at a fixed
//!   longitude-or-latitude
//! - a **time series**: a 1-D series at a fixed location and level
//!
//! Which array axes get indexed away is driven by the variable's
//! dimension count and which axis kinds actually resolved; requested
//! physical coordinates are matched by nearest-value lookup, with
//! longitude searched on the circle. Every view carries the coordinate
//! variables a consumer needs to label its axes.
//!
//! Axis resolution is recomputed on every call; nothing is cached, so
//! repeated extractions are independent and the engine never observes
//! stale state.
//!
//! # Example
//!
//! ```rust,ignore
//! use view_extractor::{extract, ViewRequest, MapRequest};
//!
//! let request = ViewRequest::Map(MapRequest::new(0, 5));
//! let view = extract(&dataset, "ta", &request)?;
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod view;

pub use error::{ExtractError, Result};
pub use extract::{extract, extract_map, extract_time_series, extract_vertical_section};
pub use request::{MapRequest, SectionDirection, SectionRequest, TimeSeriesRequest, ViewRequest};
pub use view::{MapView, SectionView, TimeSeriesView, View};
