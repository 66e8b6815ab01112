//! Extracted views handed to the rendering layer.
//!
//! Each view pairs the sliced data with borrows of the coordinate
//! variables for its surviving axes, so a consumer can label axes
//! (values, units, titles) without re-resolving anything.

use grid_model::Variable;
use ndarray::{Array1, Array2};

/// A 2-D map slice.
#[derive(Debug)]
pub struct MapView<'d> {
    /// Data ordered (latitude, longitude).
    pub data: Array2<f64>,
    pub longitude: &'d Variable,
    pub latitude: &'d Variable,
}

/// A vertical cross-section slice.
#[derive(Debug)]
pub struct SectionView<'d> {
    /// Data ordered (vertical, horizontal).
    pub data: Array2<f64>,
    /// The surviving horizontal coordinate: latitude for a north-south
    /// section, longitude for an east-west one.
    pub horizontal: &'d Variable,
    pub vertical: &'d Variable,
}

/// A scalar-over-time series at a fixed point.
#[derive(Debug)]
pub struct TimeSeriesView<'d> {
    pub data: Array1<f64>,
    pub time: &'d Variable,
}

/// Any extracted view.
#[derive(Debug)]
pub enum View<'d> {
    Map(MapView<'d>),
    Section(SectionView<'d>),
    TimeSeries(TimeSeriesView<'d>),
}
