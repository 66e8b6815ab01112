//! View request types.
//!
//! A request is constructed by the caller for a single extraction call
//! and consumed once; requests are plain values and carry no state of
//! their own.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Orientation of a vertical cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionDirection {
    /// A section along a meridian, at a fixed longitude.
    NorthSouth,
    /// A section along a parallel, at a fixed latitude.
    EastWest,
}

impl SectionDirection {
    /// The coordinate kind the section is fixed at.
    pub fn fixed_coordinate(&self) -> &'static str {
        match self {
            SectionDirection::NorthSouth => "longitude",
            SectionDirection::EastWest => "latitude",
        }
    }
}

impl FromStr for SectionDirection {
    type Err = ExtractError;

    /// Parse the conventional `"NS"` / `"EW"` spellings
    /// (case-insensitive). Anything else is rejected, which is the one
    /// place an invalid direction can enter the engine: the enum keeps
    /// the extraction branches themselves exhaustive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NS" => Ok(SectionDirection::NorthSouth),
            "EW" => Ok(SectionDirection::EastWest),
            _ => Err(ExtractError::InvalidDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for SectionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionDirection::NorthSouth => write!(f, "NS"),
            SectionDirection::EastWest => write!(f, "EW"),
        }
    }
}

/// Request for a 2-D (latitude, longitude) map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapRequest {
    /// Index along the time axis; ignored when the variable has none.
    pub t_index: usize,
    /// Index along the vertical axis; ignored when the variable has none.
    pub z_index: usize,
}

impl MapRequest {
    pub fn new(t_index: usize, z_index: usize) -> Self {
        Self { t_index, z_index }
    }
}

/// Request for a vertical cross-section view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRequest {
    pub direction: SectionDirection,
    /// The fixed longitude (NS) or latitude (EW), in degrees.
    pub value: f64,
    /// Index along the time axis; ignored when the variable has none.
    pub t_index: usize,
}

impl SectionRequest {
    pub fn new(direction: SectionDirection, value: f64, t_index: usize) -> Self {
        Self {
            direction,
            value,
            t_index,
        }
    }
}

/// Request for a time series at a fixed location and level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRequest {
    /// Longitude of the point, in degrees.
    pub lon: f64,
    /// Latitude of the point, in degrees.
    pub lat: f64,
    /// Vertical coordinate value; ignored when the variable has no
    /// vertical axis.
    pub z: f64,
}

impl TimeSeriesRequest {
    pub fn new(lon: f64, lat: f64, z: f64) -> Self {
        Self { lon, lat, z }
    }
}

/// Any view request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewRequest {
    Map(MapRequest),
    Section(SectionRequest),
    TimeSeries(TimeSeriesRequest),
}

impl From<MapRequest> for ViewRequest {
    fn from(r: MapRequest) -> Self {
        ViewRequest::Map(r)
    }
}

impl From<SectionRequest> for ViewRequest {
    fn from(r: SectionRequest) -> Self {
        ViewRequest::Section(r)
    }
}

impl From<TimeSeriesRequest> for ViewRequest {
    fn from(r: TimeSeriesRequest) -> Self {
        ViewRequest::TimeSeries(r)
    }
}
