//! The extraction engine.
//!
//! Data variables are assumed to follow the usual dimension order for
//! CF-style gridded files: leading non-geographic axes, then latitude,
//! then longitude innermost — `(time, vertical, lat, lon)` for 4-D.
//! Coordinate variables are assumed to match the length of the payload
//! axis they describe; both assumptions belong to the dataset provider.

use ndarray::{Array1, Array2, ArrayD, Axis, Ix1, Ix2};
use tracing::debug;

use cf_axes::{
    nearest_index, nearest_longitude_index, resolve_axes, AxisKind, ResolvedAxes,
};
use grid_model::{Dataset, Variable};

use crate::error::{ExtractError, Result};
use crate::request::{SectionDirection, ViewRequest};
use crate::view::{MapView, SectionView, TimeSeriesView, View};

/// Extract the requested view from a named data variable.
///
/// Thin dispatcher over the three extraction entry points.
pub fn extract<'d>(dataset: &'d Dataset, name: &str, request: &ViewRequest) -> Result<View<'d>> {
    match request {
        ViewRequest::Map(r) => extract_map(dataset, name, r.t_index, r.z_index).map(View::Map),
        ViewRequest::Section(r) => {
            extract_vertical_section(dataset, name, r.direction, r.value, r.t_index)
                .map(View::Section)
        }
        ViewRequest::TimeSeries(r) => {
            extract_time_series(dataset, name, r.lon, r.lat, r.z).map(View::TimeSeries)
        }
    }
}

/// Extract a 2-D (latitude, longitude) map slice.
///
/// The variable's dimension count decides what gets indexed away:
/// a 2-D variable is returned whole (both indices ignored), a 3-D
/// variable is indexed along whichever of vertical/time resolved, and a
/// 4-D variable is indexed along both. A 3-D variable where neither
/// resolved is ambiguous and rejected.
pub fn extract_map<'d>(
    dataset: &'d Dataset,
    name: &str,
    t_index: usize,
    z_index: usize,
) -> Result<MapView<'d>> {
    let data_var = lookup(dataset, name)?;
    let ndim = data_var.ndim();
    debug!(variable = name, ndim, t_index, z_index, "extracting map view");

    if !(2..=4).contains(&ndim) {
        return Err(ExtractError::InvalidDimensionality { ndim });
    }

    let axes = resolve_axes(dataset, data_var);
    let longitude = require(&axes, AxisKind::Longitude)?;
    let latitude = require(&axes, AxisKind::Latitude)?;

    let values = data_var.values();
    let data = match ndim {
        2 => values.to_owned(),
        3 => match (axes.vertical, axes.time) {
            (Some(_), _) => {
                check_index(AxisKind::Vertical, z_index, values.len_of(Axis(0)))?;
                values.index_axis(Axis(0), z_index).to_owned()
            }
            (None, Some(_)) => {
                check_index(AxisKind::Time, t_index, values.len_of(Axis(0)))?;
                values.index_axis(Axis(0), t_index).to_owned()
            }
            (None, None) => return Err(ExtractError::AmbiguousAxes),
        },
        _ => {
            // 4-D: both leading axes must actually be there before they
            // are indexed, unlike the looser 3-D-style check above.
            require(&axes, AxisKind::Time)?;
            require(&axes, AxisKind::Vertical)?;
            check_index(AxisKind::Time, t_index, values.len_of(Axis(0)))?;
            check_index(AxisKind::Vertical, z_index, values.len_of(Axis(1)))?;
            values
                .index_axis(Axis(0), t_index)
                .index_axis_move(Axis(0), z_index)
                .to_owned()
        }
    };

    Ok(MapView {
        data: into_2d(data)?,
        longitude,
        latitude,
    })
}

/// Extract a vertical cross-section.
///
/// A north-south section fixes a longitude (found by circular nearest
/// search) and keeps (vertical, latitude); an east-west section fixes a
/// latitude and keeps (vertical, longitude). A 4-D variable is first
/// indexed along time by `t_index`.
pub fn extract_vertical_section<'d>(
    dataset: &'d Dataset,
    name: &str,
    direction: SectionDirection,
    value: f64,
    t_index: usize,
) -> Result<SectionView<'d>> {
    let data_var = lookup(dataset, name)?;
    let ndim = data_var.ndim();
    debug!(
        variable = name,
        ndim,
        direction = %direction,
        value,
        t_index,
        "extracting vertical section"
    );

    if !(3..=4).contains(&ndim) {
        return Err(ExtractError::InvalidDimensionality { ndim });
    }

    let axes = resolve_axes(dataset, data_var);
    let longitude = require(&axes, AxisKind::Longitude)?;
    let latitude = require(&axes, AxisKind::Latitude)?;
    let vertical = require(&axes, AxisKind::Vertical)?;

    // Positions are relative to the (vertical, lat, lon) residual that
    // remains once any time axis has been indexed away.
    let (h_axis, sec_index, horizontal) = match direction {
        SectionDirection::NorthSouth => (Axis(2), circular_nearest(longitude, value)?, latitude),
        SectionDirection::EastWest => (Axis(1), linear_nearest(latitude, value)?, longitude),
    };

    let values = data_var.values();
    let residual = if ndim == 4 {
        require(&axes, AxisKind::Time)?;
        check_index(AxisKind::Time, t_index, values.len_of(Axis(0)))?;
        values.index_axis(Axis(0), t_index)
    } else {
        values.view()
    };
    let data = residual.index_axis_move(h_axis, sec_index).to_owned();

    Ok(SectionView {
        data: into_2d(data)?,
        horizontal,
        vertical,
    })
}

/// Extract a time series at a fixed location (and, for 4-D variables,
/// level).
///
/// A series is undefined without a time axis, whatever else resolved;
/// longitude and latitude are needed to pin the location. The location
/// is matched by nearest-value search, circular for longitude.
pub fn extract_time_series<'d>(
    dataset: &'d Dataset,
    name: &str,
    lon: f64,
    lat: f64,
    z: f64,
) -> Result<TimeSeriesView<'d>> {
    let data_var = lookup(dataset, name)?;
    let ndim = data_var.ndim();
    debug!(variable = name, ndim, lon, lat, z, "extracting time series");

    if !(3..=4).contains(&ndim) {
        return Err(ExtractError::InvalidDimensionality { ndim });
    }

    let axes = resolve_axes(dataset, data_var);
    let time = require(&axes, AxisKind::Time)?;
    let longitude = require(&axes, AxisKind::Longitude)?;
    let latitude = require(&axes, AxisKind::Latitude)?;

    let lon_index = circular_nearest(longitude, lon)?;
    let lat_index = linear_nearest(latitude, lat)?;

    let values = data_var.values();
    let data = if ndim == 4 {
        let vertical = require(&axes, AxisKind::Vertical)?;
        let z_index = linear_nearest(vertical, z)?;
        values
            .index_axis(Axis(1), z_index)
            .index_axis_move(Axis(1), lat_index)
            .index_axis_move(Axis(1), lon_index)
            .to_owned()
    } else {
        values
            .index_axis(Axis(1), lat_index)
            .index_axis_move(Axis(1), lon_index)
            .to_owned()
    };

    Ok(TimeSeriesView {
        data: into_1d(data)?,
        time,
    })
}

fn lookup<'d>(dataset: &'d Dataset, name: &str) -> Result<&'d Variable> {
    dataset
        .variable(name)
        .ok_or_else(|| ExtractError::VariableNotFound(name.to_string()))
}

fn require<'d>(axes: &ResolvedAxes<'d>, kind: AxisKind) -> Result<&'d Variable> {
    axes.get(kind).ok_or(ExtractError::MissingAxis(kind))
}

fn check_index(axis: AxisKind, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ExtractError::IndexOutOfRange { axis, index, len })
    }
}

fn coord_slice(coord: &Variable) -> Result<&[f64]> {
    match coord.coord_values() {
        Some(values) if !values.is_empty() => Ok(values),
        _ => Err(ExtractError::EmptyCoordinate(coord.name().to_string())),
    }
}

fn circular_nearest(coord: &Variable, target: f64) -> Result<usize> {
    let values = coord_slice(coord)?;
    nearest_longitude_index(values, target)
        .ok_or_else(|| ExtractError::EmptyCoordinate(coord.name().to_string()))
}

fn linear_nearest(coord: &Variable, target: f64) -> Result<usize> {
    let values = coord_slice(coord)?;
    nearest_index(values, target)
        .ok_or_else(|| ExtractError::EmptyCoordinate(coord.name().to_string()))
}

fn into_2d(data: ArrayD<f64>) -> Result<Array2<f64>> {
    let ndim = data.ndim();
    data.into_dimensionality::<Ix2>()
        .map_err(|_| ExtractError::InvalidDimensionality { ndim })
}

fn into_1d(data: ArrayD<f64>) -> Result<Array1<f64>> {
    let ndim = data.ndim();
    data.into_dimensionality::<Ix1>()
        .map_err(|_| ExtractError::InvalidDimensionality { ndim })
}
