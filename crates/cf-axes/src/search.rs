//! Nearest-value index search over coordinate arrays.

use grid_model::{Dataset, Variable};
use tracing::trace;

use crate::classify::AxisKind;
use crate::error::AxisError;
use crate::resolve::find_axis;

/// Index of the value closest to `target`.
///
/// Ties resolve to the lowest index. Returns `None` on an empty slice.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.iter().enumerate() {
        let distance = (value - target).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the longitude value closest to `target`, measured on the
/// circle.
///
/// The distance between two longitudes is angular, so a target near the
/// 0°/360° seam matches wrapped values on the far side: maximizing
/// `cos(value - target)` is equivalent to minimizing the angular
/// separation. Ties resolve to the lowest index.
pub fn nearest_longitude_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.iter().enumerate() {
        let score = (value - target).to_radians().cos();
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Nearest index along a data variable's axis of the given kind.
///
/// Resolves the axis first, failing with [`AxisError::MissingAxis`] when
/// the data variable has no coordinate of that kind, and selects the
/// circular search for longitude and the linear search otherwise.
pub fn nearest_axis_index(
    kind: AxisKind,
    dataset: &Dataset,
    data_var: &Variable,
    target: f64,
) -> Result<usize, AxisError> {
    let coord = find_axis(kind, dataset, data_var).ok_or(AxisError::MissingAxis(kind))?;
    let values = coord.coord_values().unwrap_or(&[]);

    let index = match kind {
        AxisKind::Longitude => nearest_longitude_index(values, target),
        _ => nearest_index(values, target),
    }
    .ok_or_else(|| AxisError::EmptyCoordinate {
        name: coord.name().to_string(),
    })?;

    trace!(
        axis = %kind,
        coordinate = coord.name(),
        target,
        index,
        "nearest-index lookup"
    );

    Ok(index)
}
