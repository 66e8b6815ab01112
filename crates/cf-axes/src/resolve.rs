//! Finding coordinate axes for data variables.

use grid_model::{Dataset, Variable};
use tracing::debug;

use crate::classify::{classify, AxisKind};
use crate::error::AxisError;

/// Find the coordinate variable of the given kind for a data variable.
///
/// The data variable's dimensions are scanned in declared order and the
/// first coordinate classifying as `kind` wins; later matches are ignored
/// by design, not treated as an error. Dimensions with no coordinate
/// variable are skipped.
pub fn find_axis<'d>(
    kind: AxisKind,
    dataset: &'d Dataset,
    data_var: &Variable,
) -> Option<&'d Variable> {
    data_var
        .dimensions()
        .iter()
        .filter_map(|dim| dataset.coordinate(dim))
        .find(|coord| classify(coord) == Some(kind))
}

/// The coordinate axes resolved for one data variable.
///
/// At most one coordinate per kind. An axis set has no independent
/// existence: it is recomputed from the dimension list on every call, so
/// there is no cached state to go stale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvedAxes<'d> {
    pub longitude: Option<&'d Variable>,
    pub latitude: Option<&'d Variable>,
    pub vertical: Option<&'d Variable>,
    pub time: Option<&'d Variable>,
}

impl<'d> ResolvedAxes<'d> {
    /// The resolved coordinate for one kind.
    pub fn get(&self, kind: AxisKind) -> Option<&'d Variable> {
        match kind {
            AxisKind::Longitude => self.longitude,
            AxisKind::Latitude => self.latitude,
            AxisKind::Vertical => self.vertical,
            AxisKind::Time => self.time,
        }
    }

    /// The resolved coordinate for `kind`, or a `MissingAxis` error.
    pub fn require(&self, kind: AxisKind) -> Result<&'d Variable, AxisError> {
        self.get(kind).ok_or(AxisError::MissingAxis(kind))
    }
}

/// Resolve all four axis kinds for a data variable in a single pass over
/// its dimensions. First-in-declaration-order wins per kind.
pub fn resolve_axes<'d>(dataset: &'d Dataset, data_var: &Variable) -> ResolvedAxes<'d> {
    let mut axes = ResolvedAxes::default();

    for dim in data_var.dimensions() {
        let Some(coord) = dataset.coordinate(dim) else {
            continue;
        };
        let slot = match classify(coord) {
            Some(AxisKind::Longitude) => &mut axes.longitude,
            Some(AxisKind::Latitude) => &mut axes.latitude,
            Some(AxisKind::Vertical) => &mut axes.vertical,
            Some(AxisKind::Time) => &mut axes.time,
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(coord);
        }
    }

    debug!(
        variable = data_var.name(),
        longitude = axes.longitude.is_some(),
        latitude = axes.latitude.is_some(),
        vertical = axes.vertical.is_some(),
        time = axes.time.is_some(),
        "resolved axes"
    );

    axes
}
