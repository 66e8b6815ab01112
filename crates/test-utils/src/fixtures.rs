//! Canonical in-memory fixture datasets.
//!
//! Shapes mirror the files the extraction engine is meant to serve:
//! ocean model output over (time, depth, lat, lon), surface analyses
//! over (time, lat, lon), and atmospheric columns over (level, lat, lon).
//! All data fields are index ramps from [`crate::generators`], so tests
//! can assert exact cell values.

use grid_model::{Dataset, Variable};
use ndarray::arr1;

use crate::generators::{ramp_2d, ramp_3d, ramp_4d};

/// Longitudes used by every fixture grid, in degrees east.
pub const LONS: [f64; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// Latitudes used by every fixture grid, in degrees north.
pub const LATS: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];

/// A 1-D coordinate variable over a dimension of its own name.
pub fn coord(name: &str, values: &[f64]) -> Variable {
    Variable::new(name, vec![name.to_string()], arr1(values).into_dyn())
}

/// Longitude coordinate in `degrees_east`.
pub fn longitude(values: &[f64]) -> Variable {
    coord("longitude", values)
        .with_attr("units", "degrees_east")
        .with_attr("standard_name", "longitude")
}

/// Latitude coordinate in `degrees_north`.
pub fn latitude(values: &[f64]) -> Variable {
    coord("latitude", values)
        .with_attr("units", "degrees_north")
        .with_attr("standard_name", "latitude")
}

/// Pressure-level coordinate in `hPa`.
pub fn pressure_levels(values: &[f64]) -> Variable {
    coord("level", values)
        .with_attr("units", "hPa")
        .with_attr("standard_name", "air_pressure")
}

/// Depth coordinate in metres, increasing downward.
pub fn depth_levels(values: &[f64]) -> Variable {
    coord("depth", values)
        .with_attr("units", "m")
        .with_attr("positive", "down")
        .with_attr("standard_name", "depth")
}

/// Height coordinate in metres, increasing upward.
pub fn height_levels(values: &[f64]) -> Variable {
    coord("height", values)
        .with_attr("units", "m")
        .with_attr("positive", "up")
        .with_attr("standard_name", "height")
}

/// Time coordinate counted in days from the start of 2000.
pub fn time_days(values: &[f64]) -> Variable {
    coord("time", values)
        .with_attr("units", "days since 2000-01-01 00:00:00")
        .with_attr("standard_name", "time")
}

/// Sea-surface height over (latitude, longitude).
pub fn surface_2d() -> Dataset {
    Dataset::new()
        .with_variable(longitude(&LONS))
        .with_variable(latitude(&LATS))
        .with_variable(
            Variable::new(
                "ssh",
                vec!["latitude".to_string(), "longitude".to_string()],
                ramp_2d(5, 6),
            )
            .with_attr("standard_name", "sea_surface_height")
            .with_attr("units", "m"),
        )
}

/// Analysed sea-surface temperature over (time, latitude, longitude).
pub fn surface_series_3d() -> Dataset {
    Dataset::new()
        .with_variable(longitude(&LONS))
        .with_variable(latitude(&LATS))
        .with_variable(time_days(&[0.0, 1.0, 2.0]))
        .with_variable(
            Variable::new(
                "analysed_sst",
                vec![
                    "time".to_string(),
                    "latitude".to_string(),
                    "longitude".to_string(),
                ],
                ramp_3d(3, 5, 6),
            )
            .with_attr("standard_name", "sea_surface_temperature")
            .with_attr("units", "K"),
        )
}

/// Air temperature over (level, latitude, longitude) — no time axis.
pub fn column_3d() -> Dataset {
    Dataset::new()
        .with_variable(longitude(&LONS))
        .with_variable(latitude(&LATS))
        .with_variable(pressure_levels(&[1000.0, 850.0, 500.0, 250.0]))
        .with_variable(
            Variable::new(
                "ta",
                vec![
                    "level".to_string(),
                    "latitude".to_string(),
                    "longitude".to_string(),
                ],
                ramp_3d(4, 5, 6),
            )
            .with_attr("standard_name", "air_temperature")
            .with_attr("units", "K"),
        )
}

/// Ocean potential temperature over (time, depth, latitude, longitude).
pub fn ocean_4d() -> Dataset {
    Dataset::new()
        .with_variable(longitude(&LONS))
        .with_variable(latitude(&LATS))
        .with_variable(depth_levels(&[0.0, 50.0, 200.0, 1000.0]))
        .with_variable(time_days(&[0.0, 1.0, 2.0]))
        .with_variable(
            Variable::new(
                "pot_temp",
                vec![
                    "time".to_string(),
                    "depth".to_string(),
                    "latitude".to_string(),
                    "longitude".to_string(),
                ],
                ramp_4d(3, 4, 5, 6),
            )
            .with_attr("standard_name", "sea_water_potential_temperature")
            .with_attr("units", "K"),
        )
}

/// A 3-D variable whose leading dimension is neither vertical nor time:
/// the coordinate exists but its units classify as nothing.
pub fn unclassified_3d() -> Dataset {
    Dataset::new()
        .with_variable(longitude(&LONS))
        .with_variable(latitude(&LATS))
        .with_variable(coord("member", &[0.0, 1.0]).with_attr("units", "1"))
        .with_variable(Variable::new(
            "spread",
            vec![
                "member".to_string(),
                "latitude".to_string(),
                "longitude".to_string(),
            ],
            ramp_3d(2, 5, 6),
        ))
}
