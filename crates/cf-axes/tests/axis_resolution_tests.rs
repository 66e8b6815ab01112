//! Integration tests for classification and resolution over the shared
//! fixture datasets.

use cf_axes::{
    classify, find_axis, is_positive_up, nearest_axis_index, resolve_axes, AxisError, AxisKind,
};
use grid_model::Variable;
use test_utils::fixtures;

#[test]
fn test_fixture_coordinates_classify_by_attributes() {
    let ds = fixtures::ocean_4d();

    assert_eq!(
        classify(ds.coordinate("longitude").unwrap()),
        Some(AxisKind::Longitude)
    );
    assert_eq!(
        classify(ds.coordinate("latitude").unwrap()),
        Some(AxisKind::Latitude)
    );
    assert_eq!(
        classify(ds.coordinate("depth").unwrap()),
        Some(AxisKind::Vertical)
    );
    assert_eq!(
        classify(ds.coordinate("time").unwrap()),
        Some(AxisKind::Time)
    );
}

#[test]
fn test_unclassified_coordinate_resolves_nothing() {
    let ds = fixtures::unclassified_3d();
    assert_eq!(classify(ds.coordinate("member").unwrap()), None);

    let spread = ds.variable("spread").unwrap();
    let axes = resolve_axes(&ds, spread);
    assert!(axes.vertical.is_none());
    assert!(axes.time.is_none());
    assert!(axes.longitude.is_some());
    assert!(axes.latitude.is_some());
}

#[test]
fn test_resolve_axes_full_ocean_field() {
    let ds = fixtures::ocean_4d();
    let var = ds.variable("pot_temp").unwrap();
    let axes = resolve_axes(&ds, var);

    assert_eq!(axes.longitude.map(Variable::name), Some("longitude"));
    assert_eq!(axes.latitude.map(Variable::name), Some("latitude"));
    assert_eq!(axes.vertical.map(Variable::name), Some("depth"));
    assert_eq!(axes.time.map(Variable::name), Some("time"));
}

#[test]
fn test_surface_field_has_no_vertical_axis() {
    let ds = fixtures::surface_series_3d();
    let sst = ds.variable("analysed_sst").unwrap();

    assert!(find_axis(AxisKind::Vertical, &ds, sst).is_none());
    assert_eq!(
        find_axis(AxisKind::Time, &ds, sst).map(Variable::name),
        Some("time")
    );
}

#[test]
fn test_vertical_orientation_of_fixture_axes() {
    assert!(!is_positive_up(&fixtures::depth_levels(&[0.0, 50.0])).unwrap());
    assert!(is_positive_up(&fixtures::height_levels(&[2.0, 10.0])).unwrap());
    // Pressure levels point downward even without a positive attribute.
    assert!(!is_positive_up(&fixtures::pressure_levels(&[1000.0, 850.0])).unwrap());
}

#[test]
fn test_nearest_axis_index_over_fixture_grid() {
    let ds = fixtures::ocean_4d();
    let var = ds.variable("pot_temp").unwrap();

    // Linear searches for latitude and depth.
    assert_eq!(
        nearest_axis_index(AxisKind::Latitude, &ds, var, -25.0).unwrap(),
        1
    );
    assert_eq!(
        nearest_axis_index(AxisKind::Vertical, &ds, var, 100.0).unwrap(),
        1
    );

    // The longitude search wraps: 355° is closest to the 0° column.
    assert_eq!(
        nearest_axis_index(AxisKind::Longitude, &ds, var, 355.0).unwrap(),
        0
    );
}

#[test]
fn test_nearest_axis_index_without_axis_fails() {
    let ds = fixtures::surface_series_3d();
    let sst = ds.variable("analysed_sst").unwrap();

    let err = nearest_axis_index(AxisKind::Vertical, &ds, sst, 500.0).unwrap_err();
    assert!(matches!(err, AxisError::MissingAxis(AxisKind::Vertical)));
}
