//! Integration tests for vertical cross-section extraction.

use cf_axes::AxisKind;
use test_utils::fixtures;
use view_extractor::{
    extract, extract_vertical_section, ExtractError, SectionDirection, SectionRequest, View,
    ViewRequest,
};

#[test]
fn test_north_south_section_fixes_a_longitude() {
    let ds = fixtures::ocean_4d();
    // 150° falls between the 120° and 180° columns; the tie-free nearest
    // is 120° at index 2.
    let view =
        extract_vertical_section(&ds, "pot_temp", SectionDirection::NorthSouth, 150.0, 1).unwrap();

    // Remaining axes are (depth, latitude).
    assert_eq!(view.data.dim(), (4, 5));
    assert_eq!(view.horizontal.name(), "latitude");
    assert_eq!(view.vertical.name(), "depth");
    // Cell values are t*1000 + z*100 + y*10 + x at t=1, x=2.
    assert_eq!(view.data[[0, 0]], 1002.0);
    assert_eq!(view.data[[3, 4]], 1342.0);
}

#[test]
fn test_east_west_section_fixes_a_latitude() {
    let ds = fixtures::column_3d();
    // 35° is nearest the 30° row at index 3; t_index is ignored for 3-D.
    let view = extract_vertical_section(&ds, "ta", SectionDirection::EastWest, 35.0, 9).unwrap();

    // Remaining axes are (level, longitude).
    assert_eq!(view.data.dim(), (4, 6));
    assert_eq!(view.horizontal.name(), "longitude");
    assert_eq!(view.vertical.name(), "level");
    // Cell values are z*100 + y*10 + x at y=3.
    assert_eq!(view.data[[0, 0]], 30.0);
    assert_eq!(view.data[[2, 5]], 235.0);
}

#[test]
fn test_north_south_section_wraps_across_the_seam() {
    let ds = fixtures::ocean_4d();
    // 355° is 5° from the 0° column once the circle is respected; a
    // linear search would have picked 300°.
    let view =
        extract_vertical_section(&ds, "pot_temp", SectionDirection::NorthSouth, 355.0, 0).unwrap();
    // x=0 everywhere: values are z*100 + y*10.
    assert_eq!(view.data[[1, 3]], 130.0);
}

#[test]
fn test_section_without_vertical_axis_fails() {
    let ds = fixtures::surface_series_3d();
    let err = extract_vertical_section(&ds, "analysed_sst", SectionDirection::NorthSouth, 0.0, 0)
        .unwrap_err();
    assert!(matches!(err, ExtractError::MissingAxis(AxisKind::Vertical)));
}

#[test]
fn test_section_on_2d_variable_fails() {
    let ds = fixtures::surface_2d();
    let err =
        extract_vertical_section(&ds, "ssh", SectionDirection::EastWest, 0.0, 0).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::InvalidDimensionality { ndim: 2 }
    ));
}

#[test]
fn test_section_out_of_range_time_index_fails() {
    let ds = fixtures::ocean_4d();
    let err = extract_vertical_section(&ds, "pot_temp", SectionDirection::NorthSouth, 0.0, 5)
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractError::IndexOutOfRange {
            axis: AxisKind::Time,
            ..
        }
    ));
}

#[test]
fn test_dispatcher_parses_direction_from_request() {
    let ds = fixtures::column_3d();
    let direction: SectionDirection = "ew".parse().unwrap();
    let request = ViewRequest::from(SectionRequest::new(direction, 0.0, 0));

    match extract(&ds, "ta", &request).unwrap() {
        View::Section(view) => {
            assert_eq!(view.data.dim(), (4, 6));
            assert_eq!(view.horizontal.name(), "longitude");
        }
        other => panic!("expected a section view, got {other:?}"),
    }
}
