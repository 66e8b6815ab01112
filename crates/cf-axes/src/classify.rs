//! Attribute-based classification of coordinate variables.

use grid_model::Variable;
use serde::{Deserialize, Serialize};

use crate::error::AxisError;

/// Unit spellings that mark a longitude coordinate.
pub const LONGITUDE_UNITS: [&str; 6] = [
    "degrees_east",
    "degree_east",
    "degree_E",
    "degrees_E",
    "degreeE",
    "degreesE",
];

/// Unit spellings that mark a latitude coordinate.
pub const LATITUDE_UNITS: [&str; 6] = [
    "degrees_north",
    "degree_north",
    "degree_N",
    "degrees_N",
    "degreeN",
    "degreesN",
];

/// Pressure units that mark a vertical coordinate.
pub const PRESSURE_UNITS: [&str; 4] = ["Pa", "hPa", "pascal", "Pascal"];

/// Pressure units recognized when deciding vertical orientation.
pub const EXTENDED_PRESSURE_UNITS: [&str; 10] = [
    "Pa",
    "hPa",
    "pascal",
    "Pascal",
    "bar",
    "millibar",
    "decibar",
    "atmosphere",
    "atm",
    "mb",
];

/// The semantic role of a coordinate variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    Longitude,
    Latitude,
    Vertical,
    Time,
}

impl AxisKind {
    /// All kinds, in the order classification tries them.
    pub const ALL: [AxisKind; 4] = [
        AxisKind::Longitude,
        AxisKind::Latitude,
        AxisKind::Vertical,
        AxisKind::Time,
    ];
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisKind::Longitude => write!(f, "longitude"),
            AxisKind::Latitude => write!(f, "latitude"),
            AxisKind::Vertical => write!(f, "vertical"),
            AxisKind::Time => write!(f, "time"),
        }
    }
}

/// Classify a coordinate variable by its attributes.
///
/// Returns `None` for variables that are not a recognized geographic,
/// vertical or time axis. The decision is a pure function of the
/// variable's attributes; names play no part.
pub fn classify(var: &Variable) -> Option<AxisKind> {
    if is_longitude(var) {
        Some(AxisKind::Longitude)
    } else if is_latitude(var) {
        Some(AxisKind::Latitude)
    } else if is_vertical(var) {
        Some(AxisKind::Vertical)
    } else if is_time(var) {
        Some(AxisKind::Time)
    } else {
        None
    }
}

/// True if the variable's units are a longitude spelling.
pub fn is_longitude(var: &Variable) -> bool {
    matches!(var.attr_text("units"), Some(units) if LONGITUDE_UNITS.contains(&units))
}

/// True if the variable's units are a latitude spelling.
pub fn is_latitude(var: &Variable) -> bool {
    matches!(var.attr_text("units"), Some(units) if LATITUDE_UNITS.contains(&units))
}

/// True if the variable is a vertical coordinate: units of pressure, or a
/// `positive` attribute reading up or down.
pub fn is_vertical(var: &Variable) -> bool {
    if matches!(var.attr_text("units"), Some(units) if PRESSURE_UNITS.contains(&units)) {
        return true;
    }
    matches!(var.attr_text("positive"), Some(value) if positive_direction(value).is_some())
}

/// True if the variable is a time coordinate.
///
/// Time units follow the pattern `"<step> since <datetime>"`; looking for
/// the word `since` is a deliberately loose test, not a full parse.
pub fn is_time(var: &Variable) -> bool {
    matches!(var.attr_text("units"), Some(units) if units.contains("since"))
}

/// Interpret a `positive` attribute value: `Some(true)` for up,
/// `Some(false)` for down, `None` for anything unrecognized.
fn positive_direction(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "up" | "upward" => Some(true),
        "down" | "downward" => Some(false),
        _ => None,
    }
}

/// Whether a vertical coordinate's values increase upward.
///
/// Pressure axes always increase downward, whatever their `positive`
/// attribute says. Otherwise the `positive` attribute decides; a missing
/// attribute means the variable is not a valid vertical axis, and an
/// unrecognized value is an error in the metadata.
pub fn is_positive_up(var: &Variable) -> Result<bool, AxisError> {
    if let Some(units) = var.attr_text("units") {
        if EXTENDED_PRESSURE_UNITS.contains(&units) {
            return Ok(false);
        }
    }

    match var.attr_text("positive") {
        None => Err(AxisError::NotVertical {
            name: var.name().to_string(),
        }),
        Some(value) => positive_direction(value).ok_or_else(|| AxisError::InvalidPositive {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    fn coord(units: Option<&str>) -> Variable {
        let var = Variable::new(
            "coord",
            vec!["coord".to_string()],
            arr1(&[0.0, 1.0]).into_dyn(),
        );
        match units {
            Some(u) => var.with_attr("units", u),
            None => var,
        }
    }

    #[test]
    fn test_every_longitude_spelling_classifies() {
        for units in LONGITUDE_UNITS {
            assert_eq!(
                classify(&coord(Some(units))),
                Some(AxisKind::Longitude),
                "units {units:?}"
            );
        }
    }

    #[test]
    fn test_every_latitude_spelling_classifies() {
        for units in LATITUDE_UNITS {
            assert_eq!(
                classify(&coord(Some(units))),
                Some(AxisKind::Latitude),
                "units {units:?}"
            );
        }
    }

    #[test]
    fn test_unrecognized_units_classify_none() {
        assert_eq!(classify(&coord(Some("degrees"))), None);
        assert_eq!(classify(&coord(Some("K"))), None);
        assert_eq!(classify(&coord(None)), None);
    }

    #[test]
    fn test_pressure_units_classify_vertical() {
        for units in PRESSURE_UNITS {
            assert_eq!(classify(&coord(Some(units))), Some(AxisKind::Vertical));
        }
    }

    #[test]
    fn test_positive_attribute_classifies_vertical() {
        let depth = coord(Some("m")).with_attr("positive", "down");
        assert_eq!(classify(&depth), Some(AxisKind::Vertical));

        let height = coord(Some("m")).with_attr("positive", "UP");
        assert_eq!(classify(&height), Some(AxisKind::Vertical));

        let sideways = coord(Some("m")).with_attr("positive", "sideways");
        assert_eq!(classify(&sideways), None);
    }

    #[test]
    fn test_since_units_classify_time() {
        assert_eq!(
            classify(&coord(Some("days since 1970-01-01 00:00:00"))),
            Some(AxisKind::Time)
        );
        // Case-sensitive substring: "Since" does not match.
        assert_eq!(classify(&coord(Some("days Since 1970-01-01"))), None);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let var = coord(Some("hPa"));
        assert_eq!(classify(&var), classify(&var));
    }

    #[test]
    fn test_positive_up_is_false_for_all_pressure_units() {
        for units in EXTENDED_PRESSURE_UNITS {
            // `positive` is ignored when units are pressure.
            let var = coord(Some(units)).with_attr("positive", "up");
            assert!(!is_positive_up(&var).unwrap(), "units {units:?}");
        }
    }

    #[test]
    fn test_positive_up_follows_positive_attribute() {
        let height = coord(Some("m")).with_attr("positive", "up");
        assert!(is_positive_up(&height).unwrap());

        let depth = coord(Some("m")).with_attr("positive", "Down");
        assert!(!is_positive_up(&depth).unwrap());

        let upward = coord(Some("m")).with_attr("positive", "UPWARD");
        assert!(is_positive_up(&upward).unwrap());
    }

    #[test]
    fn test_positive_up_missing_attribute_fails() {
        let err = is_positive_up(&coord(Some("m"))).unwrap_err();
        assert!(matches!(err, AxisError::NotVertical { .. }));
    }

    #[test]
    fn test_positive_up_invalid_attribute_fails() {
        let var = coord(Some("m")).with_attr("positive", "sideways");
        let err = is_positive_up(&var).unwrap_err();
        assert!(matches!(err, AxisError::InvalidPositive { .. }));
    }
}
