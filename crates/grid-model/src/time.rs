//! Decoding of "since"-style time coordinate units.
//!
//! Time coordinates carry units like `"days since 1970-01-01 00:00:00"`:
//! a step word, the literal `since`, and a reference datetime. This module
//! turns such a string into a [`TimeUnits`] so raw coordinate offsets can
//! be labeled as calendar datetimes by the rendering layer.
//!
//! Only the standard (proleptic Gregorian) calendar is supported; the CF
//! `calendar` attribute is not consulted.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

use crate::Variable;

/// Errors from parsing or applying time units.
#[derive(Debug, Error)]
pub enum TimeUnitsError {
    /// The variable has no `units` attribute to parse.
    #[error("variable '{0}' has no units attribute")]
    MissingUnits(String),

    /// The units string is not of the form `<step> since <datetime>`.
    #[error("units '{0}' are not of the form '<step> since <datetime>'")]
    InvalidFormat(String),

    /// The step word is not one this module understands.
    #[error("unknown time step '{0}' (expected seconds, minutes, hours or days)")]
    UnknownStep(String),

    /// The reference datetime could not be parsed.
    #[error("invalid reference datetime '{0}'")]
    InvalidOrigin(String),

    /// The variable is not a 1-D coordinate.
    #[error("variable '{0}' is not a 1-D coordinate")]
    NotCoordinate(String),
}

/// The unit step of a time coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStep {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeStep {
    /// Parse a step word, accepting the singular/plural and short
    /// spellings that appear in the wild.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "second" | "seconds" | "sec" | "secs" => Some(TimeStep::Seconds),
            "minute" | "minutes" | "min" | "mins" => Some(TimeStep::Minutes),
            "hour" | "hours" | "hr" | "hrs" => Some(TimeStep::Hours),
            "day" | "days" => Some(TimeStep::Days),
            _ => None,
        }
    }

    /// The span of `value` steps, at millisecond resolution.
    fn duration(&self, value: f64) -> Duration {
        let millis = match self {
            TimeStep::Seconds => value * 1_000.0,
            TimeStep::Minutes => value * 60_000.0,
            TimeStep::Hours => value * 3_600_000.0,
            TimeStep::Days => value * 86_400_000.0,
        };
        Duration::milliseconds(millis.round() as i64)
    }
}

/// Parsed time units: a step and a reference origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnits {
    pub step: TimeStep,
    pub origin: DateTime<Utc>,
}

impl TimeUnits {
    /// Parse a units string such as `"hours since 2000-01-01 00:00:00"`.
    pub fn parse(units: &str) -> Result<Self, TimeUnitsError> {
        let (step_word, origin_str) = units
            .split_once(" since ")
            .ok_or_else(|| TimeUnitsError::InvalidFormat(units.to_string()))?;
        let step = TimeStep::from_word(step_word.trim())
            .ok_or_else(|| TimeUnitsError::UnknownStep(step_word.trim().to_string()))?;
        let origin = parse_origin(origin_str.trim())?;
        Ok(Self { step, origin })
    }

    /// Convert one raw coordinate value to a datetime.
    pub fn decode(&self, value: f64) -> DateTime<Utc> {
        self.origin + self.step.duration(value)
    }
}

/// Parse a reference datetime, trying the formats seen in real files:
/// RFC 3339, `T`- or space-separated without a zone (UTC assumed), and
/// date-only.
fn parse_origin(s: &str) -> Result<DateTime<Utc>, TimeUnitsError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&nd.and_time(NaiveTime::MIN)));
    }

    Err(TimeUnitsError::InvalidOrigin(s.to_string()))
}

/// Decode a time coordinate variable's values into datetimes.
pub fn decode_time_axis(var: &Variable) -> Result<Vec<DateTime<Utc>>, TimeUnitsError> {
    let units = var
        .attr_text("units")
        .ok_or_else(|| TimeUnitsError::MissingUnits(var.name().to_string()))?;
    let units = TimeUnits::parse(units)?;
    let values = var
        .coord_values()
        .ok_or_else(|| TimeUnitsError::NotCoordinate(var.name().to_string()))?;
    Ok(values.iter().map(|&v| units.decode(v)).collect())
}
