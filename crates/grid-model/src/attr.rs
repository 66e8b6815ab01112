//! Attribute values attached to variables.

use serde::{Deserialize, Serialize};

/// A single metadata attribute value.
///
/// The CF attributes this workspace reads are either text (`units`,
/// `standard_name`, `positive`) or numeric (`scale_factor`, `_FillValue`).
/// Anything more exotic a file format supports is coerced to one of these
/// by the dataset provider before it reaches the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl AttrValue {
    /// The text content, or `None` for numeric attributes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }

    /// The numeric content, or `None` for text attributes.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}
