//! Variables: named N-dimensional payloads with metadata.

use std::collections::HashMap;

use ndarray::ArrayD;

use crate::AttrValue;

/// A named, self-describing N-dimensional variable.
///
/// Dimension names are ordered outermost first and describe the payload's
/// axes. A variable that serves as a dimension's coordinate is 1-D over a
/// dimension of its own name, with monotonic values (assumed rather than
/// enforced; the circular longitude search tolerates the wrapped case).
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    dimensions: Vec<String>,
    attributes: HashMap<String, AttrValue>,
    values: ArrayD<f64>,
}

impl Variable {
    /// Create a variable over the given dimensions.
    ///
    /// The dimension list must match the payload's number of axes.
    pub fn new(name: impl Into<String>, dimensions: Vec<String>, values: ArrayD<f64>) -> Self {
        debug_assert_eq!(dimensions.len(), values.ndim());
        Self {
            name: name.into(),
            dimensions,
            attributes: HashMap::new(),
            values,
        }
    }

    /// Attach an attribute, builder-style.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The variable's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension names, outermost first.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Payload shape, one length per dimension.
    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    /// The N-dimensional payload.
    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    /// The payload as a flat slice, for 1-D coordinate variables.
    ///
    /// Returns `None` when the variable is not 1-D.
    pub fn coord_values(&self) -> Option<&[f64]> {
        if self.values.ndim() == 1 {
            self.values.as_slice()
        } else {
            None
        }
    }

    /// Look up an attribute by name. Absence is not an error.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Text attribute lookup; numeric attributes read as `None`.
    pub fn attr_text(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(AttrValue::as_text)
    }

    /// Text attribute lookup with a default for absent attributes.
    pub fn attr_text_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr_text(name).unwrap_or(default)
    }

    /// Numeric attribute lookup.
    pub fn attr_number(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(AttrValue::as_number)
    }

    /// Human-readable title in the form `"name (units)"`.
    ///
    /// The name is the `standard_name` attribute when present, otherwise
    /// the variable's own identifier; missing units read as `"no units"`.
    pub fn title(&self) -> String {
        let name = self.attr_text_or("standard_name", &self.name);
        let units = self.attr_text_or("units", "no units");
        format!("{} ({})", name, units)
    }
}
