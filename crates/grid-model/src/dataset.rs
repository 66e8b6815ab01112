//! In-memory dataset container.

use std::collections::HashMap;

use crate::Variable;

/// A collection of named variables, as handed over by a dataset provider.
///
/// A dimension's coordinate variable is the 1-D variable that shares the
/// dimension's name. The rest of the workspace only ever reads a dataset;
/// building one is the provider's job.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    variables: HashMap<String, Variable>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable under its own name, replacing any previous one.
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.name().to_string(), var);
    }

    /// Insert a variable, builder-style.
    pub fn with_variable(mut self, var: Variable) -> Self {
        self.insert(var);
        self
    }

    /// Look up a variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// The coordinate variable for a dimension name, if one exists.
    ///
    /// Only 1-D variables qualify; a data variable that happens to share a
    /// dimension's name is not a coordinate.
    pub fn coordinate(&self, dim: &str) -> Option<&Variable> {
        self.variables.get(dim).filter(|v| v.ndim() == 1)
    }

    /// Iterate over the variable names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the dataset holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, ArrayD};

    #[test]
    fn test_insert_and_lookup() {
        let mut ds = Dataset::new();
        ds.insert(Variable::new(
            "longitude",
            vec!["longitude".to_string()],
            arr1(&[0.0, 90.0, 180.0, 270.0]).into_dyn(),
        ));

        assert_eq!(ds.len(), 1);
        assert!(ds.variable("longitude").is_some());
        assert!(ds.variable("latitude").is_none());
    }

    #[test]
    fn test_coordinate_rejects_multidimensional_variables() {
        let ds = Dataset::new().with_variable(Variable::new(
            "level",
            vec!["y".to_string(), "x".to_string()],
            ArrayD::zeros(vec![2, 2]),
        ));

        assert!(ds.variable("level").is_some());
        assert!(ds.coordinate("level").is_none());
    }
}
