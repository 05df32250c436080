//! String-keyed conversion parameters.
//!
//! Rules publish their tunable settings as name to value/description pairs
//! so a registry can list them and hand overrides back before converting.
//! Values travel as strings; each rule deserializes what it needs.

use std::collections::BTreeMap;

use tracing::warn;

/// One parameter: current value string and a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionParameter {
    /// Serialized value.
    pub value: String,
    /// What the parameter controls.
    pub description: String,
}

/// Named conversion parameters, iterated in name order.
///
/// # Example
///
/// ```
/// use segmentation_core::ConversionParameters;
///
/// let mut params = ConversionParameters::new();
/// params.define("Smoothing", "0.5", "Smoothing strength");
/// params.set_value("Smoothing", "0.2");
///
/// assert_eq!(params.value("Smoothing"), Some("0.2"));
/// assert_eq!(params.description("Smoothing"), Some("Smoothing strength"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConversionParameters {
    entries: BTreeMap<String, ConversionParameter>,
}

impl ConversionParameters {
    /// Empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Declare a parameter with its default value, replacing any previous
    /// declaration.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        default_value: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.entries.insert(
            name.into(),
            ConversionParameter {
                value: default_value.into(),
                description: description.into(),
            },
        );
    }

    /// Set a value, keeping the description. Unknown names are added with
    /// an empty description.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().value = value.into();
    }

    /// Current value string.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|p| p.value.as_str())
    }

    /// Description of a parameter.
    #[must_use]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|p| p.description.as_str())
    }

    /// Full entry for a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConversionParameter> {
        self.entries.get(name)
    }

    /// True if the parameter is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no parameters are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConversionParameter)> {
        self.entries.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Copy values from `overrides` for every parameter declared here.
    ///
    /// Names not declared here are skipped with a warning. Returns the
    /// number of values copied.
    pub fn apply(&mut self, overrides: &Self) -> usize {
        let mut applied = 0;
        for (name, parameter) in &overrides.entries {
            match self.entries.get_mut(name) {
                Some(entry) => {
                    entry.value.clone_from(&parameter.value);
                    applied += 1;
                }
                None => warn!(parameter = %name, "Ignoring unknown conversion parameter"),
            }
        }
        applied
    }
}

impl<'a> IntoIterator for &'a ConversionParameters {
    type Item = (&'a String, &'a ConversionParameter);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ConversionParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse a floating point parameter value.
///
/// Surrounding whitespace is ignored. Returns `None` for text that is not a
/// number and for NaN or infinite values.
///
/// # Example
///
/// ```
/// use segmentation_core::deserialize_floating_point_parameter;
///
/// assert_eq!(deserialize_floating_point_parameter(" 0.25 "), Some(0.25));
/// assert_eq!(deserialize_floating_point_parameter("1e-1"), Some(0.1));
/// assert_eq!(deserialize_floating_point_parameter("half"), None);
/// assert_eq!(deserialize_floating_point_parameter("inf"), None);
/// ```
#[must_use]
pub fn deserialize_floating_point_parameter(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConversionParameters {
        let mut params = ConversionParameters::new();
        params.define("Decimation factor", "0.0", "Fraction of polygons to remove");
        params.define("Smoothing factor", "0.5", "Smoothing strength");
        params
    }

    #[test]
    fn define_and_read() {
        let params = sample();
        assert_eq!(params.len(), 2);
        assert!(params.contains("Smoothing factor"));
        assert_eq!(params.value("Decimation factor"), Some("0.0"));
        assert_eq!(params.value("Missing"), None);
    }

    #[test]
    fn set_value_keeps_description() {
        let mut params = sample();
        params.set_value("Decimation factor", "0.9");
        assert_eq!(params.value("Decimation factor"), Some("0.9"));
        assert_eq!(
            params.description("Decimation factor"),
            Some("Fraction of polygons to remove")
        );

        params.set_value("Extra", "1");
        assert_eq!(params.description("Extra"), Some(""));
    }

    #[test]
    fn iteration_is_name_ordered() {
        let params = sample();
        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Decimation factor", "Smoothing factor"]);
    }

    #[test]
    fn apply_copies_known_values_only() {
        let mut params = sample();
        let mut overrides = ConversionParameters::new();
        overrides.set_value("Decimation factor", "0.5");
        overrides.set_value("Unknown", "7");

        assert_eq!(params.apply(&overrides), 1);
        assert_eq!(params.value("Decimation factor"), Some("0.5"));
        assert!(!params.contains("Unknown"));
        assert_eq!(
            params.description("Decimation factor"),
            Some("Fraction of polygons to remove")
        );
    }

    #[test]
    fn floating_point_parsing() {
        assert_eq!(deserialize_floating_point_parameter("0.0"), Some(0.0));
        assert_eq!(deserialize_floating_point_parameter("\t0.9\n"), Some(0.9));
        assert_eq!(deserialize_floating_point_parameter("-2"), Some(-2.0));
        assert_eq!(deserialize_floating_point_parameter(""), None);
        assert_eq!(deserialize_floating_point_parameter("0.5x"), None);
        assert_eq!(deserialize_floating_point_parameter("NaN"), None);
    }
}
