//! Conversion settings and their registry parameters.

use segmentation_core::{
    ConversionParameters, ConvertError, ConvertResult, deserialize_floating_point_parameter,
};

/// Registry name of the decimation parameter.
pub const DECIMATION_FACTOR_PARAMETER: &str = "Decimation factor";

/// Default value string of the decimation parameter.
pub const DECIMATION_FACTOR_DEFAULT: &str = "0.0";

/// Description shown next to the decimation parameter.
pub const DECIMATION_FACTOR_DESCRIPTION: &str = "Desired reduction in the total number of polygons (e.g., if set to 0.9, then reduce the data set to 10% of its original size)";

/// When to pad the labelmap before extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// Pad only if foreground touches the border.
    #[default]
    Auto,
    /// Always pad; the result is the same as `Auto` for masks whose
    /// foreground stays inside.
    Always,
}

/// Typed settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConversionConfig {
    /// Fraction of triangles to remove, in `[0.0, 1.0)`. Values at or below
    /// zero skip decimation.
    pub decimation_factor: f64,

    /// Padding policy.
    pub padding: PaddingMode,
}

impl Default for SurfaceConversionConfig {
    fn default() -> Self {
        Self {
            decimation_factor: 0.0,
            padding: PaddingMode::Auto,
        }
    }
}

impl SurfaceConversionConfig {
    /// Set the decimation factor.
    #[must_use]
    pub const fn with_decimation_factor(mut self, factor: f64) -> Self {
        self.decimation_factor = factor;
        self
    }

    /// Set the padding policy.
    #[must_use]
    pub const fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    /// True if the extracted surface should be decimated.
    #[must_use]
    pub fn decimates(&self) -> bool {
        self.decimation_factor > 0.0
    }

    /// Parameter map with every setting at its default.
    #[must_use]
    pub fn default_parameters() -> ConversionParameters {
        let mut parameters = ConversionParameters::new();
        parameters.define(
            DECIMATION_FACTOR_PARAMETER,
            DECIMATION_FACTOR_DEFAULT,
            DECIMATION_FACTOR_DESCRIPTION,
        );
        parameters
    }

    /// Read settings from a registry parameter map.
    ///
    /// A missing decimation factor means no decimation. Negative factors
    /// are accepted and also mean no decimation.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidParameter`] if the decimation factor
    /// is not a finite number or is `1.0` or more.
    pub fn from_parameters(parameters: &ConversionParameters) -> ConvertResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = parameters.value(DECIMATION_FACTOR_PARAMETER) {
            config.decimation_factor = deserialize_floating_point_parameter(raw)
                .filter(|factor| *factor < 1.0)
                .ok_or_else(|| ConvertError::InvalidParameter {
                    name: DECIMATION_FACTOR_PARAMETER.to_string(),
                    value: raw.to_string(),
                })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_factor(value: &str) -> ConversionParameters {
        let mut parameters = SurfaceConversionConfig::default_parameters();
        parameters.set_value(DECIMATION_FACTOR_PARAMETER, value);
        parameters
    }

    #[test]
    fn defaults_do_not_decimate() {
        let parameters = SurfaceConversionConfig::default_parameters();
        assert_eq!(parameters.value(DECIMATION_FACTOR_PARAMETER), Some("0.0"));
        assert_eq!(
            parameters.description(DECIMATION_FACTOR_PARAMETER),
            Some(DECIMATION_FACTOR_DESCRIPTION)
        );

        let config = SurfaceConversionConfig::from_parameters(&parameters).unwrap();
        assert_eq!(config, SurfaceConversionConfig::default());
        assert!(!config.decimates());
    }

    #[test]
    fn reads_decimation_factor() {
        let config = SurfaceConversionConfig::from_parameters(&with_factor(" 0.9 ")).unwrap();
        assert!((config.decimation_factor - 0.9).abs() < f64::EPSILON);
        assert!(config.decimates());
    }

    #[test]
    fn negative_factor_skips_decimation() {
        let config = SurfaceConversionConfig::from_parameters(&with_factor("-0.5")).unwrap();
        assert!(!config.decimates());
    }

    #[test]
    fn missing_factor_is_default() {
        let config = SurfaceConversionConfig::from_parameters(&ConversionParameters::new()).unwrap();
        assert!(!config.decimates());
    }

    #[test]
    fn rejects_unusable_factors() {
        for raw in ["1.0", "1.5", "abc", "", "inf"] {
            let err = SurfaceConversionConfig::from_parameters(&with_factor(raw)).unwrap_err();
            assert!(
                matches!(&err, ConvertError::InvalidParameter { value, .. } if value == raw),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn builders() {
        let config = SurfaceConversionConfig::default()
            .with_decimation_factor(0.25)
            .with_padding(PaddingMode::Always);
        assert_eq!(config.padding, PaddingMode::Always);
        assert!((config.decimation_factor - 0.25).abs() < f64::EPSILON);
    }
}
