//! Extraction settings.

/// Settings for [`extract_isosurface`](crate::extract_isosurface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsosurfaceConfig {
    /// Threshold separating inside (`value > iso_level`) from outside.
    ///
    /// Default: 0.5, the midpoint between background 0 and foreground 1
    /// of a binary volume.
    pub iso_level: f64,
}

impl Default for IsosurfaceConfig {
    fn default() -> Self {
        Self { iso_level: 0.5 }
    }
}

impl IsosurfaceConfig {
    /// Set the iso level.
    #[must_use]
    pub const fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_binary_midpoint() {
        let config = IsosurfaceConfig::default();
        assert!((config.iso_level - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn builder() {
        let config = IsosurfaceConfig::default().with_iso_level(127.5);
        assert!((config.iso_level - 127.5).abs() < f64::EPSILON);
    }
}
