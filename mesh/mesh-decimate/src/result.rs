//! Outcome of one decimation run.

// Face counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use mesh_types::IndexedMesh;

/// Simplified mesh plus collapse statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimationResult {
    /// Simplified mesh, compacted to its referenced vertices.
    pub mesh: IndexedMesh,

    /// Face count of the input.
    pub original_triangles: usize,

    /// Face count of the output.
    pub final_triangles: usize,

    /// Edge collapses applied.
    pub collapses_performed: usize,

    /// Number of candidate collapses refused by the topology, feature,
    /// orientation or error checks.
    pub collapses_rejected: usize,
}

impl DecimationResult {
    /// Result for a mesh that was left as it is.
    #[must_use]
    pub fn unchanged(mesh: &IndexedMesh) -> Self {
        Self {
            mesh: mesh.clone(),
            original_triangles: mesh.faces.len(),
            final_triangles: mesh.faces.len(),
            collapses_performed: 0,
            collapses_rejected: 0,
        }
    }

    /// Fraction of faces kept; 1.0 for an empty input.
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_triangles == 0 {
            1.0
        } else {
            self.final_triangles as f64 / self.original_triangles as f64
        }
    }

    /// Percentage of faces removed.
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        (1.0 - self.reduction_ratio()) * 100.0
    }

    /// True if at least one edge was collapsed.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.collapses_performed > 0
    }
}

impl std::fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decimation: {} → {} triangles ({:.1}% reduction, {} collapses, {} rejected)",
            self.original_triangles,
            self.final_triangles,
            self.reduction_percent(),
            self.collapses_performed,
            self.collapses_rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::unit_cube;

    fn halved() -> DecimationResult {
        DecimationResult {
            mesh: IndexedMesh::new(),
            original_triangles: 1000,
            final_triangles: 500,
            collapses_performed: 250,
            collapses_rejected: 10,
        }
    }

    #[test]
    fn test_reduction_ratio() {
        let result = halved();
        assert_relative_eq!(result.reduction_ratio(), 0.5);
        assert_relative_eq!(result.reduction_percent(), 50.0);
        assert!(result.was_decimated());
    }

    #[test]
    fn test_unchanged() {
        let cube = unit_cube();
        let result = DecimationResult::unchanged(&cube);

        assert!(!result.was_decimated());
        assert_eq!(result.final_triangles, 12);
        assert_eq!(result.mesh, cube);
        assert_relative_eq!(result.reduction_ratio(), 1.0);
    }

    #[test]
    fn test_empty_ratio_is_one() {
        let result = DecimationResult::unchanged(&IndexedMesh::new());
        assert_relative_eq!(result.reduction_ratio(), 1.0);
        assert_relative_eq!(result.reduction_percent(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            halved().to_string(),
            "Decimation: 1000 → 500 triangles (50.0% reduction, 250 collapses, 10 rejected)"
        );
    }
}
