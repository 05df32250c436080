//! The conversion rule contract.

use std::time::Duration;

use crate::{ConversionParameters, ConvertResult, Representation, RepresentationKind};

/// Converts one segment representation into another.
///
/// A registry picks rules by their source and target kinds, compares
/// [`conversion_cost`](Self::conversion_cost) estimates to choose a path,
/// and then calls [`convert`](Self::convert). Rules hold their own
/// [`ConversionParameters`], which the registry may override beforehand.
pub trait ConversionRule {
    /// Display name of the rule.
    fn name(&self) -> &'static str;

    /// Kind the rule reads.
    fn source_representation(&self) -> RepresentationKind;

    /// Kind the rule writes.
    fn target_representation(&self) -> RepresentationKind;

    /// Rough time one conversion takes.
    ///
    /// Either representation may be `None` when the registry is planning a
    /// path before the data exists.
    fn conversion_cost(
        &self,
        source: Option<&Representation>,
        target: Option<&Representation>,
    ) -> Duration;

    /// Current parameters.
    fn parameters(&self) -> &ConversionParameters;

    /// Parameters for the registry to override.
    fn parameters_mut(&mut self) -> &mut ConversionParameters;

    /// Convert `source` into `target`.
    ///
    /// `target` is only written when the conversion succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if either representation has the wrong kind, a
    /// parameter is unusable, or a conversion stage fails.
    fn convert(&self, source: &Representation, target: &mut Representation) -> ConvertResult<()>;

    /// Empty representation for this rule's source or target name.
    fn construct_representation_by_name(&self, name: &str) -> Option<Representation> {
        let kind = RepresentationKind::from_name(name)?;
        (kind == self.source_representation() || kind == self.target_representation())
            .then(|| Representation::empty(kind))
    }

    /// Empty representation held by the named data type.
    fn construct_representation_by_class(&self, class_name: &str) -> Option<Representation> {
        RepresentationKind::from_class_name(class_name).map(Representation::empty)
    }
}
