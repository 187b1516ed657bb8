//! Nuclear cross-section lookup.
//!
//! Maps a kinetic energy, a material, and an interaction kind to an
//! interpolated cross section in barns. Lookups are pure and run in
//! constant time over the embedded tables, so they are safe to call from
//! parallel tracking loops without synchronisation.
//!
//! Energies between grid points interpolate linearly; energies above the
//! 2.5 GeV end of the grid extrapolate off the last tabulated segment
//! rather than clamping or failing. The low end needs no special case:
//! every valid energy at or below the first grid point evaluates on the
//! first segment.

use serde::{Deserialize, Serialize};

use crate::data::ENERGY_GEV;
use crate::interp::LinearTable;
use crate::material::{Material, MaterialError, MaterialProperties};

/// Which of a material's two tabulated interaction curves to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossSectionKind {
    /// Scattering that conserves total kinetic energy.
    Elastic,
    /// Scattering that absorbs kinetic energy, typically producing
    /// secondaries.
    Inelastic,
}

impl Material {
    /// Interpolated cross section (barns) at the given kinetic energy (GeV).
    ///
    /// Deterministic: identical arguments produce bit-identical results.
    pub fn cross_section(self, kind: CrossSectionKind, energy_gev: f64) -> f64 {
        let properties = self.properties();
        let curve = match kind {
            CrossSectionKind::Elastic => properties.elastic,
            CrossSectionKind::Inelastic => properties.inelastic,
        };
        LinearTable::new(&ENERGY_GEV, curve).evaluate(energy_gev)
    }
}

/// Cross-section lookup by integer material selector.
///
/// Convenience wrapper for callers holding raw selectors from a tracking
/// configuration; selectors outside `[0, 7]` are rejected.
pub fn lookup_cross_section(
    energy_gev: f64,
    selector: usize,
    kind: CrossSectionKind,
) -> Result<f64, MaterialError> {
    Ok(Material::from_index(selector)?.cross_section(kind, energy_gev))
}

/// Physical constants lookup by integer material selector.
pub fn material_constants(selector: usize) -> Result<MaterialProperties, MaterialError> {
    Ok(Material::from_index(selector)?.properties())
}
