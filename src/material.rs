//! The closed registry of beamline materials.
//!
//! Eight materials are supported, addressed either by the [`Material`] enum,
//! by the integer selector used in tracking configurations (0 = carbon
//! through 7 = lead), or by lowercase name. The set is closed: selectors
//! outside `[0, 7]` and unknown names are rejected with
//! [`MaterialError::InvalidSelector`] / [`MaterialError::UnknownName`]
//! rather than silently mapped to a default material.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::data;

/// Errors from material registry lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    #[error("Material selector {selector} is outside the supported range [0, {max}]")]
    InvalidSelector { selector: usize, max: usize },

    #[error("Unknown material name: {0}")]
    UnknownName(String),
}

/// A supported beamline material.
///
/// Discriminants match the integer selectors used in tracking
/// configurations, so `Material::Copper as usize == 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Carbon = 0,
    Aluminum = 1,
    Iron = 2,
    Copper = 3,
    Tantalum = 4,
    Tungsten = 5,
    Platinum = 6,
    Lead = 7,
}

/// Physical constants and cross-section tables for one material.
///
/// The cross-section curves borrow the embedded `'static` tables and are
/// index-aligned with [`data::ENERGY_GEV`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaterialProperties {
    /// Atomic number Z.
    pub atomic_number: f64,
    /// Atomic weight A (amu).
    pub atomic_weight: f64,
    /// Density ρ (kg/m³).
    pub density: f64,
    /// Radiation length X₀ (m).
    pub radiation_length: f64,
    /// Nuclear radius parameter, 0.94 · A^(1/3).
    pub nuclear_radius: f64,
    /// Elastic cross sections (barns), one per energy grid point.
    #[serde(skip)]
    pub elastic: &'static [f64; 59],
    /// Inelastic cross sections (barns), one per energy grid point.
    #[serde(skip)]
    pub inelastic: &'static [f64; 59],
}

impl MaterialProperties {
    fn new(
        atomic_number: f64,
        atomic_weight: f64,
        density: f64,
        radiation_length: f64,
        elastic: &'static [f64; 59],
        inelastic: &'static [f64; 59],
    ) -> Self {
        Self {
            atomic_number,
            atomic_weight,
            density,
            radiation_length,
            nuclear_radius: 0.94 * atomic_weight.cbrt(),
            elastic,
            inelastic,
        }
    }
}

impl Material {
    /// Number of supported materials.
    pub const COUNT: usize = 8;

    /// All materials in selector order.
    pub const ALL: [Material; Self::COUNT] = [
        Material::Carbon,
        Material::Aluminum,
        Material::Iron,
        Material::Copper,
        Material::Tantalum,
        Material::Tungsten,
        Material::Platinum,
        Material::Lead,
    ];

    /// Resolve an integer selector.
    ///
    /// Only `[0, 7]` is accepted; anything else is an error. This is
    /// stricter than some legacy material-interaction tables, which treat
    /// every unrecognised selector as lead.
    pub fn from_index(selector: usize) -> Result<Material, MaterialError> {
        Self::ALL
            .get(selector)
            .copied()
            .ok_or(MaterialError::InvalidSelector {
                selector,
                max: Self::COUNT - 1,
            })
    }

    /// The integer selector for this material.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as accepted by `"...".parse::<Material>()`.
    pub fn name(self) -> &'static str {
        match self {
            Material::Carbon => "carbon",
            Material::Aluminum => "aluminum",
            Material::Iron => "iron",
            Material::Copper => "copper",
            Material::Tantalum => "tantalum",
            Material::Tungsten => "tungsten",
            Material::Platinum => "platinum",
            Material::Lead => "lead",
        }
    }

    /// Full property record for this material.
    ///
    /// Cheap to call: the scalars are literals and the curves are borrowed
    /// `'static` tables, so repeated calls return identical records.
    pub fn properties(self) -> MaterialProperties {
        match self {
            Material::Carbon => MaterialProperties::new(
                6.0,
                12.01,
                2.27e3,
                18.8 / 100.0,
                &data::Z6_ELASTIC,
                &data::Z6_INELASTIC,
            ),
            Material::Aluminum => MaterialProperties::new(
                13.0,
                26.92,
                2.7e3,
                8.9 / 100.0,
                &data::Z13_ELASTIC,
                &data::Z13_INELASTIC,
            ),
            Material::Iron => MaterialProperties::new(
                26.0,
                55.85,
                7.87e3,
                1.76 / 100.0,
                &data::Z26_ELASTIC,
                &data::Z26_INELASTIC,
            ),
            Material::Copper => MaterialProperties::new(
                29.0,
                63.546,
                8.96e3,
                1.43 / 100.0,
                &data::Z29_ELASTIC,
                &data::Z29_INELASTIC,
            ),
            Material::Tantalum => MaterialProperties::new(
                73.0,
                180.95,
                16.6e3,
                0.411 / 100.0,
                &data::Z73_ELASTIC,
                &data::Z73_INELASTIC,
            ),
            Material::Tungsten => MaterialProperties::new(
                74.0,
                183.84,
                19.3e3,
                0.35 / 100.0,
                &data::Z74_ELASTIC,
                &data::Z74_INELASTIC,
            ),
            Material::Platinum => MaterialProperties::new(
                78.0,
                195.08,
                21.45e3,
                0.305 / 100.0,
                &data::Z78_ELASTIC,
                &data::Z78_INELASTIC,
            ),
            Material::Lead => MaterialProperties::new(
                82.0,
                207.2,
                11.35e3,
                0.56 / 100.0,
                &data::Z82_ELASTIC,
                &data::Z82_INELASTIC,
            ),
        }
    }

    /// Atomic number Z.
    pub fn atomic_number(self) -> f64 {
        self.properties().atomic_number
    }

    /// Atomic weight A (amu).
    pub fn atomic_weight(self) -> f64 {
        self.properties().atomic_weight
    }

    /// Density ρ (kg/m³).
    pub fn density(self) -> f64 {
        self.properties().density
    }

    /// Radiation length X₀ (m).
    pub fn radiation_length(self) -> f64 {
        self.properties().radiation_length
    }

    /// Nuclear radius parameter, 0.94 · A^(1/3).
    pub fn nuclear_radius(self) -> f64 {
        self.properties().nuclear_radius
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| MaterialError::UnknownName(s.to_string()))
    }
}
