//! # Beamline Materials
//!
//! Material-interaction data for beam-dynamics simulations: a closed
//! registry of beamline materials, each carrying physical constants and
//! tabulated proton-nucleus elastic and inelastic cross sections, with
//! piecewise-linear interpolation at arbitrary kinetic energies.
//!
//! ## Supported materials
//!
//! | Selector | Material | Z | X₀ (m) |
//! |----------|----------|----|--------|
//! | 0 | [`Material::Carbon`] | 6 | 0.188 |
//! | 1 | [`Material::Aluminum`] | 13 | 0.089 |
//! | 2 | [`Material::Iron`] | 26 | 0.0176 |
//! | 3 | [`Material::Copper`] | 29 | 0.0143 |
//! | 4 | [`Material::Tantalum`] | 73 | 0.00411 |
//! | 5 | [`Material::Tungsten`] | 74 | 0.0035 |
//! | 6 | [`Material::Platinum`] | 78 | 0.00305 |
//! | 7 | [`Material::Lead`] | 82 | 0.0056 |
//!
//! ## Example
//!
//! ```
//! use beamline_materials::{lookup_cross_section, CrossSectionKind, Material};
//!
//! // Elastic cross section of carbon at 6 MeV kinetic energy.
//! let sigma = Material::Carbon.cross_section(CrossSectionKind::Elastic, 0.006);
//! assert!((sigma - 0.395).abs() < 1e-9);
//!
//! // The same lookup through the integer-selector interface.
//! let sigma = lookup_cross_section(0.006, 0, CrossSectionKind::Elastic).unwrap();
//! assert!((sigma - 0.395).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`material`] — Material registry, physical constants, selector/name
//!   resolution.
//! - [`cross_section`] — Cross-section query API.
//! - [`data`] — Embedded energy grid and cross-section tables.
//! - [`interp`] — Piecewise-linear interpolation over a fixed grid.
//!
//! All data is embedded at compile time and never mutated, so every lookup
//! is pure, lock-free, and safe to call concurrently.

pub mod cross_section;
pub mod data;
pub mod interp;
pub mod material;

pub use cross_section::{lookup_cross_section, material_constants, CrossSectionKind};
pub use data::ENERGY_GEV;
pub use material::{Material, MaterialError, MaterialProperties};
