//! # Core Module
//!
//! The stateless foundation of the XDLVO engine.
//!
//! ## Overview
//!
//! Everything in this module is either an immutable value or a pure function. The modules are
//! ordered from the leaves upward:
//!
//! - **Constants** ([`constants`]) - CODATA physical constants in SI units
//! - **Parameters** ([`params`]) - Reference probe liquids, contact separation, acid-base decay
//!   length and the distance grid, loadable from TOML
//! - **Numerics** ([`numerics`]) - Stable hyperbolic functions, nearest-sample search,
//!   tolerant comparisons and interpolation
//! - **Surface Energy** ([`surface`]) - The van Oss–Chaudhury–Good three-liquid solver
//! - **Electrostatics** ([`electrostatics`]) - Water permittivity and Debye screening
//! - **Presets** ([`presets`]) - Literature membranes and foulants
//!
//! ## Units
//!
//! Lengths are nanometres throughout, surface tensions and free energies are mJ/m², zeta
//! potentials are mV, ionic strength is mol/L and temperature is kelvin. Interaction energies
//! are reported in kT.

pub mod constants;
pub mod electrostatics;
pub mod numerics;
pub mod params;
pub(crate) mod potentials;
pub mod presets;
pub mod surface;
