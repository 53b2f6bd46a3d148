//! # XDLVO Core Library
//!
//! A physics engine for extended-DLVO (XDLVO) interaction energies between a flat membrane and a
//! spherical foulant particle, used to judge membrane-fouling propensity in water treatment.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that every piece can be tested in
//! isolation and every calculation stays a pure function of its inputs.
//!
//! - **[`core`]: The Foundation.** Physical constants, model parameters, numerically stable
//!   helpers, the contact-angle surface-energy solver, electrostatics and the per-distance
//!   energy laws. Nothing in this layer holds state.
//!
//! - **[`engine`]: The Calculators.** Builds on `core` to compute the Gibbs free energy of
//!   adhesion at contact, distance-resolved interaction-energy profiles and their analysis
//!   (energy barrier, primary/secondary minima, force field, zero crossings).
//!
//! - **[`workflows`]: The Public API.** Chains the engine into the complete assessment, from
//!   measured contact angles to an analyzed energy profile, with progress reporting.
//!
//! Every entity produced here is a value created fresh per call; identical inputs always yield
//! identical outputs, so the engine may be called concurrently from any number of threads.

pub mod core;
pub mod engine;
pub mod workflows;
