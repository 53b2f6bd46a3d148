//! # Workflows Module
//!
//! High-level entry points that chain the engine into a complete fouling assessment.
//!
//! ## Overview
//!
//! A workflow takes the raw measurements a user has at hand (contact angles or known surface
//! energies, zeta potentials, particle size and solution chemistry) and returns every derived
//! quantity of the XDLVO model in one value, reporting progress along the way.
//!
//! ## Architecture
//!
//! - **Assessment Workflow** ([`assess`]) - Surface-energy fitting for membrane and foulant,
//!   free energy of adhesion at contact, the interaction-energy profile and its analysis.

pub mod assess;
