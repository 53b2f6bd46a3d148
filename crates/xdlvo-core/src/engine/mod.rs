//! # Engine Module
//!
//! The calculators of the XDLVO model, built on the stateless [`crate::core`] layer.
//!
//! ## Overview
//!
//! Given the surface energies and zeta potentials of a membrane and a foulant together with the
//! solution chemistry, the engine computes:
//!
//! - **Free Energy of Adhesion** ([`free_energy`]) - ΔG at the contact separation, split into
//!   Lifshitz–van der Waals, acid-base and electrostatic double-layer parts
//! - **Interaction Profiles** ([`profile`]) - U(h) for each component on the distance grid
//! - **Profile Analysis** ([`analysis`]) - energy barrier, primary/secondary minima, the force
//!   field F = -dU/dh and zero crossings
//!
//! Supporting modules:
//!
//! - **Configuration** ([`config`]) - System inputs and the assessment configuration builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error aggregation
//!
//! ## Guarantees
//!
//! Every calculator is a pure, synchronous function. None of them fail: degenerate outcomes
//! such as a profile without a barrier are ordinary `None` values. The only hard failure in the
//! whole pipeline is an ill-conditioned contact-angle system, raised by the surface solver.

pub mod analysis;
pub mod config;
pub mod error;
pub mod free_energy;
pub mod profile;
pub mod progress;
