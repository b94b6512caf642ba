//! Submodels of the battery cell
//!
//! A submodel translates a state variable plus its driving terms into a
//! [`ModelBundle`]: the symbolic right-hand sides, constraints, initial and
//! boundary conditions, and named output variables of one sub-problem. The
//! discretizer consumes bundles — submodels never solve anything.
//!
//! # Available Submodels
//!
//! ## [`StandardParticle`] — Fickian diffusion in a spherical particle
//!
//! Intra-particle lithium transport for either electrode. The electrode is
//! selected from the state variable's region tag; the two domains share the
//! assembly logic with their constants swapped, except for the γ scale that
//! divides the positive-electrode boundary flux only.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod bundle;
pub mod particle;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use bundle::{BoundaryPair, ModelBundle};
pub use particle::{ParticleModelError, StandardParticle};
