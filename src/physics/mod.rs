//! Physical domains and parameters
//!
//! This module provides the physical vocabulary the submodels are written
//! in: which region of the cell a field lives on, and which constants govern
//! its physics there.
//!
//! # Core Concepts
//!
//! - **Region**: Type-safe identifier for a region of the cell mesh
//! - **Particle Domain**: The two electrode particles, with per-domain data
//!   (display name, host electrode)
//! - **Particle Parameters**: Explicit record of the physical constants,
//!   validated once at construction
//!
//! # Architecture
//!
//! Parameters are **separate from the submodels that read them**:
//! - The parameter record holds the **constants** (validated configuration)
//! - The submodel holds the **equations** (symbolic assembly)
//!
//! A submodel asks for [`ParticleParameters::constants`] with a
//! [`ParticleDomain`] and receives exactly the subset that applies there —
//! mixing up negative and positive constants is unrepresentable.
//!
//! # Example
//!
//! ```rust
//! use cell_rs::physics::{ParticleParameters, ParticleDomain};
//!
//! # fn main() -> Result<(), cell_rs::physics::ParameterError> {
//! let params = ParticleParameters::new(
//!     0.5, 0.8, 2.0, 24983.0,
//!     0.3, 0.6, 1.5, 51218.0,
//!     1.2,
//! )?;
//!
//! let negative = params.constants(ParticleDomain::Negative);
//! assert_eq!(negative.tau, 0.5);
//! assert_eq!(negative.gamma, None);
//! # Ok(())
//! # }
//! ```

// module declaration
pub mod domain;
pub mod parameters;

// re-export commonly used types for convenience
pub use domain::{ParticleDomain, Region};
pub use parameters::{
    DomainConstants,
    ParameterError,
    ParticleParameters, };
