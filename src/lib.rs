//! cell-rs: Battery Cell Modeling Framework
//!
//! A framework for assembling the symbolic governing equations of
//! battery-cell submodels. Built with Rust for type safety and
//! predictable model wiring.
//!
//! # Architecture
//!
//! cell-rs is built on two core principles:
//!
//! 1. **Separation of Model Definition and Numerics**
//!    - Submodels define equations symbolically (what to solve)
//!    - Numerical discretizers and solvers consume the bundle (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Closed enums for domains — invalid regions cannot reach the physics
//!    - Immutable model bundles — no partially-assembled output
//!    - Stable API (v0.1.0+)
//!
//! A submodel never solves anything: it produces a
//! [`ModelBundle`](models::ModelBundle) — the right-hand sides, algebraic
//! constraints, initial conditions, boundary conditions and named output
//! variables of one sub-problem — as plain expression trees. Whatever
//! discretizer the surrounding framework uses consumes that bundle
//! unmodified.
//!
//! # Quick Start
//!
//! ```rust
//! use cell_rs::physics::{ParticleParameters, Region};
//! use cell_rs::symbolic::{Expr, Variable};
//! use cell_rs::models::StandardParticle;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Physical constants for both electrodes (validated once, up front)
//! let params = ParticleParameters::new(
//!     0.5, 0.8, 2.0, 24983.0,  // negative: tau, c_init, a, c_max
//!     0.3, 0.6, 1.5, 51218.0,  // positive: tau, c_init, a, c_max
//!     1.2,                     // positive: gamma
//! )?;
//!
//! // 2. State variable and surface reaction flux
//! let c = Variable::new("c_n", Region::NegativeParticle);
//! let j = Expr::scalar(1.0);
//!
//! // 3. Assemble the diffusion sub-problem
//! let model = StandardParticle::new(&params);
//! let bundle = model.assemble(&c, &j, false)?;
//!
//! // 4. Hand the bundle to a discretizer
//! assert_eq!(bundle.rhs().len(), 1);
//! assert_eq!(bundle.variables().len(), 5);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`symbolic`]: Expression trees and state variables (engine interface)
//! - [`physics`]: Domains and physical parameters
//! - [`models`]: Submodel builders and the bundle they produce

// Core modules
pub mod physics;

pub mod models;
pub mod symbolic;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use cell_rs::prelude::*;
    //! ```
    pub use crate::symbolic::{Expr,
                              ExprKind,
                              Variable};
    pub use crate::physics::{Region,
                             ParticleDomain,
                             ParticleParameters,
                             DomainConstants,
                             ParameterError};
    pub use crate::models::{StandardParticle,
                            ParticleModelError,
                            ModelBundle,
                            BoundaryPair};
}
