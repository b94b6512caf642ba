//! Spherical-particle diffusion submodel
//!
//! # Mathematical Background
//!
//! ## Governing Equation
//!
//! Lithium transport inside an electrode particle is Fickian diffusion on a
//! 1-D spherical domain. In nondimensional variables, for electrode
//! `k ∈ {n, p}`:
//!
//! ```text
//! ∂c_k/∂t = -∇·N_k,      N_k = -(1/τ_k)·∇c_k
//! ```
//!
//! Where:
//! - **c_k** : Particle concentration (scaled by c_max_k, dimensionless)
//! - **N_k** : Diffusive flux over the particle domain
//! - **τ_k** : Diffusion time constant (dimensionless)
//!
//! ## Boundary Conditions
//!
//! The particle centre is a symmetry point, the surface carries the imposed
//! reaction flux converted into the units of N:
//!
//! ```text
//! N_k |_(r=0) = 0
//! N_n |_(r=1) = τ_n·j/a_n             (negative electrode)
//! N_p |_(r=1) = τ_p·j/a_p/γ_p        (positive electrode)
//! ```
//!
//! The extra γ_p division on the positive side comes from the cell-level
//! nondimensionalisation and applies there only — the negative-side
//! expression carries no γ node at all.
//!
//! ## Initial Condition
//!
//! ```text
//! c_k(r, 0) = c_init_k
//! ```
//!
//! # Output Variables
//!
//! Each assembly emits exactly five named expressions,
//! `"<Domain> <quantity>"` with `"[mols m-3]"` suffixes for the dimensional
//! (scale-multiplied) forms:
//!
//! - `"<Domain> concentration"` — the state variable itself
//! - `"<Domain> surface concentration"` — `surf(c)`, optionally broadcast
//!   onto the host electrode for electrode-wide coupling terms
//! - `"<Domain> flux"` — N
//! - `"<Domain> concentration [mols m-3]"` — `c_max · c`
//! - `"<Domain> surface concentration [mols m-3]"` — `c_max · surf(c)`
//!
//! # Design Rationale
//!
//! Assembly is a pure function: no state survives a call, and two calls with
//! equal inputs produce structurally equal bundles. Domain dispatch happens
//! once, through [`ParticleDomain::from_region`]; everything after that is
//! identical for both electrodes with the constants swapped.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::bundle::{BoundaryPair, ModelBundle};
use crate::physics::domain::{ParticleDomain, Region};
use crate::physics::parameters::{DomainConstants, ParticleParameters};
use crate::symbolic::{Expr, Variable};

// =================================================================================================
// Errors
// =================================================================================================

/// Rejected submodel input
///
/// Both variants are wiring errors in the surrounding model assembly; there
/// is nothing to recover locally, and no bundle is produced.
#[derive(Debug, Error, PartialEq)]
pub enum ParticleModelError {
    #[error("state variable `{name}` must live on exactly 1 domain, got {count}")]
    UnsupportedDomainCardinality { name: String, count: usize },

    #[error("domain `{region}` is not valid for the particle equations")]
    InvalidDomain { region: Region },
}

// =================================================================================================
// Standard Particle Submodel
// =================================================================================================

/// Fickian diffusion in a spherical electrode particle
///
/// Borrows the parameter set read-only; the same builder can assemble both
/// electrodes' sub-problems.
///
/// # Example
///
/// ```rust
/// use cell_rs::physics::{ParticleParameters, Region};
/// use cell_rs::symbolic::{Expr, Variable};
/// use cell_rs::models::StandardParticle;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let params = ParticleParameters::new(
///     0.5, 0.8, 2.0, 24983.0,
///     0.3, 0.6, 1.5, 51218.0,
///     1.2,
/// )?;
/// let model = StandardParticle::new(&params);
///
/// let c_n = Variable::new("c_n", Region::NegativeParticle);
/// let c_p = Variable::new("c_p", Region::PositiveParticle);
/// let j = Expr::scalar(1.0);
///
/// let negative = model.assemble(&c_n, &j, false)?;
/// let positive = model.assemble(&c_p, &j, true)?;
///
/// assert_eq!(negative.variables().len(), 5);
/// assert_eq!(positive.variables().len(), 5);
/// # Ok(())
/// # }
/// ```
pub struct StandardParticle<'a> {
    params: &'a ParticleParameters,
}

impl<'a> StandardParticle<'a> {
    /// Create a builder over a validated parameter set
    pub fn new(params: &'a ParticleParameters) -> Self {
        Self { params }
    }

    /// Assemble the diffusion sub-problem for one particle
    ///
    /// # Arguments
    ///
    /// * `c` - State variable, defined on exactly one particle region
    /// * `j` - Reaction current density at the particle surface
    /// * `broadcast` - Re-index the surface concentration onto the host
    ///   electrode (for use as a coupling term elsewhere in the cell model)
    ///
    /// # Errors
    ///
    /// [`ParticleModelError::UnsupportedDomainCardinality`] when `c` carries
    /// zero or several region labels;
    /// [`ParticleModelError::InvalidDomain`] when the single label is not a
    /// particle region.
    pub fn assemble(
        &self,
        c: &Variable,
        j: &Expr,
        broadcast: bool,
    ) -> Result<ModelBundle, ParticleModelError> {
        let domain = self.check_domain(c)?;
        let k = self.params.constants(domain);

        let c_expr = Expr::variable(c);

        // ====== Governing equation ======

        // N = -(1/tau) * grad(c),  dc/dt = -div(N)
        let flux = -((1.0 / k.tau) * Expr::grad(c_expr.clone()));

        let mut rhs = HashMap::new();
        rhs.insert(c.clone(), -Expr::div(flux.clone()));

        // Pure diffusion introduces no algebraic unknowns
        let algebraic = HashMap::new();

        // ====== Initial condition ======

        let mut initial_conditions = HashMap::new();
        initial_conditions.insert(c.clone(), Expr::scalar(k.c_init));

        // ====== Boundary conditions ======

        // Symmetry at the centre; imposed reaction flux at the surface,
        // converted to the units of N
        let mut surface_flux = k.tau * j.clone() / k.a;
        if let Some(gamma) = k.gamma {
            surface_flux = surface_flux / gamma;
        }

        let mut boundary_conditions = HashMap::new();
        boundary_conditions.insert(
            flux.clone(),
            BoundaryPair {
                left: Expr::scalar(0.0),
                right: surface_flux,
            },
        );

        // ====== Output variables ======

        let variables = self.output_variables(&c_expr, &flux, domain, &k, broadcast);

        Ok(ModelBundle::new(
            rhs,
            algebraic,
            initial_conditions,
            boundary_conditions,
            variables,
        ))
    }

    /// Validate the region label set and narrow it to a particle domain
    fn check_domain(&self, c: &Variable) -> Result<ParticleDomain, ParticleModelError> {
        let regions = c.regions();
        if regions.len() != 1 {
            return Err(ParticleModelError::UnsupportedDomainCardinality {
                name: c.name().to_string(),
                count: regions.len(),
            });
        }

        let region = regions[0];
        ParticleDomain::from_region(region)
            .ok_or(ParticleModelError::InvalidDomain { region })
    }

    /// The five named output expressions of one assembly
    fn output_variables(
        &self,
        c_expr: &Expr,
        flux: &Expr,
        domain: ParticleDomain,
        k: &DomainConstants,
        broadcast: bool,
    ) -> HashMap<String, Expr> {
        let name = domain.display_name();

        let mut c_surf = Expr::surf(c_expr.clone());
        if broadcast {
            c_surf = Expr::broadcast(c_surf, domain.electrode());
        }

        let mut variables = HashMap::new();
        variables.insert(format!("{} concentration", name), c_expr.clone());
        variables.insert(format!("{} surface concentration", name), c_surf.clone());
        variables.insert(format!("{} flux", name), flux.clone());
        variables.insert(
            format!("{} concentration [mols m-3]", name),
            k.c_max * c_expr.clone(),
        );
        variables.insert(
            format!("{} surface concentration [mols m-3]", name),
            k.c_max * c_surf,
        );
        variables
    }
}

// =================================================================================================
// Tests
// =================================================================================================
