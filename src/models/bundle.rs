//! Model bundle: the assembled symbolic sub-problem
//!
//! # Design
//!
//! A bundle is an immutable value object: all five maps are set in a single
//! constructor call and never mutated afterwards. A submodel either returns
//! a complete bundle or an error — a partially-assembled problem is not
//! representable.
//!
//! The maps mirror what a discretizer expects to receive:
//!
//! - `rhs`: time derivative of each differential state variable
//! - `algebraic`: residual of each algebraic constraint
//! - `initial_conditions`: starting value of each state variable
//! - `boundary_conditions`: (left, right) pair for each flux expression
//! - `variables`: named output expressions for post-processing

use std::collections::HashMap;

use crate::symbolic::{Expr, Variable};

// =================================================================================================
// Boundary Pair
// =================================================================================================

/// Boundary values of a flux expression at the two ends of its 1-D domain
///
/// For a spherical particle, `left` is the particle centre and `right` the
/// particle surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPair {
    /// Value at the lower boundary (particle centre)
    pub left: Expr,

    /// Value at the upper boundary (particle surface)
    pub right: Expr,
}

// =================================================================================================
// Model Bundle
// =================================================================================================

/// Complete symbolic description of one sub-problem
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
/// let c = Variable::new("c_n", Region::NegativeParticle);
///
/// let bundle = StandardParticle::new(&params).assemble(&c, &Expr::scalar(1.0), false)?;
///
/// assert!(bundle.rhs().contains_key(&c));
/// assert!(bundle.algebraic().is_empty());
/// assert!(bundle.variable("Negative particle flux").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelBundle {
    /// Time derivative per differential state variable
    rhs: HashMap<Variable, Expr>,

    /// Residual per algebraic constraint
    algebraic: HashMap<Variable, Expr>,

    /// Initial value per state variable
    initial_conditions: HashMap<Variable, Expr>,

    /// Boundary pair per flux expression
    boundary_conditions: HashMap<Expr, BoundaryPair>,

    /// Named output expressions
    variables: HashMap<String, Expr>,
}

impl ModelBundle {
    /// Build a bundle from its five maps in one shot
    pub fn new(
        rhs: HashMap<Variable, Expr>,
        algebraic: HashMap<Variable, Expr>,
        initial_conditions: HashMap<Variable, Expr>,
        boundary_conditions: HashMap<Expr, BoundaryPair>,
        variables: HashMap<String, Expr>,
    ) -> Self {
        Self {
            rhs,
            algebraic,
            initial_conditions,
            boundary_conditions,
            variables,
        }
    }

    // ========================================== Queries ==========================================

    /// Time derivatives of the differential state variables
    pub fn rhs(&self) -> &HashMap<Variable, Expr> {
        &self.rhs
    }

    /// Algebraic constraint residuals
    pub fn algebraic(&self) -> &HashMap<Variable, Expr> {
        &self.algebraic
    }

    /// Initial conditions
    pub fn initial_conditions(&self) -> &HashMap<Variable, Expr> {
        &self.initial_conditions
    }

    /// Boundary conditions, keyed by flux expression
    pub fn boundary_conditions(&self) -> &HashMap<Expr, BoundaryPair> {
        &self.boundary_conditions
    }

    /// Named output expressions
    pub fn variables(&self) -> &HashMap<String, Expr> {
        &self.variables
    }

    /// Look up an output expression by name
    pub fn variable(&self, name: &str) -> Option<&Expr> {
        self.variables.get(name)
    }

    /// Boundary pair of a flux expression (structural lookup)
    pub fn boundary_pair(&self, flux: &Expr) -> Option<&BoundaryPair> {
        self.boundary_conditions.get(flux)
    }

    /// Whether the sub-problem is a pure ODE system after discretization
    pub fn is_pure_differential(&self) -> bool {
        self.algebraic.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
