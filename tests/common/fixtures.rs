//! Shared fixtures for integration tests
//!
//! The reference constants match the concrete scenario used throughout the
//! suite: tau_n = 0.5, a_n = 2, c_init_n = 0.8, so that a unit reaction
//! flux gives a surface boundary value of 0.25 on the negative side.

use cell_rs::physics::ParticleParameters;
use cell_rs::symbolic::{Expr, Variable};

/// Reference parameter set used by every integration test
pub fn reference_parameters() -> ParticleParameters {
    ParticleParameters::new(
        0.5, 0.8, 2.0, 24983.0, // negative: tau, c_init, a, c_max
        0.3, 0.6, 1.5, 51218.0, // positive: tau, c_init, a, c_max
        1.2,                    // gamma_p
    )
    .expect("reference parameters are valid")
}

/// The diffusive flux N = -(1/tau)*grad(c) a particle assembly produces
pub fn expected_flux(c: &Variable, tau: f64) -> Expr {
    -((1.0 / tau) * Expr::grad(Expr::variable(c)))
}
