//! Physical parameters of the particle submodels
//!
//! # Mathematical Background
//!
//! The nondimensional diffusion problem in a spherical particle of electrode
//! `k ∈ {n, p}` is controlled by four constants, plus one extra scale on the
//! positive side:
//!
//! ```text
//! ∂c_k/∂t = -∇·N_k,      N_k = -(1/τ_k)·∇c_k
//! ```
//!
//! Where:
//! - **τ_k** : Diffusion time constant (ratio of diffusion to discharge
//!   timescale, dimensionless)
//! - **c_init_k** : Initial concentration (scaled by c_max_k, dimensionless)
//! - **a_k** : Reaction-site surface density (dimensionless)
//! - **c_max_k** : Maximum lithium concentration \[mol m⁻³\], used to recover
//!   dimensional output variables
//! - **γ_p** : Potential scale ratio between the electrodes. It divides the
//!   positive-electrode boundary flux only; the negative side carries no
//!   such factor. The asymmetry comes from the nondimensionalisation of the
//!   full cell model and is preserved exactly.
//!
//! # Design
//!
//! The parameter set is an explicit record — one field per constant — and is
//! validated once at construction. Submodels read it through
//! [`ParticleParameters::constants`], which hands back the per-domain subset,
//! so a builder can never mix negative and positive constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::domain::ParticleDomain;

// =================================================================================================
// Errors
// =================================================================================================

/// Parameter validation failure
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("parameter `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

// =================================================================================================
// Parameter Record
// =================================================================================================

/// Complete constant set for both particle submodels
///
/// Arrives from the framework's configuration layer as an already-validated
/// bag; submodels only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleParameters {
    /// Negative-particle diffusion time constant τ_n
    pub tau_n: f64,

    /// Negative-particle initial concentration (nondimensional)
    pub c_init_n: f64,

    /// Negative-electrode reaction-site surface density a_n
    pub a_n: f64,

    /// Negative-particle concentration scale \[mol m⁻³\]
    pub c_max_n: f64,

    /// Positive-particle diffusion time constant τ_p
    pub tau_p: f64,

    /// Positive-particle initial concentration (nondimensional)
    pub c_init_p: f64,

    /// Positive-electrode reaction-site surface density a_p
    pub a_p: f64,

    /// Positive-particle concentration scale \[mol m⁻³\]
    pub c_max_p: f64,

    /// Positive-electrode potential scale γ_p
    pub gamma_p: f64,
}

/// Per-domain view of the constants a single submodel needs
///
/// `gamma` is `Some` for the positive domain only. Representing the absent
/// factor as `None` (rather than a neutral `1.0`) keeps the assembled
/// negative-domain expressions free of a spurious division node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainConstants {
    /// Diffusion time constant τ
    pub tau: f64,

    /// Initial concentration
    pub c_init: f64,

    /// Reaction-site surface density a
    pub a: f64,

    /// Concentration scale \[mol m⁻³\]
    pub c_max: f64,

    /// Extra potential scale on the boundary flux (positive domain only)
    pub gamma: Option<f64>,
}

impl ParticleParameters {
    /// Create a validated parameter set
    ///
    /// Every constant must be strictly positive: a zero time constant or
    /// site density would place a division by zero in the assembled trees.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tau_n: f64,
        c_init_n: f64,
        a_n: f64,
        c_max_n: f64,
        tau_p: f64,
        c_init_p: f64,
        a_p: f64,
        c_max_p: f64,
        gamma_p: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            tau_n,
            c_init_n,
            a_n,
            c_max_n,
            tau_p,
            c_init_p,
            a_p,
            c_max_p,
            gamma_p,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check positivity of every constant
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("tau_n", self.tau_n),
            ("c_init_n", self.c_init_n),
            ("a_n", self.a_n),
            ("c_max_n", self.c_max_n),
            ("tau_p", self.tau_p),
            ("c_init_p", self.c_init_p),
            ("a_p", self.a_p),
            ("c_max_p", self.c_max_p),
            ("gamma_p", self.gamma_p),
        ];

        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(ParameterError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Constants for one particle domain
    pub fn constants(&self, domain: ParticleDomain) -> DomainConstants {
        match domain {
            ParticleDomain::Negative => DomainConstants {
                tau: self.tau_n,
                c_init: self.c_init_n,
                a: self.a_n,
                c_max: self.c_max_n,
                gamma: None,
            },
            ParticleDomain::Positive => DomainConstants {
                tau: self.tau_p,
                c_init: self.c_init_p,
                a: self.a_p,
                c_max: self.c_max_p,
                gamma: Some(self.gamma_p),
            },
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
