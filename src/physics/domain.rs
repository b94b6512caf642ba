//! Cell regions and particle domains
//!
//! This module defines the spatial vocabulary of the framework:
//! - `Region`: type-safe identifiers for the regions of a cell mesh
//! - `ParticleDomain`: the two electrode particles, with their per-domain data
//!
//! # Design
//!
//! Both enums are closed on purpose. A state variable tagged with a region
//! that is not a particle region can still be *represented* (model wiring
//! errors must be reportable), but it can never reach the particle physics:
//! [`ParticleDomain::from_region`] is the single gate, and everything
//! downstream of it works with the two-variant enum only.

use std::fmt;

// =================================================================================================
// Regions (Type-safe Identifiers)
// =================================================================================================

/// Regions of the cell mesh a symbolic field can live on
///
/// The `Display` form is the canonical lower-case label used in diagnostics
/// (e.g. `"negative particle"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Macroscopic negative electrode (x-direction)
    NegativeElectrode,

    /// Separator between the electrodes
    Separator,

    /// Macroscopic positive electrode (x-direction)
    PositiveElectrode,

    /// Spherical particle of negative active material (r-direction)
    NegativeParticle,

    /// Spherical particle of positive active material (r-direction)
    PositiveParticle,
}

impl Region {
    /// Canonical lower-case label
    pub fn label(&self) -> &'static str {
        match self {
            Region::NegativeElectrode => "negative electrode",
            Region::Separator => "separator",
            Region::PositiveElectrode => "positive electrode",
            Region::NegativeParticle => "negative particle",
            Region::PositiveParticle => "positive particle",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =================================================================================================
// Particle Domains
// =================================================================================================

/// The two electrode-particle domains
///
/// Per-variant data (display name, host electrode) lives here so that the
/// submodel builders contain no string comparison at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleDomain {
    /// Negative-electrode particle
    Negative,

    /// Positive-electrode particle
    Positive,
}

impl ParticleDomain {
    /// Narrow a mesh region down to a particle domain
    ///
    /// Returns `None` for electrode and separator regions; callers turn that
    /// into their own error, naming the offending region.
    pub fn from_region(region: Region) -> Option<Self> {
        match region {
            Region::NegativeParticle => Some(ParticleDomain::Negative),
            Region::PositiveParticle => Some(ParticleDomain::Positive),
            _ => None,
        }
    }

    /// The mesh region this domain corresponds to
    pub fn region(&self) -> Region {
        match self {
            ParticleDomain::Negative => Region::NegativeParticle,
            ParticleDomain::Positive => Region::PositiveParticle,
        }
    }

    /// The macroscopic electrode the particle sits in
    ///
    /// Surface quantities are broadcast onto this region when a submodel is
    /// asked for electrode-wide coupling terms.
    pub fn electrode(&self) -> Region {
        match self {
            ParticleDomain::Negative => Region::NegativeElectrode,
            ParticleDomain::Positive => Region::PositiveElectrode,
        }
    }

    /// Human-readable name used as the prefix of output-variable keys
    pub fn display_name(&self) -> &'static str {
        match self {
            ParticleDomain::Negative => "Negative particle",
            ParticleDomain::Positive => "Positive particle",
        }
    }
}

impl fmt::Display for ParticleDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.region())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
