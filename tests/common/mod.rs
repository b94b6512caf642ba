//! Common utilities for integration tests

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{
    expected_flux,
    reference_parameters,
};
