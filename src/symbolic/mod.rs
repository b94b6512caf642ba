//! Symbolic expressions and state variables
//!
//! This module is the interface this crate has to the expression engine.
//! A submodel builds its governing equations as [`Expr`] trees over
//! [`Variable`] leaves; the numeric discretizer that consumes the resulting
//! bundle is the first component to give those trees a value.
//!
//! # Core Concepts
//!
//! - **Expression**: Immutable, `Arc`-shared symbolic tree with structural
//!   equality, built from scalars, variables, spatial operators and `+ - * /`
//! - **Variable**: Named field quantity tagged with the mesh regions it is
//!   defined over
//!
//! What this module deliberately does **not** do: simplification,
//! differentiation, field evaluation. Those belong to the engine and the
//! discretizer, not to the model-definition layer.

// module declaration
pub mod expr;
pub mod variable;

// re-export commonly used types for convenience
pub use expr::{Expr, ExprKind};
pub use variable::Variable;
