//! Symbolic expression trees
//!
//! This is the constructor surface of the expression engine as the submodels
//! see it: scalar literals, variable references, the spatial operators
//! (gradient, divergence, surface value, broadcast) and plain arithmetic.
//! Nothing here simplifies, differentiates or evaluates a field — that is
//! the discretizer's business. The trees produced by a submodel are handed
//! over exactly as built.
//!
//! # Design
//!
//! - Nodes are `Arc`-shared: cloning a subtree is a pointer copy, so the
//!   same flux expression can appear both in the right-hand side and as a
//!   boundary-condition key without duplication.
//! - Equality and hashing are **structural** (scalar payloads compare by
//!   bit pattern), so expressions can key the bundle maps the same way the
//!   variables do. No expression built by this crate contains a NaN.
//! - `ExprKind` is public for pattern matching, but trees are built through
//!   the `Expr` constructors and operators.
//!
//! # Example
//!
//! ```rust
//! use cell_rs::symbolic::{Expr, Variable};
//! use cell_rs::physics::Region;
//!
//! let c = Variable::new("c_n", Region::NegativeParticle);
//! let flux = -(2.0 * Expr::grad(Expr::variable(&c)));
//!
//! assert_eq!(flux.to_string(), "-(2 * grad(c_n))");
//! assert_eq!(flux, flux.clone());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;
use std::sync::Arc;

use crate::physics::domain::Region;
use crate::symbolic::variable::Variable;

// =================================================================================================
// Expression Tree
// =================================================================================================

/// Immutable symbolic expression
///
/// A thin handle around an `Arc`-shared node; see the module docs for the
/// equality and sharing semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Arc<ExprKind>);

/// Node of an expression tree
#[derive(Debug, PartialEq)]
pub enum ExprKind {
    /// Scalar literal
    Scalar(f64),

    /// Reference to a state variable
    Variable(Variable),

    /// Spatial gradient of a field
    Gradient(Expr),

    /// Spatial divergence of a (flux) field
    Divergence(Expr),

    /// Field value at the particle's outer boundary
    Surface(Expr),

    /// Per-particle scalar re-indexed onto a macroscopic region
    Broadcast(Expr, Region),

    /// Negation
    Neg(Expr),

    /// Sum
    Add(Expr, Expr),

    /// Difference
    Sub(Expr, Expr),

    /// Product
    Mul(Expr, Expr),

    /// Quotient
    Div(Expr, Expr),
}

impl Expr {
    fn new(kind: ExprKind) -> Self {
        Expr(Arc::new(kind))
    }

    // ======================================= constructors =======================================

    /// Scalar literal
    pub fn scalar(value: f64) -> Self {
        Self::new(ExprKind::Scalar(value))
    }

    /// Leaf referencing a state variable
    pub fn variable(variable: &Variable) -> Self {
        Self::new(ExprKind::Variable(variable.clone()))
    }

    /// Spatial gradient
    pub fn grad(operand: Expr) -> Self {
        Self::new(ExprKind::Gradient(operand))
    }

    /// Spatial divergence
    pub fn div(operand: Expr) -> Self {
        Self::new(ExprKind::Divergence(operand))
    }

    /// Value at the particle surface
    pub fn surf(operand: Expr) -> Self {
        Self::new(ExprKind::Surface(operand))
    }

    /// Re-index a per-particle scalar onto `region`
    pub fn broadcast(operand: Expr, region: Region) -> Self {
        Self::new(ExprKind::Broadcast(operand, region))
    }

    // ========================================== Queries ==========================================

    /// The node this expression is rooted at
    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    /// Fold a tree of scalars and arithmetic into a number
    ///
    /// Returns `None` as soon as a variable or spatial operator is
    /// encountered — only fully-constant trees have a value before
    /// discretization.
    pub fn eval_constant(&self) -> Option<f64> {
        match self.kind() {
            ExprKind::Scalar(value) => Some(*value),
            ExprKind::Neg(e) => Some(-e.eval_constant()?),
            ExprKind::Add(a, b) => Some(a.eval_constant()? + b.eval_constant()?),
            ExprKind::Sub(a, b) => Some(a.eval_constant()? - b.eval_constant()?),
            ExprKind::Mul(a, b) => Some(a.eval_constant()? * b.eval_constant()?),
            ExprKind::Div(a, b) => Some(a.eval_constant()? / b.eval_constant()?),
            _ => None,
        }
    }
}

// =================================================================================================
// Structural Equality and Hashing
// =================================================================================================

// Scalar payloads are finite by construction, so reflexivity holds.
impl Eq for Expr {}
impl Eq for ExprKind {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state);
    }
}

impl Hash for ExprKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ExprKind::Scalar(value) => value.to_bits().hash(state),
            ExprKind::Variable(variable) => variable.hash(state),
            ExprKind::Gradient(e)
            | ExprKind::Divergence(e)
            | ExprKind::Surface(e)
            | ExprKind::Neg(e) => e.hash(state),
            ExprKind::Broadcast(e, region) => {
                e.hash(state);
                region.hash(state);
            }
            ExprKind::Add(a, b)
            | ExprKind::Sub(a, b)
            | ExprKind::Mul(a, b)
            | ExprKind::Div(a, b) => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}

// =================================================================================================
// Operators
// =================================================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $kind:ident) => {
        impl ops::$trait for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::new(ExprKind::$kind(self, rhs))
            }
        }

        impl ops::$trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                Expr::new(ExprKind::$kind(self, Expr::scalar(rhs)))
            }
        }

        impl ops::$trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::new(ExprKind::$kind(Expr::scalar(self), rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, Add);
impl_binary_op!(Sub, sub, Sub);
impl_binary_op!(Mul, mul, Mul);
impl_binary_op!(Div, div, Div);

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::new(ExprKind::Neg(self))
    }
}

// =================================================================================================
// Display
// =================================================================================================

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Scalar(value) => write!(f, "{}", value),
            ExprKind::Variable(variable) => write!(f, "{}", variable),
            ExprKind::Gradient(e) => write!(f, "grad({})", e),
            ExprKind::Divergence(e) => write!(f, "div({})", e),
            ExprKind::Surface(e) => write!(f, "surf({})", e),
            ExprKind::Broadcast(e, region) => write!(f, "broadcast({}, {})", e, region),
            ExprKind::Neg(e) => write!(f, "-{}", e),
            ExprKind::Add(a, b) => write!(f, "({} + {})", a, b),
            ExprKind::Sub(a, b) => write!(f, "({} - {})", a, b),
            ExprKind::Mul(a, b) => write!(f, "({} * {})", a, b),
            ExprKind::Div(a, b) => write!(f, "({} / {})", a, b),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
