//! Integration tests: particle submodel assembly
//!
//! These tests verify the full bundle a [`StandardParticle`] produces for
//! both electrodes: equation structure, boundary conditions, output-variable
//! naming, broadcasting, error paths and idempotence.

use cell_rs::models::{ParticleModelError, StandardParticle};
use cell_rs::physics::Region;
use cell_rs::symbolic::{Expr, ExprKind, Variable};

mod common;
use common::{expected_flux, reference_parameters};

// =================================================================================================
// Equation Structure
// =================================================================================================

#[test]
fn test_negative_particle_governing_equations() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);
    let j = Expr::scalar(1.0);

    let bundle = model.assemble(&c, &j, false).unwrap();

    // rhs[c] = -div(-(1/tau_n)*grad(c))
    let flux = expected_flux(&c, 0.5);
    assert_eq!(bundle.rhs().len(), 1);
    assert_eq!(bundle.rhs()[&c], -Expr::div(flux.clone()));

    // No algebraic unknowns
    assert!(bundle.algebraic().is_empty());
    assert!(bundle.is_pure_differential());

    // initial_conditions[c] = c_init_n
    assert_eq!(bundle.initial_conditions().len(), 1);
    assert_eq!(bundle.initial_conditions()[&c], Expr::scalar(0.8));

    // Zero flux at the centre, tau*j/a at the surface — and no gamma node
    let pair = bundle.boundary_pair(&flux).unwrap();
    assert_eq!(pair.left, Expr::scalar(0.0));
    assert_eq!(pair.right, 0.5 * j / 2.0);
}

#[test]
fn test_positive_particle_governing_equations() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_p", Region::PositiveParticle);
    let j = Expr::scalar(1.0);

    let bundle = model.assemble(&c, &j, false).unwrap();

    let flux = expected_flux(&c, 0.3);
    assert_eq!(bundle.rhs()[&c], -Expr::div(flux.clone()));
    assert_eq!(bundle.initial_conditions()[&c], Expr::scalar(0.6));

    // Positive side additionally divides the surface flux by gamma_p
    let pair = bundle.boundary_pair(&flux).unwrap();
    assert_eq!(pair.right, 0.3 * j / 1.5 / 1.2);
}

#[test]
fn test_concrete_surface_flux_value() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);

    // j symbolic constant 1.0: right boundary = 0.5*1.0/2 = 0.25
    let bundle = model.assemble(&c, &Expr::scalar(1.0), false).unwrap();
    let pair = bundle.boundary_pair(&expected_flux(&c, 0.5)).unwrap();

    assert_eq!(pair.right.eval_constant(), Some(0.25));
    assert_eq!(bundle.initial_conditions()[&c].eval_constant(), Some(0.8));
}

#[test]
fn test_symbolic_flux_is_carried_through() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);

    // A non-constant reaction flux stays symbolic in the boundary condition
    let j_var = Variable::new("j_n", Region::NegativeElectrode);
    let j = Expr::variable(&j_var);

    let bundle = model.assemble(&c, &j, false).unwrap();
    let pair = bundle.boundary_pair(&expected_flux(&c, 0.5)).unwrap();

    assert_eq!(pair.right, 0.5 * j / 2.0);
    assert_eq!(pair.right.eval_constant(), None);
}

// =================================================================================================
// Output Variables
// =================================================================================================

#[test]
fn test_five_output_variables_negative() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);

    let bundle = model.assemble(&c, &Expr::scalar(1.0), false).unwrap();

    assert_eq!(bundle.variables().len(), 5);
    for key in [
        "Negative particle concentration",
        "Negative particle surface concentration",
        "Negative particle flux",
        "Negative particle concentration [mols m-3]",
        "Negative particle surface concentration [mols m-3]",
    ] {
        assert!(bundle.variable(key).is_some(), "missing variable: {}", key);
    }
}

#[test]
fn test_five_output_variables_positive() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_p", Region::PositiveParticle);

    let bundle = model.assemble(&c, &Expr::scalar(1.0), true).unwrap();

    assert_eq!(bundle.variables().len(), 5);
    assert!(bundle
        .variable("Positive particle surface concentration [mols m-3]")
        .is_some());
}

#[test]
fn test_dimensional_variables_are_scaled() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);

    let bundle = model.assemble(&c, &Expr::scalar(1.0), false).unwrap();

    let c_expr = Expr::variable(&c);
    assert_eq!(
        bundle.variable("Negative particle concentration"),
        Some(&c_expr)
    );
    assert_eq!(
        bundle.variable("Negative particle concentration [mols m-3]"),
        Some(&(24983.0 * c_expr.clone()))
    );
    assert_eq!(
        bundle.variable("Negative particle surface concentration [mols m-3]"),
        Some(&(24983.0 * Expr::surf(c_expr)))
    );
}

#[test]
fn test_surface_concentration_without_broadcast() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);

    let bundle = model.assemble(&c, &Expr::scalar(1.0), false).unwrap();
    let c_surf = bundle
        .variable("Negative particle surface concentration")
        .unwrap();

    // Plain surface value, no spatial extension
    assert_eq!(c_surf, &Expr::surf(Expr::variable(&c)));
    assert!(!matches!(c_surf.kind(), ExprKind::Broadcast(_, _)));
}

#[test]
fn test_surface_concentration_with_broadcast() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_p", Region::PositiveParticle);

    let bundle = model.assemble(&c, &Expr::scalar(1.0), true).unwrap();
    let c_surf = bundle
        .variable("Positive particle surface concentration")
        .unwrap();

    // Same underlying value, re-indexed onto the positive electrode
    assert_eq!(
        c_surf,
        &Expr::broadcast(
            Expr::surf(Expr::variable(&c)),
            Region::PositiveElectrode
        )
    );

    // The dimensional form scales the broadcast value
    assert_eq!(
        bundle.variable("Positive particle surface concentration [mols m-3]"),
        Some(&(51218.0 * c_surf.clone()))
    );
}

// =================================================================================================
// Error Paths
// =================================================================================================

#[test]
fn test_zero_domain_labels_rejected() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::with_regions("c", vec![]);

    let err = model.assemble(&c, &Expr::scalar(1.0), false).unwrap_err();
    assert_eq!(
        err,
        ParticleModelError::UnsupportedDomainCardinality {
            name: "c".to_string(),
            count: 0
        }
    );
}

#[test]
fn test_two_domain_labels_rejected() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::with_regions(
        "c",
        vec![Region::NegativeParticle, Region::PositiveParticle],
    );

    let err = model.assemble(&c, &Expr::scalar(1.0), false).unwrap_err();
    assert_eq!(
        err,
        ParticleModelError::UnsupportedDomainCardinality {
            name: "c".to_string(),
            count: 2
        }
    );
    // The message names the cardinality for upstream debugging
    assert!(err.to_string().contains("exactly 1"));
}

#[test]
fn test_non_particle_region_rejected() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);

    for region in [
        Region::Separator,
        Region::NegativeElectrode,
        Region::PositiveElectrode,
    ] {
        let c = Variable::new("c", region);
        let err = model.assemble(&c, &Expr::scalar(1.0), false).unwrap_err();
        assert_eq!(err, ParticleModelError::InvalidDomain { region });
        assert!(err.to_string().contains(region.label()));
    }
}

// =================================================================================================
// Idempotence
// =================================================================================================

#[test]
fn test_assembly_is_idempotent() {
    let params = reference_parameters();
    let model = StandardParticle::new(&params);
    let c = Variable::new("c_n", Region::NegativeParticle);
    let j = Expr::scalar(1.0);

    let first = model.assemble(&c, &j, true).unwrap();
    let second = model.assemble(&c, &j, true).unwrap();

    // Structurally equal bundles from identical inputs — no hidden state
    assert_eq!(first, second);
}
