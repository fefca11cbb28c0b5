//! Tests for the Ostriker & Shetty (2011) relation.

use super::*;
use crate::error::DomainError;
use approx::assert_relative_eq;
use ndarray::array;
use proptest::prelude::*;

#[test]
fn solar_neighbourhood_value() {
    let params = Os11Params::default();
    assert_relative_eq!(params.taustar(), 16.1);
    assert_relative_eq!(params.ir_optical_depth(10.0), 0.0209, max_relative = 1e-12);

    // 9.21e-6 × 100 / (1 + 0.0209/16.1)
    let sfr = os11(10.0, &params);
    assert_relative_eq!(sfr, 9.198_059_661_681_42e-4, max_relative = 1e-12);
}

#[test]
fn zero_gas_forms_no_stars() {
    assert_eq!(os11(0.0, &Os11Params::default()), 0.0);
    assert_eq!(os11(0.0, &Os11Params::high_injection().with_chi(0.5)), 0.0);
}

#[test]
fn stellar_gravity_scales_linearly_in_one_plus_chi() {
    let base = os11(50.0, &Os11Params::default());
    let with_stars = os11(50.0, &Os11Params::default().with_chi(1.0));
    assert_relative_eq!(with_stars, 2.0 * base, max_relative = 1e-14);
}

#[test]
fn low_surface_density_follows_quadratic_law() {
    // τ ≪ τ* so Σ_SFR ≈ 9.21e-6 Σ²
    let params = Os11Params::default();
    let ratio = os11(2.0, &params) / os11(1.0, &params);
    assert_relative_eq!(ratio, 4.0, max_relative = 1e-3);
}

#[test]
fn radiation_pressure_flattens_high_surface_density() {
    // τ ≫ τ* so Σ_SFR → 9.21e-6 τ*/(0.00209 κ) Σ, linear in Σ
    let params = Os11Params::default();
    let ratio = os11(2.0e8, &params) / os11(1.0e8, &params);
    assert_relative_eq!(ratio, 2.0, max_relative = 1e-3);
}

#[test]
fn higher_opacity_suppresses_star_formation() {
    let params = Os11Params::default();
    for &surf in &[1.0, 10.0, 1e3, 1e5] {
        let fiducial = os11(surf, &params);
        let opaque = os11(surf, &params.with_kap(2.0));
        assert!(opaque < fiducial, "surf = {surf}");
    }
}

#[test]
fn high_injection_preset() {
    let params = Os11Params::high_injection();
    assert_eq!(params.fp, 2.0);
    assert_eq!(params.with_fp(1.0), Os11Params::default());
    assert_relative_eq!(params.taustar(), 32.2);
    assert!(os11(10.0, &params) < os11(10.0, &Os11Params::default()));
}

#[test]
fn physical_units_normalize_to_fiducial() {
    let params = Os11Params::from_physical_units(0.0, 1.0, 3000.0, 6.2e-4, 10.0);
    assert_relative_eq!(params.vsnr, 1.0);
    assert_relative_eq!(params.epsstar, 1.0);
    assert_relative_eq!(params.kap, 1.0);

    let dusty = Os11Params::from_physical_units(0.0, 1.0, 3000.0, 6.2e-4, 5.0);
    assert_relative_eq!(dusty.kap, 0.5);
}

#[test]
fn zero_momentum_parameters_give_non_finite_results() {
    assert!(!os11(10.0, &Os11Params::default().with_fp(0.0)).is_finite());
    assert!(!os11(10.0, &Os11Params::default().with_vsnr(0.0)).is_finite());
}

#[test]
fn zero_radiation_efficiency_drops_radiation_term() {
    // τ* → ∞ removes the radiation-pressure denominator
    let params = Os11Params::default().with_epsstar(0.0);
    assert!(params.taustar().is_infinite());
    assert_relative_eq!(os11(10.0, &params), 9.21e-4, max_relative = 1e-12);
}

#[test]
fn strict_form_rejects_zero_denominators() {
    let params = Os11Params::default();
    assert_eq!(
        try_os11(10.0, &params.with_fp(0.0)),
        Err(DomainError::ZeroDenominator { name: "fp" })
    );
    assert_eq!(
        try_os11(10.0, &params.with_vsnr(0.0)),
        Err(DomainError::ZeroDenominator { name: "vsnr" })
    );
    assert_eq!(
        try_os11(10.0, &params.with_epsstar(0.0)),
        Err(DomainError::ZeroDenominator { name: "epsstar" })
    );
    assert!(matches!(
        try_os11(f64::NAN, &params),
        Err(DomainError::NonFinite { name: "surf", .. })
    ));
    assert_eq!(try_os11(10.0, &params), Ok(os11(10.0, &params)));
}

#[test]
fn array_form_matches_scalar_form() {
    let params = Os11Params::default().with_kap(1.5);
    let surf = array![[0.0, 1.0], [10.0, 1e3]];
    let sfr = os11_array(&surf, &params);

    assert_eq!(sfr.dim(), (2, 2));
    for (&s, &value) in surf.iter().zip(sfr.iter()) {
        assert_eq!(value, os11(s, &params));
    }
}

#[test]
fn parameter_line_format() {
    assert_eq!(
        Os11Params::default().to_string(),
        "chi=0, fp=1, vsnr=1, epsstar=1, kap=1"
    );
    assert_eq!(
        Os11Params::high_injection().with_kap(0.5).to_string(),
        "chi=0, fp=2, vsnr=1, epsstar=1, kap=0.5"
    );
}

#[test]
fn logging_does_not_change_result() {
    let params = Os11Params::default();
    let silent = os11(25.0, &params);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    let logged = tracing::subscriber::with_default(subscriber, || os11(25.0, &params));

    assert_eq!(silent, logged);
}

#[test]
fn missing_fields_take_defaults() {
    let params: Os11Params = serde_json::from_str(r#"{"fp": 2.0, "kap": 0.5}"#).unwrap();
    assert_eq!(params, Os11Params::default().with_fp(2.0).with_kap(0.5));

    let empty: Os11Params = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Os11Params::default());
}

proptest! {
    #[test]
    fn monotonic_in_surface_density(surf in 1e-3f64..1e6, step in 1e-3f64..1e3) {
        let params = Os11Params::default();
        prop_assert!(os11(surf + step, &params) > os11(surf, &params));
    }

    #[test]
    fn doubling_opacity_lowers_rate(surf in 1e-2f64..1e6, kap in 0.1f64..10.0) {
        let params = Os11Params::default().with_kap(kap);
        prop_assert!(os11(surf, &params.with_kap(2.0 * kap)) < os11(surf, &params));
    }
}
