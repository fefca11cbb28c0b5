//! Kennicutt-Schmidt relation from the OS11 model
//!
//! Tabulates Σ_SFR and the gas depletion time over four decades of gas
//! surface density, alongside the midplane FUV attenuation factor for a
//! slab whose dust optical depth scales with the gas.
//!
//! Run with: RUST_LOG=debug cargo run --package sf-theory --example ks_relation

use ndarray::{Array1, Zip};
use sf_theory::{ftau_array, Os11Params, StarFormationTheory};
use tracing_subscriber::EnvFilter;
use units::GasSurfaceDensity;

/// FUV dust optical depth per M☉/pc² at solar metallicity
const TAU_FUV_PER_SURF: f64 = 0.0235;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theory = StarFormationTheory::Os11(Os11Params::default());
    let surf = Array1::logspace(10.0, 0.0, 4.0, 9);
    let sfr = theory.sfr_array(&surf);
    let fuv = ftau_array(&(&surf * TAU_FUV_PER_SURF), 0.0);

    println!("OS11 star formation ({})\n", theory.name());
    println!(
        "{:>12} {:>14} {:>12} {:>10}",
        "Σ_gas", "Σ_SFR", "t_dep [Gyr]", "f(τ⊥)"
    );
    println!("{}", "=".repeat(52));

    Zip::from(&surf)
        .and(&sfr)
        .and(&fuv)
        .for_each(|&sigma, &sigma_sfr, &f| {
            let gas = GasSurfaceDensity::from_solar_masses_per_pc2(sigma);
            let t_dep = theory.depletion_time_years(gas) / 1e9;
            println!(
                "{:>12.2e} {:>14.4e} {:>12.3} {:>10.4}",
                sigma, sigma_sfr, t_dep, f
            );
        });
}
