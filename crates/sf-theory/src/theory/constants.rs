//! Normalizations of the Ostriker & Shetty (2011) relation, in the units
//! the parameters are expressed in.

/// Σ_SFR coefficient (M☉ yr⁻¹ kpc⁻² per (M☉ pc⁻²)²)
pub const OS11_SFR_COEFF: f64 = 9.21e-6;

/// Critical IR optical depth τ* for fp = vsnr = epsstar = 1
pub const OS11_TAUSTAR_COEFF: f64 = 16.1;

/// IR optical depth per M☉ pc⁻² for κ = 10 cm² g⁻¹
pub const OS11_TAU_PER_SURF: f64 = 0.00209;

/// Unit of `vsnr`: p*/m* = 3000 km s⁻¹
pub const VSNR_UNIT_KMS: f64 = 3000.0;

/// Unit of `epsstar`
pub const EPSSTAR_UNIT: f64 = 6.2e-4;

/// Unit of `kap` (cm² g⁻¹)
pub const KAPPA_UNIT_CGS: f64 = 10.0;
