//! Ostriker & Shetty (2011) turbulence-regulated star formation.
//!
//! In a disk where turbulent pressure from stellar feedback balances the
//! weight of the gas, the vertical momentum injected per unit stellar mass
//! fixes the star-formation rate. Supernova momentum and radiation pressure
//! (trapped IR photons once the disk becomes optically thick) set the yield:
//!
//! Σ_SFR = 9.21×10⁻⁶ (1 + χ) / (1 + τ/τ*) / (fp vsnr) Σ²   [M☉ yr⁻¹ kpc⁻²]
//!
//! with τ = 0.00209 κ Σ and τ* = 16.1 fp vsnr / ε*.
//!
//! # Stellar gravity
//!
//! χ is treated as a free parameter. Once stellar gravity dominates (χ > 1)
//! it is no longer independent of the gas: χ ∝ 1/Σ, and the law steepens
//! only linearly, Σ_SFR ∝ Σ, rather than Σ². The formula here does not
//! model that regime.
//!
//! # References
//! - Ostriker & Shetty (2011) - "Maximally star-forming galactic disks"

use std::fmt;

use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_non_zero, Result};
use crate::theory::constants::{
    EPSSTAR_UNIT, KAPPA_UNIT_CGS, OS11_SFR_COEFF, OS11_TAUSTAR_COEFF, OS11_TAU_PER_SURF,
    VSNR_UNIT_KMS,
};

/// Dimensionless parameters of the OS11 model.
///
/// None of the fields are validated by [`os11`]; use [`try_os11`] for a
/// checked evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Os11Params {
    /// Stellar gravity parameter χ
    pub chi: f64,
    /// Momentum injection efficiency (physically 1~2)
    pub fp: f64,
    /// Radial momentum per unit stellar mass, in units of 3000 km/s
    pub vsnr: f64,
    /// Mass-to-radiation energy conversion efficiency, in units of 6.2×10⁻⁴
    pub epsstar: f64,
    /// IR opacity, in units of 10 cm²/g
    pub kap: f64,
}

impl Default for Os11Params {
    fn default() -> Self {
        Self {
            chi: 0.0,
            fp: 1.0,
            vsnr: 1.0,
            epsstar: 1.0,
            kap: 1.0,
        }
    }
}

impl Os11Params {
    /// Fiducial parameters with doubled momentum injection (fp = 2), the
    /// upper end of the range allowed by cooling-limited turbulence.
    pub fn high_injection() -> Self {
        Self {
            fp: 2.0,
            ..Self::default()
        }
    }

    /// Build parameters from dimensional quantities: momentum per stellar
    /// mass in km/s, the absolute conversion efficiency, and the IR opacity
    /// in cm²/g.
    pub fn from_physical_units(
        chi: f64,
        fp: f64,
        momentum_kms: f64,
        epsilon: f64,
        kappa_cgs: f64,
    ) -> Self {
        Self {
            chi,
            fp,
            vsnr: momentum_kms / VSNR_UNIT_KMS,
            epsstar: epsilon / EPSSTAR_UNIT,
            kap: kappa_cgs / KAPPA_UNIT_CGS,
        }
    }

    /// Replace the stellar gravity parameter χ (dimensionless).
    pub fn with_chi(self, chi: f64) -> Self {
        Self { chi, ..self }
    }

    /// Replace the momentum injection efficiency fp (dimensionless).
    pub fn with_fp(self, fp: f64) -> Self {
        Self { fp, ..self }
    }

    /// Replace the momentum per stellar mass, in units of 3000 km/s.
    pub fn with_vsnr(self, vsnr: f64) -> Self {
        Self { vsnr, ..self }
    }

    /// Replace the radiation conversion efficiency, in units of 6.2×10⁻⁴.
    pub fn with_epsstar(self, epsstar: f64) -> Self {
        Self { epsstar, ..self }
    }

    /// Replace the IR opacity, in units of 10 cm²/g.
    pub fn with_kap(self, kap: f64) -> Self {
        Self { kap, ..self }
    }

    /// Critical IR optical depth τ* above which radiation pressure on
    /// trapped IR photons outweighs supernova momentum.
    pub fn taustar(&self) -> f64 {
        OS11_TAUSTAR_COEFF * self.fp * self.vsnr / self.epsstar
    }

    /// IR optical depth τ of a disk with gas surface density `surf` (M☉/pc²).
    pub fn ir_optical_depth(&self, surf: f64) -> f64 {
        OS11_TAU_PER_SURF * self.kap * surf
    }

    /// Star-formation-rate surface density (M☉ yr⁻¹ kpc⁻²) for gas surface
    /// density `surf` (M☉/pc²). No logging, no checks.
    pub fn sfr_surface_density(&self, surf: f64) -> f64 {
        let taustar = self.taustar();
        let tau = self.ir_optical_depth(surf);
        OS11_SFR_COEFF * (1.0 + self.chi) / (1.0 + tau / taustar) / self.fp / self.vsnr
            * surf.powi(2)
    }
}

impl fmt::Display for Os11Params {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "chi={}, fp={}, vsnr={}, epsstar={}, kap={}",
            self.chi, self.fp, self.vsnr, self.epsstar, self.kap
        )
    }
}

fn log_parameters(params: &Os11Params) {
    tracing::debug!(
        chi = params.chi,
        fp = params.fp,
        vsnr = params.vsnr,
        epsstar = params.epsstar,
        kap = params.kap,
        "{params}"
    );
}

/// OS11 star-formation-rate surface density in M☉ yr⁻¹ kpc⁻².
///
/// `surf` is the gas surface density in M☉/pc². Zero `fp`, `vsnr` or
/// `epsstar` propagate as non-finite results.
///
/// Emits the parameter set as a `debug` event before computing.
pub fn os11(surf: f64, params: &Os11Params) -> f64 {
    log_parameters(params);
    params.sfr_surface_density(surf)
}

/// Elementwise [`os11`]; the parameters are logged once per call.
pub fn os11_array<S, D>(surf: &ArrayBase<S, D>, params: &Os11Params) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    log_parameters(params);
    surf.mapv(|s| params.sfr_surface_density(s))
}

/// Checked [`os11`]: rejects a non-finite `surf` or parameter and zero
/// `fp`, `vsnr` or `epsstar`. On valid input the result equals [`os11`].
pub fn try_os11(surf: f64, params: &Os11Params) -> Result<f64> {
    require_finite("surf", surf)?;
    require_finite("chi", params.chi)?;
    require_finite("kap", params.kap)?;
    require_non_zero("fp", params.fp)?;
    require_non_zero("vsnr", params.vsnr)?;
    require_non_zero("epsstar", params.epsstar)?;
    Ok(os11(surf, params))
}
