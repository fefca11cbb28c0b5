use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use units::{GasSurfaceDensity, SfrSurfaceDensity};

use crate::error::Result;
use crate::theory::os11::{os11, os11_array, try_os11, Os11Params};

/// Global star-formation theory relating gas surface density to
/// star-formation-rate surface density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StarFormationTheory {
    /// Ostriker & Shetty (2011) turbulence-regulated, feedback-limited model
    Os11(Os11Params),
}

impl Default for StarFormationTheory {
    fn default() -> Self {
        Self::Os11(Os11Params::default())
    }
}

impl StarFormationTheory {
    /// Short identifier of the theory.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Os11(_) => "os11",
        }
    }

    /// Σ_SFR in M☉ yr⁻¹ kpc⁻² for gas surface density `surf` in M☉/pc².
    pub fn sfr_surface_density(&self, surf: f64) -> f64 {
        match self {
            Self::Os11(params) => os11(surf, params),
        }
    }

    /// Elementwise [`StarFormationTheory::sfr_surface_density`].
    pub fn sfr_array<S, D>(&self, surf: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        match self {
            Self::Os11(params) => os11_array(surf, params),
        }
    }

    /// Checked evaluation; see [`try_os11`].
    pub fn try_sfr_surface_density(&self, surf: f64) -> Result<f64> {
        match self {
            Self::Os11(params) => try_os11(surf, params),
        }
    }

    /// Typed form of [`StarFormationTheory::sfr_surface_density`].
    pub fn sfr(&self, gas: GasSurfaceDensity) -> SfrSurfaceDensity {
        let surf = gas.to_solar_masses_per_pc2();
        SfrSurfaceDensity::from_solar_masses_per_yr_kpc2(self.sfr_surface_density(surf))
    }

    /// Gas depletion time Σ_gas / Σ_SFR in years.
    pub fn depletion_time_years(&self, gas: GasSurfaceDensity) -> f64 {
        self.sfr(gas).depletion_time_years(gas)
    }
}
