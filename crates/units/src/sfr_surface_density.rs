use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{PARSEC_CM, PC2_PER_KPC2, SOLAR_MASS_G, YEAR_S};
use crate::surface_density::GasSurfaceDensity;

/// Star-formation-rate surface density: mass turned into stars per unit time
/// per unit projected disk area.
///
/// The base unit is solar masses per year per square kiloparsec, as in
/// observed Kennicutt-Schmidt relations.
///
/// # Examples
///
/// ```rust
/// use units::{GasSurfaceDensity, SfrSurfaceDensity};
///
/// let sfr = SfrSurfaceDensity::from_solar_masses_per_yr_kpc2(3.0e-3);
/// let gas = GasSurfaceDensity::from_solar_masses_per_pc2(10.0);
///
/// // 10 M☉/pc² = 1e7 M☉/kpc², so t_dep = 1e7 / 3e-3 yr ≈ 3.3 Gyr
/// let t_dep = sfr.depletion_time_years(gas);
/// assert!(t_dep > 3.0e9 && t_dep < 3.5e9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct SfrSurfaceDensity(f64); // Base unit: M☉/yr/kpc²

impl SfrSurfaceDensity {
    /// Creates a zero star-formation rate
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `SfrSurfaceDensity` from M☉ yr⁻¹ kpc⁻².
    ///
    /// # Arguments
    ///
    /// * `value` - The star-formation-rate surface density in M☉/yr/kpc²
    pub fn from_solar_masses_per_yr_kpc2(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `SfrSurfaceDensity` from M☉ yr⁻¹ pc⁻².
    pub fn from_solar_masses_per_yr_pc2(value: f64) -> Self {
        Self(value * PC2_PER_KPC2)
    }

    /// Returns the rate in M☉/yr/kpc².
    pub fn to_solar_masses_per_yr_kpc2(&self) -> f64 {
        self.0
    }

    /// Converts the rate to M☉/yr/pc².
    pub fn to_solar_masses_per_yr_pc2(&self) -> f64 {
        self.0 / PC2_PER_KPC2
    }

    /// Converts the rate to CGS, g s⁻¹ cm⁻².
    pub fn to_grams_per_s_cm2(&self) -> f64 {
        self.to_solar_masses_per_yr_pc2() * SOLAR_MASS_G / YEAR_S / (PARSEC_CM * PARSEC_CM)
    }

    /// Gas depletion time t_dep = Σ_gas / Σ_SFR in years.
    ///
    /// Infinite when the star-formation rate is zero.
    pub fn depletion_time_years(&self, gas: GasSurfaceDensity) -> f64 {
        gas.to_solar_masses_per_pc2() / self.to_solar_masses_per_yr_pc2()
    }
}

impl Add for SfrSurfaceDensity {
    type Output = SfrSurfaceDensity;

    fn add(self, rhs: SfrSurfaceDensity) -> SfrSurfaceDensity {
        SfrSurfaceDensity(self.0 + rhs.0)
    }
}

impl Sub for SfrSurfaceDensity {
    type Output = SfrSurfaceDensity;

    fn sub(self, rhs: SfrSurfaceDensity) -> SfrSurfaceDensity {
        SfrSurfaceDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for SfrSurfaceDensity {
    type Output = SfrSurfaceDensity;

    fn mul(self, rhs: f64) -> SfrSurfaceDensity {
        SfrSurfaceDensity(self.0 * rhs)
    }
}

impl Div<f64> for SfrSurfaceDensity {
    type Output = SfrSurfaceDensity;

    fn div(self, rhs: f64) -> SfrSurfaceDensity {
        SfrSurfaceDensity(self.0 / rhs)
    }
}

/// Ratio of two star-formation rates
impl Div for SfrSurfaceDensity {
    type Output = f64;

    fn div(self, rhs: SfrSurfaceDensity) -> f64 {
        self.0 / rhs.0
    }
}
