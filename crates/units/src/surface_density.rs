use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{PARSEC_CM, SOLAR_MASS_G};

/// Grams per square centimeter in one M☉/pc²
const G_CM2_PER_MSUN_PC2: f64 = SOLAR_MASS_G / (PARSEC_CM * PARSEC_CM);

/// Gas surface density of a galactic disk.
///
/// The base unit is solar masses per square parsec, the convention used by
/// the Kennicutt-Schmidt literature and by analytic star-formation theories.
/// Typical values:
/// - Σ_gas ~ 10 M☉/pc² in the solar neighbourhood
/// - Σ_gas ~ 100-1000 M☉/pc² in starburst nuclei
///
/// # Examples
///
/// ```rust
/// use units::GasSurfaceDensity;
///
/// let solar_circle = GasSurfaceDensity::from_solar_masses_per_pc2(10.0);
/// let cgs = solar_circle.to_grams_per_cm2();
/// assert!(cgs > 2.0e-3 && cgs < 2.2e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GasSurfaceDensity(f64); // Base unit: M☉/pc²

impl GasSurfaceDensity {
    /// Creates a zero surface density value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `GasSurfaceDensity` from solar masses per square parsec.
    ///
    /// # Arguments
    ///
    /// * `value` - The surface density in M☉/pc²
    pub fn from_solar_masses_per_pc2(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `GasSurfaceDensity` from grams per square centimeter.
    ///
    /// 1 M☉/pc² ≈ 2.09 × 10⁻⁴ g/cm²
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::GasSurfaceDensity;
    ///
    /// let sigma = GasSurfaceDensity::from_grams_per_cm2(0.1);
    /// assert!(sigma.to_solar_masses_per_pc2() > 470.0);
    /// ```
    pub fn from_grams_per_cm2(value: f64) -> Self {
        Self(value / G_CM2_PER_MSUN_PC2)
    }

    /// Creates a new `GasSurfaceDensity` from kilograms per square meter.
    pub fn from_kg_per_m2(value: f64) -> Self {
        // 1 kg/m² = 0.1 g/cm²
        Self::from_grams_per_cm2(value * 0.1)
    }

    /// Returns the surface density in M☉/pc².
    pub fn to_solar_masses_per_pc2(&self) -> f64 {
        self.0
    }

    /// Converts the surface density to g/cm².
    pub fn to_grams_per_cm2(&self) -> f64 {
        self.0 * G_CM2_PER_MSUN_PC2
    }

    /// Converts the surface density to kg/m².
    pub fn to_kg_per_m2(&self) -> f64 {
        self.to_grams_per_cm2() * 10.0
    }

    /// Raise to integer power (in M☉/pc² units)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for GasSurfaceDensity {
    type Output = GasSurfaceDensity;

    fn add(self, rhs: GasSurfaceDensity) -> GasSurfaceDensity {
        GasSurfaceDensity(self.0 + rhs.0)
    }
}

impl Sub for GasSurfaceDensity {
    type Output = GasSurfaceDensity;

    fn sub(self, rhs: GasSurfaceDensity) -> GasSurfaceDensity {
        GasSurfaceDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for GasSurfaceDensity {
    type Output = GasSurfaceDensity;

    fn mul(self, rhs: f64) -> GasSurfaceDensity {
        GasSurfaceDensity(self.0 * rhs)
    }
}

impl Div<f64> for GasSurfaceDensity {
    type Output = GasSurfaceDensity;

    fn div(self, rhs: f64) -> GasSurfaceDensity {
        GasSurfaceDensity(self.0 / rhs)
    }
}

/// Division of GasSurfaceDensity by GasSurfaceDensity returns a ratio
impl Div for GasSurfaceDensity {
    type Output = f64;

    fn div(self, rhs: GasSurfaceDensity) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * GasSurfaceDensity (commutative multiplication)
impl Mul<GasSurfaceDensity> for f64 {
    type Output = GasSurfaceDensity;

    fn mul(self, rhs: GasSurfaceDensity) -> GasSurfaceDensity {
        rhs * self
    }
}
