use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, DomainError, Result};
use crate::special::{e2, one_minus_e2, EULER_GAMMA};

/// Attenuation factor at optical depth `tau` inside a slab of thickness
/// `tauperp`:
///
/// f = (1 − ½E₂(½τ⊥ + τ) − ½E₂(½τ⊥ − τ)) / τ⊥
///
/// `tau` is measured from the midplane and should satisfy |τ| < τ⊥/2.
/// No checks are made: τ⊥ = 0 yields a non-finite value and a `tau` outside
/// the slab yields NaN. See [`try_ftau`] for the checked form.
pub fn ftau(tauperp: f64, tau: f64) -> f64 {
    let upper = 0.5 * tauperp + tau;
    let lower = 0.5 * tauperp - tau;
    if upper <= 1.0 && lower <= 1.0 {
        // Thin slab: both E₂ terms are close to 1
        return 0.5 * (one_minus_e2(upper) + one_minus_e2(lower)) / tauperp;
    }
    (1.0 - 0.5 * e2(upper) - 0.5 * e2(lower)) / tauperp
}

/// [`ftau`] evaluated at the midplane (τ = 0).
pub fn ftau_midplane(tauperp: f64) -> f64 {
    ftau(tauperp, 0.0)
}

/// Optically thin limit of the midplane factor, τ⊥ ≪ 1:
///
/// f ≈ ½(1 − γ − ln(½τ⊥))
///
/// Diverges logarithmically as τ⊥ → 0.
pub fn ftau_thin(tauperp: f64) -> f64 {
    0.5 * (1.0 - EULER_GAMMA - (0.5 * tauperp).ln())
}

/// Optically thick limit of the midplane factor, τ⊥ ≫ 1: f ≈ 1/τ⊥.
pub fn ftau_thick(tauperp: f64) -> f64 {
    1.0 / tauperp
}

/// Elementwise [`ftau`] over an array of slab thicknesses at a single depth.
pub fn ftau_array<S, D>(tauperp: &ArrayBase<S, D>, tau: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    tauperp.mapv(|t| ftau(t, tau))
}

/// Elementwise [`ftau`] over matching arrays of thicknesses and depths.
///
/// # Panics
/// If the two arrays differ in shape.
pub fn ftau_zip<S1, S2, D>(tauperp: &ArrayBase<S1, D>, tau: &ArrayBase<S2, D>) -> Array<f64, D>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    Zip::from(tauperp)
        .and(tau)
        .map_collect(|&thickness, &depth| ftau(thickness, depth))
}

/// Elementwise [`ftau_thin`].
pub fn ftau_thin_array<S, D>(tauperp: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    tauperp.mapv(ftau_thin)
}

/// Elementwise [`ftau_thick`].
pub fn ftau_thick_array<S, D>(tauperp: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    tauperp.mapv(ftau_thick)
}

fn check_thickness(tauperp: f64) -> Result<f64> {
    let tauperp = require_finite("tauperp", tauperp)?;
    if tauperp <= 0.0 {
        return Err(DomainError::NonPositiveThickness(tauperp));
    }
    Ok(tauperp)
}

/// Checked [`ftau`]: requires a finite τ⊥ > 0 and |τ| < τ⊥/2.
///
/// On valid input the result is identical to [`ftau`].
pub fn try_ftau(tauperp: f64, tau: f64) -> Result<f64> {
    let tauperp = check_thickness(tauperp)?;
    let tau = require_finite("tau", tau)?;
    let half_thickness = 0.5 * tauperp;
    if tau.abs() >= half_thickness {
        return Err(DomainError::DepthOutsideSlab {
            tau,
            half_thickness,
        });
    }
    Ok(ftau(tauperp, tau))
}

/// Checked [`ftau_thin`]: requires a finite τ⊥ > 0.
pub fn try_ftau_thin(tauperp: f64) -> Result<f64> {
    check_thickness(tauperp).map(ftau_thin)
}

/// Checked [`ftau_thick`]: requires a finite τ⊥ > 0.
pub fn try_ftau_thick(tauperp: f64) -> Result<f64> {
    check_thickness(tauperp).map(ftau_thick)
}

/// Which form of the midplane attenuation factor to evaluate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpticalRegime {
    /// Full exponential-integral expression
    #[default]
    Exact,

    /// τ⊥ ≪ 1 expansion
    Thin,

    /// τ⊥ ≫ 1 expansion
    Thick,
}

impl OpticalRegime {
    /// Evaluate the midplane attenuation factor in this regime.
    pub fn evaluate(&self, tauperp: f64) -> f64 {
        match self {
            Self::Exact => ftau_midplane(tauperp),
            Self::Thin => ftau_thin(tauperp),
            Self::Thick => ftau_thick(tauperp),
        }
    }

    /// Elementwise [`OpticalRegime::evaluate`].
    pub fn evaluate_array<S, D>(&self, tauperp: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        tauperp.mapv(|t| self.evaluate(t))
    }
}
