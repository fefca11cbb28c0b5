//! Errors raised by the strict (`try_*`) evaluation entry points.
//!
//! The plain functions never fail: bad inputs propagate as infinities or
//! NaN the way IEEE arithmetic dictates. The strict variants check the
//! physical domain first and report which quantity was out of range.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("slab optical thickness must be positive, got tauperp = {0}")]
    NonPositiveThickness(f64),

    #[error("optical depth tau = {tau} lies outside the slab (|tau| < {half_thickness})")]
    DepthOutsideSlab { tau: f64, half_thickness: f64 },

    #[error("parameter {name} must be non-zero")]
    ZeroDenominator { name: &'static str },

    #[error("parameter {name} is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Reject NaN and infinities.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { name, value })
    }
}

/// Reject values that would end up in a denominator.
pub(crate) fn require_non_zero(name: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(name, value)?;
    if value == 0.0 {
        Err(DomainError::ZeroDenominator { name })
    } else {
        Ok(value)
    }
}
