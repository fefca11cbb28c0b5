//! Special functions needed by the radiative-transfer factors.

mod expint;


pub(crate) use expint::one_minus_e2;
pub use expint::{e1, e2, expn, EULER_GAMMA};
