//! Analytic star-formation laws.

pub mod constants;
mod model;
mod os11;

#[cfg(test)]
mod os11_test;

pub use model::StarFormationTheory;
pub use os11::{os11, os11_array, try_os11, Os11Params};
