//! Closed-form star-formation theory toolbox.
//!
//! Two independent pieces:
//!
//! - [`radiative`]: the attenuation factor f(τ) of FUV radiation in a
//!   plane-parallel slab, exactly and in its optically thin/thick limits.
//! - [`theory`]: analytic laws connecting gas surface density to
//!   star-formation-rate surface density, currently Ostriker & Shetty (2011).
//!
//! Every function is pure. Each scalar entry point has an `ndarray`
//! counterpart evaluating elementwise, and a `try_*` counterpart that
//! checks the physical domain and returns [`DomainError`] instead of a
//! non-finite value.
//!
//! ```rust
//! use sf_theory::{ftau_midplane, ftau_thick, os11, Os11Params};
//!
//! let f = ftau_midplane(1.0e4);
//! assert!((f - ftau_thick(1.0e4)).abs() < 1.0e-8);
//!
//! let sfr = os11(10.0, &Os11Params::default());
//! assert!((sfr - 9.198e-4).abs() < 1.0e-7);
//! ```

pub mod error;
pub mod radiative;
pub mod special;
pub mod theory;

pub use error::{DomainError, Result};
pub use radiative::{
    ftau, ftau_array, ftau_midplane, ftau_thick, ftau_thick_array, ftau_thin, ftau_thin_array,
    ftau_zip, try_ftau, try_ftau_thick, try_ftau_thin, OpticalRegime,
};
pub use special::{e1, e2, expn, EULER_GAMMA};
pub use theory::{os11, os11_array, try_os11, Os11Params, StarFormationTheory};
