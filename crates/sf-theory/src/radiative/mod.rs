//! FUV attenuation through a plane-parallel slab.
//!
//! A uniform slab of total optical thickness τ⊥ with sources distributed
//! evenly through it. The mean intensity at optical depth τ (measured from
//! the midplane) relative to the unattenuated value is f(τ⊥, τ).
//!
//! # References
//! - Ostriker, McKee & Leroy (2010) - "Regulation of star formation rates in
//!   multiphase galactic disks"

mod ftau;


pub use ftau::{
    ftau, ftau_array, ftau_midplane, ftau_thick, ftau_thick_array, ftau_thin, ftau_thin_array,
    ftau_zip, try_ftau, try_ftau_thick, try_ftau_thin, OpticalRegime,
};
