pub mod constants;
pub mod sfr_surface_density;
pub mod surface_density;


pub use constants::{PARSEC_CM, SOLAR_MASS_G, YEAR_S};
pub use sfr_surface_density::SfrSurfaceDensity;
pub use surface_density::GasSurfaceDensity;
