/// Solar mass in grams
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// One parsec in centimeters
pub const PARSEC_CM: f64 = 3.085_677_581e18;

/// One Julian year in seconds
pub const YEAR_S: f64 = 3.155_76e7;

/// Square parsecs per square kiloparsec
pub const PC2_PER_KPC2: f64 = 1.0e6;
