//! Physical constants (SI, exact CODATA 2018 values).

/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Vacuum permittivity (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// Avogadro constant (1/mol).
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// 0 °C expressed in kelvin.
pub const ZERO_CELSIUS: f64 = 273.15;
