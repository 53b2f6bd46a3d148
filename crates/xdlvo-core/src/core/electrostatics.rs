use super::constants::{AVOGADRO, BOLTZMANN, ELEMENTARY_CHARGE, VACUUM_PERMITTIVITY, ZERO_CELSIUS};

/// Relative permittivity of water at `temperature` (K).
///
/// Cubic fit in degrees Celsius, valid roughly between 0 and 100 °C. The range is not checked.
pub fn water_dielectric(temperature: f64) -> f64 {
    let dt = temperature - ZERO_CELSIUS;
    87.740 - 0.40008 * dt + 9.398e-4 * dt * dt - 1.410e-6 * dt * dt * dt
}

/// Debye parameter κ (nm⁻¹) of a symmetric electrolyte; [`screening_length`] gives 1/κ.
///
/// `ionic_strength` is in mol/L and `temperature` in K.
pub fn debye_length(ionic_strength: f64, temperature: f64) -> f64 {
    let eps_r = water_dielectric(temperature);
    let ionic_strength_si = ionic_strength * 1000.0; // mol/L -> mol/m³

    let kappa_per_m = (2.0 * AVOGADRO * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE * ionic_strength_si
        / (eps_r * VACUUM_PERMITTIVITY * BOLTZMANN * temperature))
        .sqrt();

    kappa_per_m * 1e-9
}

/// Screening distance 1/κ (nm), the reciprocal of [`debye_length`].
pub fn screening_length(ionic_strength: f64, temperature: f64) -> f64 {
    1.0 / debye_length(ionic_strength, temperature)
}
