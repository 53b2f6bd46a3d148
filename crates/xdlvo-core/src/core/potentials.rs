use super::constants::VACUUM_PERMITTIVITY;
use std::f64::consts::PI;

const DEGENERATE_DENOMINATOR: f64 = 1e-10;

#[inline]
pub fn lifshitz_van_der_waals(dist: f64, delta_g_lw: f64, h0: f64, radius: f64) -> f64 {
    2.0 * PI * delta_g_lw * h0 * h0 * radius * 1e-6 / dist
}

#[inline]
pub fn acid_base(dist: f64, delta_g_ab: f64, h0: f64, decay_length: f64, radius: f64) -> f64 {
    2.0 * PI * radius * decay_length * delta_g_ab * ((h0 - dist) / decay_length).exp() * 1e-3
}

/// Sphere–plate double-layer energy, or `None` where `1 - exp(-κh)` vanishes.
#[inline]
pub fn electrical_double_layer(
    dist: f64,
    kappa: f64,
    eps_r: f64,
    radius: f64,
    zeta_m: f64,
    zeta_f: f64,
) -> Option<f64> {
    let exp_kh = (-kappa * dist).exp();
    let exp_2kh = (-2.0 * kappa * dist).exp();
    let denom = 1.0 - exp_kh;
    if denom.abs() < DEGENERATE_DENOMINATOR {
        return None;
    }

    let prefactor = PI * eps_r * VACUUM_PERMITTIVITY * radius;
    let zeta_prod = 2.0 * zeta_m * zeta_f;
    let zeta_sum_sq = zeta_m * zeta_m + zeta_f * zeta_f;

    let term1 = ((1.0 + exp_kh) / denom).ln();
    let term2 = (1.0 - exp_2kh).ln();
    Some(prefactor * 0.5 * (zeta_prod * term1 + zeta_sum_sq * term2) * 1e4)
}
