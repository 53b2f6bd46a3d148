use super::config::SystemInputs;
use crate::core::constants::VACUUM_PERMITTIVITY;
use crate::core::numerics::hyperbolics;
use crate::core::params::ModelParameters;
use serde::Serialize;

/// Gibbs free energy of interaction (mJ/m²) at the contact separation h0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GibbsEnergyBreakdown {
    pub lw: f64,
    pub ab: f64,
    pub el: f64,
    /// Free energy of adhesion, `lw + ab`.
    pub adh: f64,
    pub tot: f64,
}

impl GibbsEnergyBreakdown {
    pub fn new(lw: f64, ab: f64, el: f64) -> Self {
        let adh = lw + ab;
        Self {
            lw,
            ab,
            el,
            adh,
            tot: adh + el,
        }
    }

    /// A negative adhesion energy means the foulant is drawn onto the membrane in water.
    pub fn is_attractive(&self) -> bool {
        self.adh < 0.0
    }
}

/// Computes ΔG between the membrane and foulant across water at `params.min_separation`.
///
/// The water reference components come from `params.liquids.water`, so custom liquid sets
/// shift the result accordingly.
pub fn delta_g(inputs: &SystemInputs, params: &ModelParameters) -> GibbsEnergyBreakdown {
    let water = &params.liquids.water;
    let m = &inputs.membrane.energy;
    let f = &inputs.foulant.energy;

    let w_lw = water.lw.sqrt();
    let w_minus = water.minus.sqrt();

    let lw = -2.0 * (m.lw.sqrt() - w_lw) * (f.lw.sqrt() - w_lw);

    let ab = 2.0 * w_minus * (f.minus.sqrt() + m.minus.sqrt() - w_minus)
        + 2.0 * w_minus * (f.plus.sqrt() + m.plus.sqrt() - w_minus)
        - 2.0 * (f.minus * m.plus).sqrt()
        - 2.0 * (f.plus * m.minus).sqrt();

    let el = electrostatic_free_energy(inputs, params.min_separation);

    GibbsEnergyBreakdown::new(lw, ab, el)
}

fn electrostatic_free_energy(inputs: &SystemInputs, h0: f64) -> f64 {
    let kappa = inputs.kappa();
    let eps_r = inputs.relative_permittivity();
    let zm = inputs.membrane.zeta_potential;
    let zf = inputs.foulant.zeta_potential;

    let hyp = hyperbolics(kappa * h0);
    let zeta_sum_sq = zm * zm + zf * zf;

    // Expanded so that two uncharged surfaces give zero rather than 0/0.
    (kappa * VACUUM_PERMITTIVITY * eps_r / 2.0)
        * (zeta_sum_sq * (1.0 - hyp.coth) + 2.0 * zm * zf * hyp.csch)
        * 1e6
}
