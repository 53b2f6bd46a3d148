use super::config::SystemInputs;
use super::free_energy::GibbsEnergyBreakdown;
use crate::core::numerics::{energy_at_distance, interpolate_at};
use crate::core::params::ModelParameters;
use crate::core::potentials::{acid_base, electrical_double_layer, lifshitz_van_der_waals};

/// Sampling tolerance (nm) used by [`EnergyProfile::total_at`].
pub const DEFAULT_DISTANCE_TOLERANCE: f64 = 0.05;

/// Interaction energy (kT) of each component, index-aligned with the distance grid `h` (nm).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyProfile {
    pub h: Vec<f64>,
    pub lw: Vec<f64>,
    pub ab: Vec<f64>,
    pub el: Vec<f64>,
    pub total: Vec<f64>,
}

impl EnergyProfile {
    pub fn len(&self) -> usize {
        self.h.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h.is_empty()
    }

    /// Total energy at the grid point nearest `distance`, if one lies within `tolerance`.
    pub fn total_at(&self, distance: f64, tolerance: f64) -> Option<f64> {
        energy_at_distance(&self.h, &self.total, distance, tolerance)
    }

    /// Total energy linearly interpolated between grid points.
    pub fn interpolate_total(&self, distance: f64) -> Option<f64> {
        interpolate_at(&self.h, &self.total, distance)
    }
}

/// Distance grid (nm) on which profiles are evaluated.
pub fn distance_array(params: &ModelParameters) -> Vec<f64> {
    params.grid.points()
}

/// Evaluates U_LW, U_AB, U_EL and their sum on the distance grid.
///
/// Where the double-layer expression degenerates (`1 - exp(-κh)` vanishes), U_EL is recorded
/// as zero and the total falls back to U_LW + U_AB.
pub fn interaction_energy(
    inputs: &SystemInputs,
    delta_g: &GibbsEnergyBreakdown,
    params: &ModelParameters,
) -> EnergyProfile {
    let h = distance_array(params);
    let n = h.len();
    let h0 = params.min_separation;
    let radius = inputs.foulant_radius;
    let kappa = inputs.kappa();
    let eps_r = inputs.relative_permittivity();
    let zeta_m = inputs.membrane.zeta_potential;
    let zeta_f = inputs.foulant.zeta_potential;

    let mut profile = EnergyProfile {
        h: Vec::with_capacity(n),
        lw: Vec::with_capacity(n),
        ab: Vec::with_capacity(n),
        el: Vec::with_capacity(n),
        total: Vec::with_capacity(n),
    };

    for d in h {
        let u_lw = lifshitz_van_der_waals(d, delta_g.lw, h0, radius);
        let u_ab = acid_base(d, delta_g.ab, h0, params.decay_length, radius);
        let (u_el, u_tot) = match electrical_double_layer(d, kappa, eps_r, radius, zeta_m, zeta_f)
        {
            Some(u_el) => (u_el, u_lw + u_ab + u_el),
            None => (0.0, u_lw + u_ab),
        };

        profile.h.push(d);
        profile.lw.push(u_lw);
        profile.ab.push(u_ab);
        profile.el.push(u_el);
        profile.total.push(u_tot);
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::DistanceGrid;
    use crate::core::surface::SurfaceEnergy;
    use crate::engine::config::SurfaceProperties;
    use crate::engine::free_energy::delta_g;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn system(ionic_strength: f64) -> SystemInputs {
        SystemInputs {
            membrane: SurfaceProperties {
                energy: SurfaceEnergy::new(40.0, 0.5, 30.0),
                zeta_potential: -32.4,
            },
            foulant: SurfaceProperties {
                energy: SurfaceEnergy::new(35.0, 1.0, 25.0),
                zeta_potential: -7.5,
            },
            foulant_radius: 322.9,
            ionic_strength,
            temperature: 298.0,
        }
    }

    fn reference_profile() -> EnergyProfile {
        let params = ModelParameters::default();
        let inputs = system(0.01);
        let dg = delta_g(&inputs, &params);
        interaction_energy(&inputs, &dg, &params)
    }

    #[test]
    fn distance_array_spans_the_default_grid() {
        let h = distance_array(&ModelParameters::default());
        assert!(f64_approx_equal(h[0], 0.15));
        let last = *h.last().unwrap();
        assert!((25.0 - last).abs() <= 0.05);
        assert!(h.windows(2).all(|w| w[1] > w[0]));
        assert!((h.len() as i64 - 499).abs() <= 1);
    }

    #[test]
    fn distance_array_is_restartable() {
        let params = ModelParameters::default();
        assert_eq!(distance_array(&params), distance_array(&params));
    }

    #[test]
    fn all_series_are_index_aligned() {
        let profile = reference_profile();
        let n = distance_array(&ModelParameters::default()).len();
        assert_eq!(profile.len(), n);
        assert_eq!(profile.lw.len(), n);
        assert_eq!(profile.ab.len(), n);
        assert_eq!(profile.el.len(), n);
        assert_eq!(profile.total.len(), n);
    }

    #[test]
    fn total_is_the_sum_of_components() {
        let profile = reference_profile();
        for i in 0..profile.len() {
            let sum = profile.lw[i] + profile.ab[i] + profile.el[i];
            assert!(f64_approx_equal(profile.total[i], sum));
        }
    }

    #[test]
    fn reference_profile_matches_known_values() {
        let profile = reference_profile();
        assert!((profile.total[0] - 0.8659).abs() < 1e-3);
        assert!((profile.total[1] - 1.1324).abs() < 1e-3);
        assert!(profile.total.last().unwrap().abs() < 1e-2);
    }

    #[test]
    fn degenerate_double_layer_points_fall_back_to_lw_plus_ab() {
        let params = ModelParameters {
            grid: DistanceGrid {
                min: 1e-12,
                max: 1.0,
                step: 0.5,
            },
            ..ModelParameters::default()
        };
        let inputs = system(0.01);
        let dg = delta_g(&inputs, &params);
        let profile = interaction_energy(&inputs, &dg, &params);

        assert_eq!(profile.el[0], 0.0);
        assert_eq!(profile.total[0], profile.lw[0] + profile.ab[0]);
        assert!(profile.el[1] != 0.0);
    }

    #[test]
    fn empty_grid_yields_empty_profile() {
        let params = ModelParameters {
            grid: DistanceGrid {
                min: 5.0,
                max: 1.0,
                step: 0.5,
            },
            ..ModelParameters::default()
        };
        let inputs = system(0.01);
        let dg = delta_g(&inputs, &params);
        let profile = interaction_energy(&inputs, &dg, &params);
        assert!(profile.is_empty());
    }

    #[test]
    fn lookups_use_the_total_series() {
        let profile = reference_profile();
        assert_eq!(profile.total_at(0.15, DEFAULT_DISTANCE_TOLERANCE), Some(profile.total[0]));
        assert_eq!(profile.total_at(40.0, DEFAULT_DISTANCE_TOLERANCE), None);

        let mid = profile.interpolate_total(0.175).unwrap();
        assert!(f64_approx_equal(mid, (profile.total[0] + profile.total[1]) / 2.0));
    }
}
