use super::params::{Liquid, ReferenceLiquids};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ILL_CONDITIONED_THRESHOLD: f64 = 1e-10;

/// Lifshitz–van der Waals / acid-base decomposition of a solid's surface energy (mJ/m²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceEnergy {
    pub lw: f64,
    pub plus: f64,
    pub minus: f64,
    pub ab: f64,
    pub total: f64,
}

impl SurfaceEnergy {
    pub fn new(lw: f64, plus: f64, minus: f64) -> Self {
        let ab = 2.0 * (plus * minus).sqrt();
        Self {
            lw,
            plus,
            minus,
            ab,
            total: lw + ab,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericalError {
    #[error(
        "Ill-conditioned surface energy system (|det| = {determinant:.3e}): the polar probe liquids are too similar in acid-base character"
    )]
    IllConditioned { determinant: f64 },
}

/// Contact angles (degrees) measured with one non-polar and two polar probe liquids.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ContactAngles {
    pub non_polar: f64,
    pub polar1: f64,
    pub polar2: f64,
}

impl ContactAngles {
    pub const fn new(non_polar: f64, polar1: f64, polar2: f64) -> Self {
        Self {
            non_polar,
            polar1,
            polar2,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.non_polar, self.polar1, self.polar2]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ProbeLiquids {
    pub non_polar: Liquid,
    pub polar1: Liquid,
    pub polar2: Liquid,
}

impl From<&ReferenceLiquids> for ProbeLiquids {
    fn from(reference: &ReferenceLiquids) -> Self {
        Self {
            non_polar: reference.diiodomethane,
            polar1: reference.formamide,
            polar2: reference.water,
        }
    }
}

impl Default for ProbeLiquids {
    fn default() -> Self {
        Self::from(&ReferenceLiquids::default())
    }
}

/// Raw solution of the three-liquid system.
///
/// `sqrt_plus`/`sqrt_minus` are the solved square roots before squaring; a negative value means
/// the angle/liquid combination has no physical solution even though `energy` stays finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactAngleFit {
    pub energy: SurfaceEnergy,
    pub sqrt_plus: f64,
    pub sqrt_minus: f64,
    pub determinant: f64,
}

impl ContactAngleFit {
    pub fn is_physically_consistent(&self) -> bool {
        self.sqrt_plus >= 0.0 && self.sqrt_minus >= 0.0
    }
}

/// Solves the van Oss–Chaudhury–Good equations for a solid probed by three liquids.
///
/// Each liquid contributes `γ_l(1 + cos θ)/2 = √(γs_lw·γl_lw) + √(γs⁺·γl⁻) + √(γs⁻·γl⁺)`.
/// The non-polar liquid fixes `γs_lw`; the two polar liquids give a 2×2 linear system in
/// `√γs⁺` and `√γs⁻`, solved by Cramer's rule.
pub fn fit_contact_angles(
    angles: &ContactAngles,
    liquids: &ProbeLiquids,
) -> Result<ContactAngleFit, NumericalError> {
    let np = &liquids.non_polar;
    let lw = (np.lw * (1.0 + angles.non_polar.to_radians().cos()) / (2.0 * np.lw.sqrt())).powi(2);

    let rhs = |liquid: &Liquid, theta: f64| {
        liquid.total() * (1.0 + theta.to_radians().cos()) / 2.0 - (liquid.lw * lw).sqrt()
    };
    let c = Vector2::new(
        rhs(&liquids.polar1, angles.polar1),
        rhs(&liquids.polar2, angles.polar2),
    );

    let (p1, p2) = (&liquids.polar1, &liquids.polar2);
    let a = Matrix2::new(
        p1.minus.sqrt(),
        p1.plus.sqrt(),
        p2.minus.sqrt(),
        p2.plus.sqrt(),
    );

    let determinant = a.determinant();
    if determinant.abs() < ILL_CONDITIONED_THRESHOLD {
        return Err(NumericalError::IllConditioned { determinant });
    }

    let mut a_plus = a;
    a_plus.set_column(0, &c);
    let mut a_minus = a;
    a_minus.set_column(1, &c);

    let sqrt_plus = a_plus.determinant() / determinant;
    let sqrt_minus = a_minus.determinant() / determinant;

    Ok(ContactAngleFit {
        energy: SurfaceEnergy::new(lw, sqrt_plus * sqrt_plus, sqrt_minus * sqrt_minus),
        sqrt_plus,
        sqrt_minus,
        determinant,
    })
}

pub fn surface_energy_from_contact_angles(
    angles: &ContactAngles,
    liquids: &ProbeLiquids,
) -> Result<SurfaceEnergy, NumericalError> {
    fit_contact_angles(angles, liquids).map(|fit| fit.energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::{DIIODOMETHANE, FORMAMIDE, WATER};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn pvdf_angles() -> ContactAngles {
        ContactAngles::new(64.572, 60.966, 87.5268)
    }

    #[test]
    fn new_derives_acid_base_and_total_components() {
        let energy = SurfaceEnergy::new(40.0, 0.5, 32.0);
        assert!(f64_approx_equal(energy.ab, 8.0));
        assert!(f64_approx_equal(energy.total, 48.0));
    }

    #[test]
    fn non_polar_liquid_alone_determines_lw_component() {
        let fit = fit_contact_angles(&pvdf_angles(), &ProbeLiquids::default()).unwrap();
        let expected = (50.8 * (1.0 + 64.572_f64.to_radians().cos()) / (2.0 * 50.8_f64.sqrt()))
            .powi(2);
        assert!(f64_approx_equal(fit.energy.lw, expected));
        assert!((fit.energy.lw - 25.9476).abs() < 1e-3);
    }

    #[test]
    fn fully_wetting_non_polar_liquid_yields_its_own_surface_tension() {
        let fit = fit_contact_angles(&ContactAngles::new(0.0, 30.0, 30.0), &ProbeLiquids::default())
            .unwrap();
        assert!(f64_approx_equal(fit.energy.lw, 50.8));
    }

    #[test]
    fn pvdf_reference_fit_is_physically_consistent() {
        let fit = fit_contact_angles(&pvdf_angles(), &ProbeLiquids::default()).unwrap();
        assert!(fit.is_physically_consistent());
        assert!((fit.sqrt_plus - 1.46857).abs() < 1e-4);
        assert!((fit.sqrt_minus - 1.34091).abs() < 1e-4);
        assert!(fit.energy.plus >= 0.0);
        assert!(fit.energy.minus >= 0.0);
    }

    #[test]
    fn components_satisfy_decomposition_identities() {
        let energy = surface_energy_from_contact_angles(&pvdf_angles(), &ProbeLiquids::default())
            .unwrap();
        assert!(f64_approx_equal(
            energy.ab,
            2.0 * (energy.plus * energy.minus).sqrt()
        ));
        assert!(f64_approx_equal(energy.total, energy.lw + energy.ab));
    }

    #[test]
    fn solution_reproduces_the_measured_polar_angles() {
        let angles = ContactAngles::new(40.272, 47.228, 58.613);
        let liquids = ProbeLiquids::default();
        let fit = fit_contact_angles(&angles, &liquids).unwrap();

        for (liquid, theta) in [(FORMAMIDE, angles.polar1), (WATER, angles.polar2)] {
            let lhs = liquid.total() * (1.0 + theta.to_radians().cos()) / 2.0;
            let rhs = (fit.energy.lw * liquid.lw).sqrt()
                + fit.sqrt_plus * liquid.minus.sqrt()
                + fit.sqrt_minus * liquid.plus.sqrt();
            assert!((lhs - rhs).abs() < 1e-9);
        }
    }

    #[test]
    fn identical_polar_liquids_are_ill_conditioned() {
        let liquids = ProbeLiquids {
            non_polar: DIIODOMETHANE,
            polar1: WATER,
            polar2: WATER,
        };
        let result = surface_energy_from_contact_angles(
            &ContactAngles::new(64.572, 60.966, 60.966),
            &liquids,
        );
        assert!(matches!(result, Err(NumericalError::IllConditioned { .. })));
    }

    #[test]
    fn identical_asymmetric_polar_liquids_are_ill_conditioned() {
        let liquids = ProbeLiquids {
            non_polar: DIIODOMETHANE,
            polar1: FORMAMIDE,
            polar2: FORMAMIDE,
        };
        let result = fit_contact_angles(&ContactAngles::new(50.0, 40.0, 40.0), &liquids);
        assert!(matches!(result, Err(NumericalError::IllConditioned { .. })));
    }

    #[test]
    fn ill_conditioned_error_message_names_the_cause() {
        let err = NumericalError::IllConditioned { determinant: 0.0 };
        assert!(err.to_string().to_lowercase().contains("ill-conditioned"));
    }

    #[test]
    fn inconsistent_angles_are_flagged_but_still_squared() {
        let fit = fit_contact_angles(
            &ContactAngles::new(64.572, 60.966, 87.5268),
            &ProbeLiquids {
                non_polar: DIIODOMETHANE,
                polar1: WATER,
                polar2: FORMAMIDE,
            },
        )
        .unwrap();
        assert!(fit.sqrt_plus < 0.0);
        assert!(!fit.is_physically_consistent());
        assert!(fit.energy.plus > 0.0);
    }
}
