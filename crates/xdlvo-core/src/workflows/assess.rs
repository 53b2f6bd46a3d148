use crate::core::electrostatics::screening_length;
use crate::core::surface::{ContactAngleFit, SurfaceEnergy, fit_contact_angles};
use crate::engine::analysis::{ProfileAnalysis, analyze_profile};
use crate::engine::config::{
    AssessmentConfig, SurfaceProperties, SurfaceSource, SurfaceSpec, SystemInputs,
};
use crate::engine::error::EngineError;
use crate::engine::free_energy::{GibbsEnergyBreakdown, delta_g};
use crate::engine::profile::{EnergyProfile, interaction_energy};
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use tracing::{debug, info, instrument, warn};

/// Surface energy used for one surface, with the contact-angle fit it came from if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceReport {
    pub energy: SurfaceEnergy,
    pub fit: Option<ContactAngleFit>,
}

impl SurfaceReport {
    /// `false` only when a contact-angle fit produced a negative square root.
    pub fn is_physically_consistent(&self) -> bool {
        self.fit.is_none_or(|fit| fit.is_physically_consistent())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub membrane: SurfaceReport,
    pub foulant: SurfaceReport,
    pub inputs: SystemInputs,
    /// Debye parameter κ, nm⁻¹.
    pub kappa: f64,
    /// Screening length 1/κ, nm.
    pub screening_length: f64,
    pub relative_permittivity: f64,
    pub delta_g: GibbsEnergyBreakdown,
    pub profile: EnergyProfile,
    pub analysis: ProfileAnalysis,
}

#[instrument(skip_all, name = "assessment_workflow")]
pub fn run(config: &AssessmentConfig, reporter: &ProgressReporter) -> Result<Assessment, EngineError> {
    reporter.report(Progress::Started {
        stages: Stage::PER_ASSESSMENT,
    });

    let membrane = resolve_surface("membrane", &config.membrane, reporter)?;
    let foulant = resolve_surface("foulant", &config.foulant, reporter)?;

    let inputs = SystemInputs {
        membrane: SurfaceProperties {
            energy: membrane.energy,
            zeta_potential: config.membrane.zeta_potential,
        },
        foulant: SurfaceProperties {
            energy: foulant.energy,
            zeta_potential: config.foulant.zeta_potential,
        },
        foulant_radius: config.foulant_radius,
        ionic_strength: config.ionic_strength,
        temperature: config.temperature,
    };
    let kappa = inputs.kappa();
    debug!(
        kappa,
        ionic_strength = inputs.ionic_strength,
        temperature = inputs.temperature,
        "Electrolyte screening resolved."
    );

    let delta_g = delta_g(&inputs, &config.params);
    info!(
        lw = delta_g.lw,
        ab = delta_g.ab,
        el = delta_g.el,
        adh = delta_g.adh,
        "Free energy of interaction at contact computed."
    );
    reporter.completed(Stage::FreeEnergy);

    let profile = interaction_energy(&inputs, &delta_g, &config.params);
    debug!(points = profile.len(), "Interaction-energy profile generated.");
    reporter.completed(Stage::Profile);

    let analysis = analyze_profile(&profile);
    match analysis.barrier {
        Some(b) => info!(
            "Energy barrier of {:.3} kT at {:.2} nm.",
            b.energy, b.position
        ),
        None => info!("No energy barrier in the sampled range."),
    }
    reporter.completed(Stage::Analysis);

    reporter.report(Progress::Finished);

    Ok(Assessment {
        membrane,
        foulant,
        inputs,
        kappa,
        screening_length: screening_length(inputs.ionic_strength, inputs.temperature),
        relative_permittivity: inputs.relative_permittivity(),
        delta_g,
        profile,
        analysis,
    })
}

fn resolve_surface(
    surface: &'static str,
    spec: &SurfaceSpec,
    reporter: &ProgressReporter,
) -> Result<SurfaceReport, EngineError> {
    let report = match spec.source {
        SurfaceSource::Known(energy) => SurfaceReport { energy, fit: None },
        SurfaceSource::ContactAngles { angles, liquids } => {
            let fit = fit_contact_angles(&angles, &liquids)
                .map_err(|source| EngineError::SurfaceFit { surface, source })?;
            if !fit.is_physically_consistent() {
                warn!(
                    surface,
                    sqrt_plus = fit.sqrt_plus,
                    sqrt_minus = fit.sqrt_minus,
                    "Contact-angle fit produced a negative root."
                );
                reporter.report(Progress::InconsistentFit {
                    surface,
                    sqrt_plus: fit.sqrt_plus,
                    sqrt_minus: fit.sqrt_minus,
                });
            }
            debug!(surface, lw = fit.energy.lw, total = fit.energy.total, "Surface energy fitted.");
            SurfaceReport {
                energy: fit.energy,
                fit: Some(fit),
            }
        }
    };
    reporter.completed(Stage::Surface { surface });
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::{DIIODOMETHANE, FORMAMIDE, WATER};
    use crate::core::surface::{ContactAngles, NumericalError, ProbeLiquids};
    use crate::engine::config::AssessmentConfigBuilder;
    use std::sync::Mutex;

    fn config_with(membrane: SurfaceSpec) -> AssessmentConfig {
        AssessmentConfigBuilder::new()
            .membrane(membrane)
            .foulant(SurfaceSpec::from_energy(
                SurfaceEnergy::new(35.0, 1.0, 25.0),
                -7.5,
            ))
            .foulant_radius(322.9)
            .ionic_strength(0.01)
            .temperature(298.0)
            .build()
            .unwrap()
    }

    fn pvdf() -> SurfaceSpec {
        SurfaceSpec::from_angles(
            ContactAngles::new(64.572, 60.966, 87.5268),
            ProbeLiquids::default(),
            -32.4,
        )
    }

    #[test]
    fn run_reports_every_stage_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: &Progress| {
            events.lock().unwrap().push(event.clone());
        }));

        run(&config_with(pvdf()), &reporter).unwrap();
        drop(reporter);

        let expected = vec![
            Progress::Started {
                stages: Stage::PER_ASSESSMENT,
            },
            Progress::Completed(Stage::Surface {
                surface: "membrane",
            }),
            Progress::Completed(Stage::Surface { surface: "foulant" }),
            Progress::Completed(Stage::FreeEnergy),
            Progress::Completed(Stage::Profile),
            Progress::Completed(Stage::Analysis),
            Progress::Finished,
        ];
        let events = events.into_inner().unwrap();
        assert_eq!(events, expected);
        let completed = events
            .iter()
            .filter(|e| matches!(e, Progress::Completed(_)))
            .count();
        assert_eq!(completed as u64, Stage::PER_ASSESSMENT);
    }

    #[test]
    fn known_surface_energy_is_used_without_fitting() {
        let assessment = run(&config_with(pvdf()), &ProgressReporter::new()).unwrap();
        assert!(assessment.foulant.fit.is_none());
        assert_eq!(assessment.foulant.energy, SurfaceEnergy::new(35.0, 1.0, 25.0));
        assert!(assessment.membrane.fit.is_some());
        assert!(assessment.membrane.is_physically_consistent());
    }

    #[test]
    fn derived_electrolyte_values_are_consistent() {
        let assessment = run(&config_with(pvdf()), &ProgressReporter::new()).unwrap();
        assert!((assessment.kappa * assessment.screening_length - 1.0).abs() < 1e-12);
        assert_eq!(assessment.kappa, assessment.inputs.kappa());
    }

    #[test]
    fn ill_conditioned_membrane_fit_is_reported_with_its_surface() {
        let spec = SurfaceSpec::from_angles(
            ContactAngles::new(64.572, 60.966, 60.966),
            ProbeLiquids {
                non_polar: DIIODOMETHANE,
                polar1: WATER,
                polar2: WATER,
            },
            -32.4,
        );
        let err = run(&config_with(spec), &ProgressReporter::new()).unwrap_err();
        match err {
            EngineError::SurfaceFit { surface, source } => {
                assert_eq!(surface, "membrane");
                assert!(matches!(source, NumericalError::IllConditioned { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn inconsistent_fit_is_flagged_with_its_surface() {
        let spec = SurfaceSpec::from_angles(
            ContactAngles::new(64.572, 60.966, 87.5268),
            ProbeLiquids {
                non_polar: DIIODOMETHANE,
                polar1: WATER,
                polar2: FORMAMIDE,
            },
            -32.4,
        );
        let flagged = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: &Progress| {
            if let Progress::InconsistentFit {
                surface,
                sqrt_plus,
                sqrt_minus,
            } = event
            {
                flagged
                    .lock()
                    .unwrap()
                    .push((*surface, sqrt_plus.min(*sqrt_minus)));
            }
        }));

        let assessment = run(&config_with(spec), &reporter).unwrap();
        drop(reporter);

        assert!(!assessment.membrane.is_physically_consistent());
        let flagged = flagged.into_inner().unwrap();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0, "membrane");
        assert!(flagged[0].1 < 0.0);
    }
}
