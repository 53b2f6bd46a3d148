use crate::error::{CliError, Result};
use std::ops::RangeInclusive;
use xdlvo::core::surface::{ContactAngles, SurfaceEnergy};
use xdlvo::engine::config::{AssessmentConfig, SurfaceSource, SurfaceSpec};

pub const CONTACT_ANGLE_RANGE: RangeInclusive<f64> = 0.0..=180.0;
pub const ZETA_POTENTIAL_RANGE: RangeInclusive<f64> = -200.0..=200.0;
pub const IONIC_STRENGTH_RANGE: RangeInclusive<f64> = 1e-4..=10.0;
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 273.0..=373.0;

fn check_range(
    errors: &mut Vec<String>,
    label: &str,
    value: f64,
    range: &RangeInclusive<f64>,
    unit: &str,
) {
    if !range.contains(&value) {
        errors.push(format!(
            "{} must be between {} and {} {}, got {}",
            label,
            range.start(),
            range.end(),
            unit,
            value
        ));
    }
}

pub fn check_angles(errors: &mut Vec<String>, surface: &str, angles: &ContactAngles) {
    let names = ["non-polar", "first polar", "second polar"];
    for (name, theta) in names.iter().zip(angles.as_array()) {
        check_range(
            errors,
            &format!("{} {} contact angle", surface, name),
            theta,
            &CONTACT_ANGLE_RANGE,
            "degrees",
        );
    }
}

fn check_energy(errors: &mut Vec<String>, surface: &str, energy: &SurfaceEnergy) {
    let components = [("lw", energy.lw), ("plus", energy.plus), ("minus", energy.minus)];
    for (name, value) in components {
        if !(value >= 0.0 && value.is_finite()) {
            errors.push(format!(
                "{} surface-energy component '{}' must be non-negative, got {}",
                surface, name, value
            ));
        }
    }
}

fn check_surface(errors: &mut Vec<String>, surface: &str, spec: &SurfaceSpec) {
    match &spec.source {
        SurfaceSource::ContactAngles { angles, .. } => check_angles(errors, surface, angles),
        SurfaceSource::Known(energy) => check_energy(errors, surface, energy),
    }
    check_range(
        errors,
        &format!("{} zeta potential", surface),
        spec.zeta_potential,
        &ZETA_POTENTIAL_RANGE,
        "mV",
    );
}

pub fn check_solution(errors: &mut Vec<String>, ionic_strength: f64, temperature: f64) {
    check_range(
        errors,
        "Ionic strength",
        ionic_strength,
        &IONIC_STRENGTH_RANGE,
        "mol/L",
    );
    check_range(errors, "Temperature", temperature, &TEMPERATURE_RANGE, "K");
}

/// Turns collected problems into a single validation error listing all of them.
pub fn into_result(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "\n  - {}",
            errors.join("\n  - ")
        )))
    }
}

/// Checks every user-supplied value of an assessment against its physical range.
pub fn validate_assessment(config: &AssessmentConfig) -> Result<()> {
    let mut errors = Vec::new();
    check_surface(&mut errors, "Membrane", &config.membrane);
    check_surface(&mut errors, "Foulant", &config.foulant);
    if !(config.foulant_radius > 0.0 && config.foulant_radius.is_finite()) {
        errors.push(format!(
            "Foulant radius must be positive, got {} nm",
            config.foulant_radius
        ));
    }
    check_solution(&mut errors, config.ionic_strength, config.temperature);
    into_result(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xdlvo::core::surface::ProbeLiquids;
    use xdlvo::engine::config::AssessmentConfigBuilder;

    fn config(membrane_angles: ContactAngles, ionic_strength: f64) -> AssessmentConfig {
        AssessmentConfigBuilder::new()
            .membrane(SurfaceSpec::from_angles(
                membrane_angles,
                ProbeLiquids::default(),
                -32.4,
            ))
            .foulant(SurfaceSpec::from_energy(
                SurfaceEnergy::new(35.0, 1.0, 25.0),
                -7.5,
            ))
            .foulant_radius(322.9)
            .ionic_strength(ionic_strength)
            .temperature(298.0)
            .build()
            .unwrap()
    }

    #[test]
    fn reference_inputs_are_valid() {
        let config = config(ContactAngles::new(64.572, 60.966, 87.5268), 0.01);
        assert!(validate_assessment(&config).is_ok());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut errors = Vec::new();
        check_angles(&mut errors, "Membrane", &ContactAngles::new(0.0, 180.0, 90.0));
        check_solution(&mut errors, 1e-4, 373.0);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn all_problems_are_reported_together() {
        let config = config(ContactAngles::new(190.0, 60.0, 87.0), 20.0);
        let err = validate_assessment(&config).unwrap_err();
        let CliError::Validation(msg) = err else {
            panic!("Expected a validation error");
        };
        assert!(msg.contains("Membrane non-polar contact angle"));
        assert!(msg.contains("Ionic strength"));
    }

    #[test]
    fn out_of_range_zeta_and_radius_are_rejected() {
        let mut config = config(ContactAngles::new(64.0, 60.0, 87.0), 0.01);
        config.foulant.zeta_potential = -250.0;
        config.foulant_radius = 0.0;
        let msg = validate_assessment(&config).unwrap_err().to_string();
        assert!(msg.contains("Foulant zeta potential"));
        assert!(msg.contains("Foulant radius"));
    }

    #[test]
    fn negative_known_surface_energy_is_rejected() {
        let mut config = config(ContactAngles::new(64.0, 60.0, 87.0), 0.01);
        config.foulant = SurfaceSpec::from_energy(SurfaceEnergy::new(35.0, -1.0, 25.0), -7.5);
        let msg = validate_assessment(&config).unwrap_err().to_string();
        assert!(msg.contains("'plus'"));
    }

    #[test]
    fn nan_values_are_rejected() {
        let mut errors = Vec::new();
        check_solution(&mut errors, f64::NAN, 298.0);
        assert_eq!(errors.len(), 1);
    }
}
