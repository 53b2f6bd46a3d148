use crate::core::electrostatics::{debye_length, water_dielectric};
use crate::core::params::ModelParameters;
use crate::core::surface::{ContactAngles, ProbeLiquids, SurfaceEnergy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProperties {
    pub energy: SurfaceEnergy,
    /// Zeta potential, mV.
    pub zeta_potential: f64,
}

/// Everything the free-energy and profile calculators need about one membrane/foulant pair.
///
/// Values are trusted as given; range checks belong to whoever collects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemInputs {
    pub membrane: SurfaceProperties,
    pub foulant: SurfaceProperties,
    /// Foulant particle radius, nm.
    pub foulant_radius: f64,
    /// Ionic strength, mol/L.
    pub ionic_strength: f64,
    /// Temperature, K.
    pub temperature: f64,
}

impl SystemInputs {
    #[inline]
    pub fn kappa(&self) -> f64 {
        debye_length(self.ionic_strength, self.temperature)
    }

    #[inline]
    pub fn relative_permittivity(&self) -> f64 {
        water_dielectric(self.temperature)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceSource {
    ContactAngles {
        angles: ContactAngles,
        liquids: ProbeLiquids,
    },
    Known(SurfaceEnergy),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    pub source: SurfaceSource,
    pub zeta_potential: f64,
}

impl SurfaceSpec {
    pub fn from_angles(angles: ContactAngles, liquids: ProbeLiquids, zeta_potential: f64) -> Self {
        Self {
            source: SurfaceSource::ContactAngles { angles, liquids },
            zeta_potential,
        }
    }

    pub fn from_energy(energy: SurfaceEnergy, zeta_potential: f64) -> Self {
        Self {
            source: SurfaceSource::Known(energy),
            zeta_potential,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentConfig {
    pub membrane: SurfaceSpec,
    pub foulant: SurfaceSpec,
    pub foulant_radius: f64,
    pub ionic_strength: f64,
    pub temperature: f64,
    pub params: ModelParameters,
}

#[derive(Default)]
pub struct AssessmentConfigBuilder {
    membrane: Option<SurfaceSpec>,
    foulant: Option<SurfaceSpec>,
    foulant_radius: Option<f64>,
    ionic_strength: Option<f64>,
    temperature: Option<f64>,
    params: Option<ModelParameters>,
}

impl AssessmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn membrane(mut self, spec: SurfaceSpec) -> Self {
        self.membrane = Some(spec);
        self
    }
    pub fn foulant(mut self, spec: SurfaceSpec) -> Self {
        self.foulant = Some(spec);
        self
    }
    pub fn foulant_radius(mut self, radius: f64) -> Self {
        self.foulant_radius = Some(radius);
        self
    }
    pub fn ionic_strength(mut self, ionic_strength: f64) -> Self {
        self.ionic_strength = Some(ionic_strength);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn params(mut self, params: ModelParameters) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> Result<AssessmentConfig, ConfigError> {
        Ok(AssessmentConfig {
            membrane: self
                .membrane
                .ok_or(ConfigError::MissingParameter("membrane"))?,
            foulant: self
                .foulant
                .ok_or(ConfigError::MissingParameter("foulant"))?,
            foulant_radius: self
                .foulant_radius
                .ok_or(ConfigError::MissingParameter("foulant_radius"))?,
            ionic_strength: self
                .ionic_strength
                .ok_or(ConfigError::MissingParameter("ionic_strength"))?,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
            params: self.params.unwrap_or_default(),
        })
    }
}
