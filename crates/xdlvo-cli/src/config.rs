use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use xdlvo::core::params::{Liquid, ModelParameters};
use xdlvo::core::presets::{self, FoulantPreset, MembranePreset};
use xdlvo::core::surface::{ContactAngles, ProbeLiquids, SurfaceEnergy};
use xdlvo::engine::config::{self as core_config, SurfaceSpec};

pub const DEFAULT_MEMBRANE_PRESET: &str = "pvdf";
pub const DEFAULT_FOULANT_PRESET: &str = "bsa";
pub const DEFAULT_IONIC_STRENGTH: f64 = 0.01;
pub const DEFAULT_TEMPERATURE: f64 = 298.0;

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct PartialSurfaceEnergy {
    lw: f64,
    #[serde(default)]
    plus: f64,
    #[serde(default)]
    minus: f64,
}

impl From<PartialSurfaceEnergy> for SurfaceEnergy {
    fn from(p: PartialSurfaceEnergy) -> Self {
        SurfaceEnergy::new(p.lw, p.plus, p.minus)
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialMembraneConfig {
    preset: Option<String>,
    contact_angles: Option<[f64; 3]>,
    surface_energy: Option<PartialSurfaceEnergy>,
    zeta_potential: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialFoulantConfig {
    preset: Option<String>,
    contact_angles: Option<[f64; 3]>,
    surface_energy: Option<PartialSurfaceEnergy>,
    zeta_potential: Option<f64>,
    radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSolutionConfig {
    ionic_strength: Option<f64>,
    temperature: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialProbeLiquids {
    non_polar: Option<Liquid>,
    polar1: Option<Liquid>,
    polar2: Option<Liquid>,
}

impl PartialProbeLiquids {
    fn resolve(&self, params: &ModelParameters) -> ProbeLiquids {
        let defaults = ProbeLiquids::from(&params.liquids);
        ProbeLiquids {
            non_polar: self.non_polar.unwrap_or(defaults.non_polar),
            polar1: self.polar1.unwrap_or(defaults.polar1),
            polar2: self.polar2.unwrap_or(defaults.polar2),
        }
    }
}

/// Run configuration as read from TOML, before CLI overrides and defaults are applied.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialRunConfig {
    /// Model parameter file, relative paths resolved against the config file.
    model_parameters: Option<PathBuf>,
    membrane: Option<PartialMembraneConfig>,
    foulant: Option<PartialFoulantConfig>,
    solution: Option<PartialSolutionConfig>,
    probe_liquids: Option<PartialProbeLiquids>,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        if let (Some(params), Some(dir)) = (config.model_parameters.as_mut(), path.parent()) {
            if params.is_relative() {
                *params = dir.join(&*params);
            }
        }
        Ok(config)
    }

    pub fn merge_with_cli(mut self, args: &RunArgs) -> Result<core_config::AssessmentConfig> {
        self.apply_set_values(&args.set_values)?;

        let params_path = args.params.as_ref().or(self.model_parameters.as_ref());
        let params = match params_path {
            Some(path) => {
                debug!("Loading model parameters from {:?}", path);
                ModelParameters::load(path)?
            }
            None => ModelParameters::default(),
        };
        let liquids = self.probe_liquids.take().unwrap_or_default().resolve(&params);

        let membrane_cfg = self.membrane.take().unwrap_or_default();
        let foulant_cfg = self.foulant.take().unwrap_or_default();
        let solution_cfg = self.solution.take().unwrap_or_default();

        let membrane = Self::merge_membrane(args, membrane_cfg, liquids)?;
        let (foulant, foulant_radius) = Self::merge_foulant(args, foulant_cfg, liquids)?;

        core_config::AssessmentConfigBuilder::new()
            .membrane(membrane)
            .foulant(foulant)
            .foulant_radius(foulant_radius)
            .ionic_strength(
                args.ionic_strength
                    .or(solution_cfg.ionic_strength)
                    .unwrap_or(DEFAULT_IONIC_STRENGTH),
            )
            .temperature(
                args.temperature
                    .or(solution_cfg.temperature)
                    .unwrap_or(DEFAULT_TEMPERATURE),
            )
            .params(params)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_membrane(
        args: &RunArgs,
        file: PartialMembraneConfig,
        liquids: ProbeLiquids,
    ) -> Result<SurfaceSpec> {
        let preset_name = args.membrane_preset.as_deref().or(file.preset.as_deref());
        let explicit = args.membrane_angles.is_some()
            || args.membrane_energy.is_some()
            || file.contact_angles.is_some()
            || file.surface_energy.is_some();
        let preset = match preset_name {
            Some(name) => Some(lookup_membrane(name)?),
            None if explicit => None,
            None => Some(lookup_membrane(DEFAULT_MEMBRANE_PRESET)?),
        };

        let zeta = args
            .membrane_zeta
            .or(file.zeta_potential)
            .or(preset.map(|p| p.zeta_potential))
            .ok_or_else(|| {
                CliError::Config("`membrane.zeta-potential` is required.".to_string())
            })?;

        let source = Self::merge_source(
            "membrane",
            args.membrane_angles.as_deref(),
            args.membrane_energy.as_deref(),
            file.contact_angles,
            file.surface_energy,
            preset.map(|p| p.angles),
        )?;
        Ok(Self::build_spec(source, liquids, zeta))
    }

    fn merge_foulant(
        args: &RunArgs,
        file: PartialFoulantConfig,
        liquids: ProbeLiquids,
    ) -> Result<(SurfaceSpec, f64)> {
        let preset_name = args.foulant_preset.as_deref().or(file.preset.as_deref());
        let explicit = args.foulant_angles.is_some()
            || args.foulant_energy.is_some()
            || file.contact_angles.is_some()
            || file.surface_energy.is_some();
        let preset = match preset_name {
            Some(name) => Some(lookup_foulant(name)?),
            None if explicit => None,
            None => Some(lookup_foulant(DEFAULT_FOULANT_PRESET)?),
        };

        let zeta = args
            .foulant_zeta
            .or(file.zeta_potential)
            .or(preset.map(|p| p.zeta_potential))
            .ok_or_else(|| CliError::Config("`foulant.zeta-potential` is required.".to_string()))?;
        let radius = args
            .foulant_radius
            .or(file.radius)
            .or(preset.map(|p| p.radius))
            .ok_or_else(|| CliError::Config("`foulant.radius` is required.".to_string()))?;

        let source = Self::merge_source(
            "foulant",
            args.foulant_angles.as_deref(),
            args.foulant_energy.as_deref(),
            file.contact_angles,
            file.surface_energy,
            preset.map(|p| p.angles),
        )?;
        Ok((Self::build_spec(source, liquids, zeta), radius))
    }

    fn merge_source(
        surface: &str,
        cli_angles: Option<&[f64]>,
        cli_energy: Option<&[f64]>,
        file_angles: Option<[f64; 3]>,
        file_energy: Option<PartialSurfaceEnergy>,
        preset_angles: Option<ContactAngles>,
    ) -> Result<SurfaceInput> {
        if let Some(values) = cli_angles {
            let [d, f, w] = triple(values, &format!("--{}-angles", surface))?;
            return Ok(SurfaceInput::Angles(ContactAngles::new(d, f, w)));
        }
        if let Some(values) = cli_energy {
            let [lw, plus, minus] = triple(values, &format!("--{}-energy", surface))?;
            return Ok(SurfaceInput::Energy(SurfaceEnergy::new(lw, plus, minus)));
        }
        match (file_angles, file_energy) {
            (Some(_), Some(_)) => Err(CliError::Config(format!(
                "`{surface}.contact-angles` and `{surface}.surface-energy` are mutually exclusive."
            ))),
            (Some([d, f, w]), None) => Ok(SurfaceInput::Angles(ContactAngles::new(d, f, w))),
            (None, Some(energy)) => Ok(SurfaceInput::Energy(energy.into())),
            (None, None) => preset_angles.map(SurfaceInput::Angles).ok_or_else(|| {
                CliError::Config(format!(
                    "The {surface} needs contact angles, a surface energy or a preset."
                ))
            }),
        }
    }

    fn build_spec(source: SurfaceInput, liquids: ProbeLiquids, zeta: f64) -> SurfaceSpec {
        match source {
            SurfaceInput::Angles(angles) => SurfaceSpec::from_angles(angles, liquids, zeta),
            SurfaceInput::Energy(energy) => SurfaceSpec::from_energy(energy, zeta),
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();
            let parse_float = || -> Result<f64> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })
            };

            match key {
                "membrane.preset" => {
                    self.membrane.get_or_insert_with(Default::default).preset =
                        Some(value_str.to_string());
                }
                "membrane.zeta-potential" => {
                    self.membrane
                        .get_or_insert_with(Default::default)
                        .zeta_potential = Some(parse_float()?);
                }
                "foulant.preset" => {
                    self.foulant.get_or_insert_with(Default::default).preset =
                        Some(value_str.to_string());
                }
                "foulant.zeta-potential" => {
                    self.foulant
                        .get_or_insert_with(Default::default)
                        .zeta_potential = Some(parse_float()?);
                }
                "foulant.radius" => {
                    self.foulant.get_or_insert_with(Default::default).radius = Some(parse_float()?);
                }
                "solution.ionic-strength" => {
                    self.solution
                        .get_or_insert_with(Default::default)
                        .ionic_strength = Some(parse_float()?);
                }
                "solution.temperature" => {
                    self.solution
                        .get_or_insert_with(Default::default)
                        .temperature = Some(parse_float()?);
                }
                "model-parameters" => {
                    self.model_parameters = Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

enum SurfaceInput {
    Angles(ContactAngles),
    Energy(SurfaceEnergy),
}

pub fn lookup_membrane(name: &str) -> Result<&'static MembranePreset> {
    presets::membrane_preset(name).ok_or_else(|| {
        CliError::Argument(format!(
            "Unknown membrane preset '{}'. Available: {}",
            name,
            presets::membrane_preset_names().join(", ")
        ))
    })
}

pub fn lookup_foulant(name: &str) -> Result<&'static FoulantPreset> {
    presets::foulant_preset(name).ok_or_else(|| {
        CliError::Argument(format!(
            "Unknown foulant preset '{}'. Available: {}",
            name,
            presets::foulant_preset_names().join(", ")
        ))
    })
}

/// Checks that a comma-separated CLI value carries exactly three numbers.
pub fn triple(values: &[f64], flag: &str) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(values).map_err(|_| {
        CliError::Argument(format!(
            "{} expects exactly three comma-separated values, got {}",
            flag,
            values.len()
        ))
    })
}
