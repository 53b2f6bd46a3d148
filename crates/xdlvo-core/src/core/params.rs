use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const GRID_ROUNDING_SLACK: f64 = 1e-9;

/// Largest distance grid accepted by [`ModelParameters::validate`].
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Surface-tension components (mJ/m²) of a probe or reference liquid.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Liquid {
    pub lw: f64,
    #[serde(default)]
    pub plus: f64,
    #[serde(default)]
    pub minus: f64,
}

impl Liquid {
    pub const fn new(lw: f64, plus: f64, minus: f64) -> Self {
        Self { lw, plus, minus }
    }

    pub const fn non_polar(lw: f64) -> Self {
        Self::new(lw, 0.0, 0.0)
    }

    #[inline]
    pub fn acid_base(&self) -> f64 {
        2.0 * (self.plus * self.minus).sqrt()
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.lw + self.acid_base()
    }

    pub fn is_polar(&self) -> bool {
        self.plus > 0.0 || self.minus > 0.0
    }
}

pub const DIIODOMETHANE: Liquid = Liquid::non_polar(50.8);
pub const FORMAMIDE: Liquid = Liquid::new(39.0, 2.28, 39.6);
pub const WATER: Liquid = Liquid::new(21.8, 25.5, 25.5);

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceLiquids {
    pub diiodomethane: Liquid,
    pub formamide: Liquid,
    pub water: Liquid,
}

impl Default for ReferenceLiquids {
    fn default() -> Self {
        Self {
            diiodomethane: DIIODOMETHANE,
            formamide: FORMAMIDE,
            water: WATER,
        }
    }
}

/// Separation distances (nm) at which energy profiles are sampled.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DistanceGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for DistanceGrid {
    fn default() -> Self {
        Self {
            min: 0.15,
            max: 25.0,
            step: 0.05,
        }
    }
}

impl DistanceGrid {
    /// Number of grid points, or `None` when the bounds and step do not describe a grid of at
    /// most [`MAX_GRID_POINTS`] points.
    pub fn checked_len(&self) -> Option<usize> {
        if !(self.step > 0.0) || !(self.max >= self.min) {
            return None;
        }
        let intervals = ((self.max - self.min) / self.step + GRID_ROUNDING_SLACK).floor();
        if !intervals.is_finite() || intervals >= MAX_GRID_POINTS as f64 {
            return None;
        }
        Some(intervals as usize + 1)
    }

    /// Number of grid points. Grids rejected by [`Self::checked_len`] are empty.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid points from `min` to `max` inclusive, each computed from its index so that no
    /// rounding error accumulates along the grid.
    pub fn points(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelParameters {
    pub liquids: ReferenceLiquids,
    /// Minimum (contact) separation h0, nm.
    pub min_separation: f64,
    /// Acid-base decay length λ, nm.
    pub decay_length: f64,
    pub grid: DistanceGrid,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            liquids: ReferenceLiquids::default(),
            min_separation: 0.158,
            decay_length: 0.6,
            grid: DistanceGrid::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid model parameter '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ModelParameters {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamLoadError> {
        let invalid = |name: &'static str, reason: String| ParamLoadError::Invalid { name, reason };

        if !(self.min_separation > 0.0) {
            return Err(invalid(
                "min_separation",
                format!("must be positive, got {}", self.min_separation),
            ));
        }
        if !(self.decay_length > 0.0) {
            return Err(invalid(
                "decay_length",
                format!("must be positive, got {}", self.decay_length),
            ));
        }
        if !(self.grid.step > 0.0) {
            return Err(invalid(
                "grid.step",
                format!("must be positive, got {}", self.grid.step),
            ));
        }
        if !(self.grid.min > 0.0) {
            return Err(invalid(
                "grid.min",
                format!("must be positive, got {}", self.grid.min),
            ));
        }
        if !(self.grid.max > self.grid.min) {
            return Err(invalid(
                "grid.max",
                format!(
                    "must exceed grid.min ({}), got {}",
                    self.grid.min, self.grid.max
                ),
            ));
        }

        if self.grid.checked_len().is_none() {
            return Err(invalid(
                "grid.step",
                format!(
                    "spans more than {} points between {} and {} nm, got {}",
                    MAX_GRID_POINTS, self.grid.min, self.grid.max, self.grid.step
                ),
            ));
        }

        let liquids = [
            ("liquids.diiodomethane", self.liquids.diiodomethane),
            ("liquids.formamide", self.liquids.formamide),
            ("liquids.water", self.liquids.water),
        ];
        for (name, liquid) in liquids {
            if liquid.lw < 0.0 || liquid.plus < 0.0 || liquid.minus < 0.0 {
                return Err(invalid(
                    name,
                    format!("surface-tension components must be non-negative, got {:?}", liquid),
                ));
            }
        }
        Ok(())
    }
}
