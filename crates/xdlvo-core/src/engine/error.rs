use thiserror::Error;

use super::config::ConfigError;
use crate::core::surface::NumericalError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Surface energy of the {surface} could not be determined: {source}")]
    SurfaceFit {
        surface: &'static str,
        #[source]
        source: NumericalError,
    },
}
