use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_engine::Execution;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;

const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_MAX_ITERATIONS: u32 = 50;
const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.png";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything one render needs, fixed for the duration of the render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub region: Region,
    pub palette: PaletteKind,
    pub output: PathBuf,
    pub execution: Execution,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            region: Region::default(),
            palette: PaletteKind::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            execution: Execution::default(),
        }
    }
}

impl RenderConfig {
    /// Fields missing from `source` keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Checks the values the region does not already guarantee.
    pub fn validate(&self) -> Result<(), MandelbrotError> {
        self.resolution()?;

        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(())
    }

    pub fn resolution(&self) -> Result<Resolution, MandelbrotError> {
        Resolution::new(self.width, self.height)
    }
}
