use std::path::PathBuf;

use clap::Parser;

use crate::controllers::render::render_controller::RenderError;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::escape_engine::Execution;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;

/// Render the Mandelbrot set to an image file.
///
/// Values come from the built-in defaults, then the config file, then
/// the flags given here.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mandelbrot-render", version, about)]
pub struct CliArgs {
    /// TOML file with render settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration budget per point
    #[arg(short = 'i', long)]
    pub max_iterations: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    pub real_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub real_max: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub imag_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub imag_max: Option<f64>,

    #[arg(short, long, value_enum)]
    pub palette: Option<PaletteKind>,

    /// Output image; `.ppm` writes binary PPM, anything else PNG
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Spread each iteration step over all cores
    #[arg(long)]
    pub parallel: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Resolves the final render configuration and validates it.
    pub fn into_config(self) -> Result<RenderConfig, RenderError> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(palette) = self.palette {
            config.palette = palette;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.parallel {
            config.execution = Execution::Parallel;
        }

        let bounds = [self.real_min, self.real_max, self.imag_min, self.imag_max];
        if bounds.iter().any(Option::is_some) {
            let current = config.region;
            config.region = Region::new(
                self.real_min.unwrap_or(current.real_min()),
                self.real_max.unwrap_or(current.real_max()),
                self.imag_min.unwrap_or(current.imag_min()),
                self.imag_max.unwrap_or(current.imag_max()),
            )?;
        }

        config.validate()?;

        Ok(config)
    }
}
