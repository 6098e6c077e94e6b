use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::actions::build_grid::build_grid::build_grid;
use crate::core::actions::colourize::colourize::colourize;
use crate::core::actions::colourize::ports::palette::Palette;
use crate::core::data::colour_field::ColourField;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_engine::EscapeEngine;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;
use crate::core::fractals::mandelbrot::palettes::factory::palette_factory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub duration: Duration,
    /// Iteration steps actually executed, at most `max_iterations`.
    pub steps: u32,
    pub escaped: usize,
    pub stable: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub field: ColourField,
    pub stats: RenderStats,
}

/// Grid, escape iteration and colouring with the palette named in `config`.
pub fn render_mandelbrot(config: &RenderConfig) -> Result<Rendered, MandelbrotError> {
    render_mandelbrot_with_palette(config, &palette_factory(config.palette))
}

/// Like [`render_mandelbrot`], with a caller-supplied palette in place of
/// `config.palette`.
pub fn render_mandelbrot_with_palette<P: Palette + ?Sized>(
    config: &RenderConfig,
    palette: &P,
) -> Result<Rendered, MandelbrotError> {
    config.validate()?;

    let engine = EscapeEngine::new(config.max_iterations)?.with_execution(config.execution);
    let start = Instant::now();
    let grid = build_grid(config.region, config.width, config.height)?;
    let state = engine.run(&grid);
    let field = colourize(
        state.escape_counts(),
        grid.resolution(),
        config.max_iterations,
        palette,
    )?;

    let stats = RenderStats {
        duration: start.elapsed(),
        steps: state.steps_taken(),
        escaped: state.escaped_count(),
        stable: state.active_count(),
    };

    debug!(?stats, "render pipeline finished");

    Ok(Rendered { field, stats })
}
