mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::controllers::render::render_controller::{RenderController, RenderError};
pub use crate::core::actions::build_grid::build_grid::build_grid;
pub use crate::core::actions::colourize::colourize::colourize;
pub use crate::core::actions::colourize::ports::palette::Palette;
pub use crate::core::actions::render_mandelbrot::render_mandelbrot::{
    RenderStats, Rendered, render_mandelbrot, render_mandelbrot_with_palette,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_field::ColourField;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::Grid;
pub use crate::core::data::region::Region;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::fractals::mandelbrot::errors::{MandelbrotError, PaletteFault};
pub use crate::core::fractals::mandelbrot::escape_engine::{ESCAPE_RADIUS_SQUARED, EscapeEngine, Execution};
pub use crate::core::fractals::mandelbrot::iteration_state::IterationState;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, RenderConfig};
pub use crate::core::fractals::mandelbrot::palettes::factory::palette_factory;
pub use crate::core::fractals::mandelbrot::palettes::gradient::Gradient;
pub use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
pub use crate::input::cli::args::CliArgs;
pub use crate::presenters::file::factory::presenter_for_path;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
