pub mod errors;
pub mod escape_engine;
pub mod iteration_state;
pub mod mandelbrot_config;
pub mod palettes;
