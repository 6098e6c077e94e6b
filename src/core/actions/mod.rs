pub mod build_grid;
pub mod colourize;
pub mod render_mandelbrot;
