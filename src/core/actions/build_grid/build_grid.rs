use tracing::debug;

use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::linspace::linspace;

/// Samples `region` on a `width` x `height` lattice.
///
/// Column `col` holds the `col`-th of `width` evenly spaced real values and
/// row `row` the `row`-th of `height` evenly spaced imaginary values, both
/// spans inclusive of their endpoints.
pub fn build_grid(region: Region, width: u32, height: u32) -> Result<Grid, MandelbrotError> {
    let resolution = Resolution::new(width, height)?;
    let reals = linspace(region.real_min(), region.real_max(), width as usize);
    let imags = linspace(region.imag_min(), region.imag_max(), height as usize);

    let samples: Vec<Complex> = imags
        .iter()
        .flat_map(|&imag| reals.iter().map(move |&real| Complex::new(real, imag)))
        .collect();

    debug!(width, height, samples = samples.len(), "built sample grid");

    Ok(Grid::from_parts(region, resolution, samples))
}
