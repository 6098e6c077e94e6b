use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;

/// Row-major lattice of complex samples; row ↔ imaginary, column ↔ real.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    region: Region,
    resolution: Resolution,
    samples: Vec<Complex>,
}

impl Grid {
    pub(crate) fn from_parts(region: Region, resolution: Resolution, samples: Vec<Complex>) -> Self {
        debug_assert_eq!(samples.len(), resolution.pixel_count());

        Self {
            region,
            resolution,
            samples,
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<Complex> {
        self.resolution
            .index(row, col)
            .map(|index| self.samples[index])
    }
}
