use serde::Deserialize;

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Raw `[region]` table; bounds left out keep the default view's values.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RegionBounds {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

/// Rectangle of the complex plane, `min < max` on both axes.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RegionBounds")]
pub struct Region {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

fn is_ordered_span(min: f64, max: f64) -> bool {
    min.is_finite() && max.is_finite() && min < max
}

impl Region {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, MandelbrotError> {
        if !is_ordered_span(real_min, real_max) || !is_ordered_span(imag_min, imag_max) {
            return Err(MandelbrotError::InvalidRegion {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

}

/// The classic full view of the set.
impl Default for Region {
    fn default() -> Self {
        Self {
            real_min: -2.0,
            real_max: 1.0,
            imag_min: -1.2,
            imag_max: 1.2,
        }
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        let region = Region::default();

        Self {
            real_min: region.real_min,
            real_max: region.real_max,
            imag_min: region.imag_min,
            imag_max: region.imag_max,
        }
    }
}

impl TryFrom<RegionBounds> for Region {
    type Error = MandelbrotError;

    fn try_from(bounds: RegionBounds) -> Result<Self, Self::Error> {
        Self::new(
            bounds.real_min,
            bounds.real_max,
            bounds.imag_min,
            bounds.imag_max,
        )
    }
}
