use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Pixel dimensions of a render, at least one pixel on each side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, MandelbrotError> {
        if width < 1 || height < 1 {
            return Err(MandelbrotError::InvalidResolution { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `(row, col)`, or `None` outside the bounds.
    #[must_use]
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(row as usize * self.width as usize + col as usize)
    }
}
