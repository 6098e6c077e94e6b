use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const CHANNELS: usize = 3;

pub type ColourFieldData = Vec<u8>;

/// Packed RGB8 pixels, row-major, row 0 at the bottom edge (`imag_min`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourField {
    resolution: Resolution,
    data: ColourFieldData,
}

impl ColourField {
    pub fn from_data(resolution: Resolution, data: ColourFieldData) -> Result<Self, MandelbrotError> {
        let expected = resolution.pixel_count() * CHANNELS;

        if data.len() != expected {
            return Err(MandelbrotError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { resolution, data })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn pixel(&self, row: u32, col: u32) -> Option<Colour> {
        let index = self.resolution.index(row, col)? * CHANNELS;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    /// Rows ordered for a raster image: highest imaginary value first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u8]> {
        self.data
            .chunks_exact(self.resolution.width() as usize * CHANNELS)
            .rev()
    }

    #[must_use]
    pub fn to_top_down_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len());
        for row in self.rows_top_down() {
            bytes.extend_from_slice(row);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (0,1) green
            0, 0, 255, // (1,0) blue
            255, 255, 0, // (1,1) yellow
        ];

        let field = ColourField::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(field.resolution(), resolution(2, 2));
        assert_eq!(field.as_bytes(), data.as_slice());
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = ColourField::from_data(resolution(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result,
            Err(MandelbrotError::ShapeMismatch {
                expected: 12,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = ColourField::from_data(resolution(2, 2), vec![0; 24]);

        assert_eq!(
            result,
            Err(MandelbrotError::ShapeMismatch {
                expected: 12,
                actual: 24
            })
        );
    }

    #[test]
    fn test_pixel_lookup() {
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let field = ColourField::from_data(resolution(2, 2), data).unwrap();

        assert_eq!(field.pixel(0, 1), Some(Colour { r: 4, g: 5, b: 6 }));
        assert_eq!(field.pixel(1, 0), Some(Colour { r: 7, g: 8, b: 9 }));
        assert_eq!(field.pixel(2, 0), None);
    }

    #[test]
    fn test_rows_top_down_reverses_row_order() {
        let data: Vec<u8> = vec![
            1, 1, 1, 2, 2, 2, // row 0
            3, 3, 3, 4, 4, 4, // row 1
            5, 5, 5, 6, 6, 6, // row 2
        ];
        let field = ColourField::from_data(resolution(2, 3), data).unwrap();

        let rows: Vec<&[u8]> = field.rows_top_down().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &[5, 5, 5, 6, 6, 6]);
        assert_eq!(rows[2], &[1, 1, 1, 2, 2, 2]);
        assert_eq!(
            field.to_top_down_bytes(),
            vec![5, 5, 5, 6, 6, 6, 3, 3, 3, 4, 4, 4, 1, 1, 1, 2, 2, 2]
        );
    }
}
