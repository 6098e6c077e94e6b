#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Quantises unit-interval channels to 8 bits. Channels must already be
    /// finite and inside `[0, 1]`.
    #[must_use]
    pub fn from_unit_rgb([r, g, b]: [f64; 3]) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_rgb_extremes() {
        assert_eq!(Colour::from_unit_rgb([0.0, 0.0, 0.0]), Colour::BLACK);
        assert_eq!(
            Colour::from_unit_rgb([1.0, 1.0, 1.0]),
            Colour {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_from_unit_rgb_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds away from zero
        assert_eq!(
            Colour::from_unit_rgb([0.5, 0.2, 0.001]),
            Colour { r: 128, g: 51, b: 0 }
        );
    }
}
