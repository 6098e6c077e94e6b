use crate::core::actions::colourize::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::data::colour_field::{ColourField, ColourFieldData};
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::{MandelbrotError, PaletteFault};

/// Samples `palette` at `t` and checks the result is a usable colour.
fn sample_checked<P: Palette + ?Sized>(palette: &P, t: f64) -> Result<Colour, MandelbrotError> {
    let channels = palette.sample(t).ok_or(MandelbrotError::InvalidPalette {
        t,
        fault: PaletteFault::RejectedInput,
    })?;

    if let Some((channel, &value)) = channels
        .iter()
        .enumerate()
        .find(|(_, value)| !(0.0..=1.0).contains(*value))
    {
        return Err(MandelbrotError::InvalidPalette {
            t,
            fault: PaletteFault::ChannelOutOfRange { channel, value },
        });
    }

    Ok(Colour::from_unit_rgb(channels))
}

/// Colours escape counts with `palette`.
///
/// Points that never escaped (`count == max_iterations`) are black. Every
/// other point gets `palette(count / max_iterations)`. The palette is probed
/// at both ends of `[0, 1]` before any pixel is mapped, and nothing is
/// returned unless every pixel mapped cleanly.
pub fn colourize<P: Palette + ?Sized>(
    escape_counts: &[u32],
    resolution: Resolution,
    max_iterations: u32,
    palette: &P,
) -> Result<ColourField, MandelbrotError> {
    if max_iterations == 0 {
        return Err(MandelbrotError::ZeroMaxIterations);
    }

    if escape_counts.len() != resolution.pixel_count() {
        return Err(MandelbrotError::ShapeMismatch {
            expected: resolution.pixel_count(),
            actual: escape_counts.len(),
        });
    }

    sample_checked(palette, 0.0)?;
    sample_checked(palette, 1.0)?;

    let mut buffer: ColourFieldData = Vec::with_capacity(escape_counts.len() * 3);

    for &count in escape_counts {
        let Colour { r, g, b } = match count {
            c if c > max_iterations => {
                return Err(MandelbrotError::IterationsExceedMax {
                    count,
                    max_iterations,
                });
            }
            c if c == max_iterations => Colour::BLACK,
            _ => sample_checked(palette, f64::from(count) / f64::from(max_iterations))?,
        };

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    ColourField::from_data(resolution, buffer)
}
