use crate::core::fractals::mandelbrot::palettes::gradient::{
    BLUE_WHITE, FIRE, Gradient, INFERNO, MAGMA, VIRIDIS,
};
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Gradient {
    match kind {
        PaletteKind::Inferno => Gradient::new(&INFERNO),
        PaletteKind::Viridis => Gradient::new(&VIRIDIS),
        PaletteKind::Magma => Gradient::new(&MAGMA),
        PaletteKind::Fire => Gradient::new(&FIRE),
        PaletteKind::BlueWhite => Gradient::new(&BLUE_WHITE),
    }
}
