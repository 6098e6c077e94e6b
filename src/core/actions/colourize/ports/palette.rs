/// Maps a normalised escape speed `t` in `[0, 1]` to unit-interval RGB.
///
/// Returning `None` means the palette does not accept `t`.
pub trait Palette: Send + Sync {
    fn sample(&self, t: f64) -> Option<[f64; 3]>;
}

impl<F> Palette for F
where
    F: Fn(f64) -> Option<[f64; 3]> + Send + Sync,
{
    #[inline]
    fn sample(&self, t: f64) -> Option<[f64; 3]> {
        self(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_palette_delegates_to_closure() {
        let grey = |t: f64| Some([t, t, t]);

        assert_eq!(grey.sample(0.25), Some([0.25, 0.25, 0.25]));
    }

    #[test]
    fn closure_palette_can_reject_input() {
        let picky = |t: f64| (t < 0.5).then_some([0.0, 0.0, 0.0]);

        assert!(picky.sample(0.1).is_some());
        assert!(picky.sample(0.9).is_none());
    }
}
