/// `count` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// The last value is pinned to `stop` so the far edge of a region is sampled
/// exactly. A single sample sits at `start`.
#[must_use]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // interpolate instead of stepping; `stop - start` can overflow
            let intervals = (count - 1) as f64;
            let mut values: Vec<f64> = (0..count)
                .map(|k| {
                    let f = k as f64 / intervals;
                    start * (1.0 - f) + stop * f
                })
                .collect();
            values[count - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let values = linspace(-2.0, 1.0, 101);

        assert_eq!(values.len(), 101);
        assert_eq!(values[0], -2.0);
        assert_eq!(values[100], 1.0);
    }

    #[test]
    fn test_linspace_center() {
        let values = linspace(-1.0, 1.0, 101);

        assert_eq!(values[50], 0.0);
    }

    #[test]
    fn test_linspace_even_spacing() {
        let values = linspace(0.0, 1.0, 5);

        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_last_value_is_exact_stop() {
        // 0.1 is not representable, so the interpolated value could drift
        let values = linspace(0.0, 0.3, 4);

        assert_eq!(values[3], 0.3);
    }

    #[test]
    fn test_linspace_single_value_is_start() {
        assert_eq!(linspace(-1.2, 1.2, 1), vec![-1.2]);
    }

    #[test]
    fn test_linspace_empty() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_linspace_span_wider_than_f64_range() {
        let values = linspace(-1e308, 1e308, 3);

        assert_eq!(values, vec![-1e308, 0.0, 1e308]);
    }
}
