use crate::core::actions::colourize::ports::palette::Palette;

/// Piecewise-linear palette over evenly spaced colour stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    stops: &'static [[f64; 3]],
}

impl Gradient {
    /// At least two stops, channels in `[0, 1]`.
    #[must_use]
    pub(crate) const fn new(stops: &'static [[f64; 3]]) -> Self {
        assert!(stops.len() >= 2, "a gradient needs at least two stops");
        Self { stops }
    }
}

impl Palette for Gradient {
    fn sample(&self, t: f64) -> Option<[f64; 3]> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let index = (scaled as usize).min(segments - 1);
        let frac = scaled - index as f64;

        let from = self.stops[index];
        let to = self.stops[index + 1];

        Some([
            from[0] + (to[0] - from[0]) * frac,
            from[1] + (to[1] - from[1]) * frac,
            from[2] + (to[2] - from[2]) * frac,
        ])
    }
}

/// Matplotlib `inferno`, sampled at t = 0.0, 0.1, ..., 1.0.
pub const INFERNO: [[f64; 3]; 11] = [
    [0.001462, 0.000466, 0.013866],
    [0.087411, 0.044556, 0.224813],
    [0.258234, 0.038571, 0.406485],
    [0.416331, 0.090203, 0.432943],
    [0.578304, 0.148039, 0.404411],
    [0.735683, 0.215906, 0.330245],
    [0.865006, 0.316822, 0.226055],
    [0.954506, 0.468744, 0.099874],
    [0.987622, 0.645320, 0.039886],
    [0.964394, 0.843848, 0.273391],
    [0.988362, 0.998364, 0.644924],
];

/// Matplotlib `viridis`, sampled at t = 0.0, 0.1, ..., 1.0.
pub const VIRIDIS: [[f64; 3]; 11] = [
    [0.267004, 0.004874, 0.329415],
    [0.282623, 0.140926, 0.457517],
    [0.253935, 0.265254, 0.529983],
    [0.206756, 0.371758, 0.553117],
    [0.163625, 0.471133, 0.558148],
    [0.127568, 0.566949, 0.550556],
    [0.134692, 0.658636, 0.517649],
    [0.266941, 0.748751, 0.440573],
    [0.477504, 0.821444, 0.318195],
    [0.741388, 0.873449, 0.149561],
    [0.993248, 0.906157, 0.143936],
];

/// Matplotlib `magma`, sampled at t = 0.0, 0.1, ..., 1.0.
pub const MAGMA: [[f64; 3]; 11] = [
    [0.001462, 0.000466, 0.013866],
    [0.078815, 0.054184, 0.211667],
    [0.232077, 0.059889, 0.437695],
    [0.390384, 0.100379, 0.501864],
    [0.550287, 0.161158, 0.505719],
    [0.716387, 0.214982, 0.475290],
    [0.868793, 0.287728, 0.409303],
    [0.967671, 0.439703, 0.359810],
    [0.994738, 0.624350, 0.427397],
    [0.995131, 0.812462, 0.572299],
    [0.987053, 0.991438, 0.749504],
];

// black -> red -> orange -> yellow -> white
pub const FIRE: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 165.0 / 255.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
];

pub const BLUE_WHITE: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.25],
    [0.1, 0.3, 0.9],
    [0.6, 0.8, 1.0],
    [1.0, 1.0, 1.0],
];
