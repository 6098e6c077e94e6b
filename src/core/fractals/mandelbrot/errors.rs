use thiserror::Error;

/// Why a palette sample was refused.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PaletteFault {
    #[error("palette rejected the input")]
    RejectedInput,
    #[error("channel {channel} is {value}, expected a value in [0, 1]")]
    ChannelOutOfRange { channel: usize, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error(
        "region bounds must satisfy min < max on both axes: real [{real_min}, {real_max}], imag [{imag_min}, {imag_max}]"
    )]
    InvalidRegion {
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    },

    #[error("resolution must be at least 1x1 pixels: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("invalid palette at t = {t}: {fault}")]
    InvalidPalette { t: f64, fault: PaletteFault },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("expected {expected} values for the resolution, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("escape count {count} exceeds maximum iterations {max_iterations}")]
    IterationsExceedMax { count: u32, max_iterations: u32 },
}
