use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::iteration_state::IterationState;

/// `|z| > 2`, compared squared.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// How a single iteration step is spread over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Execution {
    #[default]
    Serial,
    /// Each step is applied to all points on rayon's thread pool.
    Parallel,
}

impl Execution {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for Execution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Advances one point by one step. Returns `true` if it escaped on this step.
#[inline]
fn advance_point(z: &mut Complex, count: &mut u32, escaped: &mut bool, c: Complex, step: u32) -> bool {
    if *escaped {
        return false;
    }

    *z = z.square() + c;

    if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
        *count = step;
        *escaped = true;
        return true;
    }

    false
}

/// Escape-time iteration of `z -> z² + c` over a whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeEngine {
    max_iterations: u32,
    execution: Execution,
}

impl EscapeEngine {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            execution: Execution::Serial,
        })
    }

    #[must_use]
    pub fn with_execution(self, execution: Execution) -> Self {
        Self { execution, ..self }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// `z = 0`, every count at `max_iterations`, nothing escaped.
    #[must_use]
    pub fn initial_state(&self, grid: &Grid) -> IterationState {
        IterationState::new(grid.resolution(), self.max_iterations)
    }

    /// Applies the next iteration step to every active point of `state`.
    ///
    /// Escaped points are skipped entirely, so their `z` and escape count
    /// never change again. Returns how many points escaped on this step; a
    /// finished state is left untouched and yields 0.
    ///
    /// `state` must have been started from a grid of the same resolution,
    /// otherwise `ShapeMismatch` is returned and nothing is updated.
    pub fn step(
        &self,
        grid: &Grid,
        state: &mut IterationState,
    ) -> Result<usize, MandelbrotError> {
        if grid.resolution() != state.resolution() {
            return Err(MandelbrotError::ShapeMismatch {
                expected: state.resolution().pixel_count(),
                actual: grid.len(),
            });
        }

        Ok(self.advance(grid, state))
    }

    fn advance(&self, grid: &Grid, state: &mut IterationState) -> usize {
        if state.is_finished() {
            return 0;
        }

        let step = state.steps_taken();
        let samples = grid.samples();
        let (z, counts, escaped) = state.columns_mut();

        let newly_escaped = match self.execution {
            Execution::Serial => z
                .iter_mut()
                .zip(counts.iter_mut())
                .zip(escaped.iter_mut())
                .zip(samples)
                .map(|(((z, count), escaped), &c)| advance_point(z, count, escaped, c, step))
                .filter(|&escaped_now| escaped_now)
                .count(),
            Execution::Parallel => z
                .par_iter_mut()
                .zip(counts.par_iter_mut())
                .zip(escaped.par_iter_mut())
                .zip(samples.par_iter())
                .map(|(((z, count), escaped), &c)| advance_point(z, count, escaped, c, step))
                .filter(|&escaped_now| escaped_now)
                .count(),
        };

        state.record_step(newly_escaped);
        trace!(step, newly_escaped, active = state.active_count(), "iteration step");

        newly_escaped
    }

    /// Iterates until every point has escaped or the budget is spent.
    ///
    /// Stopping early once nothing is active gives the same result as running
    /// all `max_iterations` steps, since later steps would skip every point.
    #[must_use]
    pub fn run(&self, grid: &Grid) -> IterationState {
        let mut state = self.initial_state(grid);

        while !state.is_finished() {
            self.advance(grid, &mut state);
        }

        debug!(
            steps = state.steps_taken(),
            escaped = state.escaped_count(),
            stable = state.active_count(),
            execution = %self.execution,
            "escape iteration finished"
        );

        state
    }
}
