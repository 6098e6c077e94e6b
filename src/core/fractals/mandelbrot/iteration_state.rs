use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;

/// Per-point iteration state, co-indexed with the grid it was started from.
///
/// A point is either active, with `z` still being iterated, or escaped, in
/// which case its `z` and escape count are frozen at the step it first left
/// the radius-2 disc. Escape counts start at `max_iterations`, the value left
/// on points that never escape.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationState {
    resolution: Resolution,
    max_iterations: u32,
    z: Vec<Complex>,
    escape_counts: Vec<u32>,
    escaped: Vec<bool>,
    active: usize,
    steps_taken: u32,
}

impl IterationState {
    pub(crate) fn new(resolution: Resolution, max_iterations: u32) -> Self {
        let len = resolution.pixel_count();

        Self {
            resolution,
            max_iterations,
            z: vec![Complex::ZERO; len],
            escape_counts: vec![max_iterations; len],
            escaped: vec![false; len],
            active: len,
            steps_taken: 0,
        }
    }

    pub(crate) fn columns_mut(&mut self) -> (&mut [Complex], &mut [u32], &mut [bool]) {
        (&mut self.z, &mut self.escape_counts, &mut self.escaped)
    }

    pub(crate) fn record_step(&mut self, newly_escaped: usize) {
        self.active -= newly_escaped;
        self.steps_taken += 1;
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn z(&self) -> &[Complex] {
        &self.z
    }

    #[must_use]
    pub fn escape_counts(&self) -> &[u32] {
        &self.escape_counts
    }

    #[must_use]
    pub fn escaped(&self) -> &[bool] {
        &self.escaped
    }

    #[must_use]
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn escaped_count(&self) -> usize {
        self.escaped.len() - self.active
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.active == 0 || self.steps_taken >= self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_all_active() {
        let state = IterationState::new(Resolution::new(4, 3).unwrap(), 20);

        assert_eq!(state.z(), vec![Complex::ZERO; 12].as_slice());
        assert_eq!(state.escape_counts(), vec![20; 12].as_slice());
        assert!(state.escaped().iter().all(|&e| !e));
        assert_eq!(state.active_count(), 12);
        assert_eq!(state.escaped_count(), 0);
        assert_eq!(state.steps_taken(), 0);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_record_step_tracks_counts() {
        let mut state = IterationState::new(Resolution::new(2, 2).unwrap(), 3);

        state.record_step(1);
        state.record_step(0);

        assert_eq!(state.active_count(), 3);
        assert_eq!(state.escaped_count(), 1);
        assert_eq!(state.steps_taken(), 2);
        assert!(!state.is_finished());

        state.record_step(0);
        assert!(state.is_finished());
    }

    #[test]
    fn test_finished_once_nothing_is_active() {
        let mut state = IterationState::new(Resolution::new(1, 1).unwrap(), 100);

        state.record_step(1);

        assert!(state.is_finished());
    }
}
