//! Experiment configuration.
//!
//! `SamplerConfig::default()` is the reference experiment: 100 random curves for
//! each of 4, 8, 16, 32 and 64 segments, coordinates uniform in [-50000, 50000),
//! reference basis, magnitude chord, accumulated steps and a width filter of 5.
use super::coordinates::{COORDINATE_HIGH, COORDINATE_LOW};
use super::cubic_bezier::Basis;
use super::error::{Result, SamplerError};
use super::sweep::{ChordMode, StepMode, SweepOptions};

/// Largest accepted segment exponent
pub const MAX_EXPONENT: u32 = 16;

pub const DEFAULT_TRIALS: usize = 100;
pub const DEFAULT_MIN_EXPONENT: u32 = 2;
pub const DEFAULT_MAX_EXPONENT: u32 = 6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Smallest granularity is `2^min_exponent` segments
    pub min_exponent: u32,
    /// Largest granularity is `2^max_exponent` segments
    pub max_exponent: u32,
    /// Random curves per granularity
    pub trials: usize,
    pub coordinate_low: f64,
    pub coordinate_high: f64,
    /// Seed for a reproducible run, the thread rng is used when absent
    pub seed: Option<u64>,
    pub sweep: SweepOptions,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            min_exponent: DEFAULT_MIN_EXPONENT,
            max_exponent: DEFAULT_MAX_EXPONENT,
            trials: DEFAULT_TRIALS,
            coordinate_low: COORDINATE_LOW,
            coordinate_high: COORDINATE_HIGH,
            seed: None,
            sweep: SweepOptions::default(),
        }
    }
}

impl SamplerConfig {
    pub fn with_exponents(mut self, min: u32, max: u32) -> Self {
        self.min_exponent = min;
        self.max_exponent = max;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_coordinate_range(mut self, low: f64, high: f64) -> Self {
        self.coordinate_low = low;
        self.coordinate_high = high;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sweep(mut self, sweep: SweepOptions) -> Self {
        self.sweep = sweep;
        self
    }

    pub fn with_basis(mut self, basis: Basis) -> Self {
        self.sweep.basis = basis;
        self
    }

    pub fn with_step_mode(mut self, step_mode: StepMode) -> Self {
        self.sweep.step_mode = step_mode;
        self
    }

    pub fn with_chord_mode(mut self, chord_mode: ChordMode) -> Self {
        self.sweep.chord_mode = chord_mode;
        self
    }

    pub fn with_min_segment_width(mut self, width: f64) -> Self {
        self.sweep.min_segment_width = width;
        self
    }

    /// Segment counts visited by a run, in increasing order
    pub fn segment_counts(&self) -> impl Iterator<Item = usize> {
        (self.min_exponent..=self.max_exponent).map(|p| 1usize << p)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_exponent > self.max_exponent {
            return Err(SamplerError::InvalidExponentRange {
                min: self.min_exponent,
                max: self.max_exponent,
            });
        }
        if self.max_exponent > MAX_EXPONENT {
            return Err(SamplerError::ExponentTooLarge(self.max_exponent));
        }
        if self.trials == 0 {
            return Err(SamplerError::ZeroTrials);
        }
        let (low, high) = (self.coordinate_low, self.coordinate_high);
        // the width must be finite too, the uniform draw scales by it
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(SamplerError::InvalidCoordinateRange { low, high });
        }
        let width = self.sweep.min_segment_width;
        if !width.is_finite() || width < 0.0 {
            return Err(SamplerError::InvalidSegmentWidth(width));
        }
        Ok(())
    }
}
