//! Monte Carlo driver: random curves per granularity, one running maximum each.
use core::fmt;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tinyvec::ArrayVec;

use super::config::SamplerConfig;
use super::coordinates::{random_curve, CoordinateSource, UniformCoordinates};
use super::error::Result;
use super::sweep::sweep_into;

/// Upper bound on the number of granularity levels of one run
pub const MAX_LEVELS: usize = 32;

/// Reports of one run, in increasing order of segments
pub type Reports = ArrayVec<[GranularityReport; MAX_LEVELS]>;

/// Running maximum of the relative error for one granularity.
/// Starts at 0 and never decreases.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ErrorAccumulator {
    max_error: f64,
    samples: usize,
    accepted: usize,
}

impl ErrorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a visited sample point, whether or not it passes the width filter
    pub(crate) fn observe(&mut self) {
        self.samples += 1;
    }

    /// Fold in the error of a sample that passed the width filter.
    /// NaN never replaces the current maximum.
    pub fn record(&mut self, error: f64) {
        self.accepted += 1;
        if error > self.max_error {
            self.max_error = error;
        }
    }

    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Number of sample points visited
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of sample points that passed the width filter
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

/// Result line of one granularity
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GranularityReport {
    pub segments: usize,
    pub max_error: f64,
}

impl fmt::Display for GranularityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} segments: {}", self.segments, self.max_error)
    }
}

/// Runs the experiment described by a validated [`SamplerConfig`]
#[derive(Debug, Clone)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Sampler { config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Run all granularities with uniform coordinates from the thread rng,
    /// or from a `StdRng` when the config carries a seed.
    pub fn run(&self) -> Reports {
        match self.config.seed {
            Some(seed) => {
                debug!("seeding sampler with {}", seed);
                self.run_with_rng(&mut StdRng::seed_from_u64(seed))
            }
            None => self.run_with_rng(&mut rand::thread_rng()),
        }
    }

    /// Run all granularities drawing uniform coordinates from `rng`
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Reports {
        let mut source =
            UniformCoordinates::new(rng, self.config.coordinate_low, self.config.coordinate_high);
        self.run_with_source(&mut source)
    }

    /// Run all granularities drawing every coordinate from `source`
    pub fn run_with_source<S: CoordinateSource + ?Sized>(&self, source: &mut S) -> Reports {
        let mut reports = Reports::new();
        for segments in self.config.segment_counts() {
            reports.push(self.run_granularity(segments, source));
        }
        reports
    }

    /// Run all trials for one segment count and report the largest error seen
    pub fn run_granularity<S: CoordinateSource + ?Sized>(
        &self,
        segments: usize,
        source: &mut S,
    ) -> GranularityReport {
        let mut acc = ErrorAccumulator::new();
        for _ in 0..self.config.trials {
            let curve = random_curve(source);
            sweep_into(&curve, segments, &self.config.sweep, &mut acc);
        }

        info!(
            "{} segments: {} trials, {} of {} samples above width {}",
            segments,
            self.config.trials,
            acc.accepted(),
            acc.samples(),
            self.config.sweep.min_segment_width
        );
        if !acc.max_error().is_finite() {
            warn!("{} segments: maximum error is not finite", segments);
        }

        GranularityReport {
            segments,
            max_error: acc.max_error(),
        }
    }
}
