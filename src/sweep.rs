//! Error sweep of a single curve.
//!
//! The curve's parameter domain is cut into `segments` equal intervals. Each interval
//! is replaced by a straight line through its end points and the line is compared
//! with the curve at `segments` interior sample points. The error of a sample is the
//! L1 deviation between the curve point and the line point divided by the L1 extent
//! of the interval's chord.
use log::trace;

use super::cubic_bezier::{Basis, CubicBezier};
use super::point2::Point2;
use super::sampler::ErrorAccumulator;

/// Segments whose L1 extent does not exceed this are left out of the statistic
pub const DEFAULT_MIN_SEGMENT_WIDTH: f64 = 5.0;

/// How the sweep parameters t1, t2 and sub_t advance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StepMode {
    /// Repeatedly add `step` and stop once the value reaches 1.
    /// Rounding drift can add or drop a step for steps that are not powers of two.
    #[default]
    Accumulate,
    /// Compute each value as `index * step` for `index` in `0..segments`.
    Indexed,
}

/// Which vector the straight-line approximation walks along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ChordMode {
    /// `(|x2 - x1|, |y2 - y1|)`: matches the chord only when the segment runs
    /// towards +x and +y. Kept as default to reproduce the published numbers.
    #[default]
    Magnitude,
    /// `(x2 - x1, y2 - y1)`: the actual chord of the segment.
    Signed,
}

/// Knobs of the sweep, the defaults reproduce the reference experiment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepOptions {
    pub basis: Basis,
    pub step_mode: StepMode,
    pub chord_mode: ChordMode,
    pub min_segment_width: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions {
            basis: Basis::Reference,
            step_mode: StepMode::Accumulate,
            chord_mode: ChordMode::Magnitude,
            min_segment_width: DEFAULT_MIN_SEGMENT_WIDTH,
        }
    }
}

/// Parameter values visited by one sweep level: either accumulated or indexed.
struct Steps {
    mode: StepMode,
    step: f64,
    segments: usize,
    index: usize,
    current: f64,
}

impl Steps {
    fn new(mode: StepMode, step: f64, segments: usize) -> Self {
        Steps {
            mode,
            step,
            segments,
            index: 0,
            current: 0.0,
        }
    }
}

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self.mode {
            StepMode::Accumulate => {
                if self.current < 1.0 {
                    let value = self.current;
                    self.current += self.step;
                    Some(value)
                } else {
                    None
                }
            }
            StepMode::Indexed => {
                if self.index < self.segments {
                    let value = self.index as f64 * self.step;
                    self.index += 1;
                    Some(value)
                } else {
                    None
                }
            }
        }
    }
}

/// Sweep `curve` with `segments` intervals and fold every significant sample error
/// into `acc`.
pub fn sweep_into(
    curve: &CubicBezier<f64>,
    segments: usize,
    options: &SweepOptions,
    acc: &mut ErrorAccumulator,
) {
    let step = 1.0 / segments as f64;
    // t2 runs as its own accumulator, one step ahead of t1
    let mut t2 = step;
    for (i, t1) in Steps::new(options.step_mode, step, segments).enumerate() {
        if options.step_mode == StepMode::Indexed {
            t2 = (i + 1) as f64 * step;
        }

        let p1 = curve.eval_with(t1, options.basis);
        let p2 = curve.eval_with(t2, options.basis);

        for sub_t in Steps::new(options.step_mode, step, segments) {
            acc.observe();
            let actual = curve.eval_with(t1 + sub_t * step, options.basis);
            if let Some(error) = sample_error(p1, p2, actual, sub_t, options) {
                acc.record(error);
            }
        }

        if options.step_mode == StepMode::Accumulate {
            t2 += step;
        }
    }
    trace!("swept {} segments, running max {}", segments, acc.max_error());
}

/// Largest relative error of a single curve at the given granularity
pub fn max_segment_error(curve: &CubicBezier<f64>, segments: usize, options: &SweepOptions) -> f64 {
    let mut acc = ErrorAccumulator::new();
    sweep_into(curve, segments, options, &mut acc);
    acc.max_error()
}

/// Relative error of one sample of a segment from `p1` to `p2` against the curve point `actual`.
/// Returns None when the segment is too short to count.
pub fn sample_error(
    p1: Point2<f64>,
    p2: Point2<f64>,
    actual: Point2<f64>,
    sub_t: f64,
    options: &SweepOptions,
) -> Option<f64> {
    let delta = p2 - p1;
    let seg_width = delta.manhattan_length();
    // NaN widths fail this test as well
    if !(seg_width > options.min_segment_width) {
        return None;
    }
    let direction = match options.chord_mode {
        ChordMode::Magnitude => delta.abs(),
        ChordMode::Signed => delta,
    };
    Some(actual.manhattan_distance(p1 + direction * sub_t) / seg_width)
}
