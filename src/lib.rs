//! Monte Carlo estimate of how far a cubic Bézier curve strays from its
//! flattening into a fixed number of equal-parameter line segments.
//!
//! For each segment count `2^p` a [`Sampler`] draws random curves, sweeps every
//! segment against the curve and keeps the largest relative error seen:
//!
//! ```rust
//! use bezier_stats::{Sampler, SamplerConfig};
//!
//! let sampler = Sampler::new(SamplerConfig::default().with_seed(1).with_trials(5)).unwrap();
//! for report in sampler.run().iter() {
//!     println!("{}", report);
//! }
//! ```
//!
//! The defaults reproduce the reference experiment including its two quirks,
//! the cubic blend without binomial factors ([`Basis::Reference`]) and the
//! line approximation along |dx|, |dy| ([`ChordMode::Magnitude`]).

pub mod config;
pub mod coordinates;
pub mod cubic_bezier;
pub mod error;
pub mod point2;
pub mod sampler;
pub mod sweep;

pub use config::SamplerConfig;
pub use coordinates::{random_curve, ConstantCoordinates, CoordinateSource, UniformCoordinates};
pub use cubic_bezier::{Basis, CubicBezier};
pub use error::SamplerError;
pub use point2::Point2;
pub use sampler::{ErrorAccumulator, GranularityReport, Reports, Sampler};
pub use sweep::{max_segment_error, sweep_into, ChordMode, StepMode, SweepOptions};
