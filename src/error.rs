use thiserror::Error;

/// Reasons a [`SamplerConfig`](crate::SamplerConfig) is rejected before sampling starts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SamplerError {
    #[error("segment exponent range {min}..={max} is empty")]
    InvalidExponentRange { min: u32, max: u32 },

    #[error("segment exponent {0} exceeds the supported maximum of {max}", max = crate::config::MAX_EXPONENT)]
    ExponentTooLarge(u32),

    #[error("coordinate range [{low}, {high}) is empty or not finite")]
    InvalidCoordinateRange { low: f64, high: f64 },

    #[error("minimum segment width {0} must be finite and non-negative")]
    InvalidSegmentWidth(f64),

    #[error("at least one trial per granularity is required")]
    ZeroTrials,
}

pub type Result<T> = core::result::Result<T, SamplerError>;
