//! Sources for the control point coordinates of the sampled curves.
use rand::Rng;

use super::cubic_bezier::CubicBezier;
use super::point2::Point2;

/// Lower bound (inclusive) of randomly drawn coordinates
pub const COORDINATE_LOW: f64 = -50000.0;
/// Upper bound (exclusive) of randomly drawn coordinates
pub const COORDINATE_HIGH: f64 = 50000.0;

/// Anything that hands out one coordinate per call.
pub trait CoordinateSource {
    fn coordinate(&mut self) -> f64;
}

/// Coordinates uniformly distributed in `[low, high)`
#[derive(Debug)]
pub struct UniformCoordinates<R> {
    rng: R,
    low: f64,
    high: f64,
}

impl<R: Rng> UniformCoordinates<R> {
    /// Panics on the first draw if `low >= high`; [`SamplerConfig::validate`](crate::SamplerConfig::validate)
    /// rejects such bounds.
    pub fn new(rng: R, low: f64, high: f64) -> Self {
        UniformCoordinates { rng, low, high }
    }

    /// Uniform coordinates in `[-50000, 50000)`
    pub fn reference(rng: R) -> Self {
        Self::new(rng, COORDINATE_LOW, COORDINATE_HIGH)
    }
}

impl<R: Rng> CoordinateSource for UniformCoordinates<R> {
    fn coordinate(&mut self) -> f64 {
        self.rng.gen_range(self.low..self.high)
    }
}

/// Returns the same coordinate on every call, every curve it builds collapses its
/// control points onto one spot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConstantCoordinates(pub f64);

impl CoordinateSource for ConstantCoordinates {
    fn coordinate(&mut self) -> f64 {
        self.0
    }
}

fn random_point<S: CoordinateSource + ?Sized>(source: &mut S) -> Point2<f64> {
    let x = source.coordinate();
    let y = source.coordinate();
    Point2::new(x, y)
}

/// Build a curve from eight independent draws: start, ctrl1, ctrl2, end, x before y
pub fn random_curve<S: CoordinateSource + ?Sized>(source: &mut S) -> CubicBezier<f64> {
    let start = random_point(source);
    let ctrl1 = random_point(source);
    let ctrl2 = random_point(source);
    let end = random_point(source);
    CubicBezier::new(start, ctrl1, ctrl2, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Counts up from zero so the draw order is visible in the curve
    struct Counter(f64);

    impl CoordinateSource for Counter {
        fn coordinate(&mut self) -> f64 {
            let value = self.0;
            self.0 += 1.0;
            value
        }
    }

    #[test]
    fn coordinates_stay_in_range() {
        let mut source = UniformCoordinates::reference(StdRng::seed_from_u64(1));
        for _ in 0..100_000 {
            let c = source.coordinate();
            assert!(c >= COORDINATE_LOW && c < COORDINATE_HIGH, "{}", c);
        }
    }

    #[test]
    fn coordinates_cover_both_signs() {
        let mut source = UniformCoordinates::reference(StdRng::seed_from_u64(2));
        let draws: Vec<f64> = (0..1000).map(|_| source.coordinate()).collect();
        assert!(draws.iter().any(|&c| c < -25000.0));
        assert!(draws.iter().any(|&c| c > 25000.0));
    }

    #[test]
    fn curve_takes_eight_draws_in_order() {
        let mut source = Counter(0.0);
        let curve = random_curve(&mut source);
        assert_eq!(
            curve.control_points(),
            [
                Point2::new(0.0, 1.0),
                Point2::new(2.0, 3.0),
                Point2::new(4.0, 5.0),
                Point2::new(6.0, 7.0),
            ]
        );
        assert_eq!(source.coordinate(), 8.0);
    }

    #[test]
    fn constant_source_builds_a_point() {
        let curve = random_curve(&mut ConstantCoordinates(50000.0));
        assert!(curve.is_a_point());
        assert_eq!(curve.start(), Point2::new(50000.0, 50000.0));
    }

    #[test]
    fn random_curves_are_finite() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut source = UniformCoordinates::reference(&mut rng);
        for _ in 0..1000 {
            assert!(random_curve(&mut source).is_finite());
        }
    }
}
