use num_traits::Float;

use super::point2::Point2;

/// Weighting used to blend the four control points of a [`CubicBezier`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Basis {
    /// `(1 - t)³ * start + (1 - t)² * t * ctrl1 + (1 - t) * t² * ctrl2 + t³ * end`
    ///
    /// This drops the binomial factor 3 of the inner terms. The weights no longer
    /// sum to one for 0 < t < 1, so the curve is not affine invariant, but the
    /// published error tables were produced with it and it stays the default.
    #[default]
    Reference,
    /// Textbook Bernstein weights
    /// `(1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * (1 - t) * t² * ctrl2 + t³ * end`
    Bernstein,
}

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// Points are evaluated over t ∈ [0..1]; t outside that interval is not rejected,
/// the polynomial is simply evaluated there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<T> {
    pub(crate) start: Point2<T>,
    pub(crate) ctrl1: Point2<T>,
    pub(crate) ctrl2: Point2<T>,
    pub(crate) end: Point2<T>,
}

impl<T> CubicBezier<T>
where
    T: Float,
{
    pub fn new(start: Point2<T>, ctrl1: Point2<T>, ctrl2: Point2<T>, end: Point2<T>) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> Point2<T> {
        self.start
    }

    pub fn end(&self) -> Point2<T> {
        self.end
    }

    pub fn control_points(&self) -> [Point2<T>; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate the curve at t with the [`Basis::Reference`] polynomial
    pub fn eval(&self, t: T) -> Point2<T> {
        self.eval_with(t, Basis::Reference)
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial selected by `basis`
    /// (not numerically stable)
    pub fn eval_with(&self, t: T, basis: Basis) -> Point2<T> {
        let u = T::one() - t;
        match basis {
            Basis::Reference => {
                self.start * u * u * u
                    + self.ctrl1 * u * u * t
                    + self.ctrl2 * u * t * t
                    + self.end * t * t * t
            }
            Basis::Bernstein => {
                let three = T::one() + T::one() + T::one();
                self.start * u * u * u
                    + self.ctrl1 * three * u * u * t
                    + self.ctrl2 * three * u * t * t
                    + self.end * t * t * t
            }
        }
    }

    /// Returns true if all four points coincide exactly
    pub fn is_a_point(&self) -> bool {
        self.start == self.ctrl1 && self.start == self.ctrl2 && self.start == self.end
    }

    pub fn is_finite(&self) -> bool {
        self.control_points().iter().all(Point2::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    /// Evaluate the bernstein curve at t using the numerically stable De Casteljau algorithm
    fn eval_casteljau(bezier: &CubicBezier<f64>, t: f64) -> Point2<f64> {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = bezier.start + (bezier.ctrl1 - bezier.start) * t;
        let ctrl_1bc = bezier.ctrl1 + (bezier.ctrl2 - bezier.ctrl1) * t;
        let ctrl_1cd = bezier.ctrl2 + (bezier.end - bezier.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    fn sample_curve() -> CubicBezier<f64> {
        CubicBezier::new(
            Point2::new(0f64, 1.77f64),
            Point2::new(1.1f64, -1f64),
            Point2::new(4.3f64, 3f64),
            Point2::new(3.2f64, -4f64),
        )
    }

    #[test]
    fn endpoints_are_interpolated_exactly() {
        let bezier = CubicBezier::new(
            Point2::new(-41234.5f64, 17.25),
            Point2::new(3.0, 49999.0),
            Point2::new(-0.125, -3.5),
            Point2::new(12.0, -49000.75),
        );
        for basis in [Basis::Reference, Basis::Bernstein] {
            assert_eq!(bezier.eval_with(0.0, basis), bezier.start());
            assert_eq!(bezier.eval_with(1.0, basis), bezier.end());
        }
        assert_eq!(bezier.eval(0.0), bezier.start());
        assert_eq!(bezier.eval(1.0), bezier.end());
    }

    #[test]
    fn reference_weights_do_not_sum_to_one() {
        // every control point at p: the reference blend at t=0.5 is 4 * (1/8) = 0.5
        let p = Point2::new(8f64, -2f64);
        let bezier = CubicBezier::new(p, p, p, p);
        assert!(bezier.is_a_point());
        assert_eq!(bezier.eval(0.5), Point2::new(4.0, -1.0));
        assert_eq!(bezier.eval_with(0.5, Basis::Bernstein), p);
    }

    #[test]
    fn reference_drops_inner_binomial_factor() {
        // only ctrl1 contributes: reference weight (1-t)²t, bernstein 3(1-t)²t
        let zero = Point2::new(0f64, 0f64);
        let bezier = CubicBezier::new(zero, Point2::new(1.0, 1.0), zero, zero);
        let t = 0.25;
        let reference = bezier.eval_with(t, Basis::Reference);
        let bernstein = bezier.eval_with(t, Basis::Bernstein);
        assert!((reference.x() - 0.140625).abs() < TOLERANCE);
        assert!((bernstein.x() - 3.0 * reference.x()).abs() < TOLERANCE);
    }

    #[test]
    fn out_of_range_parameter_is_evaluated() {
        let bezier = sample_curve();
        let p = bezier.eval(1.0 + 1e-12);
        assert!(p.is_finite());
        assert!(bezier.eval(-0.5).is_finite());
    }

    #[test]
    fn circle_approximation_error() {
        // define closure for unit circle
        let circle = |p: Point2<f64>| -> f64 { (p.x() * p.x() + p.y() * p.y()).sqrt() - 1f64 };

        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let bezier_quadrant_1 = CubicBezier::new(
            Point2::new(0f64, 1f64),
            Point2::new(c, 1f64),
            Point2::new(1f64, c),
            Point2::new(1f64, 0f64),
        );
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let point = bezier_quadrant_1.eval_with(t, Basis::Bernstein);
            assert!(circle(point).abs() <= max_error);
        }
    }

    #[test]
    fn eval_equivalence_casteljau() {
        // direct bernstein evaluation and de casteljau should agree for well defined curves
        let bezier = sample_curve();
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let p1 = bezier.eval_with(t, Basis::Bernstein);
            let p2 = eval_casteljau(&bezier, t);
            assert!(p1.manhattan_distance(p2) < TOLERANCE);
        }
    }
}
