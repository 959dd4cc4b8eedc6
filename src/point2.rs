use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Point (or vector) in the plane with coordinates of generic float type T
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Self {
        Point2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// L1 norm |x| + |y| of the point interpreted as a vector
    pub fn manhattan_length(&self) -> T {
        self.x.abs() + self.y.abs()
    }

    /// L1 distance between self and other
    pub fn manhattan_distance(&self, other: Self) -> T {
        (*self - other).manhattan_length()
    }

    /// Returns true if both coordinates are neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // scaling multiplies each coordinate T * T => T
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}
