use crate::core::math::{round_to_decimals, Vector2, DEFAULT_DECIMALS};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in cartesian coordinates.
///
/// Coordinates are rounded to a fixed number of decimal places at construction
/// time. Carrying the exact floating point values around leads to anomalies in
/// downstream exact comparisons (e.g. a vertical chord not being treated as
/// vertical because two x coordinates differ in the last few bits), so every
/// constructor applies [round_to_decimals] to both coordinates. Points are
/// never mutated, shifted positions are produced as new points with
/// [Point::moved].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point<T = f64> {
    /// X coordinate position for the point.
    pub x: T,
    /// Y coordinate position for the point.
    pub y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new point with coordinates rounded to [DEFAULT_DECIMALS]
    /// decimal places.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::new_with_decimals(x, y, DEFAULT_DECIMALS)
    }

    /// Create a new point with coordinates rounded to `decimals` decimal places.
    ///
    /// # Examples
    ///
    /// ```
    /// # use star_contours::star::*;
    /// let p = Point::new_with_decimals(1.000004, 2.000006, 5);
    /// assert_eq!(p, Point::new(1.0, 2.00001));
    /// ```
    #[inline]
    pub fn new_with_decimals(x: T, y: T, decimals: u32) -> Self {
        Point {
            x: round_to_decimals(x, decimals),
            y: round_to_decimals(y, decimals),
        }
    }

    /// Gives a new point shifted from the one in hand by the x and y distances
    /// given, with coordinates rounded to [DEFAULT_DECIMALS] decimal places.
    #[inline]
    pub fn moved(&self, x_distance: T, y_distance: T) -> Self {
        Point::new(self.x + x_distance, self.y + y_distance)
    }

    /// Same as [Point::moved] with explicit rounding precision.
    #[inline]
    pub fn moved_with_decimals(&self, x_distance: T, y_distance: T, decimals: u32) -> Self {
        Point::new_with_decimals(self.x + x_distance, self.y + y_distance, decimals)
    }

    /// Construct a point using a 2D vector as the position, with coordinates
    /// rounded to [DEFAULT_DECIMALS] decimal places.
    #[inline]
    pub fn from_vector2(v: Vector2<T>) -> Self {
        Point::new(v.x, v.y)
    }

    /// Same as [Point::from_vector2] with explicit rounding precision.
    #[inline]
    pub fn from_vector2_with_decimals(v: Vector2<T>, decimals: u32) -> Self {
        Point::new_with_decimals(v.x, v.y, decimals)
    }

    /// Return the position as a 2D vector for use with the math layer.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
