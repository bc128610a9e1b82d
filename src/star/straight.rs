use super::Point;
use crate::core::math::{round_to_decimals, DEFAULT_DECIMALS};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two straights.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StraightStraightIntr<T>
where
    T: Real,
{
    /// No intersect, straights are parallel and distinct.
    NoIntersect,
    /// The straights intersect at a single point.
    TrueIntersect {
        /// Point of intersection, rounded per [Point] construction rules.
        point: Point<T>,
    },
    /// The straights are coincident (represent the same infinite line), the
    /// intersection is the whole line.
    Coincident,
}

/// An infinite straight line through two points.
///
/// A straight is either `Sloped`, representable by the linear equation
/// `y = a * x + b`, or `Vertical` at a constant x with undefined slope.
/// Exactly one of the two forms holds, fixed at construction. Which form is
/// chosen depends on whether the two construction points share an x coordinate
/// after rounding; the coefficients themselves are rounded to the same fixed
/// number of decimal places as point coordinates, so comparing them with `==`
/// is exact by construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Straight<T = f64>
where
    T: Real,
{
    /// Non-vertical straight with slope `a` and y-intercept `b`.
    Sloped { a: T, b: T },
    /// Vertical straight at constant `x`.
    Vertical { x: T },
}

impl<T> Straight<T>
where
    T: Real,
{
    /// Construct the straight passing through `v1` and `v2` with coefficients
    /// rounded to [DEFAULT_DECIMALS] decimal places.
    #[inline]
    pub fn from_points(v1: Point<T>, v2: Point<T>) -> Self {
        Self::from_points_with_decimals(v1, v2, DEFAULT_DECIMALS)
    }

    /// Construct the straight passing through `v1` and `v2` with coefficients
    /// rounded to `decimals` decimal places.
    ///
    /// The straight is `Vertical` when `v1.x == v2.x` (point coordinates are
    /// already rounded, the comparison is exact). Two positionally equal
    /// points degenerate to the vertical straight through that position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use star_contours::star::*;
    /// let sloped = Straight::from_points(Point::new(0.0, 1.0), Point::new(1.0, 3.0));
    /// assert_eq!(sloped, Straight::Sloped { a: 2.0, b: 1.0 });
    ///
    /// let vertical = Straight::from_points(Point::new(3.0, 0.0), Point::new(3.0, 1.0));
    /// assert_eq!(vertical, Straight::Vertical { x: 3.0 });
    /// ```
    pub fn from_points_with_decimals(v1: Point<T>, v2: Point<T>, decimals: u32) -> Self {
        if v1.x == v2.x {
            Straight::Vertical { x: v1.x }
        } else {
            let a = round_to_decimals((v2.y - v1.y) / (v2.x - v1.x), decimals);
            let b = round_to_decimals(v1.y - a * v1.x, decimals);
            Straight::Sloped { a, b }
        }
    }

    /// Finds the intersect between this straight and `other`, rounding the
    /// intersection point to [DEFAULT_DECIMALS] decimal places.
    #[inline]
    pub fn intersection(&self, other: &Straight<T>) -> StraightStraightIntr<T> {
        self.intersection_with_decimals(other, DEFAULT_DECIMALS)
    }

    /// Finds the intersect between this straight and `other`.
    ///
    /// # Explanation on result cases `StraightStraightIntr`
    /// ## `NoIntersect`
    /// Either of the following cases:
    /// * Both straights sloped with equal slope but different intercept
    /// * Both straights vertical at different x
    ///
    /// ## `TrueIntersect`
    /// Either of the following cases:
    /// * Both straights sloped with different slopes, solving
    ///   `a1 * x + b1 = a2 * x + b2` for the intersection
    /// * One straight vertical, its constant x substituted into the sloped
    ///   line's equation
    ///
    /// ## `Coincident`
    /// Either of the following cases:
    /// * Both straights sloped with equal slope and intercept
    /// * Both straights vertical at the same x
    ///
    /// # Examples
    ///
    /// ```
    /// # use star_contours::star::*;
    /// // x = 3 intersected with y = 2x + 1
    /// let vertical = Straight::from_points(Point::new(3.0, 0.0), Point::new(3.0, 1.0));
    /// let sloped = Straight::from_points(Point::new(0.0, 1.0), Point::new(1.0, 3.0));
    /// assert_eq!(
    ///     vertical.intersection(&sloped),
    ///     StraightStraightIntr::TrueIntersect { point: Point::new(3.0, 7.0) }
    /// );
    /// ```
    pub fn intersection_with_decimals(
        &self,
        other: &Straight<T>,
        decimals: u32,
    ) -> StraightStraightIntr<T> {
        use StraightStraightIntr::*;

        let (x, y) = match (*self, *other) {
            (Straight::Sloped { a: a1, b: b1 }, Straight::Sloped { a: a2, b: b2 }) => {
                if a1 == a2 {
                    if b1 == b2 {
                        return Coincident;
                    }
                    return NoIntersect;
                }
                let x = (b2 - b1) / (a1 - a2);
                (x, a1 * x + b1)
            }
            (Straight::Vertical { x: x1 }, Straight::Vertical { x: x2 }) => {
                if x1 == x2 {
                    return Coincident;
                }
                return NoIntersect;
            }
            (Straight::Vertical { x }, Straight::Sloped { a, b })
            | (Straight::Sloped { a, b }, Straight::Vertical { x }) => (x, a * x + b),
        };

        TrueIntersect {
            point: Point::new_with_decimals(x, y, decimals),
        }
    }
}
