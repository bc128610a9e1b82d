use super::Vector2;
use crate::core::traits::Real;

/// Default number of decimal places used when rounding point coordinates and
/// straight line coefficients.
pub const DEFAULT_DECIMALS: u32 = 5;

/// Rounds `value` to `decimals` decimal places.
///
/// Coordinates and line coefficients are rounded at every construction point
/// rather than once at final output. Exact `==` checks on already-rounded
/// values (e.g. the vertical form check when constructing a
/// [Straight](crate::star::Straight)) rely on this, otherwise floating point
/// noise from different computation paths makes near-vertical or near-parallel
/// lines misclassify.
///
/// # Examples
///
/// ```
/// # use star_contours::core::math::*;
/// assert_eq!(round_to_decimals(1.000004, 5), 1.0);
/// assert_eq!(round_to_decimals(2.000006, 5), 2.00001);
/// assert_eq!(round_to_decimals(-1.2345, 2), -1.23);
/// ```
#[inline]
pub fn round_to_decimals<T>(value: T, decimals: u32) -> T
where
    T: Real,
{
    let scale = T::from(10.0_f64.powi(decimals as i32)).unwrap();
    (value * scale).round() / scale
}

/// Returns the point on the circle with `radius`, `center`, and `angle` in radians given.
///
/// `angle` is measured clockwise from the positive y axis, an angle of 0 points
/// straight up from the center.
///
/// # Examples
///
/// ```
/// # use star_contours::core::math::*;
/// use std::f64::consts::FRAC_PI_2;
/// let top = point_on_circle(2.0, Vector2::new(0.0, 0.0), 0.0);
/// assert!(top.fuzzy_eq(Vector2::new(0.0, 2.0)));
/// let right = point_on_circle(2.0, Vector2::new(0.0, 0.0), FRAC_PI_2);
/// assert!(right.fuzzy_eq(Vector2::new(2.0, 0.0)));
/// ```
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    center + Vector2::new(s, c).scale(radius)
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}
