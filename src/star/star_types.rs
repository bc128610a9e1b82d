//! Supporting public types used in star construction.

use crate::core::math::DEFAULT_DECIMALS;
use crate::core::traits::Real;
use thiserror::Error;

/// Interpretation of the size parameter passed to star construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SizeConvention {
    /// Size is the outer diameter of the star, i.e. the diameter of the
    /// circumscribed circle the corner vertices lie on. This is the canonical
    /// default.
    OuterDiameter,
    /// Size is the radius of the circumscribed circle.
    Circumradius,
}

/// Struct to hold options parameters when constructing a [Star](crate::star::Star).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarOptions<T = f64>
where
    T: Real,
{
    /// Angle in radians of the first corner vertex, measured clockwise from
    /// the positive y axis. Must be within `[0, 2π]`.
    pub first_corner_angle: T,
    /// Number of corner (outer) vertices. Must be at least 5.
    pub corners: usize,
    /// How many corners each chord connecting corner vertices skips. The inner
    /// vertices of the star are based on the intersections of the chords, so
    /// this controls the visual sharpness of the star. 2 connects each corner
    /// to the second corner after it, 3 to the third, and so on.
    pub chord_skip: usize,
    /// Interpretation of the size parameter, see [SizeConvention].
    pub size_convention: SizeConvention,
    /// Number of decimal places used when rounding coordinates and chord
    /// coefficients.
    pub decimals: u32,
}

impl<T> StarOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            first_corner_angle: T::zero(),
            corners: 5,
            chord_skip: 2,
            size_convention: SizeConvention::OuterDiameter,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl<T> Default for StarOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Error cases when constructing a [Star](crate::star::Star).
///
/// All cases are deterministic functions of the construction parameters, a
/// failed construction never succeeds on retry with the same inputs.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum StarError {
    /// Star construction requires at least 5 corners.
    #[error("star requires at least 5 corners, got {corners}")]
    TooFewCorners { corners: usize },
    /// First corner angle outside of the `[0, 2π]` range.
    #[error("first corner angle must be within [0, 2π] radians, got {radians}")]
    FirstCornerAngleOutOfRange { radians: f64 },
    /// The chords whose intersections define the inner vertices are parallel
    /// for the corners/chord skip combination given.
    #[error(
        "unable to compute inner vertices, chords are parallel for {corners} corners with chord skip {chord_skip}"
    )]
    ParallelChords { corners: usize, chord_skip: usize },
    /// The chords whose intersections define the inner vertices are coincident
    /// for the corners/chord skip combination given.
    #[error(
        "unable to compute inner vertices, chords are coincident for {corners} corners with chord skip {chord_skip}"
    )]
    CoincidentChords { corners: usize, chord_skip: usize },
}
