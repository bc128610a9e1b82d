//! This module has all the types associated with star polygons, their
//! vertices, and the chord straights used to construct them.
mod point;
mod star_types;
mod straight;

pub use point::*;
pub use star_types::*;
pub use straight::*;

use crate::core::math::{point_on_circle, round_to_decimals};
use crate::core::traits::Real;

/// A star polygon described by its full ordered vertex sequence.
///
/// Construction places `corners` outer vertices on the circumscribed circle,
/// draws one chord per corner connecting it to the corner `chord_skip`
/// positions after it, and derives the inner (reentrant) vertices from the
/// chord intersections. The resulting vertex sequence alternates outer and
/// inner vertices and has length `2 * corners`.
///
/// A star is a value computed once at construction and never mutated.
///
/// # Examples
///
/// ```
/// # use star_contours::star::*;
/// let star = Star::new(Point::new(0.0, 0.0), 10.0).unwrap();
/// assert_eq!(star.vertices().len(), 10);
/// // the first corner sits on the circumscribed circle straight up from the center
/// assert_eq!(star.vertices()[0], Point::new(0.0, 5.0));
/// ```
#[derive(Debug, Clone)]
pub struct Star<T = f64>
where
    T: Real,
{
    center: Point<T>,
    outer_diameter: T,
    first_corner_angle: T,
    corners: usize,
    chord_skip: usize,
    vertices: Vec<Point<T>>,
}

impl<T> Star<T>
where
    T: Real,
{
    /// Create a new star using default options: 5 corners, chord skip 2,
    /// first corner angle 0, `size` interpreted as the outer diameter, and
    /// default rounding precision.
    #[inline]
    pub fn new(center: Point<T>, size: T) -> Result<Self, StarError> {
        Self::new_opt(center, size, &StarOptions::new())
    }

    /// Create a new star with full control over the construction parameters,
    /// see [StarOptions].
    ///
    /// Returns [StarError::TooFewCorners] when `options.corners < 5` and
    /// [StarError::FirstCornerAngleOutOfRange] when
    /// `options.first_corner_angle` lies outside `[0, 2π]` (bounds inclusive).
    /// Corners/chord skip combinations whose chords fail to intersect at a
    /// single point are rejected with [StarError::ParallelChords] or
    /// [StarError::CoincidentChords], no partial star is produced.
    pub fn new_opt(
        center: Point<T>,
        size: T,
        options: &StarOptions<T>,
    ) -> Result<Self, StarError> {
        let &StarOptions {
            first_corner_angle,
            corners,
            chord_skip,
            size_convention,
            decimals,
        } = options;

        if corners < 5 {
            return Err(StarError::TooFewCorners { corners });
        }

        if first_corner_angle < T::zero() || first_corner_angle > T::tau() {
            return Err(StarError::FirstCornerAngleOutOfRange {
                radians: num_traits::cast(first_corner_angle).unwrap_or(f64::NAN),
            });
        }

        let outer_diameter = match size_convention {
            SizeConvention::OuterDiameter => round_to_decimals(size, decimals),
            SizeConvention::Circumradius => round_to_decimals(size * T::two(), decimals),
        };
        let first_corner_angle = round_to_decimals(first_corner_angle, decimals);

        let outer_radius = outer_diameter / T::two();
        let spacing_angle = T::tau() / T::from(corners).unwrap();

        let mut corner_vertices = Vec::with_capacity(corners);
        for i in 0..corners {
            let corner_angle = spacing_angle * T::from(i).unwrap() + first_corner_angle;
            corner_vertices.push(Point::from_vector2_with_decimals(
                point_on_circle(outer_radius, center.pos(), corner_angle),
                decimals,
            ));
        }

        let chords: Vec<Straight<T>> = (0..corners)
            .map(|i| {
                Straight::from_points_with_decimals(
                    corner_vertices[i],
                    corner_vertices[(i + chord_skip) % corners],
                    decimals,
                )
            })
            .collect();

        // The inner vertex at corner i is cut by the chord that started
        // chord_skip - 1 corners back. back_offset is (1 - chord_skip) reduced
        // into 0..corners so the index math stays in usize for any chord_skip.
        let back_offset = (corners + 1 - chord_skip % corners) % corners;

        let mut vertices = Vec::with_capacity(2 * corners);
        for i in 0..corners {
            let partner = (i + back_offset) % corners;
            let inner = match chords[i].intersection_with_decimals(&chords[partner], decimals) {
                StraightStraightIntr::TrueIntersect { point } => point,
                StraightStraightIntr::NoIntersect => {
                    return Err(StarError::ParallelChords {
                        corners,
                        chord_skip,
                    });
                }
                StraightStraightIntr::Coincident => {
                    return Err(StarError::CoincidentChords {
                        corners,
                        chord_skip,
                    });
                }
            };
            vertices.push(corner_vertices[i]);
            vertices.push(inner);
        }

        Ok(Star {
            center,
            outer_diameter,
            first_corner_angle,
            corners,
            chord_skip,
            vertices,
        })
    }

    /// Center point of the star.
    #[inline]
    pub fn center(&self) -> Point<T> {
        self.center
    }

    /// Outer diameter of the star (diameter of the circumscribed circle).
    #[inline]
    pub fn outer_diameter(&self) -> T {
        self.outer_diameter
    }

    /// Radius of the circumscribed circle the corner vertices lie on.
    #[inline]
    pub fn outer_radius(&self) -> T {
        self.outer_diameter / T::two()
    }

    /// Angle in radians of the first corner vertex, measured clockwise from
    /// the positive y axis.
    #[inline]
    pub fn first_corner_angle(&self) -> T {
        self.first_corner_angle
    }

    /// Number of corner (outer) vertices.
    #[inline]
    pub fn corners(&self) -> usize {
        self.corners
    }

    /// Chord skip count used when constructing the inner vertices.
    #[inline]
    pub fn chord_skip(&self) -> usize {
        self.chord_skip
    }

    /// All vertices ordered as outer corner vertex, inner vertex, outer corner
    /// vertex, inner vertex, and so on, with length `2 * corners`.
    #[inline]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    /// Iterate the outer corner vertices (even positions of [Star::vertices]).
    #[inline]
    pub fn outer_vertices(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.vertices.iter().copied().step_by(2)
    }

    /// Iterate the inner vertices (odd positions of [Star::vertices]).
    #[inline]
    pub fn inner_vertices(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.vertices.iter().copied().skip(1).step_by(2)
    }

    /// X coordinates of all star vertices in vertex order, for example for
    /// plotting purposes.
    #[inline]
    pub fn x_coordinates(&self) -> impl Iterator<Item = T> + '_ {
        self.vertices.iter().map(|v| v.x)
    }

    /// Y coordinates of all star vertices in vertex order, for example for
    /// plotting purposes.
    #[inline]
    pub fn y_coordinates(&self) -> impl Iterator<Item = T> + '_ {
        self.vertices.iter().map(|v| v.y)
    }
}
