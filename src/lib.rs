//! star_contours is a 2D geometry library for computing the vertex
//! coordinates of regular star polygons.
//!
//! A star is described by a center point, a size, a first corner angle, and a
//! corner count. The outer corner vertices are placed on the star's
//! circumscribed circle, chords are drawn between corner vertices a
//! configurable number of corners apart, and the inner (reentrant) vertices
//! fall out of the chord intersections. The result is the full ordered vertex
//! sequence alternating outer and inner vertices, ready for plotting or
//! tessellation.
//!
//! # Examples
//!
//! ```
//! use star_contours::star::{Point, Star};
//!
//! let star = Star::new(Point::new(0.0, 0.0), 10.0).unwrap();
//! // five corners produce ten vertices (outer and inner interleaved)
//! assert_eq!(star.vertices().len(), 10);
//! // parallel coordinate sequences for plotting
//! let xs: Vec<f64> = star.x_coordinates().collect();
//! let ys: Vec<f64> = star.y_coordinates().collect();
//! assert_eq!(xs.len(), ys.len());
//! ```

#[macro_use]
mod macros;

pub mod core;
pub mod star;
