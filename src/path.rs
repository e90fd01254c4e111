// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polylines, and the drawing interface the tracer feeds.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::Point;

/// A receiver of "move to" and "line to" drawing commands.
///
/// This is the shape of a canvas-style drawing context: the tracer calls
/// [`move_to`](PathSink::move_to) once with the first sample, then
/// [`line_to`](PathSink::line_to) for each later one.
pub trait PathSink {
    /// Begin a new subpath at `p`.
    fn move_to(&mut self, p: Point);

    /// Draw a straight segment from the current position to `p`.
    fn line_to(&mut self, p: Point);
}

/// The element of a [`Polyline`].
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::exhaustive_enums,
    reason = "a polyline is made of exactly these two commands"
)]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
}

impl PathEl {
    /// The point this element ends at.
    #[inline]
    pub fn end_point(&self) -> Point {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p,
        }
    }
}

/// A path made of straight segments, possibly with multiple subpaths.
///
/// Its [`Display`](fmt::Display) implementation writes SVG path data.
///
/// ```
/// use spiro::{PathSink, Point, Polyline};
///
/// let mut path = Polyline::new();
/// path.move_to(Point::new(0.0, 0.0));
/// path.line_to(Point::new(3.0, 4.0));
/// assert_eq!(path.to_svg(), "M0 0L3 4");
/// assert_eq!(path.perimeter(), 5.0);
/// ```
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline(Vec<PathEl>);

impl Polyline {
    /// Create a new, empty path.
    pub fn new() -> Polyline {
        Polyline::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> Polyline {
        debug_assert!(
            v.first().map_or(true, |el| matches!(el, PathEl::MoveTo(_))),
            "Polyline must begin with MoveTo"
        );
        Polyline(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no segments.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|el| matches!(el, PathEl::LineTo(..)))
    }

    /// Iterate over the segments, as pairs of start and end points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.0.windows(2).filter_map(|pair| match pair[1] {
            PathEl::LineTo(p) => Some((pair[0].end_point(), p)),
            PathEl::MoveTo(_) => None,
        })
    }

    /// Total length of all segments.
    pub fn perimeter(&self) -> f64 {
        self.segments().map(|(p0, p1)| p0.distance(p1)).sum()
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl PathSink for Polyline {
    fn move_to(&mut self, p: Point) {
        self.push(PathEl::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.push(PathEl::LineTo(p));
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = PathEl;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().copied()
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in self {
            match el {
                PathEl::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_output() {
        let mut path = Polyline::new();
        path.move_to(Point::new(1.5, -2.0));
        path.line_to(Point::new(10.0, 0.0));
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(0.0, 1.0));
        assert_eq!(path.to_svg(), "M1.5 -2L10 0M0 0L0 1");
    }

    #[test]
    fn segments_skip_moves() {
        let path = Polyline::from_vec(alloc::vec![
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(3.0, 4.0)),
            PathEl::MoveTo(Point::new(10.0, 10.0)),
            PathEl::LineTo(Point::new(10.0, 12.0)),
        ]);
        assert_eq!(path.segments().count(), 2);
        assert_eq!(path.perimeter(), 7.0);
    }

    #[test]
    fn empty() {
        let mut path = Polyline::new();
        assert!(path.is_empty());
        path.move_to(Point::ZERO);
        assert!(path.is_empty());
        path.line_to(Point::new(1.0, 0.0));
        assert!(!path.is_empty());
        assert_eq!(path.elements().len(), 2);
    }
}
