// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{Complex, Curve, Point};

/// A straight line through two points.
///
/// The parameter is not clamped: `t = 0` is `p0`, `t = 1` is `p1`, and other
/// values extrapolate along the line at constant speed `|p1 - p0|`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's position at `t = 0`.
    pub p0: Point,
    /// The line's position at `t = 1`.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line between `p0` and `p1`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }
}

impl Curve for Line {
    #[inline]
    fn value(&self, t: f64) -> Complex {
        self.p0.to_complex() + (self.p1 - self.p0) * t
    }

    #[inline]
    fn deriv(&self, _t: f64) -> Complex {
        self.p1 - self.p0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_value() {
        let l = Line::new((1.0, 1.0), (4.0, 5.0));
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.point(0.0), l.p0);
        assert_eq!(l.point(1.0), l.p1);
        assert_eq!(l.point(2.0), Point::new(7.0, 9.0));
        assert_eq!(l.deriv(123.0), Complex::new(3.0, 4.0));
    }
}
