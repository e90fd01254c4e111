// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inverting a curve: from a point back to a parameter.

use core::ops::Range;

use crate::{Complex, Curve, MinimizeError, Minimizer};

/// The result of [`nearest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// The square of the distance from the target to the curve at `t`.
    pub distance_sq: f64,
    /// The parameter of the nearest point found.
    pub t: f64,
}

/// Find the parameter of a point on `curve` locally nearest to `target`.
///
/// The squared distance to the target is minimized starting from
/// `range.start`, with a first step of one hundredth of the range towards
/// `range.end`. The result is a local minimum: the caller chooses a range
/// small enough that the nearest point it wants is the first one downhill.
///
/// # Errors
///
/// Returns the minimizer's error if the search does not converge.
pub fn nearest<C: Curve + ?Sized>(
    curve: &C,
    target: impl Into<Complex>,
    range: Range<f64>,
    minimizer: &Minimizer,
) -> Result<Nearest, MinimizeError> {
    let target = target.into();
    let distance_sq = |t: f64| (curve.value(t) - target).mag2();
    let Range { start, end } = range;
    let t = minimizer.minimize(distance_sq, start, start + (end - start) / 100.0)?;
    Ok(Nearest {
        distance_sq: distance_sq(t),
        t,
    })
}

/// Find the parameter of a point on `curve` near `target`, searching from
/// `t0` towards `t1` with the default [`Minimizer`].
///
/// ```
/// use spiro::{reverse, Curve, SimpleSpirograph};
///
/// let spiro = SimpleSpirograph::new(100.0, 70.0).with_pen_offset((60.0, 0.0));
/// let t = reverse(&spiro, spiro.value(1.0), 0.0, 2.0).unwrap();
/// assert!((t - 1.0).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// See [`nearest`].
pub fn reverse<C: Curve + ?Sized>(
    curve: &C,
    target: impl Into<Complex>,
    t0: f64,
    t1: f64,
) -> Result<f64, MinimizeError> {
    nearest(curve, target, t0..t1, &Minimizer::default()).map(|n| n.t)
}
