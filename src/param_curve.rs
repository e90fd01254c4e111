// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use alloc::boxed::Box;

use crate::{Complex, Point};

/// Step used by the default finite-difference derivative.
pub const DERIV_STEP: f64 = 1e-6;

/// A curve parametrized by a scalar.
///
/// The value at `t` is a point in the plane, represented as a [`Complex`].
/// Implementations must be deterministic: the same `t` always gives the same
/// value, as the tracer and the inverse mapping both rely on it.
///
/// Unlike Bézier segments, these curves are not normalized to `[0, 1]`; the
/// parameter range is whatever the curve makes of it, commonly an angle.
pub trait Curve {
    /// Evaluate the curve at parameter `t`.
    fn value(&self, t: f64) -> Complex;

    /// The derivative of the curve with respect to `t`.
    ///
    /// The default is a central finite difference with step [`DERIV_STEP`].
    /// Curves with a closed-form derivative should override it.
    fn deriv(&self, t: f64) -> Complex {
        (self.value(t + DERIV_STEP) - self.value(t - DERIV_STEP)) / (2.0 * DERIV_STEP)
    }

    /// Evaluate the curve at parameter `t`, as a [`Point`].
    #[inline]
    fn point(&self, t: f64) -> Point {
        self.value(t).to_point()
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    #[inline]
    fn value(&self, t: f64) -> Complex {
        (**self).value(t)
    }

    #[inline]
    fn deriv(&self, t: f64) -> Complex {
        (**self).deriv(t)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    #[inline]
    fn value(&self, t: f64) -> Complex {
        (**self).value(t)
    }

    #[inline]
    fn deriv(&self, t: f64) -> Complex {
        (**self).deriv(t)
    }
}

/// A curve defined by a closure.
///
/// ```
/// use spiro::{Complex, Curve, FnCurve};
///
/// let circle = FnCurve(|t| Complex::polar(2.0, t));
/// assert!((circle.value(1.0).mag() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnCurve<F>(pub F);

impl<F: Fn(f64) -> Complex> Curve for FnCurve<F> {
    #[inline]
    fn value(&self, t: f64) -> Complex {
        (self.0)(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn default_deriv() {
        // value(t) = t² + i t³
        let c = FnCurve(|t: f64| Complex::new(t * t, t * t * t));
        let d = c.deriv(2.0);
        assert!((d - Complex::new(4.0, 12.0)).mag() < 1e-6, "{d}");
    }

    #[test]
    fn curves_behind_pointers() {
        fn value_at<C: Curve>(c: C, t: f64) -> Complex {
            c.value(t)
        }
        let line = FnCurve(|t: f64| Complex::new(t, 0.0));
        assert_eq!(value_at(&line, 3.0), Complex::new(3.0, 0.0));
        let curves: Vec<Box<dyn Curve>> = alloc::vec![
            Box::new(line),
            Box::new(FnCurve(|t: f64| Complex::polar(1.0, t))),
        ];
        assert_eq!(curves[0].point(1.5), Point::new(1.5, 0.0));
        assert_eq!(value_at(&curves[1], 0.0), Complex::ONE);
    }
}
