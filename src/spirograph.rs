// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gear-in-ring spirograph.

use crate::{Complex, Curve};

/// The parameters of a curve are not geometrically meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CurveError {
    /// A parameter is out of range; the message names it.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(&'static str),
}

/// A simple spirograph curve, made by a circular gear rolling inside a
/// circular ring.
///
/// The parameter `t` is the rotation of the gear about its own center, in
/// radians. The pen turns backwards at unit rate while the gear center
/// orbits the ring at `gear_radius / outer_radius`, which is what rolling
/// without slipping requires.
///
/// The fields can be set freely and evaluation never fails, even when the
/// geometry makes no physical sense. Use [`SimpleSpirograph::validate`] (or
/// construct with [`SimpleSpirograph::try_new`]) to reject such settings
/// up front.
///
/// ```
/// use spiro::{Complex, Curve, SimpleSpirograph};
///
/// let spiro = SimpleSpirograph::new(100.0, 70.0).with_pen_offset((60.0, 0.0));
/// assert_eq!(spiro.value(0.0), Complex::new(90.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimpleSpirograph {
    /// Radius of the fixed outer ring.
    pub outer_radius: f64,
    /// Radius of the rolling gear.
    pub gear_radius: f64,
    /// Center of the outer ring.
    pub outer_center: Complex,
    /// Angle of the gear center at `t = 0`, in radians from the +x axis.
    pub gear_start: f64,
    /// Position of the pen relative to the gear center at `t = 0`.
    pub pen_offset: Complex,
}

impl Default for SimpleSpirograph {
    fn default() -> Self {
        SimpleSpirograph {
            outer_radius: 10.0,
            gear_radius: 2.0,
            outer_center: Complex::ZERO,
            gear_start: 0.0,
            pen_offset: Complex::new(1.0, 1.0),
        }
    }
}

impl SimpleSpirograph {
    /// A spirograph with the given ring and gear radii.
    ///
    /// The ring is centered on the origin, the gear starts on the +x axis,
    /// and the pen sits at the default offset of (1, 1).
    pub fn new(outer_radius: f64, gear_radius: f64) -> SimpleSpirograph {
        SimpleSpirograph {
            outer_radius,
            gear_radius,
            ..Default::default()
        }
    }

    /// Like [`SimpleSpirograph::new`], but validates the radii.
    ///
    /// # Errors
    ///
    /// See [`SimpleSpirograph::validate`].
    pub fn try_new(outer_radius: f64, gear_radius: f64) -> Result<SimpleSpirograph, CurveError> {
        let spiro = SimpleSpirograph::new(outer_radius, gear_radius);
        spiro.validate()?;
        Ok(spiro)
    }

    /// Move the center of the outer ring.
    pub fn with_outer_center(self, outer_center: impl Into<Complex>) -> SimpleSpirograph {
        SimpleSpirograph {
            outer_center: outer_center.into(),
            ..self
        }
    }

    /// Set the starting angle of the gear.
    pub fn with_gear_start(self, gear_start: f64) -> SimpleSpirograph {
        SimpleSpirograph { gear_start, ..self }
    }

    /// Set the pen position relative to the gear center.
    pub fn with_pen_offset(self, pen_offset: impl Into<Complex>) -> SimpleSpirograph {
        SimpleSpirograph {
            pen_offset: pen_offset.into(),
            ..self
        }
    }

    /// Check that the parameters describe a gear inside a ring.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameters`] if any parameter is not
    /// finite, if either radius is not positive, or if the gear does not fit
    /// strictly inside the ring.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.outer_radius.is_finite() && self.gear_radius.is_finite()) {
            return Err(CurveError::InvalidParameters("radii must be finite"));
        }
        if !(self.outer_center.is_finite()
            && self.pen_offset.is_finite()
            && self.gear_start.is_finite())
        {
            return Err(CurveError::InvalidParameters(
                "center, start angle and pen offset must be finite",
            ));
        }
        if self.outer_radius <= 0.0 {
            return Err(CurveError::InvalidParameters("outer radius must be positive"));
        }
        if self.gear_radius <= 0.0 {
            return Err(CurveError::InvalidParameters("gear radius must be positive"));
        }
        if self.gear_radius >= self.outer_radius {
            return Err(CurveError::InvalidParameters(
                "gear radius must be smaller than outer radius",
            ));
        }
        Ok(())
    }

    /// Position of the gear center relative to the ring center.
    #[inline]
    pub fn gear_center(&self, t: f64) -> Complex {
        Complex::polar(
            self.outer_radius - self.gear_radius,
            self.gear_start + t * self.gear_radius / self.outer_radius,
        )
    }
}

impl Curve for SimpleSpirograph {
    #[inline]
    fn value(&self, t: f64) -> Complex {
        let pen = self.pen_offset * Complex::polar(1.0, -t);
        self.outer_center.add_all([pen, self.gear_center(t)])
    }

    /// Closed form: the gear center term turns forward at the radius ratio,
    /// the pen term backward at unit rate.
    #[inline]
    fn deriv(&self, t: f64) -> Complex {
        let pen = self.pen_offset * Complex::polar(1.0, -t);
        let ratio = self.gear_radius / self.outer_radius;
        Complex::I * (self.gear_center(t) * ratio - pen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn sample() -> SimpleSpirograph {
        SimpleSpirograph::new(100.0, 70.0).with_pen_offset((60.0, 0.0))
    }

    #[test]
    fn value_at_start() {
        // Pen and gear center both on the +x axis: (100 - 70) + 60.
        assert_eq!(sample().value(0.0), Complex::new(90.0, 0.0));
        let moved = sample().with_outer_center((100.0, 100.0));
        assert_eq!(moved.value(0.0), Complex::new(190.0, 100.0));
        let turned = sample().with_gear_start(FRAC_PI_2);
        assert!((turned.value(0.0) - Complex::new(60.0, 30.0)).mag() < 1e-12);
    }

    #[test]
    fn deterministic() {
        let s = sample();
        assert_eq!(s.value(1.234), s.value(1.234));
    }

    #[test]
    fn closes_after_full_period() {
        // 7 orbits of the gear center take 10 gear revolutions.
        let s = sample();
        let period = 20.0 * PI;
        assert!((s.value(period) - s.value(0.0)).mag() < 1e-9);
        assert!((s.value(0.3 + period) - s.value(0.3)).mag() < 1e-9);
    }

    #[test]
    fn analytic_deriv_matches_finite_difference() {
        let s = sample()
            .with_outer_center((5.0, -3.0))
            .with_gear_start(0.4)
            .with_pen_offset((12.0, 20.0));
        for i in 0..50 {
            let t = f64::from(i) * 0.37 - 4.0;
            let h = 1e-5;
            let numeric = (s.value(t + h) - s.value(t - h)) / (2.0 * h);
            let err = (s.deriv(t) - numeric).mag();
            assert!(err < 1e-5, "t = {t}: {err}");
        }
    }

    #[test]
    fn defaults() {
        let s = SimpleSpirograph::default();
        assert_eq!(s.value(0.0), Complex::new(9.0, 1.0));
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn validation() {
        assert!(SimpleSpirograph::try_new(100.0, 70.0).is_ok());
        for (outer, gear) in [
            (0.0, 1.0),
            (-5.0, 1.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (10.0, 11.0),
            (f64::NAN, 1.0),
            (10.0, f64::INFINITY),
        ] {
            assert!(
                matches!(
                    SimpleSpirograph::try_new(outer, gear),
                    Err(CurveError::InvalidParameters(_))
                ),
                "({outer}, {gear}) accepted"
            );
        }
        let nan_pen = sample().with_pen_offset((f64::NAN, 0.0));
        assert!(nan_pen.validate().is_err());
        // Invalid parameters still evaluate.
        let too_big = SimpleSpirograph::new(10.0, 20.0);
        assert!(too_big.value(1.0).is_finite());
    }
}
