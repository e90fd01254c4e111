// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Complex numbers, used as 2D points and rotations.

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A complex number.
///
/// Throughout this crate a complex number doubles as a 2D vector, with the
/// real part on the x axis and the imaginary part on the y axis. Multiplying
/// by a unit complex number is a rotation about the origin, which is what the
/// curve definitions lean on.
///
/// Values are `Copy` and every operation returns a new value. A plain `f64`
/// converts into a complex number with zero imaginary part, and each
/// arithmetic operator has an `f64` overload that agrees with lifting the
/// real operand first.
///
/// ```
/// use spiro::Complex;
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.mag(), 5.0);
/// assert_eq!(z * Complex::I, Complex::new(-4.0, 3.0));
/// assert_eq!(z + 1.0, Complex::new(4.0, 4.0));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// The complex number 0.
    pub const ZERO: Complex = Complex::new(0., 0.);

    /// The complex number 1.
    pub const ONE: Complex = Complex::new(1., 0.);

    /// The imaginary unit.
    pub const I: Complex = Complex::new(0., 1.);

    /// Sentinel for degenerate divisions: infinite magnitude, no meaningful
    /// direction.
    ///
    /// This is what [`recip`](Complex::recip) returns for zero, and what
    /// division by a zero divisor returns. It is an approximation, not a
    /// signed infinity in each component.
    pub const INFINITY: Complex = Complex::new(f64::INFINITY, 0.);

    /// Create a new complex number from its real and imaginary parts.
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// Create a complex number from Cartesian components.
    ///
    /// Same as [`Complex::new`].
    #[inline(always)]
    pub const fn rect(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// Create a complex number from a magnitude and an angle in radians.
    #[inline]
    pub fn polar(mag: f64, arg: f64) -> Complex {
        let (sin, cos) = arg.sin_cos();
        Complex::new(mag * cos, mag * sin)
    }

    /// The real part.
    #[inline(always)]
    pub const fn real(self) -> f64 {
        self.re
    }

    /// The imaginary part.
    #[inline(always)]
    pub const fn imag(self) -> f64 {
        self.im
    }

    /// Magnitude (absolute value).
    ///
    /// Computed with `hypot`, which avoids intermediate overflow and underflow.
    #[inline]
    pub fn mag(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Magnitude squared.
    #[inline]
    pub fn mag2(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Argument, in radians in the range `(-π, π]`.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate.
    ///
    /// A value with zero imaginary part is returned as is, so conjugating a
    /// real number never produces a negative zero.
    #[inline]
    pub fn conj(self) -> Complex {
        if self.im == 0.0 {
            self
        } else {
            Complex::new(self.re, -self.im)
        }
    }

    /// Reciprocal, `1 / self`.
    ///
    /// The reciprocal of zero is [`Complex::INFINITY`]. Dividing by the
    /// magnitude twice, rather than once by its square, lowers the chance of
    /// overflow.
    #[inline]
    pub fn recip(self) -> Complex {
        let r = self.mag();
        if r == 0.0 {
            return Complex::INFINITY;
        }
        Complex::new(self.re / r / r, -self.im / r / r)
    }

    /// Add a sequence of operands to `self`, left to right.
    ///
    /// The empty sequence leaves `self` unchanged.
    ///
    /// ```
    /// use spiro::Complex;
    ///
    /// let z = Complex::new(1.0, 2.0).add_all([Complex::I, 3.0.into()]);
    /// assert_eq!(z, Complex::new(4.0, 3.0));
    /// ```
    pub fn add_all<I>(self, zs: I) -> Complex
    where
        I: IntoIterator,
        I::Item: Into<Complex>,
    {
        zs.into_iter().fold(self, |acc, z| acc + z.into())
    }

    /// Multiply `self` by a sequence of operands, left to right.
    ///
    /// The empty sequence leaves `self` unchanged. The fold order is fixed,
    /// so results are reproducible bit for bit. Real operands take the
    /// scaling path of the `f64` overload.
    pub fn mul_all<I>(self, zs: I) -> Complex
    where
        I: IntoIterator,
        I::Item: Into<Complex>,
    {
        zs.into_iter().fold(self, |acc, z| acc * z.into())
    }

    /// Complex exponential, `e^self`.
    #[inline]
    pub fn exp(self) -> Complex {
        Complex::polar(self.re.exp(), self.im)
    }

    /// Natural logarithm, principal branch.
    ///
    /// The imaginary part of the result is the argument, in `(-π, π]`. The
    /// logarithm of zero has a real part of negative infinity.
    #[inline]
    pub fn ln(self) -> Complex {
        Complex::new(self.mag().ln(), self.arg())
    }

    /// Raise `self` to a complex power, computed as `exp(ln(self) * w)`.
    ///
    /// This inherits the branch cut of [`ln`](Complex::ln).
    #[inline]
    pub fn pow(self, w: impl Into<Complex>) -> Complex {
        (self.ln() * w.into()).exp()
    }

    /// Is this complex number finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Is this complex number NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Interpret this complex number as a point in the plane.
    #[inline(always)]
    pub const fn to_point(self) -> Point {
        Point::new(self.re, self.im)
    }
}

impl From<f64> for Complex {
    #[inline(always)]
    fn from(re: f64) -> Complex {
        Complex::new(re, 0.)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Complex {
        Complex::new(v.0, v.1)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline(always)]
    fn from(z: Complex) -> (f64, f64) {
        (z.re, z.im)
    }
}

impl From<Point> for Complex {
    #[inline(always)]
    fn from(p: Point) -> Complex {
        Complex::new(p.x, p.y)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: f64) -> Complex {
        Complex::new(self.re + other, self.im)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        other + self
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, other: Complex) {
        *self = *self + other;
    }
}

impl AddAssign<f64> for Complex {
    #[inline]
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: f64) -> Complex {
        Complex::new(self.re - other, self.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::from(self) - other
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, other: Complex) {
        *self = *self - other;
    }
}

impl SubAssign<f64> for Complex {
    #[inline]
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// A factor with zero imaginary part scales the other one, exactly as
    /// the `f64` overload does.
    #[inline]
    fn mul(self, other: Complex) -> Complex {
        if other.im == 0.0 {
            return self * other.re;
        }
        if self.im == 0.0 {
            return other * self.re;
        }
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    /// A real `self` stays real, even when `other` is infinite.
    #[inline]
    fn mul(self, other: f64) -> Complex {
        if self.im == 0.0 {
            return Complex::new(self.re * other, 0.0);
        }
        Complex::new(self.re * other, self.im * other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        other * self
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, other: Complex) {
        *self = *self * other;
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Both operands are scaled by `1 / |other|` before the cross terms are
    /// formed, which keeps the intermediates in range when the divisor is
    /// large or small. A real divisor takes the `f64` path. A zero divisor
    /// gives [`Complex::INFINITY`].
    #[inline]
    fn div(self, other: Complex) -> Complex {
        if other.im == 0.0 {
            return self / other.re;
        }
        let r = other.mag();
        if r == 0.0 {
            return Complex::INFINITY;
        }
        let (a, b) = (self.re / r, self.im / r);
        let (c, d) = (other.re / r, other.im / r);
        Complex::new(a * c + b * d, b * c - a * d)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, other: f64) -> Complex {
        if other == 0.0 {
            return Complex::INFINITY;
        }
        if self.im == 0.0 {
            return Complex::new(self.re / other, 0.0);
        }
        Complex::new(self.re / other, self.im / other)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn div(self, other: Complex) -> Complex {
        Complex::from(self) / other
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, other: Complex) {
        *self = *self / other;
    }
}

impl DivAssign<f64> for Complex {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        Complex::ZERO.add_all(iter)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        Complex::ONE.mul_all(iter)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.re, formatter)?;
        if self.im.is_sign_negative() {
            write!(formatter, " - ")?;
            fmt::Display::fmt(&-self.im, formatter)?;
        } else {
            write!(formatter, " + ")?;
            fmt::Display::fmt(&self.im, formatter)?;
        }
        write!(formatter, "ı")
    }
}

#[cfg(feature = "mint")]
impl From<Complex> for mint::Vector2<f64> {
    #[inline]
    fn from(z: Complex) -> mint::Vector2<f64> {
        mint::Vector2 { x: z.re, y: z.im }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Complex {
    #[inline]
    fn from(v: mint::Vector2<f64>) -> Complex {
        Complex { re: v.x, im: v.y }
    }
}
