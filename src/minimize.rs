// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimization of a function of one real variable.
//!
//! The search runs in two phases. First a minimum is bracketed, walking
//! downhill from two starting abscissae with golden-ratio magnification and
//! parabolic extrapolation. Then the bracket is narrowed by golden-section
//! search. This is the scheme of Brent's method without the parabolic steps
//! in the second phase; see *Numerical Recipes*, §10.1 and §10.2.

use crate::common::GOLDEN_RATIO;

/// The larger golden section, `φ - 1 ≈ 0.618`.
const PHI1: f64 = GOLDEN_RATIO - 1.0;

/// The smaller golden section, `1 - PHI1 ≈ 0.382`.
const PHI2: f64 = 1.0 - PHI1;

/// Maximum magnification of a parabolic extrapolation step while bracketing.
const GLIMIT: f64 = 10.0;

/// Smallest magnitude of the parabolic step denominator.
const TINY: f64 = 1e-20;

/// Absolute floor on the final bracket width, so a minimum at zero does not
/// have to be resolved down to the subnormals.
const MIN_WIDTH: f64 = 1e-20;

/// Default relative tolerance of [`Minimizer`].
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default per-phase iteration limit of [`Minimizer`].
pub const DEFAULT_MAX_ITER: usize = 500;

/// The search gave up before finding a minimum.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MinimizeError {
    /// The bracketing phase was still descending when it ran out of
    /// iterations. The function may be unbounded below in the search
    /// direction.
    #[error("no minimum bracketed after {iterations} iterations (last probe at {last})")]
    NoBracket {
        /// Iterations performed.
        iterations: usize,
        /// The farthest abscissa evaluated.
        last: f64,
    },
    /// The golden-section phase did not reach the requested tolerance.
    #[error("golden-section search did not converge after {iterations} iterations (best estimate {best})")]
    NoConvergence {
        /// Iterations performed.
        iterations: usize,
        /// The best abscissa seen so far.
        best: f64,
    },
}

/// Three abscissae known to enclose a local minimum.
///
/// `b` lies strictly between `a` and `c` (in either order), and `fb` is no
/// larger than `fa` or `fc`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    /// One end of the bracket.
    pub a: f64,
    /// The interior point.
    pub b: f64,
    /// The other end of the bracket.
    pub c: f64,
    /// `f(a)`.
    pub fa: f64,
    /// `f(b)`.
    pub fb: f64,
    /// `f(c)`.
    pub fc: f64,
}

impl Bracket {
    /// Bracket a minimum of `f`, starting from the abscissae `a` and `b`.
    ///
    /// The search heads downhill from whichever of the two starting points
    /// has the larger value, so the minimum found may lie on either side.
    /// Each iteration tries a parabolic step through the current three
    /// points, limited to `GLIMIT` times the previous step, and falls back to
    /// magnifying the previous step by the golden ratio.
    ///
    /// # Errors
    ///
    /// Returns [`MinimizeError::NoBracket`] when `f` keeps decreasing for
    /// `max_iter` iterations.
    pub fn find(
        mut f: impl FnMut(f64) -> f64,
        a: f64,
        b: f64,
        max_iter: usize,
    ) -> Result<Bracket, MinimizeError> {
        let (mut a, mut b) = (a, b);
        let (mut fa, mut fb) = (f(a), f(b));
        if fa < fb {
            core::mem::swap(&mut a, &mut b);
            core::mem::swap(&mut fa, &mut fb);
        }
        let mut c = b + GOLDEN_RATIO * (b - a);
        let mut fc = f(c);
        let mut iterations = 0;
        while fb > fc {
            if iterations == max_iter {
                return Err(MinimizeError::NoBracket {
                    iterations,
                    last: c,
                });
            }
            iterations += 1;
            let r = (b - a) * (fb - fc);
            let q = (b - c) * (fb - fa);
            let denom = 2.0 * (q - r);
            let denom = if denom < 0.0 {
                denom.min(-TINY)
            } else {
                denom.max(TINY)
            };
            let mut u = b - ((b - c) * q - (b - a) * r) / denom;
            let ulim = b + GLIMIT * (c - b);
            let mut fu;
            if (b - u) * (u - c) > 0.0 {
                // Parabolic u lies between b and c.
                fu = f(u);
                if fu < fc {
                    log::debug!("bracketed minimum after {iterations} iterations");
                    return Ok(Bracket {
                        a: b,
                        b: u,
                        c,
                        fa: fb,
                        fb: fu,
                        fc,
                    });
                } else if fu > fb {
                    log::debug!("bracketed minimum after {iterations} iterations");
                    return Ok(Bracket {
                        a,
                        b,
                        c: u,
                        fa,
                        fb,
                        fc: fu,
                    });
                }
                u = c + GOLDEN_RATIO * (c - b);
                fu = f(u);
            } else if (c - u) * (u - ulim) > 0.0 {
                // Between c and the extrapolation limit.
                fu = f(u);
                if fu < fc {
                    b = c;
                    fb = fc;
                    c = u;
                    fc = fu;
                    u = c + GOLDEN_RATIO * (c - b);
                    fu = f(u);
                }
            } else if (u - ulim) * (ulim - c) >= 0.0 {
                u = ulim;
                fu = f(u);
            } else {
                u = c + GOLDEN_RATIO * (c - b);
                fu = f(u);
            }
            a = b;
            fa = fb;
            b = c;
            fb = fc;
            c = u;
            fc = fu;
        }
        log::debug!("bracketed minimum after {iterations} iterations");
        Ok(Bracket {
            a,
            b,
            c,
            fa,
            fb,
            fc,
        })
    }
}

/// Settings for a one-dimensional minimization.
///
/// ```
/// use spiro::Minimizer;
///
/// let x = Minimizer::default().minimize(|x| (x - 3.0) * (x - 3.0), 0.0, 1.0).unwrap();
/// assert!((x - 3.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimizer {
    /// Relative tolerance: the search stops once the bracket is narrower
    /// than `tol` times the magnitude of the current estimates.
    pub tol: f64,
    /// Iteration limit, applied to each phase separately.
    pub max_iter: usize,
}

impl Default for Minimizer {
    fn default() -> Self {
        Minimizer {
            tol: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl Minimizer {
    /// A minimizer with the given relative tolerance.
    pub fn new(tol: f64) -> Minimizer {
        Minimizer {
            tol,
            ..Default::default()
        }
    }

    /// Set the per-phase iteration limit.
    pub fn with_max_iter(self, max_iter: usize) -> Minimizer {
        Minimizer { max_iter, ..self }
    }

    /// Find a local minimum of `f`, starting downhill from `a` and `b`.
    ///
    /// # Errors
    ///
    /// Fails when either phase exceeds [`max_iter`](Minimizer::max_iter)
    /// iterations.
    pub fn minimize(
        &self,
        mut f: impl FnMut(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Result<f64, MinimizeError> {
        let bracket = Bracket::find(&mut f, a, b, self.max_iter)?;
        self.refine(f, bracket)
    }

    /// Find a local minimum of `f` inside a caller-supplied bracket.
    ///
    /// The bracketing phase is skipped; `b` must lie between `a` and `c`
    /// with `f(b)` no larger than `f(a)` or `f(c)`.
    ///
    /// # Errors
    ///
    /// Fails when the golden-section phase exceeds
    /// [`max_iter`](Minimizer::max_iter) iterations.
    pub fn minimize_bracketed(
        &self,
        mut f: impl FnMut(f64) -> f64,
        a: f64,
        b: f64,
        c: f64,
    ) -> Result<f64, MinimizeError> {
        let bracket = Bracket {
            a,
            b,
            c,
            fa: f(a),
            fb: f(b),
            fc: f(c),
        };
        self.refine(f, bracket)
    }

    /// Golden-section search inside `bracket`.
    fn refine(
        &self,
        mut f: impl FnMut(f64) -> f64,
        bracket: Bracket,
    ) -> Result<f64, MinimizeError> {
        let Bracket {
            mut a,
            b,
            mut c,
            fb,
            ..
        } = bracket;
        // x1 and x2 are the interior points, ordered a, x1, x2, c. The new
        // point goes into the larger of the two segments around b.
        let (mut x1, mut f1, mut x2, mut f2) = if (c - b).abs() > (b - a).abs() {
            let x2 = b + PHI2 * (c - b);
            (b, fb, x2, f(x2))
        } else {
            let x1 = b - PHI2 * (b - a);
            (x1, f(x1), b, fb)
        };
        let mut iterations = 0;
        while (c - a).abs() > self.tol * (x1.abs() + x2.abs()) + MIN_WIDTH {
            if iterations == self.max_iter {
                return Err(MinimizeError::NoConvergence {
                    iterations,
                    best: if f1 < f2 { x1 } else { x2 },
                });
            }
            iterations += 1;
            if f2 < f1 {
                a = x1;
                x1 = x2;
                x2 = PHI1 * x1 + PHI2 * c;
                f1 = f2;
                f2 = f(x2);
            } else {
                c = x2;
                x2 = x1;
                x1 = PHI1 * x2 + PHI2 * a;
                f2 = f1;
                f1 = f(x1);
            }
        }
        log::debug!("golden-section search converged after {iterations} iterations");
        Ok(if f1 < f2 { x1 } else { x2 })
    }
}

/// Find a local minimum of `f` near the interval spanned by `a` and `b`.
///
/// The result is accurate to roughly `tol` relative to its magnitude. This
/// is [`Minimizer::minimize`] with the default iteration limit.
///
/// # Errors
///
/// See [`Minimizer::minimize`].
pub fn minimize(f: impl FnMut(f64) -> f64, a: f64, b: f64, tol: f64) -> Result<f64, MinimizeError> {
    Minimizer::new(tol).minimize(f, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sq(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn quadratic() {
        let x = minimize(|x| sq(x - 3.0), 0.0, 1.0, 1e-8).unwrap();
        assert!((x - 3.0).abs() < 1e-6, "got {x}");
    }

    #[test]
    fn start_past_the_minimum() {
        for (a, b) in [(5.0, 6.0), (6.0, 5.0), (4.0, 100.0)] {
            let x = minimize(|x| sq(x - 3.0), a, b, 1e-8).unwrap();
            assert!((x - 3.0).abs() < 1e-6, "from ({a}, {b}) got {x}");
        }
    }

    #[test]
    fn minimum_at_zero() {
        let x = minimize(sq, 1.0, 0.5, 1e-8).unwrap();
        assert!(x.abs() < 1e-9, "got {x}");
    }

    #[test]
    fn not_smooth() {
        let x = minimize(|x| (x - 2.0).abs(), 0.0, 1.0, 1e-8).unwrap();
        assert!((x - 2.0).abs() < 1e-6, "got {x}");
    }

    #[test]
    fn local_minimum_from_bracket() {
        let m = Minimizer::default();
        let x = m.minimize_bracketed(f64::sin, 3.0, 4.5, 6.0).unwrap();
        assert!((x - 3.0 * FRAC_PI_2).abs() < 1e-6, "got {x}");
        let y = m.minimize_bracketed(f64::sin, 0.0, -1.5, -3.0).unwrap();
        assert!((y + FRAC_PI_2).abs() < 1e-6, "got {y}");
    }

    #[test]
    fn bracket_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let k = rng.random_range(0.01..100.0);
            let m = rng.random_range(-50.0..50.0);
            let a = rng.random_range(-50.0..50.0);
            let b = a + rng.random_range(-1.0..1.0);
            if a == b {
                continue;
            }
            let f = |x: f64| k * sq(x - m);
            let br = Bracket::find(f, a, b, DEFAULT_MAX_ITER).unwrap();
            assert!(br.fb <= br.fa && br.fb <= br.fc, "{br:?}");
            assert!(
                (br.a < br.b && br.b < br.c) || (br.a > br.b && br.b > br.c),
                "{br:?}"
            );
            assert!(br.a.min(br.c) <= m && m <= br.a.max(br.c), "{br:?} misses {m}");
        }
    }

    #[test]
    fn unbounded_below() {
        let m = Minimizer::default().with_max_iter(50);
        assert!(matches!(
            m.minimize(|x| x, 0.0, 1.0),
            Err(MinimizeError::NoBracket { iterations: 50, .. })
        ));
    }

    #[test]
    fn iteration_limit() {
        let m = Minimizer::default().with_max_iter(5);
        match m.minimize(|x| sq(x - 3.0), 0.0, 1.0) {
            Err(MinimizeError::NoConvergence { iterations, best }) => {
                assert_eq!(iterations, 5);
                assert!((best - 3.0).abs() < 1.0);
            }
            other => panic!("expected NoConvergence, got {other:?}"),
        }
    }

    #[test]
    fn one_evaluation_per_iteration() {
        let mut calls = 0;
        let m = Minimizer::new(1e-6);
        let x = m
            .minimize_bracketed(
                |x| {
                    calls += 1;
                    (x - PI).abs()
                },
                0.0,
                1.0,
                10.0,
            )
            .unwrap();
        assert!((x - PI).abs() < 1e-4);
        // Three for the bracket, one for the first interior point, then one
        // per iteration. Once the interior points settle into golden
        // proportion the bracket shrinks by PHI1 each time.
        let max_iterations = ((1e-6 * 2.0 * PI) / 10.0).ln() / PHI1.ln();
        assert!(f64::from(calls) <= 4.0 + max_iterations.ceil() + 3.0, "{calls} calls");
    }

    #[test]
    fn error_display() {
        let err = MinimizeError::NoConvergence {
            iterations: 3,
            best: 1.5,
        };
        assert_eq!(
            format!("{err}"),
            "golden-section search did not converge after 3 iterations (best estimate 1.5)"
        );
    }
}
