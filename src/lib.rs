// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spirograph curves, with the numeric machinery to draw and invert them.
//!
//! Points and rotations are [`Complex`] numbers. A curve is anything that
//! implements [`Curve`], a map from a real parameter to the plane; the
//! spirograph itself is [`SimpleSpirograph`]. On top of that this crate
//! provides:
//!
//! - [`Trace`], which samples a curve at roughly even spacing along its
//!   length, for drawing it as a [`Polyline`] or into any [`PathSink`].
//! - [`reverse`] and [`nearest`], which find the parameter of a point on a
//!   curve by minimizing the distance with a golden-section [`Minimizer`].
//!
//! # Examples
//!
//! ```
//! use spiro::{reverse, trace_path, Curve, SimpleSpirograph, TraceParams};
//!
//! let spiro = SimpleSpirograph::new(100.0, 70.0)
//!     .with_outer_center((100.0, 100.0))
//!     .with_pen_offset((60.0, 0.0));
//!
//! // Draw the first few turns.
//! let path = trace_path(&spiro, 0.0, 10.0, TraceParams::default()).unwrap();
//! assert!(path.to_svg().starts_with("M190 100L"));
//!
//! // Recover a parameter from a point.
//! let t = reverse(&spiro, spiro.value(1.0), 0.0, 2.0).unwrap();
//! assert!((t - 1.0).abs() < 1e-6);
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of spiro and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on various types.
//! - `schemars`: Add best-effort support for using spiro types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! An allocator is required (i.e. spiro uses [alloc]).
//!
//! Diagnostics go through the [log][] facade; no logger is installed.

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![expect(
    clippy::use_self,
    reason = "types are named explicitly in signatures and constructors"
)]
#![expect(
    clippy::return_self_not_must_use,
    reason = "builders and arithmetic on `Copy` values"
)]
#![cfg_attr(
    test,
    expect(
        clippy::missing_assert_message,
        reason = "numeric test assertions print their operands"
    )
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("spiro requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

pub mod common;
mod complex;
mod line;
mod minimize;
mod nearest;
mod param_curve;
mod path;
mod point;
mod spirograph;
mod trace;

pub use crate::complex::Complex;
pub use crate::line::Line;
pub use crate::minimize::{
    minimize, Bracket, MinimizeError, Minimizer, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE,
};
pub use crate::nearest::{nearest, reverse, Nearest};
pub use crate::param_curve::{Curve, FnCurve, DERIV_STEP};
pub use crate::path::{PathEl, PathSink, Polyline};
pub use crate::point::Point;
pub use crate::spirograph::{CurveError, SimpleSpirograph};
pub use crate::trace::{trace, trace_into, trace_path, Sample, Trace, TraceError, TraceParams};
