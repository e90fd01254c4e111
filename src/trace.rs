// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive sampling of a curve into roughly evenly spaced points.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::{Complex, Curve, PathSink, Point, Polyline};

/// Settings for tracing a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraceParams {
    /// Desired distance between consecutive samples, in output units.
    pub ds: f64,
    /// Parameter step of the forward difference used to estimate the speed
    /// of the curve.
    pub dt: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        TraceParams { ds: 0.5, dt: 1e-4 }
    }
}

impl TraceParams {
    /// Settings with the given sample spacing and the default `dt`.
    pub fn new(ds: f64) -> TraceParams {
        TraceParams {
            ds,
            ..Default::default()
        }
    }

    /// Set the finite-difference step.
    pub fn with_dt(self, dt: f64) -> TraceParams {
        TraceParams { dt, ..self }
    }

    fn validate(&self) -> Result<(), TraceError> {
        if !(self.ds.is_finite() && self.ds > 0.0) {
            return Err(TraceError::InvalidParams("ds must be positive and finite"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(TraceError::InvalidParams("dt must be positive and finite"));
        }
        Ok(())
    }
}

/// A point produced by the tracer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// The curve parameter.
    pub t: f64,
    /// The curve's value at `t`.
    pub point: Point,
}

/// Tracing could not proceed.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TraceError {
    /// The start or end of the parameter range is not finite.
    #[error("invalid parameter range {start}..{end}")]
    InvalidRange {
        /// Requested start.
        start: f64,
        /// Requested end.
        end: f64,
    },
    /// The [`TraceParams`] are out of range; the message names the field.
    #[error("invalid trace parameters: {0}")]
    InvalidParams(&'static str),
    /// The estimated speed of the curve was zero or not a number, so no step
    /// size could be chosen.
    #[error("non-finite step at t = {t} (estimated speed {speed})")]
    NonFiniteStep {
        /// Parameter where tracing stopped.
        t: f64,
        /// The speed estimate.
        speed: f64,
    },
    /// The step was too small to change `t`.
    #[error("trace stalled at t = {t}")]
    Stalled {
        /// Parameter where tracing stopped.
        t: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Walking,
    Done,
}

/// An iterator over adaptively spaced samples of a curve.
///
/// The first sample is at the start of the range. Each following step is
/// `ds` divided by the local speed of the curve, estimated by a forward
/// difference, so consecutive samples land roughly `ds` apart. The step is
/// clamped to the end of the range, so the last sample is exactly at the
/// end. This approximates arc-length sampling; it does not correct for
/// curvature within a step.
///
/// An error ends the iteration.
///
/// ```
/// use spiro::{Line, Trace, TraceParams};
///
/// let line = Line::new((0.0, 0.0), (1.0, 0.0));
/// let samples = Trace::new(&line, 0.0, 2.0, TraceParams::new(0.5))
///     .unwrap()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(samples.first().unwrap().t, 0.0);
/// assert_eq!(samples.last().unwrap().t, 2.0);
/// ```
pub struct Trace<'a, C: ?Sized> {
    curve: &'a C,
    params: TraceParams,
    end: f64,
    t: f64,
    value: Complex,
    state: State,
}

impl<'a, C: Curve + ?Sized> Trace<'a, C> {
    /// Prepare to trace `curve` from `start` to `end`.
    ///
    /// If `start` is not below `end`, only the start sample is produced.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidRange`] for a non-finite range and
    /// [`TraceError::InvalidParams`] for non-positive `ds` or `dt`.
    pub fn new(
        curve: &'a C,
        start: f64,
        end: f64,
        params: TraceParams,
    ) -> Result<Trace<'a, C>, TraceError> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(TraceError::InvalidRange { start, end });
        }
        params.validate()?;
        Ok(Trace {
            curve,
            params,
            end,
            t: start,
            value: curve.value(start),
            state: State::Start,
        })
    }

    fn step(&mut self) -> Result<Sample, TraceError> {
        let TraceParams { ds, dt } = self.params;
        let speed = (self.curve.value(self.t + dt) - self.value).mag() / dt;
        let step = ds / speed;
        if !step.is_finite() {
            return Err(TraceError::NonFiniteStep { t: self.t, speed });
        }
        let t = self.end.min(self.t + step);
        if t <= self.t {
            return Err(TraceError::Stalled { t: self.t });
        }
        log::trace!("sample at t = {t}, step {step}");
        self.t = t;
        self.value = self.curve.value(t);
        Ok(Sample {
            t,
            point: self.value.to_point(),
        })
    }
}

impl<C: Curve + ?Sized> Iterator for Trace<'_, C> {
    type Item = Result<Sample, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Start => {
                self.state = if self.t < self.end {
                    State::Walking
                } else {
                    State::Done
                };
                Some(Ok(Sample {
                    t: self.t,
                    point: self.value.to_point(),
                }))
            }
            State::Walking => {
                let sample = self.step();
                if sample.is_err() || self.t >= self.end {
                    self.state = State::Done;
                }
                Some(sample)
            }
            State::Done => None,
        }
    }
}

impl<C: Curve + ?Sized> FusedIterator for Trace<'_, C> {}

impl<C: ?Sized> fmt::Debug for Trace<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("params", &self.params)
            .field("end", &self.end)
            .field("t", &self.t)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Trace `curve` from `start` to `end`, collecting the samples.
///
/// # Errors
///
/// See [`Trace`].
pub fn trace<C: Curve + ?Sized>(
    curve: &C,
    start: f64,
    end: f64,
    params: TraceParams,
) -> Result<Vec<Sample>, TraceError> {
    Trace::new(curve, start, end, params)?.collect()
}

/// Trace `curve` from `start` to `end` into a drawing sink.
///
/// The first sample becomes a `move_to`, every other one a `line_to`. On
/// error the sink keeps what was drawn before it.
///
/// # Errors
///
/// See [`Trace`].
pub fn trace_into<C: Curve + ?Sized, S: PathSink + ?Sized>(
    curve: &C,
    start: f64,
    end: f64,
    params: TraceParams,
    sink: &mut S,
) -> Result<(), TraceError> {
    let mut samples = Trace::new(curve, start, end, params)?;
    if let Some(first) = samples.next() {
        sink.move_to(first?.point);
    }
    for sample in samples {
        sink.line_to(sample?.point);
    }
    Ok(())
}

/// Trace `curve` from `start` to `end` into a [`Polyline`].
///
/// # Errors
///
/// See [`Trace`].
pub fn trace_path<C: Curve + ?Sized>(
    curve: &C,
    start: f64,
    end: f64,
    params: TraceParams,
) -> Result<Polyline, TraceError> {
    let mut path = Polyline::new();
    trace_into(curve, start, end, params, &mut path)?;
    Ok(path)
}
