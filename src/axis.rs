//! Time-axis helpers shared by the generators.
//!
//! Every axis in this crate is half-open: it covers `[0, duration)` with
//! `round(sampling_rate * duration)` samples spaced exactly
//! `1 / sampling_rate` apart, so `t[i] = i / sampling_rate`.

use crate::error::{Result, SignalError};

/// Check that a timing parameter is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SignalError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(SignalError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

/// Number of samples on the axis for the given duration and rate.
///
/// # Errors
/// `InvalidParameter` if either argument is non-positive or non-finite, or
/// if the product rounds to zero samples.
pub fn sample_count(duration: f64, sampling_rate: f64) -> Result<usize> {
    require_positive("duration", duration)?;
    require_positive("sampling_rate", sampling_rate)?;

    let n = (sampling_rate * duration).round();
    if !n.is_finite() || n > usize::MAX as f64 {
        return Err(SignalError::InvalidParameter {
            name: "duration",
            value: duration,
            reason: "sample count overflows",
        });
    }
    if n < 1.0 {
        return Err(SignalError::InvalidParameter {
            name: "duration",
            value: duration,
            reason: "produces no samples at this sampling rate",
        });
    }
    Ok(n as usize)
}

/// Build the half-open uniform time axis `[0, duration)`.
pub fn uniform_time_axis(duration: f64, sampling_rate: f64) -> Result<Vec<f64>> {
    let n = sample_count(duration, sampling_rate)?;
    log::trace!(
        "time axis: {} samples, spacing {:.6e} s",
        n,
        1.0 / sampling_rate
    );
    Ok((0..n).map(|i| i as f64 / sampling_rate).collect())
}

/// Index of the timestamp closest to `target`.
///
/// Linear scan minimizing `|t[i] - target|`; the lowest index wins ties.
/// Returns `None` only for an empty axis. NaN timestamps never win.
pub fn nearest_index(time_axis: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &t) in time_axis.iter().enumerate() {
        let distance = (t - target).abs();
        if distance.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}
