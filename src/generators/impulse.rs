use crate::axis::{nearest_index, uniform_time_axis};
use crate::config::ImpulseConfig;
use crate::error::{Result, SignalError};
use crate::signal::Signal;

/// Generate a single-sample impulse.
///
/// The sample whose timestamp is nearest `impulse_time` (lowest index on a
/// tie) is set to `amplitude`; every other sample is zero. An
/// `impulse_time` outside `[0, duration)`, infinities included, lands on the
/// nearest end of the axis instead of failing.
///
/// # Errors
/// `InvalidParameter` for bad timing (see [`uniform_time_axis`]) or a NaN
/// `impulse_time`.
pub fn generate_impulse(config: &ImpulseConfig) -> Result<Signal> {
    let time = uniform_time_axis(config.duration, config.sampling_rate)?;
    if config.impulse_time.is_nan() {
        return Err(SignalError::InvalidParameter {
            name: "impulse_time",
            value: config.impulse_time,
            reason: "must not be NaN",
        });
    }

    // The axis is non-empty and increasing; clamping keeps distances on its scale
    let (first, last) = (time[0], time[time.len() - 1]);
    let target = config.impulse_time.clamp(first, last);
    let idx = nearest_index(&time, target).unwrap_or(0);

    log::trace!(
        "impulse: target {} s placed at index {} (t = {})",
        config.impulse_time,
        idx,
        time[idx]
    );

    let mut samples = vec![0.0; time.len()];
    samples[idx] = config.amplitude;
    Signal::new(time, samples)
}
