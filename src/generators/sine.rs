use std::f64::consts::PI;

use crate::axis::uniform_time_axis;
use crate::config::SineConfig;
use crate::error::Result;
use crate::signal::Signal;

/// Generate `amplitude * sin(2π·frequency·t + phase)` on the half-open axis.
///
/// # Errors
/// `InvalidParameter` if `duration` or `sampling_rate` is non-positive,
/// non-finite, or their product rounds to zero samples.
///
/// # Example
/// ```
/// use elementary_signals::config::SineConfig;
/// use elementary_signals::generate_sine;
///
/// let signal = generate_sine(&SineConfig::default().with_duration(10.0)).unwrap();
/// assert_eq!(signal.len(), 10_000);
/// assert!(signal.samples()[0].abs() < 1e-12);
/// ```
pub fn generate_sine(config: &SineConfig) -> Result<Signal> {
    let time = uniform_time_axis(config.duration, config.sampling_rate)?;
    let omega = 2.0 * PI * config.frequency;

    log::trace!(
        "sine: {} Hz, amplitude {}, phase {} rad",
        config.frequency,
        config.amplitude,
        config.phase
    );

    Ok(Signal::from_fn(time, |t| {
        config.amplitude * (omega * t + config.phase).sin()
    }))
}
