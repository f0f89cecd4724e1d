use crate::signal::Signal;

/// Delay (positive `shift`) or advance the signal by adding `shift` seconds
/// to every timestamp. Samples are copied unchanged.
pub fn time_shift(signal: &Signal, shift: f64) -> Signal {
    let time = signal.time().iter().map(|&t| t + shift).collect();
    signal.with_time(time)
}
