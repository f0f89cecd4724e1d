use crate::axis::uniform_time_axis;
use crate::config::StepConfig;
use crate::error::Result;
use crate::signal::Signal;

/// Generate a step: `amplitude` where `t >= step_time`, zero before.
///
/// A `step_time` at or before zero gives an all-`amplitude` signal; one at
/// or past `duration` gives all zeros.
pub fn generate_step(config: &StepConfig) -> Result<Signal> {
    let time = uniform_time_axis(config.duration, config.sampling_rate)?;

    log::trace!(
        "step: at {} s, amplitude {}",
        config.step_time,
        config.amplitude
    );

    Ok(Signal::from_fn(time, |t| {
        if t >= config.step_time {
            config.amplitude
        } else {
            0.0
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_edge() {
        let signal = generate_step(&StepConfig::default()).unwrap();
        // t[500] = 0.5 exactly on the half-open axis
        assert_eq!(signal.samples()[499], 0.0);
        assert_eq!(signal.samples()[500], 1.0);
        assert_eq!(signal.samples().iter().filter(|&&x| x == 1.0).count(), 500);
    }

    #[test]
    fn test_step_before_start_is_all_amplitude() {
        let signal = generate_step(
            &StepConfig::default()
                .with_step_time(-1.0)
                .with_amplitude(0.5),
        )
        .unwrap();
        assert!(signal.samples().iter().all(|&x| x == 0.5));
    }

    #[test]
    fn test_step_after_end_is_all_zero() {
        // Last timestamp is 0.999, so a step at the duration never fires
        let signal = generate_step(&StepConfig::default().with_step_time(1.0)).unwrap();
        assert!(signal.samples().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_step_negative_amplitude() {
        let signal = generate_step(&StepConfig::default().with_amplitude(-2.0)).unwrap();
        assert_eq!(signal.samples()[0], 0.0);
        assert_eq!(signal.samples()[999], -2.0);
    }

    #[test]
    fn test_step_rejects_bad_timing() {
        assert!(generate_step(&StepConfig::default().with_duration(-1.0)).is_err());
        assert!(generate_step(&StepConfig::default().with_sampling_rate(0.0)).is_err());
    }
}
