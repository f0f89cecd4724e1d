//! Sums of waveforms on a shared axis.

use crate::config::{
    ComponentConfig, CompositionConfig, ImpulseConfig, SineConfig, StepConfig,
};
use crate::error::{Result, SignalError};
use crate::generators::{generate_impulse, generate_sine, generate_step};
use crate::signal::Signal;
use crate::transforms::{add_signals, apply_transform};

/// Generate one component on the given axis timing.
pub fn generate_component(
    component: &ComponentConfig,
    duration: f64,
    sampling_rate: f64,
) -> Result<Signal> {
    match *component {
        ComponentConfig::Sine {
            frequency,
            amplitude,
            phase,
        } => generate_sine(&SineConfig {
            frequency,
            amplitude,
            phase,
            duration,
            sampling_rate,
        }),
        ComponentConfig::Step {
            step_time,
            amplitude,
        } => generate_step(&StepConfig {
            duration,
            step_time,
            amplitude,
            sampling_rate,
        }),
        ComponentConfig::Impulse {
            impulse_time,
            amplitude,
        } => generate_impulse(&ImpulseConfig {
            duration,
            impulse_time,
            amplitude,
            sampling_rate,
        }),
    }
}

/// Generate every component, sum the samples, then apply the transform.
///
/// # Errors
/// `Config` when there are no components; otherwise whatever the generators
/// report for the shared timing.
pub fn compose(config: &CompositionConfig) -> Result<Signal> {
    let (first, rest) = config
        .components
        .split_first()
        .ok_or_else(|| SignalError::Config("composition has no components".to_string()))?;

    let (time, mut samples) =
        generate_component(first, config.duration, config.sampling_rate)?.into_parts();

    for component in rest {
        let next = generate_component(component, config.duration, config.sampling_rate)?;
        samples = add_signals(&samples, next.samples())?;
    }

    log::trace!(
        "composed {} components over {} samples",
        config.components.len(),
        samples.len()
    );

    let combined = Signal::new(time, samples)?;
    if config.transform.is_identity() {
        return Ok(combined);
    }
    Ok(apply_transform(&combined, &config.transform))
}
