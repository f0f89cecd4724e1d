//! Parameter sets for the generators, transforms and compositions.
//!
//! Every struct carries the documented defaults in its `Default` impl and
//! derives `Deserialize` with `#[serde(default)]`, so a TOML description may
//! leave out any field. Unknown keys are rejected.
//!
//! ```
//! use elementary_signals::config::SineConfig;
//!
//! let config = SineConfig::default().with_frequency(5.0).with_duration(2.0);
//! assert_eq!(config.sampling_rate, 1000.0);
//! ```

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SignalError};

const DEFAULT_DURATION: f64 = 1.0;
const DEFAULT_SAMPLING_RATE: f64 = 1000.0;
const DEFAULT_AMPLITUDE: f64 = 1.0;
const DEFAULT_FREQUENCY: f64 = 1.0;
const DEFAULT_STEP_TIME: f64 = 0.5;

/// Sampling rate specification
///
/// Can be given either as a rate or as the spacing between samples.
///
/// # Parsing formats
/// - `1000` or `1000hz` - rate in Hz
/// - `44.1khz` - rate in kHz
/// - `1ms` or `125us` (also `125μs`) - sample period
///
/// # Example
/// ```
/// use elementary_signals::config::SamplingRate;
///
/// let rate: SamplingRate = "125us".parse().unwrap();
/// assert!((rate.as_hz() - 8000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRate(f64);

impl SamplingRate {
    pub fn from_hz(hz: f64) -> Self {
        Self(hz)
    }

    pub fn from_period_secs(secs: f64) -> Self {
        Self(1.0 / secs)
    }

    pub fn as_hz(&self) -> f64 {
        self.0
    }

    /// Sample spacing in seconds
    pub fn period_secs(&self) -> f64 {
        1.0 / self.0
    }
}

impl Default for SamplingRate {
    fn default() -> Self {
        Self::from_hz(DEFAULT_SAMPLING_RATE)
    }
}

impl fmt::Display for SamplingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hz", self.0)
    }
}

fn parse_positive(num: &str, original: &str, what: &str) -> std::result::Result<f64, String> {
    let value: f64 = num
        .trim()
        .parse()
        .map_err(|_| format!("invalid {}: {}", what, original))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be positive", what));
    }
    Ok(value)
}

impl FromStr for SamplingRate {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        if let Some(num) = lower.strip_suffix("us").or_else(|| s.strip_suffix("μs")) {
            let us = parse_positive(num, s, "period")?;
            return Ok(Self::from_period_secs(us * 1e-6));
        }
        if let Some(num) = lower.strip_suffix("ms") {
            let ms = parse_positive(num, s, "period")?;
            return Ok(Self::from_period_secs(ms * 1e-3));
        }
        if let Some(num) = lower.strip_suffix("khz") {
            let khz = parse_positive(num, s, "sampling rate")?;
            return Ok(Self::from_hz(khz * 1e3));
        }

        let num = lower.strip_suffix("hz").unwrap_or(&lower);
        let hz = parse_positive(num, s, "sampling rate")?;
        Ok(Self::from_hz(hz))
    }
}

/// Sine generator parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SineConfig {
    /// Frequency in Hz (any real, including 0 and negative)
    pub frequency: f64,
    pub amplitude: f64,
    /// Phase offset in radians
    pub phase: f64,
    /// Signal length in seconds
    pub duration: f64,
    /// Samples per second
    pub sampling_rate: f64,
}

impl Default for SineConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
            phase: 0.0,
            duration: DEFAULT_DURATION,
            sampling_rate: DEFAULT_SAMPLING_RATE,
        }
    }
}

impl SineConfig {
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }
}

/// Step generator parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepConfig {
    pub duration: f64,
    /// Time in seconds from which the output equals `amplitude`
    pub step_time: f64,
    pub amplitude: f64,
    pub sampling_rate: f64,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            step_time: DEFAULT_STEP_TIME,
            amplitude: DEFAULT_AMPLITUDE,
            sampling_rate: DEFAULT_SAMPLING_RATE,
        }
    }
}

impl StepConfig {
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_step_time(mut self, step_time: f64) -> Self {
        self.step_time = step_time;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }
}

/// Impulse generator parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImpulseConfig {
    pub duration: f64,
    /// Target time of the single non-zero sample
    pub impulse_time: f64,
    pub amplitude: f64,
    pub sampling_rate: f64,
}

impl Default for ImpulseConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            impulse_time: 0.0,
            amplitude: DEFAULT_AMPLITUDE,
            sampling_rate: DEFAULT_SAMPLING_RATE,
        }
    }
}

impl ImpulseConfig {
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_impulse_time(mut self, impulse_time: f64) -> Self {
        self.impulse_time = impulse_time;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }
}

/// Time-axis transform applied after generation
///
/// The shift is applied first, then the scale.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Seconds added to every timestamp
    pub shift: f64,
    /// Factor every timestamp is multiplied by
    pub scale: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            shift: 0.0,
            scale: 1.0,
        }
    }
}

impl TransformConfig {
    pub fn is_identity(&self) -> bool {
        self.shift == 0.0 && self.scale == 1.0
    }
}

fn default_frequency() -> f64 {
    DEFAULT_FREQUENCY
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

fn default_step_time() -> f64 {
    DEFAULT_STEP_TIME
}

/// One waveform in a composition; timing comes from the enclosing
/// [`CompositionConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum ComponentConfig {
    Sine {
        #[serde(default = "default_frequency")]
        frequency: f64,
        #[serde(default = "default_amplitude")]
        amplitude: f64,
        #[serde(default)]
        phase: f64,
    },
    Step {
        #[serde(default = "default_step_time")]
        step_time: f64,
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    Impulse {
        #[serde(default)]
        impulse_time: f64,
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
}

/// A sum of waveforms on one shared axis, optionally transformed
///
/// # TOML layout
/// ```toml
/// duration = 1.0
/// sampling_rate = 1000.0
///
/// [[component]]
/// kind = "sine"
/// frequency = 5.0
///
/// [[component]]
/// kind = "step"
/// step_time = 0.3
/// amplitude = 0.5
///
/// [transform]
/// shift = 0.2
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositionConfig {
    pub duration: f64,
    pub sampling_rate: f64,
    #[serde(rename = "component")]
    pub components: Vec<ComponentConfig>,
    pub transform: TransformConfig,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            sampling_rate: DEFAULT_SAMPLING_RATE,
            components: Vec::new(),
            transform: TransformConfig::default(),
        }
    }
}

impl CompositionConfig {
    /// Parse a TOML composition description.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SignalError::Config(e.to_string()))
    }

    /// 5 Hz sine plus a half-amplitude step at 0.3 s plus a negative impulse
    /// at 0.7 s, one second at 1 kHz.
    pub fn demo() -> Self {
        Self {
            components: vec![
                ComponentConfig::Sine {
                    frequency: 5.0,
                    amplitude: DEFAULT_AMPLITUDE,
                    phase: 0.0,
                },
                ComponentConfig::Step {
                    step_time: 0.3,
                    amplitude: 0.5,
                },
                ComponentConfig::Impulse {
                    impulse_time: 0.7,
                    amplitude: -1.0,
                },
            ],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_rate_plain() {
        let rate: SamplingRate = "1000".parse().unwrap();
        assert_eq!(rate.as_hz(), 1000.0);

        let rate: SamplingRate = "48000Hz".parse().unwrap();
        assert_eq!(rate.as_hz(), 48000.0);
    }

    #[test]
    fn test_sampling_rate_khz() {
        let rate: SamplingRate = "44.1kHz".parse().unwrap();
        assert!((rate.as_hz() - 44100.0).abs() < 1e-6);
    }

    #[test]
    fn test_sampling_rate_from_period() {
        let rate: SamplingRate = "1ms".parse().unwrap();
        assert!((rate.as_hz() - 1000.0).abs() < 1e-9);

        let rate: SamplingRate = "125μs".parse().unwrap();
        assert!((rate.as_hz() - 8000.0).abs() < 1e-9);
        assert!((rate.period_secs() - 125e-6).abs() < 1e-15);
    }

    #[test]
    fn test_sampling_rate_invalid() {
        assert!("abc".parse::<SamplingRate>().is_err());
        assert!("-100hz".parse::<SamplingRate>().is_err());
        assert!("0us".parse::<SamplingRate>().is_err());
        assert!("0".parse::<SamplingRate>().is_err());
    }

    #[test]
    fn test_defaults() {
        let sine = SineConfig::default();
        assert_eq!(
            (sine.frequency, sine.amplitude, sine.phase, sine.duration, sine.sampling_rate),
            (1.0, 1.0, 0.0, 1.0, 1000.0)
        );

        let step = StepConfig::default();
        assert_eq!(
            (step.duration, step.step_time, step.amplitude, step.sampling_rate),
            (1.0, 0.5, 1.0, 1000.0)
        );

        let impulse = ImpulseConfig::default();
        assert_eq!(
            (impulse.duration, impulse.impulse_time, impulse.amplitude, impulse.sampling_rate),
            (1.0, 0.0, 1.0, 1000.0)
        );

        assert!(TransformConfig::default().is_identity());
    }

    #[test]
    fn test_composition_from_toml() {
        let config = CompositionConfig::from_toml_str(
            r#"
            duration = 2.0

            [[component]]
            kind = "sine"
            frequency = 5.0

            [[component]]
            kind = "impulse"
            impulse_time = 0.7
            amplitude = -1.0

            [transform]
            scale = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.duration, 2.0);
        assert_eq!(config.sampling_rate, 1000.0);
        assert_eq!(
            config.components,
            vec![
                ComponentConfig::Sine {
                    frequency: 5.0,
                    amplitude: 1.0,
                    phase: 0.0
                },
                ComponentConfig::Impulse {
                    impulse_time: 0.7,
                    amplitude: -1.0
                },
            ]
        );
        assert_eq!(config.transform.shift, 0.0);
        assert_eq!(config.transform.scale, 2.0);
    }

    #[test]
    fn test_composition_step_defaults() {
        let config = CompositionConfig::from_toml_str("[[component]]\nkind = \"step\"\n").unwrap();
        assert_eq!(
            config.components,
            vec![ComponentConfig::Step {
                step_time: 0.5,
                amplitude: 1.0
            }]
        );
    }

    #[test]
    fn test_composition_rejects_misspelled_keys() {
        for content in [
            "[[component]]\nkind = \"sine\"\nfrequncy = 5.0\n",
            "sample_rate = 8000.0\n",
            "[transform]\nshfit = 0.2\n",
        ] {
            let err = CompositionConfig::from_toml_str(content).unwrap_err();
            assert!(matches!(err, SignalError::Config(_)), "accepted {:?}", content);
        }
    }

    #[test]
    fn test_composition_rejects_unknown_kind() {
        let err = CompositionConfig::from_toml_str("[[component]]\nkind = \"square\"\n").unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }
}
