use crate::error::{Result, SignalError};

/// A sampled signal: a time axis paired with one sample per timestamp.
///
/// The two sequences always have the same length. Fields are private so the
/// only ways to build a `Signal` are the checked constructor and the
/// generators/transforms in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    time: Vec<f64>,
    samples: Vec<f64>,
}

impl Signal {
    /// Pair a time axis with its samples.
    ///
    /// # Errors
    /// `LengthMismatch` if the two sequences differ in length.
    pub fn new(time: Vec<f64>, samples: Vec<f64>) -> Result<Self> {
        if time.len() != samples.len() {
            return Err(SignalError::LengthMismatch {
                left: time.len(),
                right: samples.len(),
            });
        }
        Ok(Self { time, samples })
    }

    /// Build a signal by evaluating `f` at every timestamp.
    pub(crate) fn from_fn<F>(time: Vec<f64>, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let samples = time.iter().map(|&t| f(t)).collect();
        Self { time, samples }
    }

    /// Re-pair with a new axis of the same length. Callers guarantee the length.
    pub(crate) fn with_time(&self, time: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), self.samples.len());
        Self {
            time,
            samples: self.samples.clone(),
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate `(t, x)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.samples.iter().copied())
    }

    /// True when the time axis never decreases.
    ///
    /// Generated signals are always monotonic; a negative `time_scale` breaks
    /// this, and a zero scale leaves a constant (still monotonic) axis.
    pub fn is_monotonic(&self) -> bool {
        self.time.windows(2).all(|w| w[0] <= w[1])
    }

    /// Split into `(time_axis, samples)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.samples)
    }
}
