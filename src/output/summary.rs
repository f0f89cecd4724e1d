use std::fmt;

use serde::Serialize;

use crate::signal::Signal;

/// Extent and value range of a signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalSummary {
    pub samples: usize,
    /// First timestamp
    pub start: f64,
    /// Last timestamp
    pub end: f64,
    pub min: f64,
    pub max: f64,
    /// Index of the largest absolute sample (first on ties)
    pub peak_index: usize,
}

impl SignalSummary {
    /// `None` for an empty signal.
    pub fn of(signal: &Signal) -> Option<Self> {
        let (&start, &end) = (signal.time().first()?, signal.time().last()?);

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut peak_index = 0;
        let mut peak = f64::NEG_INFINITY;
        for (i, &x) in signal.samples().iter().enumerate() {
            min = min.min(x);
            max = max.max(x);
            if x.abs() > peak {
                peak = x.abs();
                peak_index = i;
            }
        }

        Some(Self {
            samples: signal.len(),
            start,
            end,
            min,
            max,
            peak_index,
        })
    }
}

impl fmt::Display for SignalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples, t: [{:.4}, {:.4}] s, x: [{:.4}, {:.4}], peak at index {}",
            self.samples, self.start, self.end, self.min, self.max, self.peak_index
        )
    }
}
