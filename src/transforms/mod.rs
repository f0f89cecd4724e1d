//! Time-domain transforms over generated signals.
//!
//! Transforms borrow their inputs and return freshly allocated output.

mod add;
mod scale;
mod shift;

pub use add::add_signals;
pub use scale::time_scale;
pub use shift::time_shift;

use crate::config::TransformConfig;
use crate::signal::Signal;

/// Apply a [`TransformConfig`]: shift first, then scale.
pub fn apply_transform(signal: &Signal, transform: &TransformConfig) -> Signal {
    let shifted = time_shift(signal, transform.shift);
    time_scale(&shifted, transform.scale)
}
