//! Canonical waveform generators.
//!
//! Each generator validates its timing parameters, builds the half-open axis
//! from [`crate::axis::uniform_time_axis`] and evaluates its waveform on it.

mod impulse;
mod sine;
mod step;

pub use impulse::generate_impulse;
pub use sine::generate_sine;
pub use step::generate_step;
