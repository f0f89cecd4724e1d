pub mod axis;
pub mod compose;
pub mod config;
pub mod error;
pub mod generators;
pub mod output;
pub mod signal;
pub mod transforms;

pub use compose::compose;
pub use config::{CompositionConfig, ImpulseConfig, SineConfig, StepConfig, TransformConfig};
pub use error::{Result, SignalError};
pub use generators::{generate_impulse, generate_sine, generate_step};
pub use signal::Signal;
pub use transforms::{add_signals, time_scale, time_shift};
