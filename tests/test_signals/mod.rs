pub mod random;

pub use random::{random_sequence, random_timing, seeded_rng};
