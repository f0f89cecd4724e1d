use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform values in [-scale, scale)
pub fn random_sequence(rng: &mut ChaCha8Rng, len: usize, scale: f64) -> Vec<f64> {
    (0..len)
        .map(|_| (rng.random::<f64>() * 2.0 - 1.0) * scale)
        .collect()
}

/// (duration, sampling_rate) pairs that always hold at least one sample
pub fn random_timing(rng: &mut ChaCha8Rng) -> (f64, f64) {
    let sampling_rate = 10.0 + rng.random::<f64>() * 2000.0;
    let duration = 0.5 + rng.random::<f64>() * 3.0;
    (duration, sampling_rate)
}
