use crate::signal::Signal;

/// Multiply every timestamp by `scale`. Samples are copied unchanged.
///
/// `scale = 0` collapses the whole axis onto zero. A negative `scale`
/// negates the axis without reordering the samples, so the result is no
/// longer increasing (see [`Signal::is_monotonic`]).
pub fn time_scale(signal: &Signal, scale: f64) -> Signal {
    let time = signal.time().iter().map(|&t| t * scale).collect();
    signal.with_time(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Signal {
        Signal::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    #[test]
    fn test_scale_stretches_axis() {
        let scaled = time_scale(&ramp(), 0.5);
        assert_eq!(scaled.time(), &[0.0, 0.5, 1.0, 1.5]);
        assert_eq!(scaled.samples(), ramp().samples());
    }

    #[test]
    fn test_zero_scale_collapses() {
        let scaled = time_scale(&ramp(), 0.0);
        assert!(scaled.time().iter().all(|&t| t == 0.0));
        assert_eq!(scaled.len(), 4);
    }

    #[test]
    fn test_negative_scale_reverses_sign_not_order() {
        let scaled = time_scale(&ramp(), -1.0);
        assert_eq!(scaled.time(), &[0.0, -1.0, -2.0, -3.0]);
        assert_eq!(scaled.samples(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(!scaled.is_monotonic());
    }
}
