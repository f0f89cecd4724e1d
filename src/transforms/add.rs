use crate::error::{Result, SignalError};

/// Element-wise sum of two sample sequences.
///
/// # Errors
/// `LengthMismatch` if the sequences differ in length. Nothing is truncated
/// or padded.
///
/// # Example
/// ```
/// use elementary_signals::add_signals;
///
/// assert_eq!(add_signals(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), vec![5.0, 7.0, 9.0]);
/// assert!(add_signals(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn add_signals(x1: &[f64], x2: &[f64]) -> Result<Vec<f64>> {
    if x1.len() != x2.len() {
        return Err(SignalError::LengthMismatch {
            left: x1.len(),
            right: x2.len(),
        });
    }
    Ok(x1.iter().zip(x2).map(|(a, b)| a + b).collect())
}
