// src/butterfly.rs

//! Radix-2 decimation butterfly over complex Q15 samples.

use crate::q15::ComplexQ15;

/// Computes one radix-2 butterfly, the combine step of a
/// decimation-in-frequency FFT stage:
///
/// ```text
/// y0 = x0 + x1
/// y1 = (x0 - x1) * w
/// ```
///
/// The sum and difference saturate independently in each component; the
/// twiddle multiply truncates each partial product and saturates the
/// combines, exactly as the fixed-point datapath does. Every `(x0, x1,
/// w)` triple is accepted and the function never panics, so out-of-range
/// intermediate values show up as rail-pinned outputs rather than
/// errors.
///
/// ```
/// use q15_butterfly::{butterfly, ComplexQ15};
///
/// let x0 = ComplexQ15::from_bits(16384, 0); // 0.5
/// let x1 = ComplexQ15::from_bits(16384, 0); // 0.5
/// let w = ComplexQ15::from_bits(32767, 0);  // 32767/32768, the closest Q15 gets to 1.0
///
/// let (y0, y1) = butterfly(x0, x1, w);
/// assert_eq!(y0, ComplexQ15::from_bits(32767, 0)); // 0.5 + 0.5 saturates just below 1.0
/// assert_eq!(y1, ComplexQ15::ZERO);
/// ```
#[inline]
pub fn butterfly(x0: ComplexQ15, x1: ComplexQ15, w: ComplexQ15) -> (ComplexQ15, ComplexQ15) {
    let sum = x0 + x1;
    let diff = x0 - x1;
    (sum, diff * w)
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
