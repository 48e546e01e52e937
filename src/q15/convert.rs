// src/q15/convert.rs

//! Conversions between real values and the Q15 wire format.
//!
//! A Q15 sample is a signed 16-bit integer `v` encoding the real value
//! `v / 32768`. The representable range is `[-1.0, 32767/32768]`; note
//! the asymmetry: `-1.0` is exact, `+1.0` is not.

/// Scaling factor between the real domain and raw Q15 bits.
const SCALE: f64 = 32768.0;

/// Largest real value representable in Q15, `32767/32768`.
pub const MAX_REAL: f64 = 32767.0 / 32768.0;

/// Smallest real value representable in Q15.
pub const MIN_REAL: f64 = -1.0;

/// Real-domain weight of one Q15 LSB, `2^-15`.
pub const LSB_REAL: f64 = 1.0 / 32768.0;

/// Tie-breaking rule applied when a scaled value lands exactly between
/// two representable Q15 codes.
///
/// Ties only occur for inputs that are odd multiples of `2^-16`; for
/// every other input the two modes agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Ties round away from zero (`0.5` LSB becomes `1`). This is the
    /// convention of C's `round()` and the default here.
    #[default]
    HalfAwayFromZero,
    /// Ties round to the nearest even code (`0.5` LSB becomes `0`),
    /// matching IEEE 754 round-to-nearest-even.
    HalfToEven,
}

/// Converts a real value to raw Q15 bits with the default
/// half-away-from-zero rounding.
///
/// The input is clamped to `[MIN_REAL, MAX_REAL]` before scaling, so
/// every finite `f64` maps to a valid code. `NaN` maps to `0`.
#[inline]
pub fn to_q15(x: f64) -> i16 {
    to_q15_with(x, Rounding::HalfAwayFromZero)
}

/// Converts a real value to raw Q15 bits under an explicit rounding
/// mode. Clamps first, then scales and rounds, so the result is always
/// in range and the conversion is total.
pub fn to_q15_with(x: f64, mode: Rounding) -> i16 {
    let clamped = if x > MAX_REAL {
        MAX_REAL
    } else if x < MIN_REAL {
        MIN_REAL
    } else {
        // NaN fails both comparisons and falls through; the final
        // `as i16` cast then maps it to 0.
        x
    };
    let rounded = match mode {
        Rounding::HalfAwayFromZero => round_half_away(clamped * SCALE),
        Rounding::HalfToEven => round_half_even(clamped * SCALE),
    };
    rounded as i16
}

/// Recovers the exact real value of a Q15 code.
///
/// Every Q15 code is a dyadic rational `v / 32768`, which `f64`
/// represents exactly, so this conversion never loses information.
#[inline]
pub fn from_q15(v: i16) -> f64 {
    v as f64 / SCALE
}

fn round_half_away(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

fn round_half_even(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round_ties_even();

    #[cfg(not(feature = "std"))]
    return libm::rint(x);
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
