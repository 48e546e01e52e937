// src/q15/sat.rs

//! Saturating 16-bit arithmetic mirroring the hardware datapath.
//!
//! Every operation widens to `i32`, combines, and clamps back to the
//! signed 16-bit range, with one deliberate exception: [`q15_mult`]
//! truncates the shifted product to 16 bits without saturating it.

/// Upper clamp bound as the widened intermediate type.
const MAX_16: i32 = 0x7fff;
/// Lower clamp bound as the widened intermediate type.
const MIN_16: i32 = -0x8000;

/// Clamps a widened intermediate back into the signed 16-bit range.
#[inline]
pub fn saturate(wide: i32) -> i16 {
    if wide > MAX_16 {
        MAX_16 as i16
    } else if wide < MIN_16 {
        MIN_16 as i16
    } else {
        wide as i16
    }
}

/// Saturating addition of two Q15 samples.
///
/// `32767 + 1` clamps to `32767` instead of wrapping, the same way the
/// hardware adder pins its output at the rail.
#[inline]
pub fn sat_add(a: i16, b: i16) -> i16 {
    saturate(a as i32 + b as i32)
}

/// Saturating subtraction of two Q15 samples.
#[inline]
pub fn sat_sub(a: i16, b: i16) -> i16 {
    saturate(a as i32 - b as i32)
}

/// Q15 multiplication: full 32-bit product, arithmetic right shift by 15.
///
/// The shift truncates toward negative infinity; there is no rounding
/// bias and no saturation of the shifted result. The single overflowing
/// case, `-32768 * -32768`, shifts to `+32768` and wraps to `-32768` in
/// the narrowed result, exactly like a multiplier whose output register
/// has no clamp stage.
#[inline]
pub fn q15_mult(a: i16, b: i16) -> i16 {
    let product = a as i32 * b as i32;
    (product >> 15) as i16
}

#[cfg(test)]
#[path = "sat_tests.rs"]
mod tests;
