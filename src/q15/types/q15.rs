// src/q15/types/q15.rs
use crate::q15::convert;
use crate::q15::convert::Rounding;
use crate::q15::sat;

/// Q15 fixed-point sample: one sign bit and 15 fractional bits.
/// The internal value is stored as a signed 16-bit integer `v`
/// encoding the real number `v / 32768`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Q15(i16);

impl Q15 {
    /// Exactly 0.0.
    pub const ZERO: Self = Self(0);

    /// Largest representable value, 32767/32768. Q15 has no exact +1.0.
    pub const MAX: Self = Self(i16::MAX);

    /// Smallest representable value, exactly -1.0.
    pub const MIN: Self = Self(i16::MIN);

    /// Creates a Q15 from the raw register value (without scaling).
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Converts an f64 to Q15 with clamping and the default rounding.
    /// Useful for initializing stimuli and twiddle factors.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self(convert::to_q15(value))
    }

    /// Converts an f64 to Q15 under an explicit tie-breaking rule.
    #[inline]
    pub fn from_f64_with(value: f64, mode: Rounding) -> Self {
        Self(convert::to_q15_with(value, mode))
    }

    /// Returns the exact real value of this sample.
    #[inline]
    pub fn to_f64(self) -> f64 {
        convert::from_q15(self.0)
    }
}

use core::ops::Add;

impl Add for Q15 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(sat::sat_add(self.0, rhs.0))
    }
}

use core::ops::AddAssign;

impl AddAssign for Q15 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

use core::ops::Sub;

impl Sub for Q15 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(sat::sat_sub(self.0, rhs.0))
    }
}

use core::ops::SubAssign;

impl SubAssign for Q15 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

use core::ops::Mul;

impl Mul for Q15 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(sat::q15_mult(self.0, rhs.0))
    }
}

use core::ops::MulAssign;

impl MulAssign for Q15 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

use core::fmt;

impl fmt::Display for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl fmt::Debug for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
