use super::q15::Q15;
use num_complex::Complex;

/// Complex Q15 sample: a real/imaginary pair of [`Q15`] values, the
/// shape of one port on the hardware butterfly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplexQ15 {
    pub re: Q15,
    pub im: Q15,
}

impl ComplexQ15 {
    /// Exactly 0 + 0i.
    pub const ZERO: Self = Self {
        re: Q15::ZERO,
        im: Q15::ZERO,
    };

    pub fn new(re: Q15, im: Q15) -> Self {
        Self { re, im }
    }

    /// Builds a sample directly from the two raw register values.
    #[inline]
    pub const fn from_bits(re: i16, im: i16) -> Self {
        Self {
            re: Q15::from_bits(re),
            im: Q15::from_bits(im),
        }
    }

    /// Converts a real pair to Q15 with clamping and default rounding.
    #[inline]
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self {
            re: Q15::from_f64(re),
            im: Q15::from_f64(im),
        }
    }

    /// Returns the complex conjugate (a - bi). Negation saturates, so
    /// conjugating an imaginary part of -1.0 yields 32767/32768.
    #[inline]
    pub fn conj(self) -> Self {
        ComplexQ15 {
            re: self.re,
            im: Q15::from_bits(self.im.to_bits().saturating_neg()),
        }
    }

    /// Exact view of this sample in the real domain.
    #[inline]
    pub fn to_complex_f64(self) -> Complex<f64> {
        Complex::new(self.re.to_f64(), self.im.to_f64())
    }
}

impl From<(i16, i16)> for ComplexQ15 {
    #[inline]
    fn from(bits: (i16, i16)) -> Self {
        Self::from_bits(bits.0, bits.1)
    }
}

impl From<ComplexQ15> for (i16, i16) {
    #[inline]
    fn from(value: ComplexQ15) -> Self {
        (value.re.to_bits(), value.im.to_bits())
    }
}

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// Addition saturates independently in each component.
impl Add for ComplexQ15 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ComplexQ15 {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for ComplexQ15 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ComplexQ15 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ComplexQ15 {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for ComplexQ15 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Four-real-multiply form, matching the hardware multiplier bank: each
// partial product truncates on its own, then the combines saturate.
impl Mul for ComplexQ15 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let ac = self.re * rhs.re;
        let bd = self.im * rhs.im;
        let ad = self.re * rhs.im;
        let bc = self.im * rhs.re;

        ComplexQ15 {
            // (ac - bd)
            re: ac - bd,
            // (ad + bc)
            im: ad + bc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let re = Q15::from_f64(0.5);
        let im = Q15::from_f64(-0.25);
        let c = ComplexQ15::new(re, im);

        assert_eq!(c.re, re);
        assert_eq!(c.im, im);
    }

    #[test]
    fn test_tuple_conversions() {
        let c = ComplexQ15::from((16384, -8192));
        assert_eq!(c, ComplexQ15::from_bits(16384, -8192));

        let bits: (i16, i16) = c.into();
        assert_eq!(bits, (16384, -8192));
    }

    #[test]
    fn test_addition() {
        // (0.25 + 0.5i) + (0.25 - 0.25i) = (0.5 + 0.25i)
        let a = ComplexQ15::from_f64(0.25, 0.5);
        let b = ComplexQ15::from_f64(0.25, -0.25);

        let result = a + b;

        assert_eq!(result, ComplexQ15::from_f64(0.5, 0.25));
    }

    #[test]
    fn test_addition_saturates_componentwise() {
        // (0.75 + 0.75) pins the real rail, imaginary parts stay exact
        let a = ComplexQ15::from_f64(0.75, 0.25);
        let b = ComplexQ15::from_f64(0.75, -0.5);

        let result = a + b;

        assert_eq!(result.re, Q15::MAX);
        assert_eq!(result.im, Q15::from_f64(-0.25));
    }

    #[test]
    fn test_subtraction() {
        // (0.5 + 0.25i) - (0.25 + 0.5i) = (0.25 - 0.25i)
        let a = ComplexQ15::from_f64(0.5, 0.25);
        let b = ComplexQ15::from_f64(0.25, 0.5);

        let result = a - b;

        assert_eq!(result, ComplexQ15::from_f64(0.25, -0.25));
    }

    #[test]
    fn test_subtraction_saturates_componentwise() {
        // 0.5 - (-1.0) = 1.5, which pins at MAX
        let a = ComplexQ15::from_f64(0.5, -0.5);
        let b = ComplexQ15::new(Q15::MIN, Q15::from_f64(0.5));

        let result = a - b;

        assert_eq!(result.re, Q15::MAX);
        assert_eq!(result.im, Q15::MIN);
    }

    #[test]
    fn test_assign_operators() {
        let mut a = ComplexQ15::from_f64(0.25, 0.25);
        a += ComplexQ15::from_f64(0.25, -0.5);
        assert_eq!(a, ComplexQ15::from_f64(0.5, -0.25));
        a -= ComplexQ15::from_f64(0.5, -0.25);
        assert_eq!(a, ComplexQ15::ZERO);
    }

    #[test]
    fn test_multiplication_by_minus_j() {
        // (a + bi) * (0 - 1i) = b - ai, exact because -1.0 is exact
        let a = ComplexQ15::from_bits(8192, -4096);
        let minus_j = ComplexQ15::from_bits(0, -32768);

        let result = a * minus_j;

        assert_eq!(result, ComplexQ15::from_bits(-4096, -8192));
    }

    #[test]
    fn test_multiplication_by_conjugate() {
        // (0.3 + 0.4i) * (0.3 - 0.4i) = 0.25, but each partial product
        // truncates: the result lands one LSB low with a -1 LSB
        // imaginary residue
        let a = ComplexQ15::from_f64(0.3, 0.4);

        let result = a * a.conj();

        assert_eq!(result, ComplexQ15::from_bits(8191, -1));
    }

    #[test]
    fn test_multiplication_zero_annihilates() {
        let a = ComplexQ15::from_bits(1000, -2000);

        let result = a * ComplexQ15::ZERO;

        assert_eq!(result, ComplexQ15::ZERO);
    }

    #[test]
    fn test_conj_positive_imaginary() {
        // conj(0.5 + 0.25i) = (0.5 - 0.25i)
        let a = ComplexQ15::from_f64(0.5, 0.25);

        let result = a.conj();

        assert_eq!(result, ComplexQ15::from_f64(0.5, -0.25));
    }

    #[test]
    fn test_conj_negative_imaginary() {
        // conj(0.5 - 0.25i) = (0.5 + 0.25i)
        let a = ComplexQ15::from_f64(0.5, -0.25);

        let result = a.conj();

        assert_eq!(result, ComplexQ15::from_f64(0.5, 0.25));
    }

    #[test]
    fn test_conj_saturates_min_imaginary() {
        // -(-1.0) is not representable; negation pins at MAX
        let a = ComplexQ15::new(Q15::ZERO, Q15::MIN);

        let result = a.conj();

        assert_eq!(result.im, Q15::MAX);
    }

    #[test]
    fn test_to_complex_f64_is_exact() {
        let a = ComplexQ15::from_bits(16384, -32768);

        let result = a.to_complex_f64();

        assert_eq!(result.re, 0.5);
        assert_eq!(result.im, -1.0);
    }
}
