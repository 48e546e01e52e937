// src/verify.rs

//! Comparison harness for diffing the model against hardware output.
//!
//! A [`Stimulus`] is pushed through [`butterfly`] and the converted
//! outputs are compared to externally captured [`Reference`] values
//! (typically a Verilog simulator printout) within an LSB [`Tolerance`].
//! A mismatch is data, not an error: it lands in the [`Outcome`] as a
//! cleared `matched` flag plus the measured deviation, so a batch run
//! reports every divergence instead of stopping at the first.

use crate::butterfly::butterfly;
use crate::q15::convert;
use crate::q15::ComplexQ15;
use num_complex::Complex;

/// Allowed model/hardware discrepancy, counted in Q15 LSBs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    lsb: u16,
}

impl Tolerance {
    /// Tolerance of `n` least-significant bits, i.e. `n / 32768` in the
    /// real domain. `lsb(0)` demands bit-exact agreement.
    pub const fn lsb(n: u16) -> Self {
        Self { lsb: n }
    }

    /// The tolerance radius as a real value.
    pub fn as_real(self) -> f64 {
        self.lsb as f64 * convert::LSB_REAL
    }
}

impl Default for Tolerance {
    /// One LSB, the usual allowance when the hardware rounds where the
    /// model truncates.
    fn default() -> Self {
        Self::lsb(1)
    }
}

/// One butterfly stimulus: the two input samples and the twiddle factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stimulus {
    pub x0: ComplexQ15,
    pub x1: ComplexQ15,
    pub w: ComplexQ15,
}

/// Hardware-side output pair for one stimulus, as captured from the
/// simulator in the real domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub y0: Complex<f64>,
    pub y1: Complex<f64>,
}

/// Result of checking one stimulus against its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Model output on the sum path.
    pub y0: ComplexQ15,
    /// Model output on the rotated-difference path.
    pub y1: ComplexQ15,
    /// Worst |model - reference| over the two `y0` components, real domain.
    pub y0_deviation: f64,
    /// Worst |model - reference| over the two `y1` components, real domain.
    pub y1_deviation: f64,
    /// Worst deviation across all four components, real domain.
    pub max_deviation: f64,
    /// The same worst deviation counted in Q15 LSBs.
    pub max_deviation_lsb: f64,
    /// True when the worst deviation is within tolerance.
    pub matched: bool,
}

/// Runs one stimulus through the model and diffs it against the capture.
pub fn verify_one(stimulus: Stimulus, reference: Reference, tolerance: Tolerance) -> Outcome {
    let (y0, y1) = butterfly(stimulus.x0, stimulus.x1, stimulus.w);
    let y0_deviation = deviation(y0, reference.y0);
    let y1_deviation = deviation(y1, reference.y1);
    let max_deviation = if y0_deviation > y1_deviation {
        y0_deviation
    } else {
        y1_deviation
    };

    Outcome {
        y0,
        y1,
        y0_deviation,
        y1_deviation,
        max_deviation,
        max_deviation_lsb: max_deviation / convert::LSB_REAL,
        matched: max_deviation <= tolerance.as_real(),
    }
}

/// Worst absolute component difference between a model output and its
/// real-domain reference.
fn deviation(model: ComplexQ15, reference: Complex<f64>) -> f64 {
    let d = model.to_complex_f64() - reference;
    let re = abs64(d.re);
    let im = abs64(d.im);
    if re > im { re } else { im }
}

fn abs64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Pass/fail tally across a batch of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scoreboard {
    passed: usize,
    failed: usize,
    worst_lsb: f64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one outcome into the tally.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.matched {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        if outcome.max_deviation_lsb > self.worst_lsb {
            self.worst_lsb = outcome.max_deviation_lsb;
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Largest deviation seen so far, in LSBs.
    pub fn worst_lsb(&self) -> f64 {
        self.worst_lsb
    }

    /// True when no recorded outcome mismatched. An empty scoreboard
    /// reports true.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

use core::fmt;

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, worst deviation {:.2} LSB",
            self.passed, self.failed, self.worst_lsb
        )
    }
}

/// Batch misuse, as opposed to a model/hardware mismatch.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum VerifyError {
    /// The stimulus and reference slices have different lengths.
    LengthMismatch { stimuli: usize, references: usize },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::LengthMismatch {
                stimuli,
                references,
            } => write!(
                f,
                "stimulus count {} does not match reference count {}",
                stimuli, references
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VerifyError {}

/// Diffs every stimulus against its paired reference and tallies the
/// outcomes. The slices must pair up one-to-one.
pub fn verify_all(
    stimuli: &[Stimulus],
    references: &[Reference],
    tolerance: Tolerance,
) -> Result<Scoreboard, VerifyError> {
    if stimuli.len() != references.len() {
        return Err(VerifyError::LengthMismatch {
            stimuli: stimuli.len(),
            references: references.len(),
        });
    }

    let mut board = Scoreboard::new();
    for (stimulus, reference) in stimuli.iter().zip(references) {
        board.record(&verify_one(*stimulus, *reference, tolerance));
    }
    Ok(board)
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
