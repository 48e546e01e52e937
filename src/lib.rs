//! Bit-accurate golden model of a radix-2 FFT butterfly in Q15
//! fixed-point, plus the comparison harness used to check hardware
//! simulation output against it.
//!
//! The model reproduces the datapath exactly: saturating adds and
//! subtracts, truncating Q15 multiplies, and the single wrapping
//! product `(-1.0) * (-1.0)`. See [`butterfly`] for the combine step
//! and [`verify`] for the harness.

#![no_std]

// Link the standard library when the `std` feature is on (host float
// rounding, the error trait) and always for tests.
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod butterfly;
pub mod q15;
pub mod verify;

pub use butterfly::butterfly;
pub use q15::{
    from_q15, q15_mult, sat_add, sat_sub, saturate, to_q15, to_q15_with, ComplexQ15, Q15,
    Rounding,
};
pub use verify::{
    verify_all, verify_one, Outcome, Reference, Scoreboard, Stimulus, Tolerance, VerifyError,
};
