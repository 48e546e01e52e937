pub mod convert;
pub mod sat;
pub mod types;

pub use convert::{from_q15, to_q15, to_q15_with, Rounding};
pub use sat::{q15_mult, sat_add, sat_sub, saturate};
pub use types::{ComplexQ15, Q15};
