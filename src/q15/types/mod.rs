pub mod q15;
pub mod q15_complex;

pub use q15::Q15;
pub use q15_complex::ComplexQ15;
