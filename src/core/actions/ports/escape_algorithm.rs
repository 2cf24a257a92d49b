use crate::core::data::complex::Complex;

pub trait EscapeAlgorithm {
    /// Continuous escape value for the plane point `c`.
    fn escape(&self, c: Complex) -> f64;

    fn max_iterations(&self) -> u32;
}
