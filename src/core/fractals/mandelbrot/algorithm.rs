use crate::core::actions::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Squared bailout radius (|z| > 2).
pub const BAILOUT_SQUARED: f64 = 4.0;

/// Iterates `z <- z² + c` from `z = 0` and returns the escape value of `c`.
///
/// Points that never leave the bailout radius within the budget return the
/// budget itself. Escaping points return the completed iteration count plus
/// `4 / |z|²`, a fraction in `(0, 1)` that smooths the bands between
/// consecutive counts. A zero budget is treated as one iteration.
#[must_use]
pub fn escape(c: Complex, max_iterations: u32) -> f64 {
    let max_iterations = max_iterations.max(1);

    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;
    let mut zxsq = 0.0_f64;
    let mut zysq = 0.0_f64;
    let mut iteration = 0;

    while iteration < max_iterations && zxsq + zysq <= BAILOUT_SQUARED {
        zy = 2.0 * zx * zy + c.imag;
        zx = zxsq - zysq + c.real;
        zxsq = zx * zx;
        zysq = zy * zy;
        iteration += 1;
    }

    let magnitude_squared = zxsq + zysq;

    if magnitude_squared > BAILOUT_SQUARED {
        f64::from(iteration) + BAILOUT_SQUARED / magnitude_squared
    } else {
        f64::from(iteration)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl EscapeAlgorithm for MandelbrotAlgorithm {
    fn escape(&self, c: Complex) -> f64 {
        escape(c, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EscapeBudgetError {
    ZeroBudget,
}

impl fmt::Display for EscapeBudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBudget => write!(f, "escape iteration budget must be at least one"),
        }
    }
}

impl Error for EscapeBudgetError {}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeBudgetError> {
        if max_iterations == 0 {
            return Err(EscapeBudgetError::ZeroBudget);
        }

        Ok(Self { max_iterations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_never_escapes() {
        for n in [1, 2, 10, 100, 1000] {
            assert_eq!(escape(Complex::new(0.0, 0.0), n), f64::from(n));
        }
    }

    #[test]
    fn test_interior_point_returns_budget() {
        assert_eq!(escape(Complex::new(-0.5, 0.0), 100), 100.0);
        assert_eq!(escape(Complex::new(-1.0, 0.0), 250), 250.0);
    }

    #[test]
    fn test_far_point_escapes_after_one_iteration_with_smooth_fraction() {
        // z1 = c, |c|² = 4.515625
        let value = escape(Complex::new(2.125, 0.0), 100);

        assert!((value - (1.0 + 4.0 / 4.515625)).abs() < 1e-12);
        assert!(value < 5.0);
    }

    #[test]
    fn test_escaping_value_lies_strictly_between_bands() {
        let value = escape(Complex::new(0.3, 0.5), 1000);
        let band = value.floor();

        assert!(value > band);
        assert!(value < band + 1.0);
        assert!(value < 1000.0);
    }

    #[test]
    fn test_escape_value_is_stable_once_budget_exceeds_escape_count() {
        let c = Complex::new(0.26, 0.0015);
        let reference = escape(c, 5000);

        assert!(reference < 5000.0);
        assert_eq!(escape(c, 10_000), reference);
    }

    #[test]
    fn test_bailout_is_strictly_greater_than_four() {
        // z: 1, 2 (|z|² == 4 keeps iterating), 5
        let value = escape(Complex::new(1.0, 0.0), 100);

        assert!((value - (3.0 + 4.0 / 25.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_budget_is_clamped_to_one() {
        assert_eq!(escape(Complex::new(0.0, 0.0), 0), 1.0);
    }

    #[test]
    fn test_algorithm_rejects_zero_iterations() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(EscapeBudgetError::ZeroBudget)
        );
    }

    #[test]
    fn test_algorithm_delegates_to_escape() {
        let algorithm = MandelbrotAlgorithm::new(64).unwrap();
        let c = Complex::new(0.3, 0.5);

        assert_eq!(algorithm.escape(c), escape(c, 64));
        assert_eq!(algorithm.max_iterations(), 64);
    }

    proptest! {
        #[test]
        fn points_outside_radius_two_escape_before_budget(
            real in -10.0_f64..10.0,
            imag in -10.0_f64..10.0,
            n in 2_u32..500,
        ) {
            prop_assume!(real * real + imag * imag > 4.0);
            let value = escape(Complex::new(real, imag), n);
            prop_assert!(value < f64::from(n));
            prop_assert!(value > 1.0 && value < 2.0);
        }

        #[test]
        fn escape_value_never_exceeds_budget(
            real in -2.5_f64..1.0,
            imag in -1.5_f64..1.5,
            n in 1_u32..300,
        ) {
            let value = escape(Complex::new(real, imag), n);
            prop_assert!(value >= 1.0);
            prop_assert!(value <= f64::from(n) + 1.0);
        }
    }
}
