//! Real univariate polynomials over `f64` coefficients.

use std::fmt;

use thiserror::Error;

/// Error raised when a coefficient vector or index breaks the normalized
/// polynomial form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// A polynomial needs at least one coefficient.
    #[error("a polynomial needs at least one coefficient")]
    NoCoefficients,
    /// The last coefficient of a non-constant polynomial is zero.
    #[error("leading coefficient of a degree-{degree} polynomial is zero")]
    TrailingZero { degree: usize },
    /// No coefficient exists at the requested power.
    #[error("no coefficient at index {index}, degree: {degree}")]
    IndexOutOfRange { index: usize, degree: usize },
}

/// A real univariate polynomial.
///
/// Coefficients are stored in ascending power order: `coeffs[i]` multiplies
/// `x^i`, so the degree is `coeffs.len() - 1`. The vector is kept in
/// normalized form: the last coefficient is nonzero unless the polynomial
/// is the zero polynomial, which is stored as the single coefficient `0`
/// so that every polynomial has a well-defined, non-negative degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in ascending power order.
    pub fn new(coeffs: Vec<f64>) -> Result<Polynomial, PolynomialError> {
        Self::check_normalized(&coeffs)?;
        return Ok(Polynomial { coeffs });
    }

    fn check_normalized(coeffs: &[f64]) -> Result<(), PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::NoCoefficients);
        }
        if coeffs.len() > 1 && coeffs[coeffs.len() - 1] == 0.0 {
            return Err(PolynomialError::TrailingZero {
                degree: coeffs.len() - 1,
            });
        }
        return Ok(());
    }

    /// The zero polynomial: one coefficient, equal to zero.
    pub fn zero() -> Polynomial {
        return Polynomial { coeffs: vec![0.0] };
    }

    /// The degree of this polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        return self.coeffs.len() - 1;
    }

    /// Borrow the coefficients, ascending power order.
    pub fn coeffs(&self) -> &[f64] {
        return &self.coeffs;
    }

    /// The coefficient of `x^i`, or `None` past the degree.
    pub fn coeff(&self, i: usize) -> Option<f64> {
        return self.coeffs.get(i).copied();
    }

    /// Replace all coefficients. The degree changes if the length differs.
    pub fn set_coeffs(&mut self, coeffs: Vec<f64>) -> Result<(), PolynomialError> {
        Self::check_normalized(&coeffs)?;
        self.coeffs = coeffs;
        return Ok(());
    }

    /// Set the coefficient of `x^i`.
    ///
    /// Zeroing the leading coefficient of a non-constant polynomial is
    /// rejected: it would break the normalized form.
    pub fn set_coeff(&mut self, i: usize, value: f64) -> Result<(), PolynomialError> {
        let degree = self.degree();
        if i > degree {
            return Err(PolynomialError::IndexOutOfRange { index: i, degree });
        }
        if i == degree && degree > 0 && value == 0.0 {
            return Err(PolynomialError::TrailingZero { degree });
        }
        self.coeffs[i] = value;
        return Ok(());
    }

    /// Evaluate at `x` by Horner's method.
    pub fn eval(&self, x: f64) -> f64 {
        let mut sum = 0.0;
        for &a in self.coeffs.iter().rev() {
            sum = sum * x + a;
        }
        return sum;
    }

    /// The derivative of this polynomial.
    ///
    /// Constants differentiate to the zero polynomial; anything else drops
    /// exactly one degree, and the result stays normalized because the
    /// leading coefficient is scaled by a nonzero integer.
    pub fn derivative(&self) -> Polynomial {
        if self.degree() == 0 {
            return Polynomial::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &a)| a * i as f64)
            .collect();
        return Polynomial { coeffs };
    }

    /// The definite integral from `x1` to `x2` by the power rule.
    ///
    /// If the limits arrive reversed they are swapped first.
    pub fn integrate(&self, x1: f64, x2: f64) -> f64 {
        let (lo, hi) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let mut total = 0.0;
        for (i, &a) in self.coeffs.iter().enumerate() {
            let power = (i + 1) as i32;
            total += a * (hi.powi(power) - lo.powi(power)) / power as f64;
        }
        return total;
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coeffs[0])?;
        for (i, &a) in self.coeffs.iter().enumerate().skip(1) {
            write!(f, " + {a} x**{i}")?;
        }
        return Ok(());
    }
}
