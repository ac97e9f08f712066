use num_traits::Float;

use super::{Mapper, whole};
use crate::error::{ConfigError, Result};

/// Square root mapper: `0.25 -> 0.5`, `0.09 -> 0.3`, `0.01 -> 0.1`.
///
/// Values below `eps` map to `0` and values `>= 1` map to `1`.
///
/// # Examples
///
/// ```rust
/// use glyphmap::{Mapper, mapper::SquareRoot};
///
/// let mapper = SquareRoot::<f64>::default();
///
/// assert_eq!(mapper.map(0.25), 0.5);
/// assert_eq!(mapper.map(0.09), 0.3);
/// assert_eq!(mapper.map(0.01), 0.1);
/// assert_eq!(mapper.map(1e-9), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRoot<F> {
    eps: F,
}

impl<F: Float> SquareRoot<F> {
    /// Creates a square root mapper with the given cut-off.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](crate::Error::InvalidConfiguration) if `eps`
    /// is negative or not finite.
    pub fn new(eps: F) -> Result<Self> {
        if !eps.is_finite() || eps < F::zero() {
            return Err(ConfigError::Parameter {
                name: "eps",
                reason: "must be finite and non-negative",
            }
            .into());
        }
        Ok(Self { eps })
    }

    /// Largest value still mapped to zero is just below this.
    pub fn eps(&self) -> F {
        self.eps
    }
}

impl<F: Float> Default for SquareRoot<F> {
    /// Cut-off at `1e-8`.
    fn default() -> Self {
        Self {
            eps: whole::<F>(10).powi(-8),
        }
    }
}

impl<F: Float> Mapper for SquareRoot<F> {
    type Fraction = F;

    fn map(&self, value: F) -> F {
        if value < self.eps {
            return F::zero();
        }
        if value >= F::one() {
            return F::one();
        }
        value.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_exact_squares() {
        let mapper = SquareRoot::<f64>::default();

        assert_eq!(mapper.map(0.25), 0.5);
        assert_eq!(mapper.map(0.09), 0.3);
        assert_eq!(mapper.map(0.01), 0.1);
        assert_eq!(mapper.map(1.0), 1.0);
    }

    #[test]
    fn test_sqrt_cut_off() {
        let mapper = SquareRoot::<f64>::default();

        assert_eq!(mapper.map(0.0), 0.0);
        assert_eq!(mapper.map(5e-9), 0.0);
        assert_eq!(mapper.map(-0.3), 0.0);
        assert!(mapper.map(1e-6) > 0.0);
    }

    #[test]
    fn test_sqrt_clamps_above_one() {
        let mapper = SquareRoot::<f32>::default();

        assert_eq!(mapper.map(4.0), 1.0);
    }

    #[test]
    fn test_sqrt_custom_eps() {
        let mapper = SquareRoot::new(0.04).unwrap();

        assert_eq!(mapper.map(0.039), 0.0);
        assert_eq!(mapper.map(0.04), 0.2);
        assert!(SquareRoot::new(-1.0).is_err());
        assert!(SquareRoot::new(f64::NAN).is_err());
    }
}
