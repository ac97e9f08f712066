use num_traits::Float;

use super::{Mapper, whole};
use crate::error::{ConfigError, Result};

/// Logarithmic mapper: positions a value by its order of magnitude.
///
/// The interval `[eps, 1]` with `eps = base^eps_exponent` is divided into
/// `|eps_exponent|` equal steps in log space, so every power of the base gets
/// the same share of the output range. With the defaults (base 2, exponent
/// -10) the values 1/1024, 1/512, ..., 1/2, 1 land on 0, 0.1, ..., 0.9, 1.
///
/// - values `>= 1` map to `1`
/// - values below `eps` map to `0`
/// - everything in between maps to `1 - |log_base(value)| / |eps_exponent|`
///
/// The result is only as exact as `log` in the fraction type. For `f64` that
/// is close to machine precision; `fastnum` decimals compute `ln` to roughly
/// six significant digits, so a decimal mapper can be off by about `1e-6`.
///
/// # Examples
///
/// ```rust
/// use glyphmap::{Mapper, mapper::Logarithmic};
///
/// let mapper = Logarithmic::<f64>::default();
///
/// assert_eq!(mapper.map(1.0), 1.0);
/// assert_eq!(mapper.map(0.0005), 0.0);
/// assert!((mapper.map(0.5) - 0.9).abs() < 1e-12);
/// assert!((mapper.map(0.03125) - 0.5).abs() < 1e-12);
/// ```
///
/// ## Custom Base
///
/// ```rust
/// use glyphmap::{Mapper, mapper::Logarithmic};
///
/// // Three decades: 0.001 -> 0, 0.01 -> 1/3, 0.1 -> 2/3, 1 -> 1
/// let mapper = Logarithmic::<f64>::new(10.0, -3.0).unwrap();
///
/// assert!((mapper.map(0.01) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logarithmic<F> {
    base: F,
    eps_exponent: F,
    eps: F,
    range_inv: F,
}

impl<F: Float> Logarithmic<F> {
    /// Creates a logarithmic mapper.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](crate::Error::InvalidConfiguration) unless
    /// `base > 1` and `eps_exponent < 0`, both finite.
    pub fn new(base: F, eps_exponent: F) -> Result<Self> {
        if !base.is_finite() || base <= F::one() {
            return Err(ConfigError::Parameter {
                name: "base",
                reason: "must be finite and greater than 1",
            }
            .into());
        }
        if !eps_exponent.is_finite() || eps_exponent >= F::zero() {
            return Err(ConfigError::Parameter {
                name: "eps_exponent",
                reason: "must be finite and negative",
            }
            .into());
        }

        Ok(Self::new_unchecked(base, eps_exponent))
    }

    fn new_unchecked(base: F, eps_exponent: F) -> Self {
        Self {
            base,
            eps_exponent,
            eps: base.powf(eps_exponent),
            range_inv: eps_exponent.abs().recip(),
        }
    }

    /// Base of the logarithm.
    pub fn base(&self) -> F {
        self.base
    }

    /// Exponent of the cut-off.
    pub fn eps_exponent(&self) -> F {
        self.eps_exponent
    }

    /// Smallest value mapped above zero, `base^eps_exponent`.
    pub fn eps(&self) -> F {
        self.eps
    }
}

impl<F: Float> Default for Logarithmic<F> {
    /// Base 2, cut-off at `2^-10`.
    fn default() -> Self {
        Self::new_unchecked(whole(2), -whole::<F>(10))
    }
}

impl<F: Float> Mapper for Logarithmic<F> {
    type Fraction = F;

    fn map(&self, value: F) -> F {
        if value >= F::one() {
            return F::one();
        }
        if value < self.eps {
            return F::zero();
        }

        let steps = value.log(self.base).abs() * self.range_inv;

        // Rounding in `log` may push the ends slightly past the unit interval.
        (F::one() - steps).max(F::zero()).min(F::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_boundaries() {
        let mapper = Logarithmic::<f64>::default();

        assert!((mapper.eps() - 1.0 / 1024.0).abs() < 1e-15);
        assert_eq!(mapper.map(1.0), 1.0);
        assert_eq!(mapper.map(2.0), 1.0);
        assert_eq!(mapper.map(0.0), 0.0);
        assert_eq!(mapper.map(0.0009), 0.0);
        assert_eq!(mapper.map(-1.0), 0.0);
        assert!(mapper.map(mapper.eps()).abs() < 1e-12);
    }

    #[test]
    fn test_log_powers_of_base() {
        let mapper = Logarithmic::<f64>::default();

        for exponent in 0..=10 {
            let value = 2f64.powi(-exponent);
            let expected = 1.0 - f64::from(exponent) / 10.0;
            assert!(
                (mapper.map(value) - expected).abs() < 1e-12,
                "2^-{exponent} mapped to {}",
                mapper.map(value)
            );
        }
    }

    #[test]
    fn test_log_is_monotonic_on_grid() {
        let mapper = Logarithmic::<f64>::new(10.0, -4.0).unwrap();
        let mut previous = mapper.map(0.0);

        for step in 1..=10_000 {
            let current = mapper.map(f64::from(step) / 10_000.0);
            assert!(current >= previous, "decreased at step {step}");
            previous = current;
        }
    }

    #[test]
    fn test_log_f32() {
        let mapper = Logarithmic::<f32>::default();

        assert_eq!(mapper.map(1.0), 1.0);
        assert!((mapper.map(0.25) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_log_rejects_bad_parameters() {
        assert!(Logarithmic::<f64>::new(1.0, -10.0).is_err());
        assert!(Logarithmic::<f64>::new(0.5, -10.0).is_err());
        assert!(Logarithmic::<f64>::new(f64::INFINITY, -10.0).is_err());
        assert!(Logarithmic::<f64>::new(2.0, 0.0).is_err());
        assert!(Logarithmic::<f64>::new(2.0, 3.0).is_err());

        let err = Logarithmic::<f64>::new(2.0, f64::NAN).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
