use std::marker::PhantomData;

use num_traits::Float;

use super::Mapper;

/// Identity mapper: returns every value unchanged.
///
/// Useful as the default selection when liveliness values are spread evenly
/// enough to classify directly. Out-of-range values are passed through
/// without clamping, so the scale decides how to treat them.
///
/// # Examples
///
/// ```rust
/// use glyphmap::{Mapper, mapper::Identity};
///
/// let mapper = Identity::<f64>::new();
///
/// assert_eq!(mapper.map(0.0), 0.0);
/// assert_eq!(mapper.map(0.37), 0.37);
/// assert_eq!(mapper.map(1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Identity<F> {
    _phantom: PhantomData<F>,
}

impl<F> Identity<F> {
    /// Creates the identity mapper.
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<F: Float> Mapper for Identity<F> {
    type Fraction = F;

    fn map(&self, value: F) -> F {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_f64() {
        let mapper = Identity::<f64>::new();

        assert_eq!(mapper.map(0.0), 0.0);
        assert_eq!(mapper.map(0.25), 0.25);
        assert_eq!(mapper.map(1.0), 1.0);
    }

    #[test]
    fn test_identity_does_not_clamp() {
        let mapper = Identity::<f32>::default();

        assert_eq!(mapper.map(1.5), 1.5);
        assert_eq!(mapper.map(-0.5), -0.5);
    }
}
