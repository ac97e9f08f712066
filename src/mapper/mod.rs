//! Value mappers: monotonic curves from `[0, 1]` onto `[0, 1]`.
//!
//! Liveliness values tend to crowd a small region of the unit interval
//! (close to zero once a simulation has run for a while). A mapper reshapes
//! the interval before classification so that region spreads over more
//! symbols.
//!
//! Available mappers:
//! - [`Identity`] - leaves values untouched
//! - [`Logarithmic`] - spreads small values by their order of magnitude
//! - [`SquareRoot`] - a gentler stretch of small values
//! - [`PiecewiseLinear`] - moves custom control points onto a uniform grid
//!
//! Every mapper is generic over its fraction type `F` and works with
//! `f32`, `f64` and `fastnum` decimals alike.

mod linear;
mod log;
mod piecewise;
mod sqrt;

pub use linear::Identity;
pub use log::Logarithmic;
pub use piecewise::PiecewiseLinear;
pub use sqrt::SquareRoot;

use num_traits::Float;

use crate::error::Result;

/// A non-decreasing function on the unit interval.
pub trait Mapper {
    /// Fraction type of input and output.
    type Fraction;

    /// Maps a value from `[0, 1]` onto `[0, 1]`.
    fn map(&self, value: Self::Fraction) -> Self::Fraction;
}

/// Any supported mapper.
///
/// # Examples
///
/// ```
/// use glyphmap::{Mapper, ValueMapper};
///
/// let sqrt = ValueMapper::<f64>::square_root();
/// assert_eq!(sqrt.map(0.25), 0.5);
///
/// let custom = ValueMapper::piecewise_linear(&[0.0, 0.1, 0.25, 0.45, 0.75, 1.0]).unwrap();
/// assert_eq!(custom.map(0.25), 0.4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValueMapper<F: Float = f64> {
    Identity(Identity<F>),
    Logarithmic(Logarithmic<F>),
    SquareRoot(SquareRoot<F>),
    PiecewiseLinear(PiecewiseLinear<F>),
}

impl<F: Float> ValueMapper<F> {
    /// The identity mapper.
    pub fn identity() -> Self {
        ValueMapper::Identity(Identity::new())
    }

    /// A base-2 logarithmic mapper with a cut-off at `2^-10`.
    pub fn logarithmic() -> Self {
        ValueMapper::Logarithmic(Logarithmic::default())
    }

    /// A square root mapper with a cut-off at `1e-8`.
    pub fn square_root() -> Self {
        ValueMapper::SquareRoot(SquareRoot::default())
    }

    /// Shorthand for [`PiecewiseLinear::new`].
    pub fn piecewise_linear(control_points: &[F]) -> Result<Self> {
        PiecewiseLinear::new(control_points).map(ValueMapper::PiecewiseLinear)
    }

    /// Short name of the mapper kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueMapper::Identity(_) => "identity",
            ValueMapper::Logarithmic(_) => "logarithmic",
            ValueMapper::SquareRoot(_) => "square-root",
            ValueMapper::PiecewiseLinear(_) => "piecewise-linear",
        }
    }
}

impl<F: Float> Mapper for ValueMapper<F> {
    type Fraction = F;

    fn map(&self, value: F) -> F {
        match self {
            ValueMapper::Identity(mapper) => mapper.map(value),
            ValueMapper::Logarithmic(mapper) => mapper.map(value),
            ValueMapper::SquareRoot(mapper) => mapper.map(value),
            ValueMapper::PiecewiseLinear(mapper) => mapper.map(value),
        }
    }
}

impl<F: Float> From<Identity<F>> for ValueMapper<F> {
    fn from(mapper: Identity<F>) -> Self {
        ValueMapper::Identity(mapper)
    }
}

impl<F: Float> From<Logarithmic<F>> for ValueMapper<F> {
    fn from(mapper: Logarithmic<F>) -> Self {
        ValueMapper::Logarithmic(mapper)
    }
}

impl<F: Float> From<SquareRoot<F>> for ValueMapper<F> {
    fn from(mapper: SquareRoot<F>) -> Self {
        ValueMapper::SquareRoot(mapper)
    }
}

impl<F: Float> From<PiecewiseLinear<F>> for ValueMapper<F> {
    fn from(mapper: PiecewiseLinear<F>) -> Self {
        ValueMapper::PiecewiseLinear(mapper)
    }
}

/// Builds the whole number `n` from repeated additions of one.
///
/// Exact in every fraction type and cannot fail, unlike a cast. Only meant
/// for small constants.
pub(crate) fn whole<F: Float>(n: u32) -> F {
    (0..n).fold(F::zero(), |acc, _| acc + F::one())
}

/// The ratio `numerator / denominator` of two small whole numbers.
pub(crate) fn ratio<F: Float>(numerator: u32, denominator: u32) -> F {
    whole::<F>(numerator) / whole::<F>(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mapper_dispatch() {
        let mappers = [
            ValueMapper::<f64>::identity(),
            ValueMapper::logarithmic(),
            ValueMapper::square_root(),
            ValueMapper::piecewise_linear(&[0.0, 0.5, 1.0]).unwrap(),
        ];

        for mapper in &mappers {
            assert_eq!(mapper.map(0.0), 0.0, "{}", mapper.kind());
            assert_eq!(mapper.map(1.0), 1.0, "{}", mapper.kind());
        }

        assert_eq!(mappers[0].map(0.3), 0.3);
        assert_eq!(mappers[2].map(0.09), 0.3);
        assert_eq!(mappers[3].map(0.25), 0.25);
    }

    #[test]
    fn test_value_mapper_kinds() {
        assert_eq!(ValueMapper::<f32>::identity().kind(), "identity");
        assert_eq!(ValueMapper::<f32>::logarithmic().kind(), "logarithmic");
        assert_eq!(ValueMapper::<f32>::square_root().kind(), "square-root");
    }

    #[test]
    fn test_value_mapper_from_components() {
        assert_eq!(ValueMapper::from(Identity::<f64>::new()), ValueMapper::identity());
        assert_eq!(
            ValueMapper::from(SquareRoot::<f64>::default()),
            ValueMapper::square_root()
        );
        assert_eq!(ValueMapper::from(Identity::<f32>::new()).kind(), "identity");
    }

    #[test]
    fn test_whole_and_ratio() {
        assert_eq!(whole::<f64>(0), 0.0);
        assert_eq!(whole::<f64>(255), 255.0);
        assert_eq!(ratio::<f64>(1, 10), 0.1);
        assert_eq!(ratio::<f64>(9, 20), 0.45);
    }
}
