//! Symbol scales: classify a liveliness value into a display symbol.
//!
//! Two kinds exist:
//!
//! - [`ExplicitThresholdScale`] - thresholds chosen by the caller
//! - [`UniformAutomaticScale`] - equal-width buckets over an alphabet
//!
//! [`SymbolScale`] is the closed set of both, and what registries and
//! pipelines hold.

mod level;
mod threshold;
mod uniform;
pub mod util;

pub use level::{LEVEL_MAX, Level};
pub use threshold::ExplicitThresholdScale;
pub use uniform::UniformAutomaticScale;

use crate::error::Result;

/// Any supported symbol scale.
///
/// # Examples
///
/// ```
/// use glyphmap::SymbolScale;
///
/// let threshold = SymbolScale::threshold(&[75, 170], &['#', '+', ' ']).unwrap();
/// let uniform = SymbolScale::uniform(" .:#").unwrap();
///
/// assert_eq!(threshold.classify(100u8).unwrap(), '+');
/// assert_eq!(uniform.classify(0.3).unwrap(), '.');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolScale {
    Threshold(ExplicitThresholdScale),
    Uniform(UniformAutomaticScale),
}

impl SymbolScale {
    /// Shorthand for [`ExplicitThresholdScale::from_bytes`].
    pub fn threshold(thresholds: &[u8], symbols: &[char]) -> Result<Self> {
        ExplicitThresholdScale::from_bytes(thresholds, symbols).map(Self::Threshold)
    }

    /// Shorthand for [`UniformAutomaticScale::new`].
    pub fn uniform(alphabet: &str) -> Result<Self> {
        UniformAutomaticScale::new(alphabet).map(Self::Uniform)
    }

    /// Returns the symbol for `value`.
    ///
    /// Threshold scales never fail; uniform scales fail with
    /// [`IndexOutOfRange`](crate::Error::IndexOutOfRange) on out-of-domain
    /// input.
    pub fn classify(&self, value: impl Into<Level>) -> Result<char> {
        match self {
            SymbolScale::Threshold(scale) => Ok(scale.classify(value)),
            SymbolScale::Uniform(scale) => scale.classify(value),
        }
    }

    /// Distinct symbols in ascending bucket order.
    pub fn symbols(&self) -> &[char] {
        match self {
            SymbolScale::Threshold(scale) => scale.symbols(),
            SymbolScale::Uniform(scale) => scale.symbols(),
        }
    }

    /// Description attached to the scale, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            SymbolScale::Threshold(scale) => scale.description(),
            SymbolScale::Uniform(scale) => scale.description(),
        }
    }

    /// Short name of the scale kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SymbolScale::Threshold(_) => "threshold",
            SymbolScale::Uniform(_) => "uniform",
        }
    }
}

impl From<ExplicitThresholdScale> for SymbolScale {
    fn from(scale: ExplicitThresholdScale) -> Self {
        SymbolScale::Threshold(scale)
    }
}

impl From<UniformAutomaticScale> for SymbolScale {
    fn from(scale: UniformAutomaticScale) -> Self {
        SymbolScale::Uniform(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_symbol_scale_dispatch() {
        let threshold = SymbolScale::threshold(&[75, 170], &['#', '+', ' ']).unwrap();
        let uniform = SymbolScale::uniform("AB").unwrap();

        assert_eq!(threshold.kind(), "threshold");
        assert_eq!(uniform.kind(), "uniform");
        assert_eq!(threshold.classify(74u8), Ok('#'));
        assert_eq!(uniform.classify(1.0), Ok('B'));
        assert_eq!(uniform.symbols(), &['A', 'B']);
        assert_eq!(uniform.description(), None);
    }

    #[test]
    fn test_symbol_scale_description() {
        let scale = SymbolScale::from(
            ExplicitThresholdScale::from_bytes(&[128], &['.', '#'])
                .unwrap()
                .with_description("binary split at half"),
        );

        assert_eq!(scale.description(), Some("binary split at half"));
    }

    #[test]
    fn test_symbol_scale_surfaces_out_of_range() {
        let uniform = SymbolScale::uniform("AB").unwrap();
        let threshold = SymbolScale::threshold(&[128], &['A', 'B']).unwrap();

        assert!(matches!(
            uniform.classify(3.0),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(uniform.classify(1.2).is_err());
        assert_eq!(threshold.classify(3.0), Ok('B'));
    }
}
