//! Error types shared by mappers, scales and registries.

use crate::scale::Level;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by construction, resolution and unchecked classification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed construction arguments. Always raised while building a
    /// mapper, scale or registry, never during a lookup.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// No instance is registered under this alias.
    #[error("unknown alias: {0:?}")]
    UnknownAlias(String),

    /// The alias already points at a different instance.
    #[error("alias {0:?} is already registered for another instance")]
    DuplicateAlias(String),

    /// A uniform scale was asked to classify a value outside its domain.
    #[error("{level:?} leaves a scale of {len} symbols")]
    IndexOutOfRange { level: Level, len: usize },
}

/// The specific reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("expected {expected} symbols for {thresholds} thresholds, got {actual}")]
    SymbolCount {
        thresholds: usize,
        expected: usize,
        actual: usize,
    },

    #[error("thresholds must be sorted ascending or descending")]
    Unsorted,

    #[error("duplicate value at positions {0} and {1}")]
    Duplicate(usize, usize),

    #[error("threshold at position {0} lies outside [0, 1]")]
    OutOfUnitRange(usize),

    #[error("control points need at least two entries, got {0}")]
    TooFewControlPoints(usize),

    #[error("first control point must be 0")]
    FirstKnot,

    #[error("last control point must be 1")]
    LastKnot,

    #[error("invalid parameter `{name}`: {reason}")]
    Parameter {
        name: &'static str,
        reason: &'static str,
    },

    #[error("symbol alphabet must not be empty")]
    EmptyAlphabet,

    #[error("an instance needs at least one alias")]
    NoAliases,
}

impl Error {
    /// Returns true for construction-time failures.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }
}
