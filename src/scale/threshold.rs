use fastnum::decimal::D128;
use tracing::debug;

use super::level::{Level, Thresholds};
use super::util;
use crate::error::{ConfigError, Result};

/// Classifies values against an explicit list of thresholds.
///
/// `N` thresholds split the domain into `N + 1` buckets, one symbol each.
/// Thresholds may be given ascending or descending; descending input is
/// reversed together with its symbols, so the stored form is always
/// ascending.
///
/// # Boundary Policy
///
/// A value belongs to the bucket of the greatest threshold it reaches: a
/// value equal to `t[i]` yields `symbols[i + 1]`, a value below `t[0]` yields
/// `symbols[0]`. Values outside the domain simply fall into the first or
/// last bucket, so classification never fails.
///
/// # Representations
///
/// Thresholds are stored once per numeric representation (see [`Level`]).
/// A byte `b` and the fractions `b / 255` always land in the same bucket.
///
/// # Examples
///
/// ```
/// use glyphmap::ExplicitThresholdScale;
///
/// let scale = ExplicitThresholdScale::from_bytes(&[75, 170], &['#', '+', ' ']).unwrap();
///
/// assert_eq!(scale.classify(74u8), '#');
/// assert_eq!(scale.classify(75u8), '+');
/// assert_eq!(scale.classify(100i32), '+');
/// assert_eq!(scale.classify(230u8), ' ');
/// assert_eq!(scale.classify(74.0 / 255.0), '#');
/// ```
///
/// Descending thresholds describe the same scale:
///
/// ```
/// use glyphmap::ExplicitThresholdScale;
///
/// let ascending = ExplicitThresholdScale::from_bytes(&[75, 170], &[' ', '+', '#']).unwrap();
/// let descending = ExplicitThresholdScale::from_bytes(&[170, 75], &['#', '+', ' ']).unwrap();
///
/// assert_eq!(ascending, descending);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitThresholdScale {
    thresholds: Thresholds,
    symbols: Vec<char>,
    description: Option<String>,
}

impl ExplicitThresholdScale {
    /// Builds a scale from integral thresholds on `[0, 255]`.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](crate::Error::InvalidConfiguration) if the
    /// symbol count is not one more than the threshold count, the thresholds
    /// are not monotonic, or two adjacent thresholds are equal.
    pub fn from_bytes(thresholds: &[u8], symbols: &[char]) -> Result<Self> {
        let (thresholds, symbols) = canonicalize(thresholds, symbols)?;

        Ok(Self {
            thresholds: Thresholds::from_bytes(thresholds),
            symbols,
            description: None,
        })
    }

    /// Builds a scale from decimal thresholds on `[0, 1]`.
    ///
    /// Fails like [`from_bytes`](Self::from_bytes), and additionally when a
    /// threshold lies outside `[0, 1]`.
    pub fn from_decimals(thresholds: &[D128], symbols: &[char]) -> Result<Self> {
        let (thresholds, symbols) = canonicalize(thresholds, symbols)?;
        let derived = Thresholds::from_fractions(&thresholds, thresholds.clone())?;

        Ok(Self {
            thresholds: derived,
            symbols,
            description: None,
        })
    }

    /// Builds a scale from `f64` thresholds on `[0, 1]`.
    ///
    /// Fails like [`from_decimals`](Self::from_decimals); NaN thresholds are
    /// rejected as well.
    pub fn from_fractions(thresholds: &[f64], symbols: &[char]) -> Result<Self> {
        let (thresholds, symbols) = canonicalize(thresholds, symbols)?;
        let decimals = thresholds.iter().map(|&value| D128::from(value)).collect();
        let derived = Thresholds::from_fractions(&thresholds, decimals)?;

        Ok(Self {
            thresholds: derived,
            symbols,
            description: None,
        })
    }

    /// Attaches a human readable description, shown by settings editors.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, if one was attached.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the symbol of the bucket that `value` falls into.
    pub fn classify(&self, value: impl Into<Level>) -> char {
        self.symbols[self.thresholds.bucket(&value.into())]
    }

    /// Symbols in ascending bucket order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Integral thresholds in ascending order.
    pub fn byte_thresholds(&self) -> &[u8] {
        self.thresholds.bytes()
    }

    /// Decimal thresholds in ascending order.
    pub fn decimal_thresholds(&self) -> &[D128] {
        self.thresholds.decimals()
    }

    /// Number of thresholds.
    pub fn threshold_count(&self) -> usize {
        self.thresholds.len()
    }
}

/// Validates the lengths and orders thresholds ascending.
fn canonicalize<T>(thresholds: &[T], symbols: &[char]) -> Result<(Vec<T>, Vec<char>), ConfigError>
where
    T: PartialOrd + Copy + std::fmt::Debug,
{
    if symbols.len() != thresholds.len() + 1 {
        return Err(ConfigError::SymbolCount {
            thresholds: thresholds.len(),
            expected: thresholds.len() + 1,
            actual: symbols.len(),
        });
    }

    let mut thresholds = thresholds.to_vec();
    let mut symbols = symbols.to_vec();

    if util::is_ascending(&thresholds) {
        // already canonical
    } else if util::is_descending(&thresholds) {
        debug!(?thresholds, "reversing descending thresholds");
        thresholds.reverse();
        symbols.reverse();
    } else {
        return Err(ConfigError::Unsorted);
    }

    if let Some(index) = util::first_duplicate(&thresholds) {
        return Err(ConfigError::Duplicate(index, index + 1));
    }

    Ok((thresholds, symbols))
}
