use super::level::Level;
use crate::error::{ConfigError, Error, Result};

/// Classifies values into `M` equal-width buckets of an alphabet.
///
/// The thresholds are implied: bucket `i` covers `[i / M, (i + 1) / M)`.
/// The alphabet is stored with its last symbol doubled so that the domain
/// maximum (`255` or `1.0`) maps to the same symbol as values just below it.
///
/// # Unchecked Input
///
/// No clamping is performed. [`classify`](Self::classify) reports every value
/// outside the domain (`[0, 255]` for integral input, `[0, 1]` for fractions)
/// as [`Error::IndexOutOfRange`]. [`classify_unchecked`](Self::classify_unchecked)
/// skips that check: slightly out-of-domain input still yields a symbol, and
/// input that leaves the alphabet panics.
///
/// # Examples
///
/// ```
/// use glyphmap::UniformAutomaticScale;
///
/// let scale = UniformAutomaticScale::new("AB").unwrap();
///
/// assert_eq!(scale.classify(0.0).unwrap(), 'A');
/// assert_eq!(scale.classify(0.999).unwrap(), 'B');
/// assert_eq!(scale.classify(1.0).unwrap(), 'B');
/// assert_eq!(scale.classify(255u8).unwrap(), 'B');
/// assert!(scale.classify(-0.5).is_err());
/// assert!(scale.classify(1.2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformAutomaticScale {
    symbols: Vec<char>,
    steps: usize,
    description: Option<String>,
}

impl UniformAutomaticScale {
    /// Builds a scale from the characters of `alphabet`, darkest bucket
    /// first.
    pub fn new(alphabet: &str) -> Result<Self> {
        Self::from_symbols(&alphabet.chars().collect::<Vec<_>>())
    }

    /// Builds a scale from a symbol slice.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](Error::InvalidConfiguration) when `symbols` is
    /// empty.
    pub fn from_symbols(symbols: &[char]) -> Result<Self> {
        let &last = symbols.last().ok_or(ConfigError::EmptyAlphabet)?;

        let mut extended = Vec::with_capacity(symbols.len() + 1);
        extended.extend_from_slice(symbols);
        extended.push(last);

        Ok(Self {
            symbols: extended,
            steps: symbols.len(),
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

    /// Returns the symbol for `value`, or [`Error::IndexOutOfRange`] if the
    /// value lies outside the domain.
    pub fn classify(&self, value: impl Into<Level>) -> Result<char> {
        let level = value.into();
        let out_of_range = Error::IndexOutOfRange {
            level,
            len: self.symbols.len(),
        };
        if !level.in_domain() {
            return Err(out_of_range);
        }
        level
            .uniform_index(self.steps)
            .and_then(|index| self.symbols.get(index).copied())
            .ok_or(out_of_range)
    }

    /// Returns the symbol for `value` without checking the domain.
    ///
    /// # Panics
    ///
    /// Panics if `value` lies outside the domain far enough to leave the
    /// alphabet.
    pub fn classify_unchecked(&self, value: impl Into<Level>) -> char {
        let index = value.into().uniform_index(self.steps);
        self.symbols[index.unwrap_or(usize::MAX)]
    }

    /// The alphabet as given, without the doubled last symbol.
    pub fn symbols(&self) -> &[char] {
        &self.symbols[..self.steps]
    }

    /// Number of buckets `M`.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastnum::decimal::D128;

    #[test]
    fn test_uniform_duplicates_last_symbol() {
        let scale = UniformAutomaticScale::new("AB").unwrap();

        assert_eq!(scale.classify(1.0).unwrap(), 'B');
        assert_eq!(scale.classify(0.999).unwrap(), 'B');
        assert_eq!(scale.classify(0.5).unwrap(), 'B');
        assert_eq!(scale.classify(0.499).unwrap(), 'A');
        assert_eq!(scale.classify(0.0).unwrap(), 'A');
        assert_eq!(scale.symbols(), &['A', 'B']);
        assert_eq!(scale.steps(), 2);
    }

    #[test]
    fn test_uniform_integral_input() {
        let scale = UniformAutomaticScale::new(" .:#").unwrap();

        assert_eq!(scale.classify(0u8).unwrap(), ' ');
        assert_eq!(scale.classify(63u8).unwrap(), ' ');
        assert_eq!(scale.classify(64u8).unwrap(), '.');
        assert_eq!(scale.classify(128i32).unwrap(), ':');
        assert_eq!(scale.classify(254u8).unwrap(), '#');
        assert_eq!(scale.classify(255u8).unwrap(), '#');
    }

    #[test]
    fn test_uniform_decimal_and_float_input() {
        let scale = UniformAutomaticScale::new("abcd").unwrap();

        assert_eq!(scale.classify(D128::from(1) / D128::from(4)).unwrap(), 'b');
        assert_eq!(scale.classify(D128::from(1)).unwrap(), 'd');
        assert_eq!(scale.classify(0.74f32).unwrap(), 'c');
    }

    #[test]
    fn test_uniform_out_of_domain() {
        let scale = UniformAutomaticScale::new("AB").unwrap();

        assert_eq!(
            scale.classify(1.6),
            Err(Error::IndexOutOfRange {
                level: Level::Double(1.6),
                len: 3,
            })
        );
        assert!(matches!(
            scale.classify(-0.25),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            scale.classify(-1i32),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            scale.classify(f64::NAN),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_uniform_rejects_slightly_out_of_domain() {
        let scale = UniformAutomaticScale::new("AB").unwrap();

        assert_eq!(
            scale.classify(1.2),
            Err(Error::IndexOutOfRange {
                level: Level::Double(1.2),
                len: 3,
            })
        );
        assert!(scale.classify(1.49).is_err());
        assert!(scale.classify(1.01f32).is_err());
        assert!(scale.classify(D128::from(2)).is_err());
        assert_eq!(
            scale.classify(256i32),
            Err(Error::IndexOutOfRange {
                level: Level::Int(256),
                len: 3,
            })
        );

        // Domain edges still classify
        assert_eq!(scale.classify(1.0), Ok('B'));
        assert_eq!(scale.classify(255i32), Ok('B'));
        assert_eq!(scale.classify(0i32), Ok('A'));
    }

    #[test]
    fn test_uniform_unchecked_skips_domain_check() {
        let scale = UniformAutomaticScale::new("AB").unwrap();

        assert_eq!(scale.classify_unchecked(1.2), 'B');
        assert_eq!(scale.classify_unchecked(256i32), 'B');
    }

    #[test]
    fn test_uniform_description() {
        let scale = UniformAutomaticScale::new("AB")
            .unwrap()
            .with_description("two level ramp");

        assert_eq!(scale.description(), Some("two level ramp"));
        assert_eq!(scale.symbols(), &['A', 'B']);
    }

    #[test]
    fn test_uniform_unchecked_agrees_in_domain() {
        let scale = UniformAutomaticScale::new(" .:-=+*#%@").unwrap();

        for value in 0..=255u8 {
            assert_eq!(scale.classify_unchecked(value), scale.classify(value).unwrap());
        }
    }

    #[test]
    #[should_panic]
    fn test_uniform_unchecked_panics_out_of_domain() {
        let scale = UniformAutomaticScale::new("AB").unwrap();
        scale.classify_unchecked(2.0);
    }

    #[test]
    fn test_uniform_rejects_empty_alphabet() {
        assert_eq!(
            UniformAutomaticScale::new(""),
            Err(Error::InvalidConfiguration(ConfigError::EmptyAlphabet))
        );
    }
}
