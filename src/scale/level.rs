//! Numeric input forms accepted by scales.
//!
//! A [`Level`] is one liveliness value in one of five representations. The
//! integral forms live on `[0, 255]`, the fractional forms on `[0, 1]`; a
//! byte `b` and a fraction `b / 255` describe the same value.
//!
//! [`Thresholds`] holds one set of scale boundaries in all five forms,
//! computed once at construction so classification never converts at lookup
//! time.

use fastnum::decimal::D128;
use num_traits::Float;

use super::util;
use crate::error::ConfigError;

/// Largest value of the integral representations.
pub const LEVEL_MAX: u8 = u8::MAX;

/// A liveliness value in one of the supported numeric representations.
///
/// # Examples
///
/// ```
/// use glyphmap::Level;
///
/// assert_eq!(Level::from(74u8), Level::Byte(74));
/// assert_eq!(Level::from(0.5f32), Level::Float(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    /// Integral value on `[0, 255]`.
    Byte(u8),
    /// Integral value on `[0, 255]`; anything outside is out of domain.
    Int(i32),
    /// Decimal fraction on `[0, 1]`.
    Decimal(D128),
    /// Double precision fraction on `[0, 1]`.
    Double(f64),
    /// Single precision fraction on `[0, 1]`.
    Float(f32),
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Level::Byte(value)
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level::Int(value)
    }
}

impl From<D128> for Level {
    fn from(value: D128) -> Self {
        Level::Decimal(value)
    }
}

impl From<f64> for Level {
    fn from(value: f64) -> Self {
        Level::Double(value)
    }
}

impl From<f32> for Level {
    fn from(value: f32) -> Self {
        Level::Float(value)
    }
}

impl Level {
    /// Returns true if the value lies on `[0, 255]` (integral forms) or
    /// `[0, 1]` (fractional forms). NaN is never in the domain.
    pub fn in_domain(&self) -> bool {
        match *self {
            Level::Byte(_) => true,
            Level::Int(value) => (0..=i32::from(LEVEL_MAX)).contains(&value),
            Level::Decimal(value) => in_unit_range(value),
            Level::Double(value) => in_unit_range(value),
            Level::Float(value) => in_unit_range(value),
        }
    }

    /// Index into an alphabet of `steps` equal-width buckets.
    ///
    /// Computes `floor(x * steps)` for fractions and `x * steps / 255` for
    /// integral values, without clamping or a domain check. Returns `None`
    /// when the result is negative, NaN or does not fit a `usize`.
    pub fn uniform_index(&self, steps: usize) -> Option<usize> {
        match *self {
            Level::Byte(value) => Some(usize::from(value) * steps / usize::from(LEVEL_MAX)),
            Level::Int(value) => usize::try_from(value)
                .ok()
                .and_then(|value| value.checked_mul(steps))
                .map(|scaled| scaled / usize::from(LEVEL_MAX)),
            Level::Decimal(value) => floor_index(value, steps),
            Level::Double(value) => floor_index(value, steps),
            Level::Float(value) => floor_index(value, steps),
        }
    }
}

fn in_unit_range<F: Float>(value: F) -> bool {
    value >= F::zero() && value <= F::one()
}

fn floor_index<F: Float>(value: F, steps: usize) -> Option<usize> {
    let steps: F = num_traits::cast(steps)?;
    (value * steps).floor().to_usize()
}

/// `byte / 255` computed in each representation exactly the way callers
/// write it, so a threshold placed on this grid compares like the byte.
fn decimal_at(byte: u8) -> D128 {
    D128::from(i32::from(byte)) / D128::from(i32::from(LEVEL_MAX))
}

fn double_at(byte: u8) -> f64 {
    f64::from(byte) / f64::from(LEVEL_MAX)
}

fn float_at(byte: u8) -> f32 {
    f32::from(byte) / f32::from(LEVEL_MAX)
}

/// Smallest byte whose fraction `b / 255` is `>= fraction`.
///
/// Using the ceiling keeps the integral and fractional lookups in agreement:
/// for every byte `b`, `b >= byte_ceiling(t)` exactly when `b / 255 >= t`,
/// with the division carried out in `F`. The first estimate can be one off
/// after rounding, so it is nudged until that holds.
fn byte_ceiling<F: Float>(fraction: F) -> Option<u8> {
    let max: F = num_traits::cast(LEVEL_MAX)?;
    let as_fraction = |byte: u8| -> Option<F> { Some(num_traits::cast::<u8, F>(byte)? / max) };

    let mut byte = (fraction * max).ceil().to_u8()?;
    while byte > 0 && as_fraction(byte - 1)? >= fraction {
        byte -= 1;
    }
    while byte < LEVEL_MAX && as_fraction(byte)? < fraction {
        byte += 1;
    }
    Some(byte)
}

/// Moves a converted threshold into `(at(byte - 1), at(byte)]`.
///
/// Inside that interval the threshold splits the byte grid of its own
/// representation exactly where `byte` does. A value above it drops to
/// `at(byte)`; a value at or below the lower end is replaced by
/// `above(at(byte - 1), at(byte))`.
fn fit_to_grid<T: PartialOrd + Copy>(
    value: T,
    byte: u8,
    at: impl Fn(u8) -> T,
    above: impl Fn(T, T) -> T,
) -> T {
    let upper = at(byte);
    if value > upper {
        return upper;
    }
    match byte.checked_sub(1).map(&at) {
        Some(lower) if value <= lower => above(lower, upper),
        _ => value,
    }
}

/// Next representable `f64` above a non-negative `value`.
fn next_double(value: f64, _upper: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

/// Next representable `f32` above a non-negative `value`.
fn next_float(value: f32, _upper: f32) -> f32 {
    f32::from_bits(value.to_bits() + 1)
}

fn decimal_midpoint(lower: D128, upper: D128) -> D128 {
    (lower + upper) / D128::from(2)
}

/// One ascending threshold set, stored in every numeric representation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Thresholds {
    bytes: Vec<u8>,
    ints: Vec<i32>,
    decimals: Vec<D128>,
    doubles: Vec<f64>,
    floats: Vec<f32>,
}

impl Thresholds {
    /// Derives every form from ascending byte thresholds.
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            ints: bytes.iter().map(|&b| i32::from(b)).collect(),
            decimals: bytes.iter().map(|&b| decimal_at(b)).collect(),
            doubles: bytes.iter().map(|&b| double_at(b)).collect(),
            floats: bytes.iter().map(|&b| float_at(b)).collect(),
            bytes,
        }
    }

    /// Derives every form from ascending fractional thresholds.
    ///
    /// `decimals` must hold the same values as `fractions`; callers pass
    /// their own decimal copy so no precision is lost when the input already
    /// is decimal. Every value must lie on `[0, 1]`.
    ///
    /// The byte form is the ceiling of each fraction. The other forms are
    /// converted and then fitted to the byte grid, so for every byte `b` the
    /// inputs `b`, `b as i32` and `b / 255` in each fractional type land in
    /// the same bucket.
    pub(crate) fn from_fractions<F: Float>(
        fractions: &[F],
        decimals: Vec<D128>,
    ) -> Result<Self, ConfigError> {
        let mut bytes = Vec::with_capacity(fractions.len());
        let mut fitted = Vec::with_capacity(fractions.len());
        let mut doubles = Vec::with_capacity(fractions.len());
        let mut floats = Vec::with_capacity(fractions.len());

        for (index, (&fraction, &decimal)) in fractions.iter().zip(&decimals).enumerate() {
            if !in_unit_range(fraction) {
                return Err(ConfigError::OutOfUnitRange(index));
            }
            let byte = byte_ceiling(fraction).ok_or(ConfigError::OutOfUnitRange(index))?;
            let double = fraction.to_f64().ok_or(ConfigError::OutOfUnitRange(index))?;

            bytes.push(byte);
            fitted.push(fit_to_grid(decimal, byte, decimal_at, decimal_midpoint));
            doubles.push(fit_to_grid(double, byte, double_at, next_double));
            floats.push(fit_to_grid(double as f32, byte, float_at, next_float));
        }

        Ok(Self {
            ints: bytes.iter().map(|&b| i32::from(b)).collect(),
            bytes,
            decimals: fitted,
            doubles,
            floats,
        })
    }

    /// Number of thresholds in each representation.
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn decimals(&self) -> &[D128] {
        &self.decimals
    }

    /// Bucket index of `level`, searched in the matching representation.
    pub(crate) fn bucket(&self, level: &Level) -> usize {
        match level {
            Level::Byte(value) => util::bucket(&self.bytes, value),
            Level::Int(value) => util::bucket(&self.ints, value),
            Level::Decimal(value) => util::bucket(&self.decimals, value),
            Level::Double(value) => util::bucket(&self.doubles, value),
            Level::Float(value) => util::bucket(&self.floats, value),
        }
    }
}
