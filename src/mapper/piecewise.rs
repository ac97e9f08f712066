use num_traits::Float;

use super::Mapper;
use crate::error::{ConfigError, Result};
use crate::scale::util;

/// Piecewise linear mapper: moves custom control points onto a uniform grid.
///
/// Given `k + 1` ascending control points from `0` to `1`, the `i`-th point
/// maps to `i / k` and values between two points are interpolated linearly.
/// This is the inverse of evaluating a curve through the points: it answers
/// where a value sits in control-point index space.
///
/// For control points `[0, 0.1, 0.25, 0.45, 0.75, 1]`:
///
/// | input  | output |
/// |--------|--------|
/// | `<= 0` | `0.0`  |
/// | `0.1`  | `0.2`  |
/// | `0.25` | `0.4`  |
/// | `0.45` | `0.6`  |
/// | `0.75` | `0.8`  |
/// | `>= 1` | `1.0`  |
///
/// # Examples
///
/// ```rust
/// use glyphmap::{Mapper, mapper::PiecewiseLinear};
///
/// let mapper = PiecewiseLinear::<f64>::new(&[0.0, 0.1, 0.25, 0.45, 0.75, 1.0]).unwrap();
///
/// assert_eq!(mapper.map(0.1), 0.2);
/// assert_eq!(mapper.map(0.45), 0.6);
///
/// // Half-way between 0.75 and 1.0 is half-way between 0.8 and 1.0
/// assert!((mapper.map(0.875) - 0.9).abs() < 1e-12);
/// ```
///
/// ## Validation
///
/// ```rust
/// use glyphmap::mapper::PiecewiseLinear;
///
/// assert!(PiecewiseLinear::<f64>::new(&[0.1, 1.0]).is_err()); // must start at 0
/// assert!(PiecewiseLinear::<f64>::new(&[0.0, 0.9]).is_err()); // must end at 1
/// assert!(PiecewiseLinear::<f64>::new(&[0.0, 0.5, 0.5, 1.0]).is_err()); // no duplicates
/// assert!(PiecewiseLinear::<f64>::new(&[0.0, 0.6, 0.3, 1.0]).is_err()); // ascending only
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear<F> {
    knots: Vec<F>,
    /// Index of each knot as a fraction value, `0..=k`.
    positions: Vec<F>,
    /// `1 / (knots[i + 1] - knots[i])` for every segment.
    spans_inv: Vec<F>,
    segments: F,
}

impl<F: Float> PiecewiseLinear<F> {
    /// Creates a mapper from control points.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](crate::Error::InvalidConfiguration) unless the
    /// points are strictly ascending, start at `0`, end at `1` and number at
    /// least two.
    pub fn new(control_points: &[F]) -> Result<Self> {
        let (&first, &last) = match (control_points.first(), control_points.last()) {
            (Some(first), Some(last)) if control_points.len() >= 2 => (first, last),
            _ => return Err(ConfigError::TooFewControlPoints(control_points.len()).into()),
        };

        if !util::is_ascending(control_points) {
            return Err(ConfigError::Unsorted.into());
        }
        if let Some(index) = util::first_duplicate(control_points) {
            return Err(ConfigError::Duplicate(index, index + 1).into());
        }
        if first != F::zero() {
            return Err(ConfigError::FirstKnot.into());
        }
        if last != F::one() {
            return Err(ConfigError::LastKnot.into());
        }

        let mut spans_inv = Vec::with_capacity(control_points.len() - 1);
        for (index, pair) in control_points.windows(2).enumerate() {
            let span = pair[1] - pair[0];
            if span == F::zero() {
                return Err(ConfigError::Duplicate(index, index + 1).into());
            }
            spans_inv.push(span.recip());
        }

        let positions: Vec<F> = control_points
            .iter()
            .scan(-F::one(), |position, _| {
                *position = *position + F::one();
                Some(*position)
            })
            .collect();
        let segments = positions[positions.len() - 1];

        Ok(Self {
            knots: control_points.to_vec(),
            positions,
            spans_inv,
            segments,
        })
    }

    /// The control points, ascending.
    pub fn control_points(&self) -> &[F] {
        &self.knots
    }
}

impl<F: Float> Mapper for PiecewiseLinear<F> {
    type Fraction = F;

    fn map(&self, value: F) -> F {
        if value <= F::zero() {
            return F::zero();
        }
        if value >= F::one() {
            return F::one();
        }

        for (index, pair) in self.knots.windows(2).enumerate() {
            if value < pair[0] || value > pair[1] {
                continue;
            }
            // Exact hits land on the grid without going through the inverse.
            if value == pair[1] {
                return self.positions[index + 1] / self.segments;
            }
            let local = ((value - pair[0]) * self.spans_inv[index]).min(F::one());
            return (self.positions[index] + local) / self.segments;
        }

        // Only NaN gets here.
        value
    }
}
