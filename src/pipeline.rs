//! Rendering liveliness values into display symbols.
//!
//! A [`Pipeline`] chains one [`ValueMapper`] and one [`SymbolScale`]: every
//! raw value is first reshaped by the mapper, then classified by the scale.
//! It holds shared snapshots of both, so a pipeline taken from
//! [`Settings`](crate::Settings) keeps rendering with the selection that was
//! current when it was built, even if the selection changes afterwards.
//!
//! # Examples
//!
//! ```rust
//! use glyphmap::{Pipeline, SymbolScale, ValueMapper};
//!
//! let pipeline = Pipeline::new(
//!     ValueMapper::<f64>::square_root(),
//!     SymbolScale::threshold(&[75, 170], &['#', '+', ' ']).unwrap(),
//! );
//!
//! // sqrt(0.09) = 0.3 clears the first threshold (75 / 255)
//! assert_eq!(pipeline.symbol_for(0.09).unwrap(), '+');
//! assert_eq!(pipeline.render_row(&[0.0, 0.09, 1.0]).unwrap(), "#+ ");
//! ```
//!
//! ## Rendering a Grid
//!
//! ```rust
//! use glyphmap::{Pipeline, SymbolScale, ValueMapper};
//!
//! let pipeline = Pipeline::new(ValueMapper::<f64>::identity(), SymbolScale::uniform(" #").unwrap());
//! let cells = [0.0, 1.0, 1.0, 0.0];
//!
//! assert_eq!(pipeline.render_grid(&cells, 2).unwrap(), vec![" #", "# "]);
//! ```

use std::sync::Arc;

use num_traits::Float;
use tracing::trace;

use crate::error::{ConfigError, Result};
use crate::mapper::{Mapper, ValueMapper};
use crate::scale::{Level, SymbolScale};

/// A fraction type that can be both mapped and classified.
///
/// Implemented for `f32`, `f64` and `fastnum::D128`.
pub trait Fraction: Float + Into<Level> {}

impl<F: Float + Into<Level>> Fraction for F {}

/// A mapper followed by a scale.
#[derive(Debug, Clone)]
pub struct Pipeline<F: Float = f64> {
    mapper: Arc<ValueMapper<F>>,
    scale: Arc<SymbolScale>,
}

impl<F: Fraction> Pipeline<F> {
    /// Creates a pipeline from a mapper and a scale, owned or shared.
    pub fn new(mapper: impl Into<Arc<ValueMapper<F>>>, scale: impl Into<Arc<SymbolScale>>) -> Self {
        let mapper = mapper.into();
        let scale = scale.into();
        trace!(mapper = mapper.kind(), scale = scale.kind(), "building pipeline");

        Self { mapper, scale }
    }

    /// The mapper applied first.
    pub fn mapper(&self) -> &ValueMapper<F> {
        &self.mapper
    }

    /// The scale applied second.
    pub fn scale(&self) -> &SymbolScale {
        &self.scale
    }

    /// Reshapes `raw` with the mapper only.
    pub fn map(&self, raw: F) -> F {
        self.mapper.map(raw)
    }

    /// The symbol for one raw value.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](crate::Error::IndexOutOfRange) if the mapped value
    /// leaves the domain of a uniform scale.
    pub fn symbol_for(&self, raw: F) -> Result<char> {
        self.scale.classify(self.mapper.map(raw))
    }

    /// One symbol per value, concatenated into a line.
    pub fn render_row(&self, values: &[F]) -> Result<String> {
        values.iter().map(|&raw| self.symbol_for(raw)).collect()
    }

    /// Splits row-major `values` into rows of `width` cells and renders each.
    ///
    /// The last row is shorter when `values.len()` is not a multiple of
    /// `width`.
    ///
    /// # Errors
    ///
    /// - [`InvalidConfiguration`](crate::Error::InvalidConfiguration) if
    ///   `width` is zero
    /// - the first classification error of any cell
    pub fn render_grid(&self, values: &[F], width: usize) -> Result<Vec<String>> {
        if width == 0 {
            return Err(ConfigError::Parameter {
                name: "width",
                reason: "must be greater than zero",
            }
            .into());
        }

        values
            .chunks(width)
            .map(|row| self.render_row(row))
            .collect()
    }
}
