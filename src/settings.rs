//! Runtime selection of the active mapper and scale.
//!
//! [`Settings`] owns one registry of mappers and one of scales. The builtin
//! configuration registers every standard mapper and a few common scales;
//! callers add their own under new aliases and switch between them by name.
//!
//! # Examples
//!
//! ```rust
//! use glyphmap::Settings;
//!
//! let mut settings = Settings::<f64>::builtin().unwrap();
//! assert_eq!(settings.pipeline().render_row(&[0.0, 0.5, 1.0]).unwrap(), "#+ ");
//!
//! settings.select_scale("tristate").unwrap();
//! assert_eq!(settings.pipeline().render_row(&[0.0, 0.5, 1.0]).unwrap(), "-~X");
//! ```

use std::sync::Arc;

use crate::error::Result;
use crate::mapper::{ValueMapper, ratio};
use crate::pipeline::{Fraction, Pipeline};
use crate::registry::NamedRegistry;
use crate::scale::{ExplicitThresholdScale, SymbolScale, UniformAutomaticScale};

/// Control points of the builtin piecewise linear mapper, in hundredths.
const CUSTOM_KNOTS: [u32; 6] = [0, 10, 25, 45, 75, 100];

/// Alphabet of the builtin uniform scale, darkest first.
pub const ASCII_RAMP: &str = " .:-=+*#%@";

/// Symbols for dead, half-alive and alive cells.
pub const TRISTATE_SYMBOLS: [char; 3] = ['-', '~', 'X'];

/// Registries of mappers and scales with a current selection in each.
#[derive(Debug, Clone)]
pub struct Settings<F: Fraction = f64> {
    mappers: NamedRegistry<ValueMapper<F>>,
    scales: NamedRegistry<SymbolScale>,
}

impl<F: Fraction> Settings<F> {
    /// Starts from a single mapper and a single scale, both current.
    pub fn new<M, S>(
        mapper_aliases: M,
        mapper: impl Into<Arc<ValueMapper<F>>>,
        scale_aliases: S,
        scale: impl Into<Arc<SymbolScale>>,
    ) -> Result<Self>
    where
        M: IntoIterator,
        M::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Ok(Self {
            mappers: NamedRegistry::new(mapper_aliases, mapper)?,
            scales: NamedRegistry::new(scale_aliases, scale)?,
        })
    }

    /// The builtin configuration.
    ///
    /// | alias                        | mapper                                 |
    /// |------------------------------|----------------------------------------|
    /// | `linear`, `identity`         | identity (current)                     |
    /// | `log`, `logarithmic`         | base 2, cut-off at `2^-10`             |
    /// | `sqrt`                       | square root, cut-off at `1e-8`         |
    /// | `custom`, `piecewise`        | knots `0, 0.1, 0.25, 0.45, 0.75, 1`    |
    ///
    /// | alias                        | scale                                  |
    /// |------------------------------|----------------------------------------|
    /// | `threshold`, `classic`       | `#` below 75, `+` below 170, else ` ` (current) |
    /// | `ascii`, `automatic`         | uniform over [`ASCII_RAMP`]            |
    /// | `tristate`                   | `-` at 0, `X` at 1, else `~`           |
    ///
    /// Every builtin scale carries a description.
    pub fn builtin() -> Result<Self> {
        let knots: Vec<F> = CUSTOM_KNOTS.iter().map(|&knot| ratio(knot, 100)).collect();

        let mut settings = Self::new(
            ["linear", "identity"],
            ValueMapper::<F>::identity(),
            ["threshold", "classic"],
            SymbolScale::from(
                ExplicitThresholdScale::from_bytes(&[75, 170], &['#', '+', ' '])?
                    .with_description("dense cells as '#', half alive as '+', the rest blank"),
            ),
        )?;

        settings.register_mapper(["log", "logarithmic"], ValueMapper::<F>::logarithmic())?;
        settings.register_mapper(["sqrt"], ValueMapper::<F>::square_root())?;
        settings.register_mapper(["custom", "piecewise"], ValueMapper::piecewise_linear(&knots)?)?;

        settings.register_scale(
            ["ascii", "automatic"],
            SymbolScale::from(
                UniformAutomaticScale::new(ASCII_RAMP)?
                    .with_description("ten step ASCII ramp from blank to '@'"),
            ),
        )?;
        // Anything above zero and below one is half alive
        settings.register_scale(
            ["tristate"],
            SymbolScale::from(
                ExplicitThresholdScale::from_fractions(&[f64::MIN_POSITIVE, 1.0], &TRISTATE_SYMBOLS)?
                    .with_description("dead at 0, alive at 1, half alive in between"),
            ),
        )?;

        Ok(settings)
    }

    /// Adds a mapper under `aliases`.
    pub fn register_mapper<I>(&mut self, aliases: I, mapper: impl Into<Arc<ValueMapper<F>>>) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.mappers.register(aliases, mapper)
    }

    /// Adds a scale under `aliases`.
    pub fn register_scale<I>(&mut self, aliases: I, scale: impl Into<Arc<SymbolScale>>) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.scales.register(aliases, scale)
    }

    /// Makes the mapper under `alias` current.
    pub fn select_mapper(&mut self, alias: &str) -> Result<()> {
        self.mappers.select_current(alias)
    }

    /// Makes the scale under `alias` current.
    pub fn select_scale(&mut self, alias: &str) -> Result<()> {
        self.scales.select_current(alias)
    }

    /// The current mapper.
    pub fn mapper(&self) -> Arc<ValueMapper<F>> {
        self.mappers.current()
    }

    /// The current scale.
    pub fn scale(&self) -> Arc<SymbolScale> {
        self.scales.current()
    }

    /// Aliases of the current mapper.
    pub fn mapper_aliases(&self) -> Vec<&str> {
        self.mappers.aliases_of(&self.mappers.current())
    }

    /// Aliases of the current scale.
    pub fn scale_aliases(&self) -> Vec<&str> {
        self.scales.aliases_of(&self.scales.current())
    }

    /// The mapper registry.
    pub fn mappers(&self) -> &NamedRegistry<ValueMapper<F>> {
        &self.mappers
    }

    /// The scale registry.
    pub fn scales(&self) -> &NamedRegistry<SymbolScale> {
        &self.scales
    }

    /// A pipeline over the current mapper and scale.
    pub fn pipeline(&self) -> Pipeline<F> {
        Pipeline::new(self.mapper(), self.scale())
    }
}
