//! Glyph mapping library
//!
//! `glyphmap` turns liveliness values of a cellular simulation into display
//! symbols. It focuses on the numeric side of rendering: reshaping values
//! that crowd one end of the unit interval and classifying them into a small
//! alphabet.
//!
//! # Core Concepts
//!
//! ## Mappers
//!
//! Mappers are monotonic functions from `[0, 1]` onto `[0, 1]`. They spread a
//! crowded region of the interval over more of the output range.
//!
//! Available mappers:
//! - [`mapper::Identity`] - values pass through unchanged
//! - [`mapper::Logarithmic`] - spreads values by order of magnitude
//! - [`mapper::SquareRoot`] - a gentler stretch of small values
//! - [`mapper::PiecewiseLinear`] - custom control points onto a uniform grid
//!
//! ## Scales
//!
//! Scales classify a value into one symbol of an alphabet. Values arrive as
//! bytes or integers on `[0, 255]`, or as `f32`, `f64` or decimal fractions
//! on `[0, 1]`; see [`Level`].
//!
//! - [`ExplicitThresholdScale`] - caller-chosen thresholds, never fails
//! - [`UniformAutomaticScale`] - equal-width buckets, reports out-of-domain
//!   input
//!
//! ## Settings
//!
//! [`Settings`] keeps named [`NamedRegistry`] directories of mappers and
//! scales, each with a current selection, and hands out a [`Pipeline`] that
//! chains the current pair.
//!
//! # Examples
//!
//! ## Classifying Values
//!
//! ```rust
//! use glyphmap::ExplicitThresholdScale;
//!
//! let scale = ExplicitThresholdScale::from_bytes(&[75, 170], &['#', '+', ' ']).unwrap();
//!
//! // Every representation of the same value lands in the same bucket
//! assert_eq!(scale.classify(74u8), '#');
//! assert_eq!(scale.classify(75i32), '+');
//! assert_eq!(scale.classify(75.0 / 255.0), '+');
//! assert_eq!(scale.classify(0.9f32), ' ');
//! ```
//!
//! ## Reshaping Before Classifying
//!
//! ```rust
//! use glyphmap::{Mapper, ValueMapper};
//!
//! let log = ValueMapper::<f64>::logarithmic();
//!
//! // 1/32 is five halvings below 1, half way down to the 2^-10 cut-off
//! assert!((log.map(1.0 / 32.0) - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Switching by Name
//!
//! ```rust
//! use glyphmap::Settings;
//!
//! let mut settings = Settings::<f64>::builtin().unwrap();
//! settings.select_mapper("sqrt").unwrap();
//!
//! // sqrt(0.09) = 0.3 is above the first threshold, 0.09 itself is not
//! assert_eq!(settings.pipeline().symbol_for(0.09).unwrap(), '+');
//!
//! assert!(settings.select_mapper("cubic").is_err());
//! assert_eq!(settings.mapper_aliases(), vec!["sqrt"]);
//! ```
//!
//! ## Decimal Values
//!
//! With `fastnum` decimals thresholds such as `0.1` are represented exactly:
//!
//! ```rust
//! use fastnum::decimal::D128;
//! use glyphmap::ExplicitThresholdScale;
//!
//! let tenth = D128::from(1) / D128::from(10);
//! let scale = ExplicitThresholdScale::from_decimals(&[tenth], &['.', '#']).unwrap();
//!
//! assert_eq!(scale.classify(tenth), '#');
//! ```

pub mod error;
pub mod mapper;
pub mod pipeline;
pub mod registry;
pub mod scale;
pub mod settings;

pub use error::{ConfigError, Error, Result};
pub use mapper::{Mapper, ValueMapper};
pub use num_traits::Float;
pub use pipeline::{Fraction, Pipeline};
pub use registry::NamedRegistry;
pub use scale::{ExplicitThresholdScale, LEVEL_MAX, Level, SymbolScale, UniformAutomaticScale};
pub use settings::Settings;
