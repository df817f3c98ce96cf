//! # dialkit-core
//!
//! Conversion core for touch-driven audio parameter controls.
//!
//! A dial, slider, or picker reduces every touch event to a ratio in
//! `0.0..=1.0`; this crate owns everything after that point: mapping the
//! ratio to a meaningful parameter value ([`Scale`]), rendering the value
//! as display text ([`Formatter`]), resolving both from declarative
//! configuration ([`ControlConfig`]), and holding them together behind a
//! framework-independent adapter ([`ParameterControl`]).
//!
//! ## Architecture
//!
//! ```text
//! ControlConfig ──resolve once──▶ Scale + Formatter
//!                                    │
//! touch ratio ──▶ ParameterControl ──┤ value_for_ratio → value
//!                                    │ ratio_for_value → fill position
//!                                    │ text            → label string
//! ```
//!
//! Everything is pure and synchronous: a resolved scale or formatter is an
//! immutable value object, safe to share across threads without
//! synchronization. Invalid configuration (unknown kind strings,
//! logarithmic bounds straddling zero, malformed step lists) fails at
//! resolution time; conversion calls never fail.
//!
//! ## Quick start
//!
//! ```
//! use dialkit_core::{ControlConfig, ParameterControl};
//!
//! let config = ControlConfig {
//!     title: "Cutoff".to_string(),
//!     scale_type: "logarithmic".to_string(),
//!     scale_min: 20.0,
//!     scale_max: 20000.0,
//!     formatter_type: "frequency".to_string(),
//!     ..ControlConfig::default()
//! };
//!
//! let mut control = ParameterControl::new(&config).unwrap();
//! control.set_ratio(0.5);
//! assert_eq!(control.display(), "632.0Hz");
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod lerp;
pub mod parameter_format;
pub mod parameter_scale;

pub use config::{parse_steps, ControlConfig, FormatterKind, ScaleKind};
pub use control::ParameterControl;
pub use error::{ConfigError, Result};
pub use parameter_format::Formatter;
pub use parameter_scale::Scale;
