//! Ratio/value conversion scales.
//!
//! This module provides the [`Scale`] enum for the two-way conversion
//! between a normalized ratio in `0.0..=1.0` (a touch position along a
//! control) and a useful parameter value. Each variant is a pure mapping;
//! a control resolves its variant once from configuration and then calls
//! [`value_for_ratio`](Scale::value_for_ratio) on every touch move and
//! [`ratio_for_value`](Scale::ratio_for_value) when it needs the fill
//! position for the current value.
//!
//! # Design
//!
//! Variant selection happens at configuration time (see
//! [`ControlConfig::scale`](crate::config::ControlConfig::scale)), so the
//! conversion hot path is a single enum dispatch with no string comparison.
//! Out-of-range ratios are clamped, never an error. Invalid construction
//! (logarithmic bounds straddling zero, an empty step list) is rejected up
//! front instead of propagating NaN into rendering.
//!
//! # Example
//!
//! ```
//! use dialkit_core::Scale;
//!
//! let scale = Scale::linear(20.0, 20_000.0);
//! assert_eq!(scale.value_for_ratio(0.0), 20.0);
//! assert_eq!(scale.value_for_ratio(1.0), 20_000.0);
//! assert_eq!(scale.ratio_for_value(20.0), 0.0);
//! ```

use crate::error::{ConfigError, Result};
use crate::lerp::{inverse_lerp, lerp};

/// Two-way conversion between a ratio in `0.0..=1.0` and a parameter value.
///
/// Immutable once constructed. Reconfiguring a control replaces its scale
/// wholesale rather than mutating it in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    /// Linear interpolation over `minimum..=maximum`.
    ///
    /// `minimum` may exceed `maximum`, which inverts the control direction.
    Linear {
        /// The scale's minimum value.
        minimum: f64,
        /// The scale's maximum value.
        maximum: f64,
    },

    /// Exponential interpolation over `minimum..=maximum`, where the value
    /// never hits zero: `minimum * (maximum / minimum) ^ ratio`.
    ///
    /// Subtle gradient at the start, dramatic gradient near the end. Most
    /// useful when the control covers multiple orders of magnitude
    /// (frequency ranges, envelope times). Bounds must be nonzero and
    /// share a sign; construct via [`Scale::logarithmic`].
    Logarithmic {
        /// The scale's minimum value.
        minimum: f64,
        /// The scale's maximum value.
        maximum: f64,
    },

    /// Power-curve interpolation: the ratio is raised to `exponent` before
    /// linear interpolation.
    ///
    /// Approximates a logarithmic response while still supporting zero and
    /// mixed-sign bounds. Construct via [`Scale::exponential`].
    Exponential {
        /// The scale's minimum value.
        minimum: f64,
        /// The scale's maximum value.
        maximum: f64,
        /// The curve's exponent. Greater than 1 compresses the low end.
        exponent: f64,
    },

    /// Linear interpolation rounded to the nearest integer.
    Integer {
        /// The scale's minimum value.
        minimum: f64,
        /// The scale's maximum value.
        maximum: f64,
    },

    /// Conversion via picking from an ordered list of discrete values.
    ///
    /// A ratio is converted to an index in `0..values.len()` by
    /// `round(ratio * (N - 1))`, so both endpoints are exactly reachable.
    /// Values should be unique: [`ratio_for_value`](Scale::ratio_for_value)
    /// returns the first match when they are not. Construct via
    /// [`Scale::stepped`].
    Stepped {
        /// The scale's list of value steps, in display order.
        values: Vec<f64>,
    },
}

impl Scale {
    /// Create a linear scale. Never fails.
    pub fn linear(minimum: f64, maximum: f64) -> Self {
        Self::Linear { minimum, maximum }
    }

    /// Create a logarithmic scale.
    ///
    /// Bounds must both be strictly positive or both strictly negative;
    /// anything else would turn the conversion formulas into NaN factories,
    /// so it is rejected here rather than surfacing at first use.
    pub fn logarithmic(minimum: f64, maximum: f64) -> Result<Self> {
        let valid = minimum.is_finite()
            && maximum.is_finite()
            && ((minimum > 0.0 && maximum > 0.0) || (minimum < 0.0 && maximum < 0.0));
        if !valid {
            return Err(ConfigError::InvalidLogarithmicRange {
                min: minimum,
                max: maximum,
            });
        }
        Ok(Self::Logarithmic { minimum, maximum })
    }

    /// Create an exponential (power-curve) scale.
    ///
    /// The exponent must be finite and strictly positive: a non-positive
    /// exponent sends `0.0.powf(exponent)` to infinity at ratio `0.0`, and
    /// its reciprocal is used for the inverse mapping.
    pub fn exponential(minimum: f64, maximum: f64, exponent: f64) -> Result<Self> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ConfigError::InvalidExponent(exponent));
        }
        Ok(Self::Exponential {
            minimum,
            maximum,
            exponent,
        })
    }

    /// Create an integer-rounded scale. Never fails.
    pub fn integer(minimum: f64, maximum: f64) -> Self {
        Self::Integer { minimum, maximum }
    }

    /// Create a stepped scale from an ordered value list.
    ///
    /// The list must not be empty. A single-element list is valid: every
    /// ratio maps to the sole value, and every value maps to ratio `0.0`.
    pub fn stepped(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ConfigError::EmptySteps);
        }
        Ok(Self::Stepped { values })
    }

    /// Convert a ratio in `0.0..=1.0` to a parameter value.
    ///
    /// Out-of-range ratios are clamped to the endpoints.
    #[inline]
    pub fn value_for_ratio(&self, ratio: f64) -> f64 {
        let ratio = clamp01(ratio);
        match self {
            Self::Linear { minimum, maximum } => lerp(ratio, *minimum, *maximum),
            Self::Logarithmic { minimum, maximum } => minimum * (maximum / minimum).powf(ratio),
            Self::Exponential {
                minimum,
                maximum,
                exponent,
            } => lerp(ratio.powf(*exponent), *minimum, *maximum),
            Self::Integer { minimum, maximum } => lerp(ratio, *minimum, *maximum).round(),
            Self::Stepped { values } => values[step_index(ratio, values.len())],
        }
    }

    /// Convert a parameter value back to a ratio in `0.0..=1.0`.
    ///
    /// The result is clamped to `0.0..=1.0`, so values outside the scale's
    /// range pin the indicator to an endpoint. For a stepped scale, a value
    /// absent from the step list returns `0.0`: this is a deliberate
    /// graceful-degradation policy, not an error. Callers that need to
    /// detect "not found" must check membership before calling.
    pub fn ratio_for_value(&self, value: f64) -> f64 {
        match self {
            Self::Linear { minimum, maximum } => clamp01(inverse_lerp(value, *minimum, *maximum)),
            Self::Logarithmic { minimum, maximum } => {
                // value / minimum <= 0 means the value is on the wrong side
                // of zero for these bounds; pin to the start rather than
                // handing NaN to the renderer.
                let quotient = value / minimum;
                if quotient <= 0.0 {
                    return 0.0;
                }
                // equal bounds make the denominator ln(1) = 0; treat the
                // range as degenerate like inverse_lerp does
                let denominator = (maximum / minimum).ln();
                if denominator == 0.0 {
                    return 0.0;
                }
                clamp01(quotient.ln() / denominator)
            }
            Self::Exponential {
                minimum,
                maximum,
                exponent,
            } => clamp01(inverse_lerp(value, *minimum, *maximum))
                .powf(1.0 / exponent),
            Self::Integer { minimum, maximum } => {
                clamp01(inverse_lerp(value.round(), *minimum, *maximum))
            }
            Self::Stepped { values } => {
                if values.len() == 1 {
                    return 0.0;
                }
                match values.iter().position(|step| *step == value) {
                    Some(index) => index as f64 / (values.len() - 1) as f64,
                    None => {
                        log::warn!("value {value} not in step list, falling back to ratio 0.0");
                        0.0
                    }
                }
            }
        }
    }
}

#[inline]
fn clamp01(ratio: f64) -> f64 {
    ratio.clamp(0.0, 1.0)
}

/// Convert a clamped ratio to a step index in `0..count`.
///
/// The divisor is `count - 1` so ratio `1.0` maps exactly to the last step.
#[inline]
fn step_index(ratio: f64, count: usize) -> usize {
    if count <= 1 {
        0
    } else {
        ((ratio * (count - 1) as f64).round() as usize).min(count - 1)
    }
}
