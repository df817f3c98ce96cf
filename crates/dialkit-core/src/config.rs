//! Control configuration.
//!
//! This module provides [`ControlConfig`], the declarative mirror of a
//! control's inspectable properties: scale kind, numeric bounds, delimited
//! step values, formatter kind, and delimited step labels. A configuration
//! source (a layout file, a host preset, a JSON sidecar) populates the
//! struct via serde; [`ControlConfig::scale`] and
//! [`ControlConfig::formatter`] then resolve the string tags into concrete
//! [`Scale`]/[`Formatter`] instances exactly once.
//!
//! All validation happens here, at configuration-parse time: unknown kind
//! strings, malformed step lists, and invalid bounds are hard errors and
//! are never silently defaulted.
//!
//! # Example
//!
//! ```
//! use dialkit_core::ControlConfig;
//!
//! let config = ControlConfig::from_json(
//!     r#"{
//!         "title": "Cutoff",
//!         "scale_type": "logarithmic",
//!         "scale_min": 20.0,
//!         "scale_max": 20000.0,
//!         "formatter_type": "frequency"
//!     }"#,
//! )
//! .unwrap();
//!
//! let scale = config.scale().unwrap();
//! let formatter = config.formatter().unwrap();
//! assert_eq!(formatter.text(scale.value_for_ratio(0.0)), "20.0Hz");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::parameter_format::Formatter;
use crate::parameter_scale::Scale;

// =========================================================================
// Kind tags
// =========================================================================

/// The closed set of scale kind strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// `"linear"`
    Linear,
    /// `"logarithmic"`
    Logarithmic,
    /// `"exponential"`
    Exponential,
    /// `"integer"`
    Integer,
    /// `"stepped"`
    Stepped,
}

impl FromStr for ScaleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Self::Linear),
            "logarithmic" => Ok(Self::Logarithmic),
            "exponential" => Ok(Self::Exponential),
            "integer" => Ok(Self::Integer),
            "stepped" => Ok(Self::Stepped),
            other => Err(ConfigError::UnknownScaleKind(other.to_string())),
        }
    }
}

/// The closed set of formatter kind strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    /// `"number"`
    Number,
    /// `"integer"`
    Integer,
    /// `"percentage"`
    Percentage,
    /// `"duration"`
    Duration,
    /// `"amplitude"`
    Amplitude,
    /// `"frequency"`
    Frequency,
    /// `"interval"`
    Interval,
    /// `"stepped"`
    Stepped,
}

impl FromStr for FormatterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "number" => Ok(Self::Number),
            "integer" => Ok(Self::Integer),
            "percentage" => Ok(Self::Percentage),
            "duration" => Ok(Self::Duration),
            "amplitude" => Ok(Self::Amplitude),
            "frequency" => Ok(Self::Frequency),
            "interval" => Ok(Self::Interval),
            "stepped" => Ok(Self::Stepped),
            other => Err(ConfigError::UnknownFormatterKind(other.to_string())),
        }
    }
}

// =========================================================================
// ControlConfig
// =========================================================================

/// Declarative configuration for one control.
///
/// Reconfiguration replaces the resolved scale/formatter pair wholesale;
/// the struct itself is plain data with no behavior beyond resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Control title, included in log output for context.
    pub title: String,

    /// Scale kind: one of `"linear"`, `"logarithmic"`, `"exponential"`,
    /// `"integer"`, `"stepped"`.
    pub scale_type: String,

    /// Scale minimum. Ignored by the stepped kind.
    pub scale_min: f64,

    /// Scale maximum. Ignored by the stepped kind.
    pub scale_max: f64,

    /// Exponent for the exponential kind. Defaults to Euler's number,
    /// matching the historical power curve this kind replaces.
    pub scale_exponent: f64,

    /// Comma- and/or whitespace-delimited step values for the stepped
    /// scale kind (e.g., `"0.5, 1, 1.5, 2"`).
    pub scale_steps: String,

    /// Formatter kind: one of `"number"`, `"integer"`, `"percentage"`,
    /// `"duration"`, `"amplitude"`, `"frequency"`, `"interval"`,
    /// `"stepped"`.
    pub formatter_type: String,

    /// Comma-delimited labels for the stepped formatter, paired
    /// positionally with `scale_steps`.
    pub formatter_steps: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            scale_type: "linear".to_string(),
            scale_min: 0.0,
            scale_max: 1.0,
            scale_exponent: std::f64::consts::E,
            scale_steps: String::new(),
            formatter_type: "number".to_string(),
            formatter_steps: String::new(),
        }
    }
}

impl ControlConfig {
    /// Deserialize a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// Resolve the configured scale.
    pub fn scale(&self) -> Result<Scale> {
        match self.scale_type.parse::<ScaleKind>()? {
            ScaleKind::Linear => Ok(Scale::linear(self.scale_min, self.scale_max)),
            ScaleKind::Logarithmic => Scale::logarithmic(self.scale_min, self.scale_max),
            ScaleKind::Exponential => {
                Scale::exponential(self.scale_min, self.scale_max, self.scale_exponent)
            }
            ScaleKind::Integer => Ok(Scale::integer(self.scale_min, self.scale_max)),
            ScaleKind::Stepped => Scale::stepped(self.step_values()?),
        }
    }

    /// Resolve the configured formatter.
    ///
    /// The stepped formatter requires a label for every step value.
    pub fn formatter(&self) -> Result<Formatter> {
        match self.formatter_type.parse::<FormatterKind>()? {
            FormatterKind::Number => Ok(Formatter::Number),
            FormatterKind::Integer => Ok(Formatter::Integer),
            FormatterKind::Percentage => Ok(Formatter::Percentage),
            FormatterKind::Duration => Ok(Formatter::Duration),
            FormatterKind::Amplitude => Ok(Formatter::Amplitude),
            FormatterKind::Frequency => Ok(Formatter::Frequency),
            FormatterKind::Interval => Ok(Formatter::Interval),
            FormatterKind::Stepped => {
                let values = self.step_values()?;
                let labels = self.step_labels();
                if values.len() != labels.len() {
                    return Err(ConfigError::StepLabelMismatch {
                        values: values.len(),
                        labels: labels.len(),
                    });
                }
                Ok(Formatter::Stepped {
                    steps: values.into_iter().zip(labels).collect(),
                })
            }
        }
    }

    /// Parse `scale_steps` into an ordered value list.
    pub fn step_values(&self) -> Result<Vec<f64>> {
        parse_steps(&self.scale_steps)
    }

    /// Split `formatter_steps` into trimmed labels.
    ///
    /// Labels are comma-delimited only, so a label may contain spaces. An
    /// empty label between delimiters is kept, so a deliberately blank
    /// label stays paired with its step value.
    pub fn step_labels(&self) -> Vec<String> {
        if self.formatter_steps.trim().is_empty() {
            return Vec::new();
        }
        self.formatter_steps
            .split(',')
            .map(|label| label.trim().to_string())
            .collect()
    }
}

/// Parse a comma- and/or whitespace-delimited string of step values.
///
/// Duplicate values are accepted but logged: lookup by value on the
/// resulting scale degrades to the first match.
pub fn parse_steps(input: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let tokens = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    for token in tokens {
        let value = token
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidStepValue(token.to_string()))?;
        if values.contains(&value) {
            log::warn!("duplicate step value {value}, lookup by value returns the first match");
        }
        values.push(value);
    }
    Ok(values)
}
