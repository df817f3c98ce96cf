//! Error types for control configuration.

/// Errors produced while resolving a control configuration into a scale and
/// formatter pair.
///
/// Every variant is a hard construction-time rejection: once a [`Scale`] or
/// [`Formatter`] exists, its conversion operations cannot fail.
///
/// [`Scale`]: crate::parameter_scale::Scale
/// [`Formatter`]: crate::parameter_format::Formatter
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The scale kind string is not one of the known kinds.
    UnknownScaleKind(String),
    /// The formatter kind string is not one of the known kinds.
    UnknownFormatterKind(String),
    /// Logarithmic bounds must be nonzero and share a sign.
    InvalidLogarithmicRange { min: f64, max: f64 },
    /// An exponential scale's exponent must be finite and strictly positive.
    InvalidExponent(f64),
    /// A stepped scale needs at least one step value.
    EmptySteps,
    /// A step list token failed to parse as a number.
    InvalidStepValue(String),
    /// Stepped formatter labels must pair one-to-one with step values.
    StepLabelMismatch { values: usize, labels: usize },
    /// Configuration JSON failed to deserialize.
    InvalidJson(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownScaleKind(kind) => write!(f, "unknown scale kind {kind:?}"),
            Self::UnknownFormatterKind(kind) => write!(f, "unknown formatter kind {kind:?}"),
            Self::InvalidLogarithmicRange { min, max } => write!(
                f,
                "logarithmic bounds must be nonzero and share a sign, got {min} and {max}"
            ),
            Self::InvalidExponent(exponent) => {
                write!(f, "exponent must be finite and positive, got {exponent}")
            }
            Self::EmptySteps => write!(f, "stepped scale needs at least one step value"),
            Self::InvalidStepValue(token) => write!(f, "invalid step value {token:?}"),
            Self::StepLabelMismatch { values, labels } => write!(
                f,
                "stepped formatter has {labels} labels for {values} step values"
            ),
            Self::InvalidJson(msg) => write!(f, "invalid configuration JSON: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
