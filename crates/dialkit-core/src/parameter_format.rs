//! Parameter value formatting.
//!
//! This module provides the [`Formatter`] enum for converting parameter
//! values to display strings. Each variant handles one presentation policy
//! (plain number, percentage, duration, frequency, ...) with adaptive
//! precision, so a control's value label stays readable across the whole
//! range of the underlying scale.
//!
//! # Design
//!
//! Formatting never fails: NaN and infinities render as literal sentinels,
//! negative zero is normalized before rendering, and a stepped formatter
//! falls back to the plain number rules for a value missing from its label
//! table. Magnitude-adaptive variants (duration, frequency) pick a unit and
//! rounding mode from half-open magnitude bands: inclusive on the lower
//! edge, exclusive on the upper edge, with the final band catching all
//! larger magnitudes.
//!
//! # Example
//!
//! ```
//! use dialkit_core::Formatter;
//!
//! assert_eq!(Formatter::Frequency.text(440.0), "440.0Hz");
//! assert_eq!(Formatter::Frequency.text(1500.0), "1.5kHz");
//! assert_eq!(Formatter::Percentage.text(0.75), "75%");
//! ```

/// Parameter value formatter.
///
/// Defines how parameter values are converted to display strings. Selected
/// once at configuration time alongside the control's
/// [`Scale`](crate::parameter_scale::Scale).
#[derive(Debug, Clone, PartialEq)]
pub enum Formatter {
    /// Plain number: 2 fraction digits when `0.01 <= |value| < 1.0`,
    /// otherwise 1 (e.g., "0.25", "3.5").
    Number,

    /// Whole number, no fraction digits (e.g., "12").
    Integer,

    /// Percentage: value 0.0-1.0 displayed as 0-100 with a "%" suffix.
    Percentage,

    /// Duration in seconds with automatic µs/ms/s unit selection.
    Duration,

    /// Amplitude in decibels: 1 fraction digit under 10 dB, else 0
    /// (e.g., "-6.0dB", "12dB").
    Amplitude,

    /// Frequency in Hz with automatic Hz/kHz unit selection.
    Frequency,

    /// Pitch interval in cents, 1 fraction digit (e.g., "700.0c").
    Interval,

    /// Maps values to arbitrary labels via an explicit value/label table.
    ///
    /// Pairs positionally with a stepped scale's value list. A value absent
    /// from the table renders with the [`Number`](Formatter::Number) rules
    /// rather than failing.
    Stepped {
        /// The value/label table, in display order.
        steps: Vec<(f64, String)>,
    },
}

impl Formatter {
    /// Convert a parameter value to its display string.
    ///
    /// Always succeeds: NaN renders as `"NaN"`, infinities as `"∞"` /
    /// `"-∞"`, and `-0.0` formats identically to `0.0`.
    pub fn text(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }
        // -0.0 == 0.0, so this drops the sign of negative zero only
        let value = if value == 0.0 { 0.0 } else { value };

        match self {
            Self::Number => number_style(value).render(value),

            Self::Integer => Style::fraction(0, "").render(value),

            Self::Percentage => Style::fraction(0, "%").multiplier(100.0).render(value),

            Self::Duration => duration_style(value).render(value),

            Self::Amplitude => {
                if value.abs() < 10.0 {
                    Style::fraction(1, "dB").render(value)
                } else {
                    Style::fraction(0, "dB").render(value)
                }
            }

            Self::Frequency => frequency_style(value).render(value),

            Self::Interval => Style::fraction(1, "c").render(value),

            Self::Stepped { steps } => steps
                .iter()
                .find(|(step, _)| *step == value)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| number_style(value).render(value)),
        }
    }
}

// =========================================================================
// Rendering styles
// =========================================================================

/// Digit-rounding mode for a [`Style`].
#[derive(Clone, Copy)]
enum Rounding {
    /// Fixed count of digits after the decimal point.
    Fraction,
    /// Fixed count of meaningful digits regardless of magnitude.
    Significant,
}

/// A resolved unit/precision choice: multiplier, digit count, rounding
/// mode, and suffix.
#[derive(Clone, Copy)]
struct Style {
    digits: usize,
    multiplier: f64,
    suffix: &'static str,
    rounding: Rounding,
}

impl Style {
    const fn fraction(digits: usize, suffix: &'static str) -> Self {
        Self {
            digits,
            multiplier: 1.0,
            suffix,
            rounding: Rounding::Fraction,
        }
    }

    const fn significant(digits: usize, suffix: &'static str) -> Self {
        Self {
            digits,
            multiplier: 1.0,
            suffix,
            rounding: Rounding::Significant,
        }
    }

    const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    fn render(&self, value: f64) -> String {
        let scaled = value * self.multiplier;
        match self.rounding {
            Rounding::Fraction => format!("{:.*}{}", self.digits, scaled, self.suffix),
            Rounding::Significant => {
                let rounded = round_significant(scaled, self.digits);
                let decimals = fraction_digits(rounded, self.digits);
                format!("{:.*}{}", decimals, rounded, self.suffix)
            }
        }
    }
}

/// Pick the number style: extra precision for small magnitudes.
fn number_style(value: f64) -> Style {
    let magnitude = value.abs();
    if (0.01..1.0).contains(&magnitude) {
        Style::fraction(2, "")
    } else {
        Style::fraction(1, "")
    }
}

/// Pick the duration unit band from the magnitude in seconds.
fn duration_style(value: f64) -> Style {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        Style::fraction(1, "s")
    } else if magnitude < 1e-5 {
        Style::fraction(1, "µs").multiplier(1e6)
    } else if magnitude < 1e-4 {
        Style::significant(2, "µs").multiplier(1e6)
    } else if magnitude < 0.1 {
        Style::significant(2, "ms").multiplier(1e3)
    } else if magnitude < 10.0 {
        Style::significant(2, "s")
    } else {
        Style::fraction(0, "s")
    }
}

/// Pick the frequency unit band from the magnitude in Hz.
fn frequency_style(value: f64) -> Style {
    let magnitude = value.abs();
    if magnitude < 1.0 {
        Style::fraction(1, "Hz")
    } else if magnitude < 100.0 {
        Style::significant(2, "Hz")
    } else if magnitude < 1000.0 {
        Style::significant(3, "Hz")
    } else {
        Style::significant(2, "kHz").multiplier(1e-3)
    }
}

/// Round `value` to `digits` significant digits.
fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || digits == 0 {
        return value;
    }
    let exponent = value.abs().log10().floor();
    let factor = 10f64.powf(digits as f64 - 1.0 - exponent);
    (value * factor).round() / factor
}

/// Fraction digits to display after significant-digit rounding.
///
/// Uses the digits left over after the integer part, but always at least
/// one so "20" renders as "20.0" rather than losing its precision cue.
fn fraction_digits(rounded: f64, digits: usize) -> usize {
    let magnitude = rounded.abs();
    let integer_digits = if magnitude < 1.0 {
        1
    } else {
        magnitude.log10().floor() as i64 + 1
    };
    (digits as i64 - integer_digits).max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_precision_bands() {
        assert_eq!(Formatter::Number.text(0.005), "0.0");
        assert_eq!(Formatter::Number.text(0.05), "0.05");
        assert_eq!(Formatter::Number.text(0.25), "0.25");
        assert_eq!(Formatter::Number.text(1.25), "1.2");
        assert_eq!(Formatter::Number.text(-0.25), "-0.25");
    }

    #[test]
    fn test_integer() {
        assert_eq!(Formatter::Integer.text(3.7), "4");
        assert_eq!(Formatter::Integer.text(-3.7), "-4");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(Formatter::Percentage.text(0.75), "75%");
        assert_eq!(Formatter::Percentage.text(0.0), "0%");
        assert_eq!(Formatter::Percentage.text(1.0), "100%");
        assert_eq!(Formatter::Percentage.text(-0.5), "-50%");
    }

    #[test]
    fn test_duration_bands() {
        assert_eq!(Formatter::Duration.text(0.0), "0.0s");
        // (0, 1e-5): fixed-digit µs
        assert_eq!(Formatter::Duration.text(0.000_005), "5.0µs");
        // 1e-5 enters the significant-digit µs band (inclusive lower edge)
        assert_eq!(Formatter::Duration.text(0.000_01), "10.0µs");
        // 1e-4 enters the ms band
        assert_eq!(Formatter::Duration.text(0.000_1), "0.1ms");
        assert_eq!(Formatter::Duration.text(0.025), "25.0ms");
        assert_eq!(Formatter::Duration.text(1.5), "1.5s");
        assert_eq!(Formatter::Duration.text(12.0), "12s");
    }

    #[test]
    fn test_amplitude() {
        assert_eq!(Formatter::Amplitude.text(-6.02), "-6.0dB");
        assert_eq!(Formatter::Amplitude.text(9.99), "10.0dB");
        assert_eq!(Formatter::Amplitude.text(12.0), "12dB");
    }

    #[test]
    fn test_frequency_bands() {
        assert_eq!(Formatter::Frequency.text(0.5), "0.5Hz");
        assert_eq!(Formatter::Frequency.text(20.0), "20.0Hz");
        assert_eq!(Formatter::Frequency.text(440.0), "440.0Hz");
        assert_eq!(Formatter::Frequency.text(1500.0), "1.5kHz");
        assert_eq!(Formatter::Frequency.text(20_000.0), "20.0kHz");
    }

    #[test]
    fn test_frequency_khz_boundary() {
        // band selection happens before rounding: 999.999 stays in the Hz
        // band and rounds up within it
        assert_eq!(Formatter::Frequency.text(999.999), "1000.0Hz");
        assert_eq!(Formatter::Frequency.text(1000.0), "1.0kHz");
    }

    #[test]
    fn test_interval() {
        assert_eq!(Formatter::Interval.text(700.0), "700.0c");
        assert_eq!(Formatter::Interval.text(-1.5), "-1.5c");
    }

    #[test]
    fn test_stepped_lookup_and_fallback() {
        let formatter = Formatter::Stepped {
            steps: vec![(1.0, "Sine".to_string()), (2.0, "Square".to_string())],
        };
        assert_eq!(formatter.text(1.0), "Sine");
        assert_eq!(formatter.text(2.0), "Square");
        // unmapped value falls back to plain number rules
        assert_eq!(formatter.text(3.0), "3.0");
    }

    #[test]
    fn test_negative_zero_formats_like_zero() {
        let formatters = [
            Formatter::Number,
            Formatter::Integer,
            Formatter::Percentage,
            Formatter::Duration,
            Formatter::Amplitude,
            Formatter::Frequency,
            Formatter::Interval,
            Formatter::Stepped {
                steps: vec![(0.0, "Off".to_string())],
            },
        ];
        for formatter in &formatters {
            assert_eq!(
                formatter.text(-0.0),
                formatter.text(0.0),
                "negative zero mismatch for {formatter:?}"
            );
        }
    }

    #[test]
    fn test_non_finite_sentinels() {
        assert_eq!(Formatter::Frequency.text(f64::NAN), "NaN");
        assert_eq!(Formatter::Duration.text(f64::INFINITY), "∞");
        assert_eq!(Formatter::Number.text(f64::NEG_INFINITY), "-∞");
    }
}
