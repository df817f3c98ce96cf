//! Framework-independent control adapter.
//!
//! [`ParameterControl`] is the seam between a toolkit's view layer and this
//! crate's conversion core. The view owns the touch geometry (polar for a
//! dial, rectilinear for a slider) and reduces each touch location to a
//! ratio in `0.0..=1.0`; the control turns that ratio into a value, keeps
//! it, and answers the two questions a redraw needs: where is the fill
//! indicator ([`ratio`](ParameterControl::ratio)) and what does the value
//! label say ([`display`](ParameterControl::display)).
//!
//! ```text
//! touch event → view geometry → ratio → set_ratio() → value
//!                                          ↓
//!                              ratio() ← Scale.ratio_for_value
//!                              display() ← Formatter.text
//! ```

use crate::config::ControlConfig;
use crate::error::Result;
use crate::parameter_format::Formatter;
use crate::parameter_scale::Scale;

/// Owns one resolved [`Scale`]/[`Formatter`] pair and the current value.
///
/// Both are resolved once at construction, so no string dispatch happens on
/// the touch-move path. Reconfiguration replaces them wholesale; they are
/// never mutated in place.
///
/// # Example
///
/// ```
/// use dialkit_core::{ControlConfig, ParameterControl};
///
/// let config = ControlConfig {
///     scale_type: "linear".to_string(),
///     scale_min: 20.0,
///     scale_max: 20000.0,
///     formatter_type: "frequency".to_string(),
///     ..ControlConfig::default()
/// };
/// let mut control = ParameterControl::new(&config).unwrap();
///
/// control.set_ratio(1.0);
/// assert_eq!(control.value(), 20000.0);
/// assert_eq!(control.display(), "20.0kHz");
/// ```
pub struct ParameterControl {
    scale: Scale,
    formatter: Formatter,
    value: f64,
    on_change: Option<Box<dyn Fn(f64) + Send>>,
}

impl ParameterControl {
    /// Create a control from a configuration.
    ///
    /// Resolves the scale and formatter kinds up front; an invalid
    /// configuration fails here, never on a later conversion call. The
    /// initial value is the scale's value at ratio `0.0`.
    pub fn new(config: &ControlConfig) -> Result<Self> {
        let scale = config.scale()?;
        let formatter = config.formatter()?;
        let value = scale.value_for_ratio(0.0);
        Ok(Self {
            scale,
            formatter,
            value,
            on_change: None,
        })
    }

    /// Attach a value-changed observer.
    ///
    /// Fired on every [`set_ratio`](Self::set_ratio) and
    /// [`set_value`](Self::set_value) call.
    pub fn with_on_change(mut self, callback: impl Fn(f64) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Touch path: convert a ratio from view geometry into the new value.
    ///
    /// Out-of-range ratios clamp. Returns the new value.
    pub fn set_ratio(&mut self, ratio: f64) -> f64 {
        self.value = self.scale.value_for_ratio(ratio);
        self.notify();
        self.value
    }

    /// Programmatic assignment, bypassing the scale's forward mapping.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.notify();
    }

    /// The current parameter value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Fill/indicator position for the current value, in `0.0..=1.0`.
    ///
    /// Derived from the value via the scale's inverse mapping, so it is
    /// correct after programmatic assignment too, independent of touch
    /// input.
    pub fn ratio(&self) -> f64 {
        self.scale.ratio_for_value(self.value)
    }

    /// Display text for the current value.
    pub fn display(&self) -> String {
        self.formatter.text(self.value)
    }

    /// The resolved scale.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// The resolved formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Replace the scale and formatter from a new configuration.
    ///
    /// The current value is retained and passed once through the new
    /// scale's round trip, which clamps it into the new range (and snaps
    /// it for integer/stepped scales).
    pub fn reconfigure(&mut self, config: &ControlConfig) -> Result<()> {
        let scale = config.scale()?;
        let formatter = config.formatter()?;
        self.scale = scale;
        self.formatter = formatter;
        self.value = self.scale.value_for_ratio(self.scale.ratio_for_value(self.value));
        log::debug!(
            "reconfigured control {:?}: value now {}",
            config.title,
            self.value
        );
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_change {
            callback(self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn frequency_config() -> ControlConfig {
        ControlConfig {
            title: "Cutoff".to_string(),
            scale_type: "linear".to_string(),
            scale_min: 20.0,
            scale_max: 20_000.0,
            formatter_type: "frequency".to_string(),
            ..ControlConfig::default()
        }
    }

    #[test]
    fn test_touch_path_updates_value_and_display() {
        let mut control = ParameterControl::new(&frequency_config()).unwrap();
        assert_eq!(control.value(), 20.0);
        assert_eq!(control.display(), "20.0Hz");

        control.set_ratio(1.0);
        assert_eq!(control.value(), 20_000.0);
        assert_eq!(control.display(), "20.0kHz");
    }

    #[test]
    fn test_ratio_tracks_programmatic_assignment() {
        let mut control = ParameterControl::new(&frequency_config()).unwrap();
        control.set_value(10_010.0);
        assert!((control.ratio() - 0.5).abs() < 1e-9);

        // out-of-range values pin the indicator
        control.set_value(30_000.0);
        assert_eq!(control.ratio(), 1.0);
    }

    #[test]
    fn test_on_change_fires() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut control = ParameterControl::new(&frequency_config())
            .unwrap()
            .with_on_change(move |value| sink.lock().unwrap().push(value));

        control.set_ratio(0.0);
        control.set_value(440.0);
        assert_eq!(*seen.lock().unwrap(), vec![20.0, 440.0]);
    }

    #[test]
    fn test_reconfigure_replaces_scale_and_reclamps() {
        let mut control = ParameterControl::new(&frequency_config()).unwrap();
        control.set_value(15_000.0);

        let narrower = ControlConfig {
            scale_max: 1_000.0,
            ..frequency_config()
        };
        control.reconfigure(&narrower).unwrap();
        assert_eq!(control.value(), 1_000.0);
        assert_eq!(control.display(), "1.0kHz");
    }

    #[test]
    fn test_reconfigure_to_stepped_snaps_value() {
        let mut control = ParameterControl::new(&frequency_config()).unwrap();
        control.set_value(440.0);

        let stepped = ControlConfig {
            scale_type: "stepped".to_string(),
            scale_steps: "110, 220, 440, 880".to_string(),
            formatter_type: "stepped".to_string(),
            formatter_steps: "A2, A3, A4, A5".to_string(),
            ..ControlConfig::default()
        };
        control.reconfigure(&stepped).unwrap();
        assert_eq!(control.value(), 440.0);
        assert_eq!(control.display(), "A4");
    }

    #[test]
    fn test_invalid_configuration_fails_at_construction() {
        let config = ControlConfig {
            scale_type: "logarithmic".to_string(),
            scale_min: -1.0,
            scale_max: 1.0,
            ..ControlConfig::default()
        };
        assert!(ParameterControl::new(&config).is_err());
    }
}
