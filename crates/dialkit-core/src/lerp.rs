//! Linear interpolation helpers.
//!
//! The historical control code mixed single- and double-precision math
//! between revisions; every conversion in this crate goes through these two
//! `f64` functions so the whole ratio/value pipeline is computed at one
//! precision.

/// Linearly interpolate `t` onto the range `min..=max`.
///
/// `t` is typically a ratio in `0.0..=1.0`, but no clamping happens here;
/// callers clamp before interpolating when they need bounded output.
/// `min` may exceed `max`, which inverts the direction of the mapping.
#[inline]
pub fn lerp(t: f64, min: f64, max: f64) -> f64 {
    min + t * (max - min)
}

/// Map `value` in the range `min..=max` back onto `0.0..=1.0`.
///
/// The inverse of [`lerp`]. A degenerate range (`min == max`) returns `0.0`
/// rather than dividing by zero.
#[inline]
pub fn inverse_lerp(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        0.0
    } else {
        (value - min) / (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 2.0, 4.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 4.0), 4.0);
        assert_eq!(lerp(0.5, 2.0, 4.0), 3.0);
    }

    #[test]
    fn test_lerp_inverted_range() {
        // minimum above maximum inverts the direction
        assert_eq!(lerp(0.0, 4.0, 2.0), 4.0);
        assert_eq!(lerp(1.0, 4.0, 2.0), 2.0);
    }

    #[test]
    fn test_inverse_lerp_round_trip() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let v = lerp(t, -3.0, 7.0);
            assert!((inverse_lerp(v, -3.0, 7.0) - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverse_lerp_degenerate_range() {
        assert_eq!(inverse_lerp(5.0, 5.0, 5.0), 0.0);
    }
}
