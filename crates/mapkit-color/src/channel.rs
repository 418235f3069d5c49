//! Per-channel RGB operations on the 0-255 scale.
//!
//! These are the RGB-space stages of the edit pipeline:
//! - Brightness (exposure): pushes channels toward white or black
//! - Contrast: linear scaling around a midpoint
//! - Multiplication: ratio-blended multiply with a tint channel
//!
//! Every function has a `_single` form for one channel and an `_rgb` form
//! mapping it across an `[r, g, b]` triple.

/// RGB channel triple on the 0-255 scale.
pub type RgbArray = [f64; 3];

/// Maximum channel value.
pub const CHANNEL_MAX: f64 = 255.0;

/// Contrast intensity is bounded to this magnitude so the slope stays finite.
pub const MAX_CONTRAST_INTENSITY: f64 = 0.99;

/// Brightness for a single channel.
///
/// ```text
/// n   = c / 255
/// out = clamp((n + (1 - n) * n * amount) * 255, 0, 255)
/// ```
///
/// Positive `amount` lightens, negative darkens, zero is identity. Pure
/// black and pure white are fixed points.
#[inline]
pub fn apply_brightness_single(channel: f64, amount: f64) -> f64 {
    let normalized = channel / CHANNEL_MAX;
    let adjusted = normalized + (1.0 - normalized) * normalized * amount;
    (adjusted * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX)
}

/// Brightness applied to each channel of an RGB triple.
#[inline]
pub fn apply_brightness_rgb(rgb: RgbArray, amount: f64) -> RgbArray {
    rgb.map(|c| apply_brightness_single(c, amount))
}

/// Contrast for a single channel.
///
/// ```text
/// i     = clamp(intensity, -0.99, 0.99)
/// slope = i < 0 ? i + 1 : 1 / (1 - i)
/// out   = round(clamp(midpoint + slope * (c - midpoint), 0, 255))
/// ```
///
/// Negative intensities flatten toward the midpoint, positive ones steepen.
/// The result is always an integer value.
#[inline]
pub fn apply_contrast_single(channel: f64, intensity: f64, midpoint: f64) -> f64 {
    let bounded = intensity.clamp(-MAX_CONTRAST_INTENSITY, MAX_CONTRAST_INTENSITY);
    let steepness = if bounded < 0.0 {
        bounded + 1.0
    } else {
        1.0 / (1.0 - bounded)
    };
    let adjusted = midpoint + steepness * (channel - midpoint);
    round_half_up(adjusted.clamp(0.0, CHANNEL_MAX))
}

/// Contrast applied to each channel of an RGB triple.
#[inline]
pub fn apply_contrast_rgb(rgb: RgbArray, intensity: f64, midpoint: f64) -> RgbArray {
    rgb.map(|c| apply_contrast_single(c, intensity, midpoint))
}

/// Ratio-blended multiplication of two channels.
///
/// ```text
/// out = 255 * (a/255) * (b/255) * ratio + (a/255) * (1 - ratio) * 255
/// ```
///
/// `ratio = 0` returns `a`; `ratio = 1` is a plain multiply. No clamping is
/// done here, the caller recomposes the color and clamps there.
#[inline]
pub fn apply_multiplication_single(a: f64, b: f64, ratio: f64) -> f64 {
    let na = a / CHANNEL_MAX;
    let nb = b / CHANNEL_MAX;
    CHANNEL_MAX * na * nb * ratio + na * (1.0 - ratio) * CHANNEL_MAX
}

/// Multiplication paired index-for-index across two RGB triples.
#[inline]
pub fn apply_multiplication_rgb(rgb: RgbArray, tint: RgbArray, ratio: f64) -> RgbArray {
    [
        apply_multiplication_single(rgb[0], tint[0], ratio),
        apply_multiplication_single(rgb[1], tint[1], ratio),
        apply_multiplication_single(rgb[2], tint[2], ratio),
    ]
}

/// Rounds halves toward positive infinity.
///
/// `f64::round` rounds halves away from zero; the two only disagree on
/// negative halves, which matters for values that have not been clamped yet.
#[inline]
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn brightness_identity_at_zero() {
        for c in 0..=255 {
            let c = f64::from(c);
            assert_abs_diff_eq!(apply_brightness_single(c, 0.0), c, epsilon = 1e-9);
        }
    }

    #[test]
    fn brightness_direction() {
        assert!(apply_brightness_single(100.0, 0.5) > 100.0);
        assert!(apply_brightness_single(100.0, -0.5) < 100.0);
        // Extremes are fixed points
        assert_abs_diff_eq!(apply_brightness_single(0.0, 1.0), 0.0);
        assert_abs_diff_eq!(apply_brightness_single(255.0, -1.0), 255.0);
    }

    #[test]
    fn brightness_clamps_open_range() {
        assert_abs_diff_eq!(apply_brightness_single(128.0, 10.0), 255.0);
        assert_abs_diff_eq!(apply_brightness_single(128.0, -10.0), 0.0);
    }

    #[test]
    fn brightness_known_value() {
        // n = 0.5 -> 0.5 + 0.25 * 0.4 = 0.6
        let out = apply_brightness_single(127.5, 0.4);
        assert_abs_diff_eq!(out, 153.0, epsilon = 1e-9);
    }

    #[test]
    fn contrast_identity_at_zero() {
        for c in 0..=255 {
            let c = f64::from(c);
            assert_abs_diff_eq!(apply_contrast_single(c, 0.0, 90.0), c.round());
        }
        assert_abs_diff_eq!(apply_contrast_single(12.4, 0.0, 127.0), 12.0);
    }

    #[test]
    fn contrast_monotonic_and_bounded() {
        for intensity in [-0.99, -0.5, 0.1, 0.5, 0.9, 0.99, 5.0, -5.0] {
            let mut prev = -1.0;
            for c in 0..=255 {
                let out = apply_contrast_single(f64::from(c), intensity, 127.0);
                assert!((0.0..=255.0).contains(&out), "out of range: {out}");
                if intensity > 0.0 {
                    assert!(out >= prev, "not monotonic at {c} for {intensity}");
                }
                prev = out;
            }
        }
    }

    #[test]
    fn contrast_slopes() {
        // 0.5 -> slope 2
        assert_abs_diff_eq!(apply_contrast_single(137.0, 0.5, 127.0), 147.0);
        // -0.5 -> slope 0.5
        assert_abs_diff_eq!(apply_contrast_single(147.0, -0.5, 127.0), 137.0);
        // Midpoint is a fixed point
        assert_abs_diff_eq!(apply_contrast_single(200.0, 0.9, 200.0), 200.0);
    }

    #[test]
    fn contrast_intensity_is_bounded() {
        // 1.0 would divide by zero; it behaves like 0.99 (slope 100)
        let a = apply_contrast_single(128.0, 1.0, 127.0);
        let b = apply_contrast_single(128.0, 0.99, 127.0);
        assert_abs_diff_eq!(a, b);
        assert!(a.is_finite());
    }

    #[test]
    fn multiplication_neutral_cases() {
        for a in [0.0, 17.0, 128.0, 255.0] {
            assert_abs_diff_eq!(apply_multiplication_single(a, 40.0, 0.0), a, epsilon = 1e-9);
            assert_abs_diff_eq!(apply_multiplication_single(a, 255.0, 1.0), a, epsilon = 1e-9);
        }
    }

    #[test]
    fn multiplication_blend() {
        // Full multiply of mid-gray by mid-gray
        assert_abs_diff_eq!(apply_multiplication_single(127.5, 127.5, 1.0), 63.75, epsilon = 1e-9);
        // Black tint at half ratio halves the channel
        assert_abs_diff_eq!(apply_multiplication_single(200.0, 0.0, 0.5), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn rgb_forms_map_per_channel() {
        let rgb = [10.0, 128.0, 250.0];
        let out = apply_contrast_rgb(rgb, 0.5, 127.0);
        assert_eq!(out, [0.0, 129.0, 255.0]);

        let tinted = apply_multiplication_rgb([255.0, 255.0, 255.0], [255.0, 0.0, 51.0], 1.0);
        assert_abs_diff_eq!(tinted[0], 255.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tinted[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tinted[2], 51.0, epsilon = 1e-9);

        let bright = apply_brightness_rgb(rgb, 0.0);
        for (out, orig) in bright.iter().zip(rgb.iter()) {
            assert_abs_diff_eq!(*out, *orig, epsilon = 1e-9);
        }
    }

    #[test]
    fn round_half_up_matches_expectation() {
        assert_abs_diff_eq!(round_half_up(2.5), 3.0);
        assert_abs_diff_eq!(round_half_up(-2.5), -2.0);
        assert_abs_diff_eq!(round_half_up(2.49), 2.0);
    }
}
