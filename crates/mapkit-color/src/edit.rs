//! Color edit configuration and the per-color edit pipeline.
//!
//! A [`ColorEdit`] describes a global recoloring of a style. Every field is
//! optional and neutral when absent. [`ColorEdit::editor`] resolves it into a
//! [`ColorEditor`] that rewrites one color string at a time.
//!
//! # Stage order
//!
//! ```text
//! parse
//!   -> negate -> hue rotate -> saturate -> lighten/darken -> lightness shift -> mix
//!   -> split RGB + alpha
//!   -> exposure -> contrast -> multiply
//!   -> recompose -> serialize (format of the input)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mapkit_color::ColorEdit;
//!
//! let edit = ColorEdit::new().with_negate(true);
//! let editor = edit.editor().unwrap();
//! assert_eq!(editor.apply("#ff0000").unwrap(), "#00FFFFFF");
//! assert_eq!(editor.apply("rgb(255, 0, 0)").unwrap(), "rgb(0, 255, 255)");
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::channel::{
    apply_brightness_rgb, apply_contrast_rgb, apply_multiplication_rgb, RgbArray,
};
use crate::model::{ColorFormat, Rgba};
use crate::ColorResult;

/// Options to modify every color of a style.
///
/// Field names serialize in camelCase; the tuple fields are two-element
/// arrays, e.g. `"mixColor": ["#ff8800", 0.1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorEdit {
    /// Invert every channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    /// Lighten (positive) or darken (negative) relative to current lightness.
    /// Nominal [-1, 1], open range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    /// Absolute lightness shift as a fraction of 100. Nominal [-1, 1], open range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_shift: Option<f64>,
    /// RGB-space brightness. Nominal [-1, 1], open range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure: Option<f64>,
    /// Hue rotation in degrees. Nominal [-180, 180], open range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_rotation: Option<f64>,
    /// Relative saturation change. Nominal [-1, 1], open range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    /// Tint color and ratio in [0, 1] for a multiplicative blend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiply_color: Option<(String, f64)>,
    /// Target color and ratio in [0, 1] for a linear mix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix_color: Option<(String, f64)>,
    /// Contrast intensity (nominal [-1, 1]) and midpoint in [0, 255].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<(f64, f64)>,
}

impl ColorEdit {
    /// Creates an empty (neutral) edit.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets negation.
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = Some(negate);
        self
    }

    /// Sets relative brightness.
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the absolute lightness shift.
    pub fn with_brightness_shift(mut self, shift: f64) -> Self {
        self.brightness_shift = Some(shift);
        self
    }

    /// Sets RGB exposure.
    pub fn with_exposure(mut self, exposure: f64) -> Self {
        self.exposure = Some(exposure);
        self
    }

    /// Sets hue rotation in degrees.
    pub fn with_hue_rotation(mut self, degrees: f64) -> Self {
        self.hue_rotation = Some(degrees);
        self
    }

    /// Sets relative saturation.
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Sets the multiplicative tint.
    pub fn with_multiply_color(mut self, color: impl Into<String>, ratio: f64) -> Self {
        self.multiply_color = Some((color.into(), ratio));
        self
    }

    /// Sets the mix target.
    pub fn with_mix_color(mut self, color: impl Into<String>, ratio: f64) -> Self {
        self.mix_color = Some((color.into(), ratio));
        self
    }

    /// Sets contrast intensity and midpoint.
    pub fn with_contrast(mut self, intensity: f64, midpoint: f64) -> Self {
        self.contrast = Some((intensity, midpoint));
        self
    }

    /// Activation gate: `true` when any field would touch colors.
    ///
    /// Scalars count when non-zero, `negate` when true, and the tuple
    /// fields whenever present.
    pub fn is_active(&self) -> bool {
        let nonzero = |v: Option<f64>| v.is_some_and(|v| v != 0.0);

        nonzero(self.brightness)
            || nonzero(self.hue_rotation)
            || nonzero(self.saturation)
            || nonzero(self.brightness_shift)
            || nonzero(self.exposure)
            || self.negate == Some(true)
            || self.multiply_color.is_some()
            || self.mix_color.is_some()
            || self.contrast.is_some()
    }

    /// Check if this edit is a no-op.
    #[inline]
    pub fn is_identity(&self) -> bool {
        !self.is_active()
    }

    /// Resolves the edit into a reusable [`ColorEditor`].
    ///
    /// Target colors of the mix and multiply stages are parsed here, once.
    /// Stages with a zero ratio are dropped without parsing their color.
    pub fn editor(&self) -> ColorResult<ColorEditor> {
        let mix = match &self.mix_color {
            Some((color, ratio)) if *ratio != 0.0 => Some((Rgba::parse(color)?, *ratio)),
            _ => None,
        };
        let multiply = match &self.multiply_color {
            Some((color, ratio)) if *ratio != 0.0 => Some((Rgba::parse(color)?.channels(), *ratio)),
            _ => None,
        };
        let contrast = match self.contrast {
            Some((intensity, midpoint)) if intensity != 0.0 => Some((intensity, midpoint)),
            _ => None,
        };

        Ok(ColorEditor {
            negate: self.negate.unwrap_or(false),
            hue_rotation: self.hue_rotation.unwrap_or(0.0),
            saturation: self.saturation.unwrap_or(0.0),
            brightness: self.brightness.unwrap_or(0.0),
            brightness_shift: self.brightness_shift.unwrap_or(0.0),
            mix,
            exposure: self.exposure.unwrap_or(0.0),
            contrast,
            multiply,
        })
    }
}

/// A [`ColorEdit`] with defaults applied and target colors parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEditor {
    negate: bool,
    hue_rotation: f64,
    saturation: f64,
    brightness: f64,
    brightness_shift: f64,
    mix: Option<(Rgba, f64)>,
    exposure: f64,
    contrast: Option<(f64, f64)>,
    multiply: Option<(RgbArray, f64)>,
}

impl ColorEditor {
    /// Runs the perceptual and RGB stages on a parsed color.
    pub fn apply_rgba(&self, color: Rgba) -> Rgba {
        let mut color = color;

        if self.negate {
            color = color.negate();
        }

        if self.hue_rotation != 0.0 {
            color = color.to_hsla().rotate(self.hue_rotation).to_rgba();
        }

        if self.saturation != 0.0 {
            color = color.to_hsla().saturate(self.saturation).to_rgba();
        }

        if self.brightness > 0.0 {
            color = color.to_hsla().lighten(self.brightness).to_rgba();
        } else if self.brightness < 0.0 {
            color = color.to_hsla().darken(-self.brightness).to_rgba();
        }

        if self.brightness_shift != 0.0 {
            color = color.to_hsla().shift_lightness(self.brightness_shift * 100.0).to_rgba();
        }

        if let Some((target, ratio)) = self.mix {
            color = color.mix(target, ratio);
        }

        let alpha = color.a;
        let mut rgb = color.channels();

        if self.exposure != 0.0 {
            rgb = apply_brightness_rgb(rgb, self.exposure);
        }

        if let Some((intensity, midpoint)) = self.contrast {
            rgb = apply_contrast_rgb(rgb, intensity, midpoint);
        }

        if let Some((tint, ratio)) = self.multiply {
            rgb = apply_multiplication_rgb(rgb, tint, ratio);
        }

        Rgba::from_channels(rgb, alpha)
    }

    /// Rewrites one color string, keeping its RGB or HSL notation.
    pub fn apply(&self, original: &str) -> ColorResult<String> {
        let edited = self.apply_rgba(Rgba::parse(original)?);
        let out = edited.format(ColorFormat::of(original));
        trace!(original, edited = %out, "color edited");
        Ok(out)
    }
}

/// Edits a single color string with `edit`.
///
/// Convenience for one-off use; resolve a [`ColorEditor`] once when
/// editing many colors.
pub fn edit_color(original: &str, edit: &ColorEdit) -> ColorResult<String> {
    edit.editor()?.apply(original)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rgb_of(s: &str) -> [f64; 3] {
        Rgba::parse(s).unwrap().channels()
    }

    #[test]
    fn gate_closed_by_default() {
        assert!(!ColorEdit::new().is_active());
        assert!(ColorEdit::new().is_identity());

        let neutral = ColorEdit::new()
            .with_negate(false)
            .with_brightness(0.0)
            .with_hue_rotation(0.0)
            .with_saturation(0.0)
            .with_exposure(0.0)
            .with_brightness_shift(0.0);
        assert!(!neutral.is_active());
    }

    #[test]
    fn gate_opens_on_presence_of_tuples() {
        assert!(ColorEdit::new().with_contrast(0.0, 127.0).is_active());
        assert!(ColorEdit::new().with_mix_color("#000", 0.0).is_active());
        assert!(ColorEdit::new().with_multiply_color("#000", 0.0).is_active());
        assert!(ColorEdit::new().with_negate(true).is_active());
        assert!(ColorEdit::new().with_exposure(-0.1).is_active());
    }

    #[test]
    fn negate_red_is_cyan() {
        let edit = ColorEdit::new().with_negate(true);
        assert_eq!(edit_color("#ff0000", &edit).unwrap(), "#00FFFFFF");
        assert_eq!(edit_color("rgb(255, 0, 0)", &edit).unwrap(), "rgb(0, 255, 255)");
        assert_eq!(edit_color("hsl(0, 100%, 50%)", &edit).unwrap(), "hsl(180, 100%, 50%)");
    }

    #[test]
    fn neutral_editor_keeps_channels() {
        let editor = ColorEdit::new().with_contrast(0.0, 127.0).editor().unwrap();
        let out = editor.apply("rgb(10,20,30)").unwrap();
        assert_eq!(out, "rgb(10, 20, 30)");
        assert_eq!(rgb_of(&out), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn alpha_survives_pipeline() {
        let edit = ColorEdit::new().with_exposure(0.5).with_hue_rotation(30.0);
        let out = edit_color("rgba(100, 50, 20, 0.4)", &edit).unwrap();
        assert!(out.starts_with("rgba("), "{out}");
        assert!(out.ends_with(", 0.4)"), "{out}");
    }

    #[test]
    fn hue_rotation_moves_primaries() {
        let edit = ColorEdit::new().with_hue_rotation(120.0);
        assert_eq!(edit_color("#ff0000", &edit).unwrap(), "#00FF00FF");
        let edit = ColorEdit::new().with_hue_rotation(-120.0);
        assert_eq!(edit_color("#ff0000", &edit).unwrap(), "#0000FFFF");
    }

    #[test]
    fn full_desaturation_is_gray() {
        let edit = ColorEdit::new().with_saturation(-1.0);
        let [r, g, b] = rgb_of(&edit_color("#3366cc", &edit).unwrap());
        assert_abs_diff_eq!(r, g);
        assert_abs_diff_eq!(g, b);
    }

    #[test]
    fn brightness_sign_selects_direction() {
        let base = Rgba::parse("#336699").unwrap().to_hsla().l;
        let lighter = edit_color("#336699", &ColorEdit::new().with_brightness(0.3)).unwrap();
        let darker = edit_color("#336699", &ColorEdit::new().with_brightness(-0.3)).unwrap();
        assert!(Rgba::parse(&lighter).unwrap().to_hsla().l > base);
        assert!(Rgba::parse(&darker).unwrap().to_hsla().l < base);
    }

    #[test]
    fn brightness_shift_adds_lightness() {
        let edit = ColorEdit::new().with_brightness_shift(0.25);
        let out = edit_color("hsl(200, 40%, 30%)", &edit).unwrap();
        assert_eq!(out, "hsl(200, 40%, 55%)");
    }

    #[test]
    fn exposure_then_contrast_then_multiply() {
        let editor = ColorEdit::new()
            .with_exposure(0.4)
            .with_contrast(0.5, 127.0)
            .with_multiply_color("#ffffff", 1.0)
            .editor()
            .unwrap();
        let out = editor.apply_rgba(Rgba::new(127.5, 127.5, 127.5, 1.0));
        // exposure: 153, contrast slope 2: 127 + 2 * 26 = 179, white multiply: identity
        assert_abs_diff_eq!(out.r, 179.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_ratio_stages_skip_parsing() {
        let edit = ColorEdit::new().with_mix_color("not-a-color", 0.0);
        assert!(edit.editor().is_ok());
        let edit = ColorEdit::new().with_mix_color("not-a-color", 0.5);
        assert!(edit.editor().is_err());
    }

    #[test]
    fn mix_toward_target() {
        let edit = ColorEdit::new().with_mix_color("#ffffff", 0.5);
        assert_eq!(edit_color("#000000", &edit).unwrap(), "#808080FF");
    }

    #[test]
    fn multiply_black_tint() {
        let edit = ColorEdit::new().with_multiply_color("#000000", 1.0);
        assert_eq!(edit_color("rgb(200, 100, 50)", &edit).unwrap(), "rgb(0, 0, 0)");
    }

    #[test]
    fn hwb_normalizes_to_hex() {
        let edit = ColorEdit::new().with_negate(true);
        assert_eq!(edit_color("hwb(0 0% 0%)", &edit).unwrap(), "#00FFFFFF");
    }

    #[test]
    fn malformed_color_is_an_error() {
        let edit = ColorEdit::new().with_negate(true);
        let err = edit_color("#12345", &edit).unwrap_err();
        assert_eq!(err.value(), "#12345");
    }

    #[test]
    fn deserializes_camel_case_blob() {
        let json = r##"{
            "negate": false,
            "brightness": 0,
            "brightnessShift": 0.3,
            "exposure": -0.2,
            "contrast": [0.4, 220],
            "hueRotation": -8,
            "saturation": -0.1,
            "multiplyColor": ["#ff0000", 0],
            "mixColor": ["#ff0000", 0.02]
        }"##;
        let edit: ColorEdit = serde_json::from_str(json).unwrap();
        assert_eq!(edit.brightness_shift, Some(0.3));
        assert_eq!(edit.hue_rotation, Some(-8.0));
        assert_eq!(edit.contrast, Some((0.4, 220.0)));
        assert_eq!(edit.mix_color, Some(("#ff0000".to_string(), 0.02)));
        assert!(edit.is_active());

        let empty: ColorEdit = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ColorEdit::default());
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }

}
