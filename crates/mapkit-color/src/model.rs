//! Color model: RGBA and HSLA values, parsing and serialization.
//!
//! Parsing accepts any CSS color string (hex, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()`, `hwb()`, named colors) and yields an [`Rgba`] with
//! channels on the 0-255 scale and alpha in [0, 1].
//!
//! Constructors clamp: RGB channels to [0, 255], saturation and lightness
//! to [0, 100], alpha to [0, 1]. Hue is kept as given.
//!
//! # Serialization
//!
//! | Format | Output |
//! |--------|--------|
//! | [`ColorFormat::Rgb`] | `rgb(r, g, b)` or `rgba(r, g, b, a)` |
//! | [`ColorFormat::Hsl`] | `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)` |
//! | [`ColorFormat::Hex`] | `#RRGGBBAA` |

use std::fmt;
use std::str::FromStr;

use crate::channel::{round_half_up, RgbArray, CHANNEL_MAX};
use crate::{ColorError, ColorResult};

/// Textual prefixes that mark a string as a color description.
pub const COLOR_PREFIXES: [&str; 5] = ["#", "rgb(", "rgba(", "hsl(", "hwb("];

/// Decimal places kept from parsed channels. The parser works in `f32`,
/// this strips the conversion noise.
const CHANNEL_PLACES: i32 = 3;
const ALPHA_PLACES: i32 = 4;

/// Returns `true` when `value` starts with one of [`COLOR_PREFIXES`].
#[inline]
pub fn is_color_description(value: &str) -> bool {
    COLOR_PREFIXES.iter().any(|p| value.starts_with(p))
}

/// Serialization format of a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// Functional `rgb()` / `rgba()`.
    Rgb,
    /// Functional `hsl()` / `hsla()`.
    Hsl,
    /// Hexadecimal with alpha.
    #[default]
    Hex,
}

impl ColorFormat {
    /// Picks the output format matching an input string.
    ///
    /// Only RGB and HSL functional forms are preserved; everything else
    /// (hex, `hwb()`, names) maps to [`ColorFormat::Hex`].
    pub fn of(original: &str) -> Self {
        if original.starts_with("rgb(") || original.starts_with("rgba(") {
            Self::Rgb
        } else if original.starts_with("hsl(") || original.starts_with("hsla(") {
            Self::Hsl
        } else {
            Self::Hex
        }
    }
}

/// RGBA color, channels on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red, [0, 255].
    pub r: f64,
    /// Green, [0, 255].
    pub g: f64,
    /// Blue, [0, 255].
    pub b: f64,
    /// Alpha, [0, 1].
    pub a: f64,
}

impl Rgba {
    /// Creates a color, clamping every component to its range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, CHANNEL_MAX),
            g: g.clamp(0.0, CHANNEL_MAX),
            b: b.clamp(0.0, CHANNEL_MAX),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from an RGB triple and a separate alpha.
    #[inline]
    pub fn from_channels(rgb: RgbArray, alpha: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], alpha)
    }

    /// Parses any CSS color string.
    pub fn parse(value: &str) -> ColorResult<Self> {
        let parsed = csscolorparser::parse(value).map_err(|e| ColorError::parse(value, e.to_string()))?;
        Ok(Self::new(
            round_to(f64::from(parsed.r) * CHANNEL_MAX, CHANNEL_PLACES),
            round_to(f64::from(parsed.g) * CHANNEL_MAX, CHANNEL_PLACES),
            round_to(f64::from(parsed.b) * CHANNEL_MAX, CHANNEL_PLACES),
            round_to(f64::from(parsed.a), ALPHA_PLACES),
        ))
    }

    /// RGB triple without alpha.
    #[inline]
    pub fn channels(&self) -> RgbArray {
        [self.r, self.g, self.b]
    }

    /// Inverts each channel, alpha is kept.
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(CHANNEL_MAX - self.r, CHANNEL_MAX - self.g, CHANNEL_MAX - self.b, self.a)
    }

    /// Linear mix toward `mixin` by `weight` in [0, 1].
    ///
    /// Channel weights account for the alpha difference between the two
    /// colors; alpha itself is interpolated linearly.
    pub fn mix(self, mixin: Rgba, weight: f64) -> Self {
        let w = 2.0 * weight - 1.0;
        let alpha_delta = mixin.a - self.a;
        let w_mixin = if w * alpha_delta == -1.0 {
            (w + 1.0) / 2.0
        } else {
            ((w + alpha_delta) / (1.0 + w * alpha_delta) + 1.0) / 2.0
        };
        let w_self = 1.0 - w_mixin;

        Self::new(
            w_mixin * mixin.r + w_self * self.r,
            w_mixin * mixin.g + w_self * self.g,
            w_mixin * mixin.b + w_self * self.b,
            mixin.a * weight + self.a * (1.0 - weight),
        )
    }

    /// Converts to HSLA.
    pub fn to_hsla(self) -> Hsla {
        let r = self.r / CHANNEL_MAX;
        let g = self.g / CHANNEL_MAX;
        let b = self.b / CHANNEL_MAX;
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        let mut h = if delta == 0.0 {
            0.0
        } else if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        h = (h * 60.0).min(360.0);
        if h < 0.0 {
            h += 360.0;
        }

        let l = (min + max) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Hsla::new(h, s * 100.0, l * 100.0, self.a)
    }

    /// Serializes as `rgb(...)`, or `rgba(...)` when not opaque.
    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = self.channels().map(|c| round_half_up(round_to(c, 1)));
        if self.a == 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.a)
        }
    }

    /// Serializes as `hsl(...)`, or `hsla(...)` when not opaque.
    pub fn to_hsl_string(&self) -> String {
        let hsla = self.to_hsla();
        let h = round_to(hsla.h, 1) % 360.0;
        let s = round_to(hsla.s, 1);
        let l = round_to(hsla.l, 1);
        if self.a == 1.0 {
            format!("hsl({h}, {s}%, {l}%)")
        } else {
            format!("hsla({h}, {s}%, {l}%, {})", self.a)
        }
    }

    /// Serializes as uppercase `#RRGGBBAA`.
    pub fn to_hexa(&self) -> String {
        let [r, g, b] = self.channels().map(to_byte);
        let a = to_byte(self.a * CHANNEL_MAX);
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// Serializes in the given format.
    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Rgb => self.to_rgb_string(),
            ColorFormat::Hsl => self.to_hsl_string(),
            ColorFormat::Hex => self.to_hexa(),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hexa())
    }
}

/// HSLA color: hue in degrees, saturation and lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation, [0, 100].
    pub s: f64,
    /// Lightness, [0, 100].
    pub l: f64,
    /// Alpha, [0, 1].
    pub a: f64,
}

impl Hsla {
    /// Creates a color, clamping saturation, lightness and alpha.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h,
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Rotates the hue, wrapping into [0, 360).
    pub fn rotate(self, degrees: f64) -> Self {
        let mut h = (self.h + degrees) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        Self::new(h, self.s, self.l, self.a)
    }

    /// Scales saturation by `1 + ratio`.
    #[inline]
    pub fn saturate(self, ratio: f64) -> Self {
        Self::new(self.h, self.s + self.s * ratio, self.l, self.a)
    }

    /// Scales lightness by `1 + ratio`.
    #[inline]
    pub fn lighten(self, ratio: f64) -> Self {
        Self::new(self.h, self.s, self.l + self.l * ratio, self.a)
    }

    /// Scales lightness by `1 - ratio`.
    #[inline]
    pub fn darken(self, ratio: f64) -> Self {
        Self::new(self.h, self.s, self.l - self.l * ratio, self.a)
    }

    /// Adds `amount` (0-100 scale) to lightness.
    #[inline]
    pub fn shift_lightness(self, amount: f64) -> Self {
        Self::new(self.h, self.s, self.l + amount, self.a)
    }

    /// Converts to RGBA.
    pub fn to_rgba(self) -> Rgba {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let v = l * CHANNEL_MAX;
            return Rgba::new(v, v, v, self.a);
        }

        let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let t1 = 2.0 * l - t2;

        let mut rgb = [0.0; 3];
        for (i, out) in rgb.iter_mut().enumerate() {
            let mut t3 = h - (i as f64 - 1.0) / 3.0;
            if t3 < 0.0 {
                t3 += 1.0;
            }
            if t3 > 1.0 {
                t3 -= 1.0;
            }

            let v = if 6.0 * t3 < 1.0 {
                t1 + (t2 - t1) * 6.0 * t3
            } else if 2.0 * t3 < 1.0 {
                t2
            } else if 3.0 * t3 < 2.0 {
                t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
            } else {
                t1
            };
            *out = v * CHANNEL_MAX;
        }

        Rgba::from_channels(rgb, self.a)
    }
}

/// Rounds to `places` decimals, folding `-0.0` into `0.0`.
#[inline]
fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor + 0.0
}

#[inline]
fn to_byte(v: f64) -> u8 {
    round_half_up(v).clamp(0.0, CHANNEL_MAX) as u8
}
