//! Bundled base styles and presets.
//!
//! Four base styles ship with the crate:
//! - `avenue` - colorful street map
//! - `bureau` - neutral gray
//! - `journal` - muted paper tones
//! - `spectre` - dark with neon green lines
//!
//! Every preset recolors one of them.

use mapkit_color::ColorEdit;

use crate::registry::{Preset, StyleRegistry};

/// Base style templates, in listing order.
pub const BASE_STYLES: [(&str, &str); 4] = [
    ("avenue", include_str!("../assets/avenue.json")),
    ("bureau", include_str!("../assets/bureau.json")),
    ("journal", include_str!("../assets/journal.json")),
    ("spectre", include_str!("../assets/spectre.json")),
];

/// Registry holding the bundled base styles and presets.
pub fn registry() -> StyleRegistry {
    let mut registry = StyleRegistry::new();
    for (name, template) in BASE_STYLES {
        registry.add_base_style(name, template);
    }
    for (name, preset) in presets() {
        // Bases are registered above; `preset_count` checks none is rejected
        if let Err(err) = registry.add_preset(name, preset) {
            tracing::error!(%err, "bundled preset rejected");
        }
    }
    registry
}

/// Bundled presets as (name, preset) pairs.
pub fn presets() -> Vec<(&'static str, Preset)> {
    let mut list = Vec::with_capacity(39);
    list.extend(avenue_presets());
    list.extend(bureau_presets());
    list.extend(journal_presets());
    list.extend(spectre_presets());
    list
}

// ============================================================================
// Avenue
// ============================================================================

fn avenue_presets() -> Vec<(&'static str, Preset)> {
    let base = "avenue";
    vec![
        (
            "avenue-pop",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_negate(false)
                    .with_brightness(0.0)
                    .with_brightness_shift(0.0)
                    .with_exposure(0.0)
                    .with_contrast(0.4, 220.0)
                    .with_hue_rotation(-8.0)
                    .with_saturation(-0.1)
                    .with_multiply_color("#ff0000", 0.0)
                    .with_mix_color("#ff0000", 0.02),
            ),
        ),
        (
            "avenue-saturated",
            Preset::new(base, ColorEdit::new().with_exposure(-1.0).with_saturation(0.1)),
        ),
        (
            "avenue-night",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_brightness(-0.3)
                    .with_saturation(-0.8)
                    .with_multiply_color("#171075", 0.6)
                    .with_contrast(0.8, 160.0),
            ),
        ),
        (
            "avenue-bright",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_exposure(0.6)
                    .with_saturation(-0.25)
                    .with_hue_rotation(15.0)
                    .with_contrast(0.4, 220.0),
            ),
        ),
        (
            "avenue-bnw",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_exposure(-1.0)
                    .with_saturation(-1.0)
                    .with_contrast(0.6, 160.0),
            ),
        ),
        (
            "avenue-blueprint",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_exposure(-0.7)
                    .with_saturation(-1.0)
                    .with_contrast(0.75, 160.0)
                    .with_mix_color("#3355bb", 0.15),
            ),
        ),
        (
            "avenue-warm",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_exposure(-0.7)
                    .with_mix_color("#ff8800", 0.1)
                    .with_contrast(0.1, 200.0),
            ),
        ),
        (
            "avenue-vintage",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_exposure(-0.25)
                    .with_multiply_color("#ff8800", 0.4)
                    .with_hue_rotation(-5.0)
                    .with_contrast(0.2, 200.0),
            ),
        ),
    ]
}

// ============================================================================
// Bureau
// ============================================================================

fn bureau_presets() -> Vec<(&'static str, Preset)> {
    let base = "bureau";
    vec![
        (
            "bureau-negative",
            Preset::new(base, ColorEdit::new().with_negate(true).with_hue_rotation(180.0)),
        ),
        ("bureau-bnw", Preset::new(base, ColorEdit::new().with_saturation(-1.0))),
        (
            "bureau-purple",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_negate(false)
                    .with_brightness(-0.2)
                    .with_hue_rotation(40.0)
                    .with_saturation(-0.4),
            ),
        ),
        (
            "bureau-bnw-negative",
            Preset::new(base, ColorEdit::new().with_negate(true).with_saturation(-1.0)),
        ),
        (
            "bureau-bnw-dark",
            Preset::new(base, ColorEdit::new().with_brightness(-0.6).with_saturation(-1.0)),
        ),
        (
            "bureau-bnw-bright",
            Preset::new(base, ColorEdit::new().with_brightness_shift(0.3).with_saturation(-1.0)),
        ),
        (
            "bureau-bnw-negative-bright",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_brightness_shift(0.35)
                    .with_exposure(0.8)
                    .with_saturation(-1.0)
                    .with_negate(true)
                    .with_contrast(0.5, 245.0),
            ),
        ),
        (
            "bureau-bnw-negative-dark",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_brightness_shift(-0.2)
                    .with_brightness(-0.3)
                    .with_saturation(-1.0)
                    .with_negate(true),
            ),
        ),
        ("bureau-sand", Preset::new(base, tinted_gray("#ffeeab", false))),
        ("bureau-sand-negative", Preset::new(base, tinted_gray("#ffeeab", true))),
        ("bureau-ivory", Preset::new(base, tinted_gray("#f0e9d1", false))),
        (
            "bureau-ivory-negative",
            Preset::new(base, deep_blue().with_negate(true)),
        ),
        ("bureau-navy", Preset::new(base, deep_blue())),
    ]
}

/// Gray, brightened, then tinted by both multiply and mix.
fn tinted_gray(tint: &str, negate: bool) -> ColorEdit {
    ColorEdit::new()
        .with_brightness_shift(0.2)
        .with_exposure(0.2)
        .with_saturation(-1.0)
        .with_negate(negate)
        .with_multiply_color(tint, 0.45)
        .with_mix_color(tint, 0.1)
}

fn deep_blue() -> ColorEdit {
    ColorEdit::new()
        .with_brightness_shift(-0.4)
        .with_exposure(-0.2)
        .with_saturation(1.0)
        .with_contrast(0.5, 50.0)
}

// ============================================================================
// Journal
// ============================================================================

fn journal_presets() -> Vec<(&'static str, Preset)> {
    let base = "journal";
    vec![
        (
            "journal-night",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_brightness_shift(-0.15)
                    .with_exposure(-2.0)
                    .with_saturation(-0.6)
                    .with_multiply_color("#4444ff", 0.2),
            ),
        ),
        (
            "journal-teal",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_brightness_shift(0.02)
                    .with_exposure(-1.2)
                    .with_hue_rotation(-5.0)
                    .with_saturation(-0.35)
                    .with_multiply_color("#ff9900", 0.05),
            ),
        ),
        (
            "journal-vintage",
            Preset::new(
                base,
                ColorEdit::new()
                    .with_brightness(0.02)
                    .with_brightness_shift(0.03)
                    .with_exposure(-1.4)
                    .with_saturation(-0.3)
                    .with_contrast(0.2, 180.0)
                    .with_multiply_color("#ffc963", 0.25)
                    .with_mix_color("#ffc963", 0.08),
            ),
        ),
    ]
}

// ============================================================================
// Spectre
// ============================================================================

fn spectre_presets() -> Vec<(&'static str, Preset)> {
    // (name, negate, hue rotation, saturation)
    const HUES: [(&str, bool, f64, f64); 15] = [
        ("spectre-mild-green", false, 0.0, -0.2),
        ("spectre-red", false, -120.0, -0.3),
        ("spectre-blue", false, 90.0, 0.0),
        ("spectre-purple", false, 150.0, -0.3),
        ("spectre-pink", false, 190.0, -0.2),
        ("spectre-orange", false, 260.0, 0.0),
        ("spectre-yellow", false, 290.0, 0.1),
        ("spectre-reverse", true, 180.0, 0.0),
        ("spectre-reverse-mild-green", true, 180.0, -0.2),
        ("spectre-reverse-red", true, 60.0, -0.3),
        ("spectre-reverse-blue", true, 270.0, 0.0),
        ("spectre-reverse-purple", true, 270.0, -0.3),
        ("spectre-reverse-pink", true, 10.0, -0.2),
        ("spectre-reverse-orange", true, 80.0, 0.0),
        ("spectre-reverse-yellow", true, 110.0, 0.1),
    ];

    HUES.iter()
        .map(|&(name, negate, hue, saturation)| {
            let mut edit = ColorEdit::new();
            if negate {
                edit = edit.with_negate(true);
            }
            if hue != 0.0 {
                edit = edit.with_hue_rotation(hue);
            }
            if saturation != 0.0 {
                edit = edit.with_saturation(saturation);
            }
            (name, Preset::new("spectre", edit))
        })
        .collect()
}
