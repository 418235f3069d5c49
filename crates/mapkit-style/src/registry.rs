//! Registry of base styles and presets.
//!
//! A base style is a named layer template. A preset pairs a base style with
//! a fixed [`ColorEdit`]. The registry is built once, then shared read-only
//! with every [`StyleBuilder`](crate::StyleBuilder).
//!
//! Presets can also be loaded from YAML:
//!
//! ```yaml
//! presets:
//!   - name: bureau-dusk
//!     base_style: bureau
//!     color_edit:
//!       brightness: -0.3
//!       hue_rotation: 20
//!       mix_color: ["#ff8800", 0.1]
//! ```

use std::borrow::Cow;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use mapkit_color::ColorEdit;

use crate::error::{StyleError, StyleResult};

/// A named base style plus color edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Base style this preset starts from.
    pub base_style: String,
    /// Recoloring applied on top of it.
    pub color_edit: ColorEdit,
}

impl Preset {
    /// Creates a preset.
    pub fn new(base_style: impl Into<String>, color_edit: ColorEdit) -> Self {
        Self {
            base_style: base_style.into(),
            color_edit,
        }
    }
}

/// A style name resolved against the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle<'a> {
    /// Base style name.
    pub base_style: &'a str,
    /// Color edit of the preset, `None` for a base style.
    pub color_edit: Option<&'a ColorEdit>,
}

/// Base styles and presets, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    base_styles: Vec<(String, Cow<'static, str>)>,
    presets: Vec<(String, Preset)>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the bundled base styles and presets.
    pub fn builtin() -> Self {
        crate::builtin::registry()
    }

    /// Adds or replaces a base style.
    pub fn add_base_style(&mut self, name: impl Into<String>, template: impl Into<Cow<'static, str>>) {
        let name = name.into();
        let template = template.into();
        match self.base_styles.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = template,
            None => self.base_styles.push((name, template)),
        }
    }

    /// Adds or replaces a preset.
    ///
    /// The preset's base style must already be registered.
    pub fn add_preset(&mut self, name: impl Into<String>, preset: Preset) -> StyleResult<()> {
        let name = name.into();
        if self.base_style(&preset.base_style).is_none() {
            return Err(StyleError::InvalidPreset {
                reason: format!("base style '{}' does not exist", preset.base_style),
                name,
            });
        }
        if self.base_style(&name).is_some() {
            return Err(StyleError::InvalidPreset {
                reason: "name is already used by a base style".into(),
                name,
            });
        }

        match self.presets.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = preset,
            None => self.presets.push((name, preset)),
        }
        Ok(())
    }

    /// Template text of a base style.
    pub fn base_style(&self, name: &str) -> Option<&str> {
        self.base_styles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_ref())
    }

    /// Preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    /// Base style names in registration order.
    pub fn base_style_names(&self) -> impl Iterator<Item = &str> {
        self.base_styles.iter().map(|(n, _)| n.as_str())
    }

    /// Preset names in registration order.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|(n, _)| n.as_str())
    }

    /// Every style name: each base style followed by its presets.
    pub fn style_list(&self) -> Vec<String> {
        let mut list = Vec::with_capacity(self.base_styles.len() + self.presets.len());
        for (base, _) in &self.base_styles {
            list.push(base.clone());
            list.extend(
                self.presets
                    .iter()
                    .filter(|(_, p)| p.base_style == *base)
                    .map(|(n, _)| n.clone()),
            );
        }
        list
    }

    /// Resolves a base style or preset name.
    pub fn resolve(&self, name: &str) -> StyleResult<ResolvedStyle<'_>> {
        if let Some((base, _)) = self.base_styles.iter().find(|(n, _)| n == name) {
            return Ok(ResolvedStyle {
                base_style: base,
                color_edit: None,
            });
        }
        if let Some(preset) = self.preset(name) {
            return Ok(ResolvedStyle {
                base_style: &preset.base_style,
                color_edit: Some(&preset.color_edit),
            });
        }
        Err(StyleError::UnknownStyle { name: name.to_string() })
    }

    /// Loads presets from a YAML file.
    pub fn load_presets_file(&mut self, path: impl AsRef<Path>) -> StyleResult<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StyleError::PresetFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        self.load_presets_yaml(&content)
    }

    /// Loads presets from a YAML string.
    ///
    /// Presets are validated before any is added, so a failing document
    /// leaves the registry unchanged. Returns the number of presets loaded.
    pub fn load_presets_yaml(&mut self, yaml: &str) -> StyleResult<usize> {
        let raw: RawPresetFile = serde_yaml::from_str(yaml)?;

        let presets = raw
            .presets
            .into_iter()
            .map(|p| self.parse_preset(p))
            .collect::<StyleResult<Vec<_>>>()?;

        let count = presets.len();
        for (name, preset) in presets {
            self.add_preset(name, preset)?;
        }
        debug!(count, "presets loaded");
        Ok(count)
    }

    fn parse_preset(&self, raw: RawPreset) -> StyleResult<(String, Preset)> {
        let invalid = |reason: String| StyleError::InvalidPreset {
            name: raw.name.clone(),
            reason,
        };

        if raw.name.trim().is_empty() {
            return Err(invalid("empty name".into()));
        }
        if self.base_style(&raw.base_style).is_none() {
            return Err(invalid(format!("base style '{}' does not exist", raw.base_style)));
        }
        if self.base_style(&raw.name).is_some() {
            return Err(invalid("name is already used by a base style".into()));
        }

        let edit = raw.color_edit.into_color_edit();
        validate_edit(&edit).map_err(invalid)?;
        Ok((raw.name, Preset::new(raw.base_style, edit)))
    }
}

/// Range checks that serde cannot express.
fn validate_edit(edit: &ColorEdit) -> Result<(), String> {
    for (field, ratio) in [
        ("mix_color", edit.mix_color.as_ref().map(|(_, r)| *r)),
        ("multiply_color", edit.multiply_color.as_ref().map(|(_, r)| *r)),
    ] {
        match ratio {
            Some(ratio) if !(0.0..=1.0).contains(&ratio) => {
                return Err(format!("{field} ratio {ratio} is outside [0, 1]"));
            }
            _ => {}
        }
    }
    if let Some((_, midpoint)) = edit.contrast {
        if !(0.0..=255.0).contains(&midpoint) {
            return Err(format!("contrast midpoint {midpoint} is outside [0, 255]"));
        }
    }
    edit.editor().map_err(|e| e.to_string())?;
    Ok(())
}

// ============================================================================
// Raw YAML structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPresetFile {
    #[serde(default)]
    presets: Vec<RawPreset>,
}

#[derive(Debug, Deserialize)]
struct RawPreset {
    name: String,
    base_style: String,
    #[serde(default)]
    color_edit: RawColorEdit,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColorEdit {
    negate: Option<bool>,
    brightness: Option<f64>,
    brightness_shift: Option<f64>,
    exposure: Option<f64>,
    hue_rotation: Option<f64>,
    saturation: Option<f64>,
    multiply_color: Option<(String, f64)>,
    mix_color: Option<(String, f64)>,
    contrast: Option<(f64, f64)>,
}

impl RawColorEdit {
    fn into_color_edit(self) -> ColorEdit {
        ColorEdit {
            negate: self.negate,
            brightness: self.brightness,
            brightness_shift: self.brightness_shift,
            exposure: self.exposure,
            hue_rotation: self.hue_rotation,
            saturation: self.saturation,
            multiply_color: self.multiply_color,
            mix_color: self.mix_color,
            contrast: self.contrast,
        }
    }
}
