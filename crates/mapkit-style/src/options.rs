//! Options accepted by the style builder.
//!
//! All structs use camelCase field names so the JSON records used by web
//! clients deserialize directly:
//!
//! ```
//! use mapkit_style::BuildStyleOptions;
//!
//! let opts: BuildStyleOptions = serde_json::from_str(r##"{
//!     "baseStyleName": "bureau",
//!     "pmtiles": "https://example.com/planet.pmtiles",
//!     "glyphs": "https://example.com/fonts/{fontstack}/{range}.pbf",
//!     "hidePOIs": true,
//!     "colorEdit": { "negate": true }
//! }"##).unwrap();
//!
//! assert_eq!(opts.base_style_name, "bureau");
//! assert!(opts.style.hide_pois);
//! ```

use serde::{Deserialize, Serialize};

use mapkit_color::ColorEdit;

/// Encoding of raster elevation tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainEncoding {
    /// Mapbox Terrain-RGB.
    #[default]
    Mapbox,
    /// Terrarium.
    Terrarium,
}

impl TerrainEncoding {
    /// Name used in the style document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mapbox => "mapbox",
            Self::Terrarium => "terrarium",
        }
    }
}

/// Terrain and hillshading options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerrainOptions {
    /// Tile archive URL for raster elevation tiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmtiles: Option<String>,
    /// TileJSON URL for raster elevation tiles. Takes precedence over `pmtiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilejson: Option<String>,
    /// Elevation encoding, Mapbox by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<TerrainEncoding>,
    /// Hillshading, on by default when a terrain URL is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshading: Option<bool>,
    /// Elevation exaggeration, 0 (flat) by default. 1 is true scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exaggeration: Option<f64>,
}

impl TerrainOptions {
    /// Terrain sourced from a tile archive.
    pub fn pmtiles(url: impl Into<String>) -> Self {
        Self {
            pmtiles: Some(url.into()),
            ..Self::default()
        }
    }

    /// Terrain sourced from a TileJSON endpoint.
    pub fn tilejson(url: impl Into<String>) -> Self {
        Self {
            tilejson: Some(url.into()),
            ..Self::default()
        }
    }

    /// Sets the elevation encoding.
    pub fn with_encoding(mut self, encoding: TerrainEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Enables or disables hillshading.
    pub fn with_hillshading(mut self, hillshading: bool) -> Self {
        self.hillshading = Some(hillshading);
        self
    }

    /// Sets the exaggeration.
    pub fn with_exaggeration(mut self, exaggeration: f64) -> Self {
        self.exaggeration = Some(exaggeration);
        self
    }
}

/// Options shared by every style request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStyleOptions {
    /// Tile archive URL, fetched with range requests through `pmtiles://`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmtiles: Option<String>,
    /// TileJSON URL. Takes precedence over `pmtiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilejson: Option<String>,
    /// Sprite URL, needed for POI icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Glyphs URL template.
    pub glyphs: String,
    /// Label language. The platform language is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Label script for `lang`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Remove the POI layer.
    #[serde(default, rename = "hidePOIs")]
    pub hide_pois: bool,
    /// Remove every label.
    #[serde(default)]
    pub hide_labels: bool,
    /// Terrain and hillshading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<TerrainOptions>,
}

impl GetStyleOptions {
    /// Options with the required glyphs URL.
    pub fn new(glyphs: impl Into<String>) -> Self {
        Self {
            glyphs: glyphs.into(),
            ..Self::default()
        }
    }

    /// Sets the tile archive URL.
    pub fn with_pmtiles(mut self, url: impl Into<String>) -> Self {
        self.pmtiles = Some(url.into());
        self
    }

    /// Sets the TileJSON URL.
    pub fn with_tilejson(mut self, url: impl Into<String>) -> Self {
        self.tilejson = Some(url.into());
        self
    }

    /// Sets the sprite URL.
    pub fn with_sprite(mut self, url: impl Into<String>) -> Self {
        self.sprite = Some(url.into());
        self
    }

    /// Sets the label language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Sets the label script.
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Hides or shows POIs.
    pub fn with_hide_pois(mut self, hide: bool) -> Self {
        self.hide_pois = hide;
        self
    }

    /// Hides or shows labels.
    pub fn with_hide_labels(mut self, hide: bool) -> Self {
        self.hide_labels = hide;
        self
    }

    /// Sets terrain options.
    pub fn with_terrain(mut self, terrain: TerrainOptions) -> Self {
        self.terrain = Some(terrain);
        self
    }
}

/// Options for building from an explicit base style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStyleOptions {
    /// Base style to start from.
    pub base_style_name: String,
    /// Recoloring applied to every layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_edit: Option<ColorEdit>,
    /// Source, label and terrain options.
    #[serde(flatten)]
    pub style: GetStyleOptions,
}

impl BuildStyleOptions {
    /// Build options for `base_style_name`.
    pub fn new(base_style_name: impl Into<String>, style: GetStyleOptions) -> Self {
        Self {
            base_style_name: base_style_name.into(),
            color_edit: None,
            style,
        }
    }

    /// Sets the color edit.
    pub fn with_color_edit(mut self, edit: ColorEdit) -> Self {
        self.color_edit = Some(edit);
        self
    }
}
