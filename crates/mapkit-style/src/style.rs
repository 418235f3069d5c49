//! Output style document.
//!
//! [`Style`] is the version 8 style record handed to the rendering engine.
//! Layers stay untyped ([`serde_json::Value`]) since they come straight
//! from a template; the envelope around them is typed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::StyleResult;
use crate::options::TerrainEncoding;

/// Style format version produced.
pub const STYLE_VERSION: u8 = 8;

/// Source id of the basemap tiles.
pub const BASEMAP_SOURCE_ID: &str = "__bmk_bm_src";

/// Source id of the elevation tiles.
pub const TERRAIN_SOURCE_ID: &str = "__bmk_tr_src";

/// Attribution attached to the basemap source.
pub const OSM_ATTRIBUTION: &str =
    "<a href='https://openstreetmap.org/copyright'>© OpenStreetMap Contributors</a>";

/// Protocol prefix for tile archives read with range requests.
pub const PMTILES_PROTOCOL: &str = "pmtiles://";

/// A tile source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Source {
    /// Vector tiles.
    #[serde(rename = "vector")]
    Vector {
        /// TileJSON or `pmtiles://` URL.
        url: String,
        /// HTML attribution.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribution: Option<String>,
    },
    /// Raster elevation tiles.
    #[serde(rename = "raster-dem")]
    RasterDem {
        /// TileJSON or `pmtiles://` URL.
        url: String,
        /// Elevation encoding.
        encoding: TerrainEncoding,
    },
}

impl Source {
    /// The basemap source for `url`.
    pub fn basemap(url: impl Into<String>) -> Self {
        Self::Vector {
            url: url.into(),
            attribution: Some(OSM_ATTRIBUTION.to_string()),
        }
    }

    /// Source URL.
    pub fn url(&self) -> &str {
        match self {
            Self::Vector { url, .. } | Self::RasterDem { url, .. } => url,
        }
    }
}

/// 3D terrain block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Id of a `raster-dem` source.
    pub source: String,
    /// Elevation multiplier.
    pub exaggeration: f64,
}

/// Map projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Projection name or expression.
    #[serde(rename = "type")]
    pub kind: Value,
}

impl Projection {
    /// Globe at low zoom, blending into Mercator between zoom 7 and 8.
    pub fn globe_to_mercator() -> Self {
        Self {
            kind: json!(["interpolate", ["linear"], ["zoom"], 7, "vertical-perspective", 8, "mercator"]),
        }
    }
}

/// A complete style document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Always [`STYLE_VERSION`].
    pub version: u8,
    /// Sprite URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Glyphs URL template.
    pub glyphs: String,
    /// Sources by id.
    pub sources: BTreeMap<String, Source>,
    /// Layers in drawing order.
    pub layers: Vec<Value>,
    /// Projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    /// 3D terrain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
}

impl Style {
    /// Layer with the given id.
    pub fn layer(&self, id: &str) -> Option<&Value> {
        self.layers.iter().find(|l| layer_id(l) == Some(id))
    }

    /// Ids of all layers, in order.
    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().filter_map(layer_id).collect()
    }

    /// The style as a JSON tree.
    pub fn to_value(&self) -> StyleResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The style as a JSON string.
    pub fn to_json(&self) -> StyleResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The style as an indented JSON string.
    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The `id` of a layer object.
pub fn layer_id(layer: &Value) -> Option<&str> {
    layer.get("id").and_then(Value::as_str)
}

/// The `type` of a layer object.
pub fn layer_type(layer: &Value) -> Option<&str> {
    layer.get("type").and_then(Value::as_str)
}
