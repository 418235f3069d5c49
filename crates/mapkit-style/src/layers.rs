//! Layer filtering.
//!
//! Removes the layers a request has no use for: hillshading without a
//! terrain source, the POI layer, and labels.

use serde_json::Value;
use tracing::trace;

use crate::style::{layer_id, layer_type};

/// Id of the hillshading layer.
pub const HILLSHADE_LAYER_ID: &str = "hillshader";

/// Id of the POI layer.
pub const POI_LAYER_ID: &str = "pois";

/// Which layers to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerFilter {
    /// Keep the hillshading layer.
    pub hillshading: bool,
    /// Drop the POI layer.
    pub hide_pois: bool,
    /// Drop text labels.
    pub hide_labels: bool,
}

impl LayerFilter {
    /// Applies the filter.
    ///
    /// With `hide_labels`, the POI layer keeps its icons: its `text-field`
    /// is blanked instead of the layer being removed. Every other symbol
    /// layer with a `text-field` is removed.
    pub fn apply(&self, layers: Vec<Value>) -> Vec<Value> {
        let before = layers.len();

        let mut layers: Vec<Value> = layers
            .into_iter()
            .filter(|l| self.hillshading || layer_id(l) != Some(HILLSHADE_LAYER_ID))
            .filter(|l| !self.hide_pois || layer_id(l) != Some(POI_LAYER_ID))
            .collect();

        if self.hide_labels {
            if let Some(text_field) = layers
                .iter_mut()
                .find(|l| layer_id(l) == Some(POI_LAYER_ID))
                .and_then(|poi| poi.get_mut("layout"))
                .and_then(|layout| layout.get_mut("text-field"))
            {
                *text_field = Value::String(String::new());
            }

            layers.retain(|l| layer_id(l) == Some(POI_LAYER_ID) || !is_label(l));
        }

        trace!(before, after = layers.len(), "layers filtered");
        layers
    }
}

/// A symbol layer with a text field.
fn is_label(layer: &Value) -> bool {
    layer_type(layer) == Some("symbol")
        && layer
            .get("layout")
            .and_then(|layout| layout.get("text-field"))
            .is_some_and(|field| !field.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::layer_id;
    use serde_json::json;

    fn layers() -> Vec<Value> {
        vec![
            json!({"id": "background", "type": "background"}),
            json!({"id": "hillshader", "type": "hillshade"}),
            json!({"id": "shields", "type": "symbol", "layout": {"icon-image": "shield"}}),
            json!({"id": "roads_labels", "type": "symbol", "layout": {"text-field": ["get", "name"]}}),
            json!({"id": "pois", "type": "symbol", "layout": {"icon-image": ["get", "kind"], "text-field": ["get", "name"]}}),
            json!({"id": "places", "type": "symbol", "layout": {"text-field": ""}}),
        ]
    }

    fn ids(layers: &[Value]) -> Vec<&str> {
        layers.iter().filter_map(layer_id).collect()
    }

    #[test]
    fn default_drops_only_hillshading() {
        let out = LayerFilter::default().apply(layers());
        assert_eq!(ids(&out), vec!["background", "shields", "roads_labels", "pois", "places"]);
    }

    #[test]
    fn hillshading_kept_when_requested() {
        let filter = LayerFilter {
            hillshading: true,
            ..Default::default()
        };
        assert_eq!(filter.apply(layers()).len(), 6);
    }

    #[test]
    fn hide_pois() {
        let filter = LayerFilter {
            hide_pois: true,
            ..Default::default()
        };
        let out = filter.apply(layers());
        assert!(!ids(&out).contains(&POI_LAYER_ID));
    }

    #[test]
    fn hide_labels_keeps_poi_icons() {
        let filter = LayerFilter {
            hide_labels: true,
            ..Default::default()
        };
        let out = filter.apply(layers());
        assert_eq!(ids(&out), vec!["background", "shields", "pois"]);
        assert_eq!(out[2]["layout"]["text-field"], json!(""));
        assert_eq!(out[2]["layout"]["icon-image"], json!(["get", "kind"]));
    }

    #[test]
    fn hide_labels_and_pois() {
        let filter = LayerFilter {
            hillshading: true,
            hide_pois: true,
            hide_labels: true,
        };
        let out = filter.apply(layers());
        assert_eq!(ids(&out), vec!["background", "hillshader", "shields"]);
    }
}
