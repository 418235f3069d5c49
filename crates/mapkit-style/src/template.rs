//! Base style templates.
//!
//! A template is the JSON layer array of a base style with placeholder
//! tokens left in it. Substitution is plain text replacement done before
//! parsing:
//!
//! | Token | Replaced with |
//! |-------|---------------|
//! | `<BMK_BM_SRC>` | basemap source id (raw, inside an existing string) |
//! | `<BMK_TR_SRC>` | terrain source id (raw, inside an existing string) |
//! | `"<LANG>"` | general label expression, JSON-encoded |
//! | `"<LANG_COUNTRY>"` | country label expression, JSON-encoded |

use serde_json::Value;

use crate::error::StyleResult;
use crate::style::{BASEMAP_SOURCE_ID, TERRAIN_SOURCE_ID};

/// Basemap source id token.
pub const BASEMAP_SOURCE_TOKEN: &str = "<BMK_BM_SRC>";
/// Terrain source id token.
pub const TERRAIN_SOURCE_TOKEN: &str = "<BMK_TR_SRC>";
/// General label token, quotes included.
pub const LABEL_TOKEN: &str = "\"<LANG>\"";
/// Country label token, quotes included.
pub const COUNTRY_LABEL_TOKEN: &str = "\"<LANG_COUNTRY>\"";

/// The two label expressions put into a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    /// Country labels.
    pub country: Value,
    /// Every other label.
    pub multiline: Value,
}

impl Labels {
    /// Creates a label pair.
    pub fn new(country: Value, multiline: Value) -> Self {
        Self { country, multiline }
    }

    /// Empty labels, used when labels are hidden.
    pub fn hidden() -> Self {
        Self::new(Value::String(String::new()), Value::String(String::new()))
    }
}

/// Replaces every token of `template`.
pub fn substitute(template: &str, labels: &Labels) -> StyleResult<String> {
    let country = serde_json::to_string(&labels.country)?;
    let multiline = serde_json::to_string(&labels.multiline)?;

    Ok(template
        .replace(BASEMAP_SOURCE_TOKEN, BASEMAP_SOURCE_ID)
        .replace(TERRAIN_SOURCE_TOKEN, TERRAIN_SOURCE_ID)
        .replace(LABEL_TOKEN, &multiline)
        .replace(COUNTRY_LABEL_TOKEN, &country))
}

/// Parses substituted template text into layers.
pub fn parse_layers(text: &str) -> StyleResult<Vec<Value>> {
    Ok(serde_json::from_str(text)?)
}

/// Substitutes then parses.
pub fn render(template: &str, labels: &Labels) -> StyleResult<Vec<Value>> {
    parse_layers(&substitute(template, labels)?)
}
