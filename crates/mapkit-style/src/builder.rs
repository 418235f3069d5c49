//! Style assembly.
//!
//! [`StyleBuilder`] turns a base style template and a set of options into a
//! finished [`Style`]:
//!
//! ```text
//! resolve name -> labels -> substitute + parse -> filter layers
//!   -> recolor (if the color edit is active) -> sources, terrain, projection
//! ```
//!
//! The builder only borrows its registry and localization table, so one
//! of each can serve any number of builders.
//!
//! # Example
//!
//! ```
//! use mapkit_style::{GetStyleOptions, LanguageTable, StyleBuilder, StyleRegistry};
//!
//! let registry = StyleRegistry::builtin();
//! let table = LanguageTable::builtin();
//! let builder = StyleBuilder::new(&registry, &table).with_locale("en_US.UTF-8");
//!
//! let opts = GetStyleOptions::new("https://example.com/fonts/{fontstack}/{range}.pbf")
//!     .with_pmtiles("https://example.com/planet.pmtiles")
//!     .with_hide_pois(true);
//! let style = builder.get_style("bureau-negative", &opts).unwrap();
//!
//! assert!(style.layer("pois").is_none());
//! ```

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use mapkit_color::ColorEdit;

use crate::error::{StyleError, StyleResult};
use crate::language::{default_language, locale_from_env, Localization};
use crate::layers::LayerFilter;
use crate::locate::try_find_color;
use crate::options::{BuildStyleOptions, GetStyleOptions, TerrainEncoding, TerrainOptions};
use crate::registry::StyleRegistry;
use crate::style::{
    Projection, Source, Style, Terrain, BASEMAP_SOURCE_ID, PMTILES_PROTOCOL, STYLE_VERSION,
    TERRAIN_SOURCE_ID,
};
use crate::template::{self, Labels};

/// Builds styles from a registry and a localization table.
#[derive(Clone)]
pub struct StyleBuilder<'a> {
    registry: &'a StyleRegistry,
    localization: &'a dyn Localization,
    locale: Option<String>,
}

impl std::fmt::Debug for StyleBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleBuilder")
            .field("registry", self.registry)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl<'a> StyleBuilder<'a> {
    /// Creates a builder using the platform locale.
    pub fn new(registry: &'a StyleRegistry, localization: &'a dyn Localization) -> Self {
        Self {
            registry,
            localization,
            locale: locale_from_env(),
        }
    }

    /// Overrides the platform locale used when no language is requested.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// The registry styles are resolved against.
    #[inline]
    pub fn registry(&self) -> &'a StyleRegistry {
        self.registry
    }

    /// Builds a base style or a preset by name.
    pub fn get_style(&self, name: &str, options: &GetStyleOptions) -> StyleResult<Style> {
        let resolved = self.registry.resolve(name)?;
        self.build(resolved.base_style, resolved.color_edit, options)
    }

    /// Builds a base style with an explicit color edit.
    pub fn build_style(&self, options: &BuildStyleOptions) -> StyleResult<Style> {
        self.build(&options.base_style_name, options.color_edit.as_ref(), &options.style)
    }

    fn build(
        &self,
        base_style: &str,
        color_edit: Option<&ColorEdit>,
        options: &GetStyleOptions,
    ) -> StyleResult<Style> {
        let template = self
            .registry
            .base_style(base_style)
            .ok_or_else(|| StyleError::UnknownStyle {
                name: base_style.to_string(),
            })?;

        debug!(
            base_style,
            hide_labels = options.hide_labels,
            hide_pois = options.hide_pois,
            "building style"
        );

        let labels = self.labels(options)?;
        let source_url = source_url(options.tilejson.as_deref(), options.pmtiles.as_deref())
            .ok_or(StyleError::MissingSource)?;
        let terrain = TerrainPlan::new(options.terrain.as_ref());

        let filter = LayerFilter {
            hillshading: terrain.hillshading,
            hide_pois: options.hide_pois,
            hide_labels: options.hide_labels,
        };
        let mut layers = filter.apply(template::render(template, &labels)?);

        if let Some(edit) = color_edit.filter(|e| e.is_active()) {
            let count = recolor(&mut layers, edit)?;
            debug!(base_style, count, "colors edited");
        }

        let mut sources = BTreeMap::new();
        sources.insert(BASEMAP_SOURCE_ID.to_string(), Source::basemap(source_url));
        if let Some(source) = terrain.source() {
            sources.insert(TERRAIN_SOURCE_ID.to_string(), source);
        }

        Ok(Style {
            version: STYLE_VERSION,
            sprite: options.sprite.clone().filter(|_| !options.hide_pois),
            glyphs: options.glyphs.clone(),
            sources,
            layers,
            projection: Some(Projection::globe_to_mercator()),
            terrain: terrain.terrain(),
        })
    }

    /// Label expressions for the request.
    ///
    /// An explicitly requested language must be supported; the platform
    /// language falls back to English.
    fn labels(&self, options: &GetStyleOptions) -> StyleResult<Labels> {
        if options.hide_labels {
            return Ok(Labels::hidden());
        }

        let loc = self.localization;
        match options.lang.as_deref() {
            Some(lang) => {
                let script = options.script.as_deref();
                loc.check_supported(lang, script)?;
                Ok(Labels::new(loc.country_name(lang, script), loc.multiline_name(lang, script)))
            }
            None => {
                let lang = default_language(loc, self.locale.as_deref());
                Ok(Labels::new(loc.country_name(&lang, None), loc.multiline_name(&lang, None)))
            }
        }
    }
}

/// Rewrites every color of `layers` with `edit`. Returns the count.
fn recolor(layers: &mut [Value], edit: &ColorEdit) -> StyleResult<usize> {
    let editor = edit.editor()?;
    let mut count = 0;
    for layer in layers.iter_mut() {
        count += try_find_color(layer, &mut |color: &str| editor.apply(color))?;
    }
    Ok(count)
}

/// TileJSON wins over a tile archive.
fn source_url(tilejson: Option<&str>, pmtiles: Option<&str>) -> Option<String> {
    match (tilejson, pmtiles) {
        (Some(url), _) => Some(url.to_string()),
        (None, Some(url)) => Some(format!("{PMTILES_PROTOCOL}{url}")),
        (None, None) => None,
    }
}

/// Terrain options with defaults applied.
#[derive(Debug, Clone, PartialEq)]
struct TerrainPlan {
    url: Option<String>,
    encoding: TerrainEncoding,
    hillshading: bool,
    exaggeration: f64,
}

impl TerrainPlan {
    fn new(options: Option<&TerrainOptions>) -> Self {
        let Some(options) = options else {
            return Self {
                url: None,
                encoding: TerrainEncoding::default(),
                hillshading: false,
                exaggeration: 0.0,
            };
        };

        let url = source_url(options.tilejson.as_deref(), options.pmtiles.as_deref());
        // Hillshading and exaggeration need a source
        let (hillshading, exaggeration) = match url {
            Some(_) => (
                options.hillshading.unwrap_or(true),
                options.exaggeration.unwrap_or(0.0),
            ),
            None => (false, 0.0),
        };

        Self {
            url,
            encoding: options.encoding.unwrap_or_default(),
            hillshading,
            exaggeration,
        }
    }

    fn source(&self) -> Option<Source> {
        let url = self.url.as_ref()?;
        (self.exaggeration != 0.0 || self.hillshading).then(|| Source::RasterDem {
            url: url.clone(),
            encoding: self.encoding,
        })
    }

    fn terrain(&self) -> Option<Terrain> {
        self.url.as_ref()?;
        (self.exaggeration != 0.0).then(|| Terrain {
            source: TERRAIN_SOURCE_ID.to_string(),
            exaggeration: self.exaggeration,
        })
    }
}
