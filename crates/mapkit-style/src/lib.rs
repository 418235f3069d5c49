//! # mapkit-style
//!
//! Map style generation from base style templates and presets.
//!
//! A base style is a layer template with placeholders for label text and
//! source ids. A preset is a base style plus a [`ColorEdit`]. Building a
//! style fills in the placeholders, drops the layers the request does not
//! want, recolors every color value when an edit is active and wraps the
//! layers in a version 8 style document.
//!
//! - [`registry`] - base styles and presets ([`StyleRegistry`])
//! - [`builtin`] - bundled base styles and presets
//! - [`language`] - label localization ([`Localization`], [`LanguageTable`])
//! - [`template`] - placeholder substitution
//! - [`layers`] - layer filtering
//! - [`locate`] - finding color values anywhere in a document
//! - [`builder`] - style assembly ([`StyleBuilder`])
//! - [`style`] - output document types
//!
//! # Quick Start
//!
//! ```rust
//! use mapkit_style::{GetStyleOptions, LanguageTable, StyleBuilder, StyleRegistry};
//!
//! let registry = StyleRegistry::builtin();
//! let languages = LanguageTable::builtin();
//! let builder = StyleBuilder::new(&registry, &languages);
//!
//! let options = GetStyleOptions::new("https://example.com/fonts/{fontstack}/{range}.pbf")
//!     .with_tilejson("https://example.com/planet.json")
//!     .with_lang("fr");
//!
//! let style = builder.get_style("avenue-night", &options).unwrap();
//! let json = style.to_json().unwrap();
//! assert!(json.contains("\"version\":8"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod builder;
pub mod builtin;
pub mod language;
pub mod layers;
pub mod locate;
pub mod options;
pub mod registry;
pub mod style;
pub mod template;

pub use builder::StyleBuilder;
pub use error::{StyleError, StyleResult};
pub use language::{LanguagePair, LanguageTable, Localization};
pub use layers::LayerFilter;
pub use locate::{find_color, is_color_description, try_find_color};
pub use options::{BuildStyleOptions, GetStyleOptions, TerrainEncoding, TerrainOptions};
pub use registry::{Preset, ResolvedStyle, StyleRegistry};
pub use style::{Projection, Source, Style, Terrain, BASEMAP_SOURCE_ID, TERRAIN_SOURCE_ID};

pub use mapkit_color::{ColorEdit, ColorEditor, ColorError};
