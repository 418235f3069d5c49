//! Error types for style building.
//!
//! Every variant is fatal to the call that produced it: a style build
//! either returns a complete document or one of these.

use std::path::PathBuf;
use thiserror::Error;

use mapkit_color::ColorError;

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors that can occur while building a style.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Name is neither a base style nor a preset.
    #[error("style '{name}' does not exist as a base style, nor as a preset")]
    UnknownStyle {
        /// Requested name.
        name: String,
    },

    /// Requested language has no entry in the localization table.
    #[error("language '{lang}' is unsupported (available: {available})")]
    UnsupportedLanguage {
        /// Requested language.
        lang: String,
        /// Comma-separated supported languages.
        available: String,
    },

    /// Language is known but not with the requested script.
    #[error("script '{script}' is unsupported for language '{lang}' (available: {available})")]
    UnsupportedScript {
        /// Requested language.
        lang: String,
        /// Requested script.
        script: String,
        /// Comma-separated scripts for this language.
        available: String,
    },

    /// Neither a TileJSON URL nor a tile archive URL was given.
    #[error("at least one of 'tilejson' or 'pmtiles' must be provided as data source")]
    MissingSource,

    /// A color in the style could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Template is not valid JSON after substitution.
    #[error("malformed template: {0}")]
    MalformedTemplate(#[from] serde_json::Error),

    /// YAML preset file could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading a preset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preset file not found.
    #[error("preset file not found: {path}")]
    PresetFileNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Preset definition is inconsistent with the registry.
    #[error("invalid preset '{name}': {reason}")]
    InvalidPreset {
        /// Preset name.
        name: String,
        /// Description of what's wrong.
        reason: String,
    },
}

impl StyleError {
    /// Returns `true` for localization failures.
    #[inline]
    pub fn is_language_error(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage { .. } | Self::UnsupportedScript { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let err = StyleError::UnknownStyle { name: "nonexistent".into() };
        assert!(err.to_string().contains("nonexistent"));

        let err = StyleError::UnsupportedScript {
            lang: "sr".into(),
            script: "Latin".into(),
            available: "Cyrillic".into(),
        };
        assert!(err.is_language_error());
        assert!(err.to_string().contains("Cyrillic"));
    }

    #[test]
    fn color_error_converts() {
        let err: StyleError = ColorError::parse("#xyz", "bad hex").into();
        assert!(matches!(err, StyleError::Color(_)));
        assert!(err.to_string().contains("#xyz"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err: StyleError = json_err.into();
        assert!(matches!(err, StyleError::MalformedTemplate(_)));
    }
}
