//! Label localization.
//!
//! Base style templates carry two label placeholders that are filled with
//! rendering-engine expressions picking the right `name:*` tile property:
//!
//! - the country label, a single `coalesce` over the translated name
//! - the general label, the translated name above the local one when
//!   they differ
//!
//! The lookup sits behind the [`Localization`] trait. [`LanguageTable`] is
//! the built-in implementation.
//!
//! # Default locale
//!
//! When no language is requested, the process locale is used. It is read
//! from `LC_ALL`, `LC_MESSAGES` and `LANG` (first non-empty wins), reduced
//! to its language part (`fr_CA.UTF-8` -> `fr`) and replaced with
//! [`FALLBACK_LANGUAGE`] if the table does not know it.
//!
//! ```
//! use mapkit_style::language::{default_language, LanguageTable};
//!
//! let table = LanguageTable::builtin();
//! assert_eq!(default_language(&table, Some("de_DE.UTF-8")), "de");
//! assert_eq!(default_language(&table, Some("C")), "en");
//! ```

use std::env;

use serde_json::{json, Value};
use tracing::warn;

use crate::error::{StyleError, StyleResult};

/// Language used when the platform locale is missing or unsupported.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Environment variables consulted for the platform locale, in order.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Supported pairs of the built-in table.
const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Latin"),
    ("bg", "Cyrillic"),
    ("da", "Latin"),
    ("de", "Latin"),
    ("el", "Greek"),
    ("en", "Latin"),
    ("es", "Latin"),
    ("et", "Latin"),
    ("fa", "Arabic"),
    ("fi", "Latin"),
    ("fr", "Latin"),
    ("ga", "Latin"),
    ("he", "Hebrew"),
    ("hi", "Devanagari"),
    ("hr", "Latin"),
    ("hu", "Latin"),
    ("id", "Latin"),
    ("it", "Latin"),
    ("ja", "Japanese"),
    ("ko", "Hangul"),
    ("lt", "Latin"),
    ("lv", "Latin"),
    ("ne", "Devanagari"),
    ("nl", "Latin"),
    ("no", "Latin"),
    ("mr", "Devanagari"),
    ("mt", "Latin"),
    ("pl", "Latin"),
    ("pt", "Latin"),
    ("ro", "Latin"),
    ("ru", "Cyrillic"),
    ("sk", "Latin"),
    ("sl", "Latin"),
    ("sv", "Latin"),
    ("tr", "Latin"),
    ("uk", "Cyrillic"),
    ("ur", "Arabic"),
    ("vi", "Latin"),
    ("zh-Hans", "Han"),
    ("zh-Hant", "Han"),
];

/// A supported language and the script its labels are written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Language code, e.g. `fr` or `zh-Hant`.
    pub lang: String,
    /// Script name, e.g. `Latin`.
    pub script: String,
}

impl LanguagePair {
    /// Creates a pair.
    pub fn new(lang: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            script: script.into(),
        }
    }
}

/// Source of label expressions for a language.
///
/// Implementors provide the supported pairs and the two expressions; the
/// availability check has a default implementation over [`pairs`].
///
/// [`pairs`]: Localization::pairs
pub trait Localization: Send + Sync {
    /// All supported (language, script) pairs.
    fn pairs(&self) -> &[LanguagePair];

    /// Single-line expression used for country labels.
    fn country_name(&self, lang: &str, script: Option<&str>) -> Value;

    /// Expression used for every other label.
    fn multiline_name(&self, lang: &str, script: Option<&str>) -> Value;

    /// Fails when `lang` is unknown, or known but not with `script`.
    fn check_supported(&self, lang: &str, script: Option<&str>) -> StyleResult<()> {
        let candidates: Vec<&LanguagePair> = self.pairs().iter().filter(|p| p.lang == lang).collect();

        if candidates.is_empty() {
            return Err(StyleError::UnsupportedLanguage {
                lang: lang.to_string(),
                available: join(self.pairs().iter().map(|p| p.lang.as_str())),
            });
        }

        match script {
            Some(script) if !candidates.iter().any(|p| p.script == script) => {
                Err(StyleError::UnsupportedScript {
                    lang: lang.to_string(),
                    script: script.to_string(),
                    available: join(candidates.iter().map(|p| p.script.as_str())),
                })
            }
            _ => Ok(()),
        }
    }

    /// Boolean form of [`check_supported`](Localization::check_supported).
    #[inline]
    fn is_supported(&self, lang: &str, script: Option<&str>) -> bool {
        self.check_supported(lang, script).is_ok()
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Built-in localization table.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    pairs: Vec<LanguagePair>,
}

impl LanguageTable {
    /// The table of languages the base styles are localized for.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_PAIRS.iter().map(|(lang, script)| LanguagePair::new(*lang, *script)))
    }

    /// A table restricted to the given pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = LanguagePair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Script of the first entry for `lang`.
    pub fn default_script(&self, lang: &str) -> Option<&str> {
        self.pairs.iter().find(|p| p.lang == lang).map(|p| p.script.as_str())
    }

    /// Tile property holding the name in `lang`.
    ///
    /// Devanagari names are stored pre-shaped under a `pgf:` prefix.
    fn name_key(&self, lang: &str, script: Option<&str>) -> String {
        match script.or_else(|| self.default_script(lang)) {
            Some("Devanagari") => format!("pgf:name:{lang}"),
            _ => format!("name:{lang}"),
        }
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Localization for LanguageTable {
    fn pairs(&self) -> &[LanguagePair] {
        &self.pairs
    }

    fn country_name(&self, lang: &str, script: Option<&str>) -> Value {
        let key = self.name_key(lang, script);
        json!(["coalesce", ["get", key], ["get", "name:en"], ["get", "name"]])
    }

    fn multiline_name(&self, lang: &str, script: Option<&str>) -> Value {
        let key = self.name_key(lang, script);
        json!([
            "case",
            ["all", ["has", key], ["!=", ["get", key], ["get", "name"]]],
            ["format", ["get", key], {}, "\n", {}, ["get", "name"], { "font-scale": 0.8 }],
            ["get", "name"]
        ])
    }
}

/// Reads the platform locale from the environment.
///
/// Returns the first non-empty value of [`LOCALE_VARS`].
pub fn locale_from_env() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Language part of a POSIX or BCP 47 locale string.
///
/// `en_US.UTF-8`, `en-US` and `en@euro` all give `en`. The `C` and `POSIX`
/// locales have no language.
pub fn language_of_locale(locale: &str) -> Option<&str> {
    let lang = locale
        .split(['_', '-', '.', '@'])
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    if lang.eq_ignore_ascii_case("C") || lang.eq_ignore_ascii_case("POSIX") {
        return None;
    }
    Some(lang)
}

/// Language to use when none was requested.
///
/// Falls back to [`FALLBACK_LANGUAGE`] with a warning when `locale` is
/// absent or names a language the table does not support.
pub fn default_language(table: &dyn Localization, locale: Option<&str>) -> String {
    let Some(locale) = locale else {
        return FALLBACK_LANGUAGE.to_string();
    };

    match language_of_locale(locale) {
        Some(lang) => {
            let lang = lang.to_ascii_lowercase();
            if table.is_supported(&lang, None) {
                lang
            } else {
                warn!(locale, lang = %lang, fallback = FALLBACK_LANGUAGE, "platform language unsupported");
                FALLBACK_LANGUAGE.to_string()
            }
        }
        None => FALLBACK_LANGUAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_size() {
        let table = LanguageTable::builtin();
        assert_eq!(table.pairs().len(), 41);
        assert!(table.is_supported("zh-Hant", Some("Han")));
        assert!(table.is_supported("fr", None));
    }

    #[test]
    fn unknown_language_is_an_error() {
        let table = LanguageTable::builtin();
        let err = table.check_supported("tlh", None).unwrap_err();
        match err {
            StyleError::UnsupportedLanguage { lang, available } => {
                assert_eq!(lang, "tlh");
                assert!(available.starts_with("ar, cs, bg"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_script_is_an_error() {
        let table = LanguageTable::builtin();
        let err = table.check_supported("ru", Some("Latin")).unwrap_err();
        match err {
            StyleError::UnsupportedScript { lang, script, available } => {
                assert_eq!(lang, "ru");
                assert_eq!(script, "Latin");
                assert_eq!(available, "Cyrillic");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(table.check_supported("ru", Some("Cyrillic")).is_ok());
    }

    #[test]
    fn country_expression() {
        let table = LanguageTable::builtin();
        assert_eq!(
            table.country_name("fr", Some("Latin")),
            json!(["coalesce", ["get", "name:fr"], ["get", "name:en"], ["get", "name"]])
        );
    }

    #[test]
    fn multiline_expression_uses_format() {
        let table = LanguageTable::builtin();
        let expr = table.multiline_name("de", None);
        assert_eq!(expr[0], json!("case"));
        assert_eq!(expr[2][0], json!("format"));
        assert_eq!(expr[2][1], json!(["get", "name:de"]));
        assert_eq!(expr[3], json!(["get", "name"]));
    }

    #[test]
    fn devanagari_uses_shaped_names() {
        let table = LanguageTable::builtin();
        assert_eq!(table.country_name("hi", None)[1], json!(["get", "pgf:name:hi"]));
        assert_eq!(table.country_name("hi", Some("Devanagari"))[1], json!(["get", "pgf:name:hi"]));
    }

    #[test]
    fn locale_parsing() {
        assert_eq!(language_of_locale("en_US.UTF-8"), Some("en"));
        assert_eq!(language_of_locale("pt-BR"), Some("pt"));
        assert_eq!(language_of_locale("de@euro"), Some("de"));
        assert_eq!(language_of_locale("C.UTF-8"), None);
        assert_eq!(language_of_locale("POSIX"), None);
        assert_eq!(language_of_locale(""), None);
    }

    #[test]
    fn default_language_falls_back() {
        let table = LanguageTable::builtin();
        assert_eq!(default_language(&table, Some("fr_FR.UTF-8")), "fr");
        assert_eq!(default_language(&table, Some("FI")), "fi");
        assert_eq!(default_language(&table, Some("tlh_QO")), FALLBACK_LANGUAGE);
        assert_eq!(default_language(&table, None), FALLBACK_LANGUAGE);
    }

    #[test]
    fn custom_table_restricts_pairs() {
        let table = LanguageTable::from_pairs([LanguagePair::new("sr", "Cyrillic")]);
        assert!(table.is_supported("sr", Some("Cyrillic")));
        assert!(!table.is_supported("en", None));
        assert_eq!(default_language(&table, Some("en_GB")), FALLBACK_LANGUAGE);
    }
}
