//! Loading presets from YAML files

use std::fs;

use mapkit_style::{GetStyleOptions, LanguageTable, StyleBuilder, StyleError, StyleRegistry};
use tempfile::tempdir;

const PRESETS: &str = r##"
presets:
  - name: bureau-dusk
    base_style: bureau
    color_edit:
      brightness: -0.3
      hue_rotation: 20
      mix_color: ["#ff8800", 0.1]
  - name: spectre-gray
    base_style: spectre
    color_edit:
      saturation: -1
"##;

#[test]
fn test_load_file_and_build() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.yaml");
    fs::write(&path, PRESETS).unwrap();

    let mut registry = StyleRegistry::builtin();
    assert_eq!(registry.load_presets_file(&path).unwrap(), 2);

    let list = registry.style_list();
    let bureau_pos = list.iter().position(|s| s == "bureau").unwrap();
    let journal_pos = list.iter().position(|s| s == "journal").unwrap();
    let dusk_pos = list.iter().position(|s| s == "bureau-dusk").unwrap();
    assert!(bureau_pos < dusk_pos && dusk_pos < journal_pos);
    assert_eq!(list.last().map(String::as_str), Some("spectre-gray"));

    let table = LanguageTable::builtin();
    let builder = StyleBuilder::new(&registry, &table).with_locale("en");
    let opts = GetStyleOptions::new("https://g/{fontstack}/{range}.pbf").with_pmtiles("https://t/planet.pmtiles");

    let plain = builder.get_style("bureau", &opts).unwrap();
    let dusk = builder.get_style("bureau-dusk", &opts).unwrap();
    assert_eq!(plain.layer_ids(), dusk.layer_ids());
    assert_ne!(plain.layers, dusk.layers);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let mut registry = StyleRegistry::builtin();
    let err = registry.load_presets_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, StyleError::PresetFileNotFound { .. }));
}

#[test]
fn test_unknown_base_style_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "presets:\n  - name: x\n    base_style: atlas\n").unwrap();

    let mut registry = StyleRegistry::builtin();
    let before = registry.style_list();
    let err = registry.load_presets_file(&path).unwrap_err();
    assert!(matches!(err, StyleError::InvalidPreset { .. }));
    assert_eq!(registry.style_list(), before);
}

#[test]
fn test_malformed_yaml() {
    let mut registry = StyleRegistry::builtin();
    let err = registry.load_presets_yaml("presets: [name: {").unwrap_err();
    assert!(matches!(err, StyleError::Yaml(_)));
}
