use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.namepick.log_level, "info");
    assert_eq!(cfg.picker, PickerConfig::default());
    assert!(!cfg.picker.force_local);
}

#[test]
fn test_language_map_accepts_string_or_list() {
    let toml_str = r#"
        [picker]
        name_tag = "name"

        [picker.language_map]
        gan = ["gan-hant", "zh-hant", "zh-hans"]
        sr = "sr-Latn"
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(
        cfg.picker.language_map.get("gan"),
        Some(&LanguageFallback::from(vec!["gan-hant", "zh-hant", "zh-hans"]))
    );
    assert_eq!(
        cfg.picker.language_map.get("sr"),
        Some(&LanguageFallback::One("sr-Latn".to_string()))
    );
    assert_eq!(cfg.picker.name_tag.as_deref(), Some("name"));
}

#[test]
fn test_fallbacks_for_normalizes_shapes() {
    let mut cfg = PickerConfig::default();
    cfg.language_map.insert("sr".into(), "sr-Latn".into());
    cfg.language_map
        .insert("gan".into(), vec!["zh-hant", "zh-hans"].into());
    cfg.language_map
        .insert("xx".into(), LanguageFallback::Many(Vec::new()));

    assert_eq!(cfg.fallbacks_for("sr"), vec!["sr-Latn"]);
    assert_eq!(cfg.fallbacks_for("gan"), vec!["zh-hant", "zh-hans"]);
    assert!(cfg.fallbacks_for("xx").is_empty());
    assert!(cfg.fallbacks_for("absent").is_empty());
}

#[test]
fn test_camel_case_aliases() {
    let toml_str = r#"
        nameTag = "name"
        multiTag = "name:"
        forceLocal = true

        [languageMap]
        be-tarask = "be"
    "#;
    let cfg: PickerConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.name_tag.as_deref(), Some("name"));
    assert_eq!(cfg.multi_tag.as_deref(), Some("name:"));
    assert!(cfg.force_local);
    assert_eq!(cfg.fallbacks_for("be-tarask"), vec!["be"]);
}

#[test]
fn test_picker_config_from_json() {
    let json = r#"{"languageMap": {"gan": ["zh-hans"]}, "nameTag": "name"}"#;
    let cfg: PickerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(cfg.fallbacks_for("gan"), vec!["zh-hans"]);
    assert_eq!(cfg.name_tag.as_deref(), Some("name"));
    assert!(cfg.multi_tag.is_none());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse("[picker\nname_tag = ").unwrap_err();
    assert!(matches!(err, NamepickError::Config(_)), "got {err}");
}

#[test]
fn test_wrong_type_in_language_map_is_config_error() {
    let err = parse("[picker.language_map]\nsr = 5\n").unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let cfg = load("/nonexistent/__namepick_missing__.toml").unwrap();
    assert_eq!(cfg.namepick.log_level, "info");
    assert!(cfg.picker.language_map.is_empty());
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__namepick_test_config__.toml");
    std::fs::write(
        &tmp,
        "[namepick]\nlog_level = \"debug\"\n\n[picker]\nforce_local = true\n",
    )
    .unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.namepick.log_level, "debug");
    assert!(cfg.picker.force_local);

    let _ = std::fs::remove_file(&tmp);
}
