use super::*;

#[test]
fn missing_block_uses_defaults() {
    let cfg = PageConfig::from_json(None).unwrap();
    assert_eq!(cfg, PageConfig::default());
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.site_name, DEFAULT_SITE_NAME);
}

#[test]
fn blank_block_uses_defaults() {
    let cfg = PageConfig::from_json(Some("  \n ")).unwrap();
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn partial_block_overrides_only_named_fields() {
    let cfg = PageConfig::from_json(Some(r#"{"site_name": "Notebook"}"#)).unwrap();
    assert_eq!(cfg.site_name, "Notebook");
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn malformed_block_is_a_config_error() {
    let err = PageConfig::from_json(Some("{site_name:")).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = PageConfig::from_json(Some(r#"{"site_name": 7}"#)).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn level_parses_known_names() {
    let cfg = PageConfig { log_level: "DEBUG".into(), ..PageConfig::default() };
    assert_eq!(cfg.level(), log::Level::Debug);
    let cfg = PageConfig { log_level: "warning".into(), ..PageConfig::default() };
    assert_eq!(cfg.level(), log::Level::Warn);
}

#[test]
fn level_falls_back_to_info() {
    let cfg = PageConfig { log_level: "chatty".into(), ..PageConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
}
