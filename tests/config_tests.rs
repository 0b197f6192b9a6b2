use stageline::config::StagelineConfig;

#[test]
fn test_default_config() {
    let config = StagelineConfig::default();

    assert_eq!(config.display.bar_width, 30);
    assert!(config.display.labels.is_empty());
    assert_eq!(config.driver.stage_secs, 2);
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = StagelineConfig::load(&path).await.unwrap();
    assert_eq!(config.display.bar_width, 30);
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = StagelineConfig::default();
    config.display.bar_width = 42;
    config.driver.stage_secs = 7;
    config
        .display
        .labels
        .insert("complete".to_string(), "Done and dusted".to_string());

    config.save(&path).await.unwrap();
    let loaded = StagelineConfig::load(&path).await.unwrap();

    assert_eq!(loaded.display.bar_width, 42);
    assert_eq!(loaded.driver.stage_secs, 7);
    assert_eq!(
        loaded.display.labels.get("complete").map(String::as_str),
        Some("Done and dusted")
    );
}

#[tokio::test]
async fn test_invalid_file_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    tokio::fs::write(&path, "[display]\nbar_width = 0\n")
        .await
        .unwrap();

    assert!(StagelineConfig::load(&path).await.is_err());
}

#[tokio::test]
async fn test_save_refuses_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = StagelineConfig::default();
    config.driver.stage_secs = 0;

    assert!(config.save(&path).await.is_err());
    assert!(!path.exists());
}
