use devinfo::core::config::Config;
use devinfo::core::types::DisplayMetrics;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.poll_interval_ms, 2000);
    assert_eq!(config.data_path, "/");
    assert!(config.external_storage_path.is_none());
    assert!(config.display.is_none());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_poll_interval(750).unwrap();
    config.set_data_path("/data".to_string());
    config.set_external_storage_path(Some("/mnt/sdcard".to_string()));
    config.display = Some(DisplayMetrics {
        width_pixels: 1920,
        height_pixels: 1080,
        ..Default::default()
    });

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_empty_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "   \n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}
