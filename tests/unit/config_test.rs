//! Tests for inventory source configuration

use std::fs;

use svcmap::config::{ConfigError, PLUGIN_NAME, SourceConfig};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = SourceConfig::default();
    assert_eq!(config.plugin, PLUGIN_NAME);
    assert_eq!(config.mapping_file, "group_vars/all/service_mapping.yml");
    assert!(config.create_all_services_group);
}

#[test]
fn test_minimal_source_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("service_mapping.yml");
    fs::write(&path, "plugin: service_mapping\n").unwrap();

    let config = SourceConfig::load(&path).unwrap();
    assert_eq!(config.mapping_file, "group_vars/all/service_mapping.yml");
    assert!(config.create_all_services_group);
}

#[test]
fn test_full_source_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("service_mapping.yml");
    fs::write(
        &path,
        "plugin: service_mapping\nmapping_file: custom/mapping.yml\ncreate_all_services_group: false\n",
    )
    .unwrap();

    let config = SourceConfig::load(&path).unwrap();
    assert_eq!(config.mapping_file, "custom/mapping.yml");
    assert!(!config.create_all_services_group);
}

#[test]
fn test_wrong_plugin_token_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("other.yml");
    fs::write(&path, "plugin: host_list\n").unwrap();

    let err = SourceConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::WrongPlugin { .. }));
    assert!(err.to_string().contains("host_list"));
}

#[test]
fn test_missing_source_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.yml");

    let err = SourceConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_unparseable_source_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.yml");
    fs::write(&path, "plugin: [oops\n").unwrap();

    let err = SourceConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}
