//! Tests for the service_mapping plugin (loader + builder glued together)

use std::fs;
use std::path::Path;

use svcmap::adapters::memory::InMemoryInventory;
use svcmap::config::SourceConfig;
use svcmap::core::ports::InventorySource;
use svcmap::plugin::{BuildError, ServiceMappingPlugin};
use tempfile::TempDir;

/// Write a mapping document under `base`/`relative`
fn write_mapping(base: &Path, relative: &str, content: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn plugin_for(temp: &TempDir) -> ServiceMappingPlugin {
    ServiceMappingPlugin::new(temp.path().to_path_buf())
}

// =============================================================================
// VERIFY SOURCE TESTS
// =============================================================================

#[test]
fn test_verify_source_accepts_own_source_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("service_mapping.yml");
    fs::write(&path, "plugin: service_mapping\n").unwrap();

    assert!(plugin_for(&temp).verify_source(&path));
}

#[test]
fn test_verify_source_rejects_non_yaml_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("service_mapping.txt");
    fs::write(&path, "plugin: service_mapping\n").unwrap();

    assert!(!plugin_for(&temp).verify_source(&path));
}

#[test]
fn test_verify_source_rejects_other_plugin() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("inventory.yml");
    fs::write(&path, "plugin: host_list\n").unwrap();

    assert!(!plugin_for(&temp).verify_source(&path));
}

// =============================================================================
// BUILD TESTS
// =============================================================================

#[test]
fn test_build_end_to_end() {
    let temp = TempDir::new().unwrap();
    write_mapping(
        temp.path(),
        "group_vars/all/service_mapping.yml",
        "service_mapping:\n  web:\n    hostname: web1\n    ipv6: fd00::1\n",
    );

    let config = SourceConfig::default();
    let mut inventory = InMemoryInventory::new();
    let report = plugin_for(&temp).build_into(&config, &mut inventory).unwrap();

    assert_eq!(report.entries, 1);
    assert_eq!(inventory.group_hosts("web_servers"), Some(vec!["web1"]));
}

#[test]
fn test_build_respects_custom_mapping_file() {
    let temp = TempDir::new().unwrap();
    write_mapping(
        temp.path(),
        "custom/services.yml",
        "service_mapping:\n  db:\n    hostname: db1\n    ipv6: fd00::2\n",
    );

    let config = SourceConfig {
        mapping_file: "custom/services.yml".to_string(),
        ..SourceConfig::default()
    };
    let mut inventory = InMemoryInventory::new();
    plugin_for(&temp).build_into(&config, &mut inventory).unwrap();

    assert_eq!(inventory.group_hosts("db_servers"), Some(vec!["db1"]));
}

#[test]
fn test_build_respects_disabled_aggregate_group() {
    let temp = TempDir::new().unwrap();
    write_mapping(
        temp.path(),
        "group_vars/all/service_mapping.yml",
        "service_mapping:\n  web:\n    hostname: web1\n    ipv6: fd00::1\n",
    );

    let config = SourceConfig {
        create_all_services_group: false,
        ..SourceConfig::default()
    };
    let mut inventory = InMemoryInventory::new();
    plugin_for(&temp).build_into(&config, &mut inventory).unwrap();

    assert_eq!(inventory.group_hosts("all_services"), None);
}

#[test]
fn test_missing_mapping_file_error_names_path() {
    let temp = TempDir::new().unwrap();

    let config = SourceConfig::default();
    let mut inventory = InMemoryInventory::new();
    let err = plugin_for(&temp).build_into(&config, &mut inventory).unwrap_err();

    assert!(matches!(err, BuildError::Load(_)));
    let message = err.to_string();
    assert!(message.contains("not found"));
    assert!(message.contains(&temp.path().display().to_string()));
}

#[test]
fn test_schema_error_names_mapping_path() {
    let temp = TempDir::new().unwrap();
    write_mapping(
        temp.path(),
        "group_vars/all/service_mapping.yml",
        "not_the_right_key: {}\n",
    );

    let config = SourceConfig::default();
    let mut inventory = InMemoryInventory::new();
    let err = plugin_for(&temp).build_into(&config, &mut inventory).unwrap_err();

    assert!(matches!(err, BuildError::Schema { .. }));
    let message = err.to_string();
    assert!(message.contains("service_mapping.yml"));
    assert!(message.contains("service_mapping"));

    // Fatal before any mutation
    assert!(inventory.groups().is_empty());
}

#[test]
fn test_build_through_source_trait() {
    let temp = TempDir::new().unwrap();
    write_mapping(
        temp.path(),
        "group_vars/all/service_mapping.yml",
        "service_mapping:\n  web:\n    hostname: web1\n    ipv6: fd00::1\n",
    );

    let plugin = plugin_for(&temp);
    let source: &dyn InventorySource = &plugin;

    let config = SourceConfig::default();
    let mut inventory = InMemoryInventory::new();
    let report = source.build(&config, &mut inventory).unwrap();

    assert_eq!(report.entries, 1);
}
