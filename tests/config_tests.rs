// Config loading and validation tests

use smite_status::config::AppConfig;
use std::path::PathBuf;

const VALID_CONFIG: &str = r#"
[server]
port = 8000
host = "0.0.0.0"

[database]
path = "data/smite.db"
max_pool_size = 5

[version]
app_root = "/srv/panel"
env_var = "SMITE_VERSION"
cgroup_path = "/proc/self/cgroup"
command_timeout_ms = 1500

[metrics]
cpu_sample_window_ms = 1000

[traffic]
net_dev_path = "/proc/net/dev"
loopback = "lo"
sample_interval_ms = 1000
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 8000
host = "0.0.0.0"

[database]
path = "data/smite.db"
max_pool_size = 5
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.database.path, "data/smite.db");
    assert_eq!(config.database.max_pool_size, 5);
    assert_eq!(config.version.app_root, PathBuf::from("/srv/panel"));
    assert_eq!(config.version.command_timeout_ms, 1500);
    assert_eq!(config.traffic.loopback, "lo");
}

#[test]
fn test_optional_sections_use_defaults() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("load_from_str");
    assert_eq!(config.version.app_root, PathBuf::from("/app"));
    assert_eq!(config.version.env_var, "SMITE_VERSION");
    assert_eq!(config.version.cgroup_path, PathBuf::from("/proc/self/cgroup"));
    assert_eq!(config.version.command_timeout_ms, 2000);
    assert_eq!(
        config.version.label_keys,
        vec![
            "smite.version".to_string(),
            "org.opencontainers.image.version".to_string()
        ]
    );
    assert_eq!(config.metrics.cpu_sample_window_ms, 1000);
    assert_eq!(config.traffic.net_dev_path, PathBuf::from("/proc/net/dev"));
    assert_eq!(config.traffic.sample_interval_ms, 1000);
}

#[test]
fn test_version_file_defaults_under_app_root() {
    let config = AppConfig::load_from_str(VALID_CONFIG).unwrap();
    assert_eq!(
        config.version.version_file_path(),
        PathBuf::from("/srv/panel/VERSION")
    );

    let explicit = VALID_CONFIG.replace(
        "app_root = \"/srv/panel\"",
        "app_root = \"/srv/panel\"\nversion_file = \"/etc/smite/VERSION\"",
    );
    let config = AppConfig::load_from_str(&explicit).unwrap();
    assert_eq!(
        config.version.version_file_path(),
        PathBuf::from("/etc/smite/VERSION")
    );
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8000", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_db_path() {
    let bad = VALID_CONFIG.replace("path = \"data/smite.db\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("database.path"));
}

#[test]
fn test_config_validation_rejects_zero_pool_size() {
    let bad = VALID_CONFIG.replace("max_pool_size = 5", "max_pool_size = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("database.max_pool_size"));
}

#[test]
fn test_config_validation_caps_command_timeout() {
    let bad = VALID_CONFIG.replace("command_timeout_ms = 1500", "command_timeout_ms = 5000");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("version.command_timeout_ms"));

    let bad = VALID_CONFIG.replace("command_timeout_ms = 1500", "command_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("version.command_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_empty_label_keys() {
    let bad = VALID_CONFIG.replace(
        "command_timeout_ms = 1500",
        "command_timeout_ms = 1500\nlabel_keys = []",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("version.label_keys"));
}

#[test]
fn test_config_validation_rejects_zero_intervals() {
    let bad = VALID_CONFIG.replace("cpu_sample_window_ms = 1000", "cpu_sample_window_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("metrics.cpu_sample_window_ms"));

    let bad = VALID_CONFIG.replace("sample_interval_ms = 1000", "sample_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("traffic.sample_interval_ms"));
}

#[test]
fn test_config_rejects_missing_server_section() {
    let bad = VALID_CONFIG.replace("[server]\nport = 8000\nhost = \"0.0.0.0\"\n", "");
    assert!(AppConfig::load_from_str(&bad).is_err());
}
