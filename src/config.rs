use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub version: VersionConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub traffic: TrafficConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_pool_size: u32,
}

/// Sources consulted by the version resolver, in fallback order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Working directory for `git describe`.
    pub app_root: PathBuf,
    /// Defaults to `<app_root>/VERSION` when unset.
    pub version_file: Option<PathBuf>,
    pub env_var: String,
    pub cgroup_path: PathBuf,
    /// Upper bound for each subprocess / Docker call.
    pub command_timeout_ms: u64,
    /// Image labels checked in order; first non-empty value wins.
    pub label_keys: Vec<String>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("/app"),
            version_file: None,
            env_var: "SMITE_VERSION".into(),
            cgroup_path: PathBuf::from("/proc/self/cgroup"),
            command_timeout_ms: 2000,
            label_keys: vec![
                "smite.version".into(),
                "org.opencontainers.image.version".into(),
            ],
        }
    }
}

impl VersionConfig {
    pub fn version_file_path(&self) -> PathBuf {
        self.version_file
            .clone()
            .unwrap_or_else(|| self.app_root.join("VERSION"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Blocking window over which CPU utilization is measured.
    pub cpu_sample_window_ms: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            cpu_sample_window_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    pub net_dev_path: PathBuf,
    /// Interface excluded from the byte totals.
    pub loopback: String,
    pub sample_interval_ms: u64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            net_dev_path: PathBuf::from("/proc/net/dev"),
            loopback: "lo".into(),
            sample_interval_ms: 1000,
        }
    }
}

/// Subprocess and Docker calls made while resolving the version never wait longer than this.
pub const MAX_COMMAND_TIMEOUT_MS: u64 = 2000;

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        anyhow::ensure!(
            !self.version.env_var.is_empty(),
            "version.env_var must be non-empty"
        );
        anyhow::ensure!(
            (1..=MAX_COMMAND_TIMEOUT_MS).contains(&self.version.command_timeout_ms),
            "version.command_timeout_ms must be between 1 and {}, got {}",
            MAX_COMMAND_TIMEOUT_MS,
            self.version.command_timeout_ms
        );
        anyhow::ensure!(
            !self.version.label_keys.is_empty(),
            "version.label_keys must contain at least one label"
        );
        anyhow::ensure!(
            self.metrics.cpu_sample_window_ms > 0,
            "metrics.cpu_sample_window_ms must be > 0, got {}",
            self.metrics.cpu_sample_window_ms
        );
        anyhow::ensure!(
            !self.traffic.loopback.is_empty(),
            "traffic.loopback must be non-empty"
        );
        anyhow::ensure!(
            self.traffic.sample_interval_ms > 0,
            "traffic.sample_interval_ms must be > 0, got {}",
            self.traffic.sample_interval_ms
        );
        Ok(())
    }
}
