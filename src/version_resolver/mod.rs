// Version resolution: git tag -> VERSION file -> env (with container label lookup) -> package version.

pub mod sources;

use crate::config::VersionConfig;
use crate::sysinfo_repo::linux;
use crate::version::VERSION;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Looks up the image labels of a running container.
pub trait LabelSource: Send + Sync {
    fn container_labels(
        &self,
        container_id: &str,
    ) -> impl Future<Output = Option<HashMap<String, String>>> + Send;
}

pub struct VersionResolver<L> {
    config: VersionConfig,
    labels: Option<Arc<L>>,
}

impl<L: LabelSource> VersionResolver<L> {
    /// `labels` is `None` when no container runtime client could be built.
    pub fn new(config: VersionConfig, labels: Option<Arc<L>>) -> Self {
        Self { config, labels }
    }

    /// Best-effort version string; never fails.
    #[instrument(skip(self), fields(operation = "resolve_version"))]
    pub async fn resolve(&self) -> String {
        let env_value = std::env::var(&self.config.env_var).ok();
        self.resolve_with_env(env_value.as_deref()).await
    }

    /// Same chain as [`resolve`](Self::resolve) with the environment value supplied by the caller.
    pub async fn resolve_with_env(&self, env_value: Option<&str>) -> String {
        if let Some(v) = self.from_git().await {
            debug!(source = "git", version = %v, "version resolved");
            return v;
        }
        if let Some(v) = self.from_version_file().await {
            debug!(source = "file", version = %v, "version resolved");
            return v;
        }
        if let Some(v) = self.from_env(env_value).await {
            debug!(source = "env", version = %v, "version resolved");
            return v;
        }
        debug!(source = "fallback", version = VERSION, "version resolved");
        VERSION.to_string()
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.command_timeout_ms)
    }

    async fn from_git(&self) -> Option<String> {
        let stdout = sources::git_describe(&self.config.app_root, self.timeout()).await?;
        sources::version_from_describe(&stdout)
    }

    async fn from_version_file(&self) -> Option<String> {
        let content = sources::read_to_string(&self.config.version_file_path()).await?;
        sources::version_from_file(&content)
    }

    /// A `next`/`latest` env value means "ask the container"; if that yields nothing the raw
    /// value is returned as-is. Any other value is only stripped of its `v` prefix.
    async fn from_env(&self, value: Option<&str>) -> Option<String> {
        let value = value.filter(|v| !v.is_empty())?;
        if sources::RELEASE_PLACEHOLDERS.contains(&value) {
            let labelled = self.from_container_label().await;
            return Some(labelled.unwrap_or_else(|| value.to_string()));
        }
        Some(sources::strip_v(value).to_string())
    }

    async fn from_container_label(&self) -> Option<String> {
        let label_source = self.labels.as_ref()?;
        let cgroup = sources::read_to_string(&self.config.cgroup_path).await?;
        let container_id = linux::container_id_from_cgroup(&cgroup)?;
        let labels = label_source.container_labels(&container_id).await?;
        sources::version_from_labels(&labels, &self.config.label_keys)
    }
}
