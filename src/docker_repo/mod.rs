// Docker container labels via bollard

use crate::version_resolver::LabelSource;
use bollard::Docker;
use bollard::query_parameters::InspectContainerOptions;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct DockerRepo {
    docker: Docker,
    timeout: Duration,
}

impl DockerRepo {
    /// Builds a client for the local daemon socket. No request is made until the first inspect.
    pub fn connect(timeout: Duration) -> anyhow::Result<Self> {
        let docker = Docker::connect_with_unix_defaults()?;
        Ok(Self { docker, timeout })
    }

    /// `Config.Labels` of a container, or `None` when the daemon is unreachable,
    /// the container is unknown, or the call exceeds the timeout.
    #[instrument(skip(self), fields(repo = "docker", operation = "container_labels"))]
    pub async fn inspect_labels(&self, container_id: &str) -> Option<HashMap<String, String>> {
        let inspect = self
            .docker
            .inspect_container(container_id, None::<InspectContainerOptions>);
        let response = match tokio::time::timeout(self.timeout, inspect).await {
            Ok(Ok(r)) => r,
            Ok(Err(e)) => {
                debug!("Docker inspect failed for {}: {}", container_id, e);
                return None;
            }
            Err(_) => {
                debug!("Docker inspect timed out for {}", container_id);
                return None;
            }
        };
        response.config.and_then(|c| c.labels)
    }
}

impl LabelSource for DockerRepo {
    async fn container_labels(&self, container_id: &str) -> Option<HashMap<String, String>> {
        self.inspect_labels(container_id).await
    }
}
