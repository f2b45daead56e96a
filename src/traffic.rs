// Live traffic: two reads of the interface counters, one interval apart.

use crate::config::TrafficConfig;
use crate::models::TrafficRate;
use crate::sysinfo_repo::linux;
use std::path::PathBuf;
use std::time::Duration;
use tracing::instrument;

pub struct TrafficSampler {
    net_dev_path: PathBuf,
    loopback: String,
    interval: Duration,
}

impl TrafficSampler {
    pub fn new(config: &TrafficConfig) -> Self {
        Self {
            net_dev_path: config.net_dev_path.clone(),
            loopback: config.loopback.clone(),
            interval: Duration::from_millis(config.sample_interval_ms),
        }
    }

    /// Bytes per second over one interval (one second by default). Sleeps asynchronously
    /// between samples and never fails; an unreadable counter table counts as zero traffic.
    #[instrument(skip(self), fields(operation = "sample_rate"))]
    pub async fn sample_rate(&self) -> TrafficRate {
        let first = linux::read_net_counters(&self.net_dev_path, &self.loopback).await;
        tokio::time::sleep(self.interval).await;
        let second = linux::read_net_counters(&self.net_dev_path, &self.loopback).await;
        TrafficRate::between(first, second, self.interval)
    }
}
