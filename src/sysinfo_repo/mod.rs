// System metrics via sysinfo

pub mod linux;

use crate::models::{SystemMetrics, bytes_to_gb};
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::instrument;

pub struct SysinfoRepo {
    cpu_window: Duration,
}

fn metrics_refresh_kind() -> RefreshKind {
    RefreshKind::nothing()
        .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
        .with_memory(MemoryRefreshKind::nothing().with_ram())
}

impl SysinfoRepo {
    pub fn new(cpu_window: Duration) -> Self {
        Self { cpu_window }
    }

    /// CPU utilization measured across a blocking window, plus current memory usage.
    /// Each call samples with its own `System` on the blocking pool, so concurrent
    /// requests overlap their windows instead of queueing.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_system_metrics"))]
    pub async fn get_system_metrics(&self) -> anyhow::Result<SystemMetrics> {
        let window = self.cpu_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        tokio::task::spawn_blocking(move || {
            let mut sys = System::new_with_specifics(metrics_refresh_kind());

            std::thread::sleep(window);
            sys.refresh_cpu_usage();
            let cpu_percent = (sys.global_cpu_usage() as f64).clamp(0.0, 100.0);

            sys.refresh_memory();
            let total = sys.total_memory();
            let used = total.saturating_sub(sys.available_memory());
            let memory_percent = if total > 0 {
                (used as f64 / total as f64) * 100.0
            } else {
                0.0
            };

            SystemMetrics {
                cpu_percent,
                memory_percent,
                memory_total_gb: bytes_to_gb(total),
                memory_used_gb: bytes_to_gb(used),
            }
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))
    }
}
