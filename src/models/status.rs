// System metrics and entity count models for GET /api/status

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_total_gb: f64,
    pub memory_used_gb: f64,
}

/// Aggregate view over one entity table: all rows vs rows with `status = 'active'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub total: i64,
    pub active: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub system: SystemMetrics,
    pub tunnels: EntityCounts,
    pub nodes: EntityCounts,
}

/// Bytes per GiB; memory is reported in binary gigabytes.
pub const BYTES_PER_GB: f64 = 1_073_741_824.0;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}
