// Wire models for the status endpoints

mod status;
mod traffic;
mod version;

pub use status::{BYTES_PER_GB, EntityCounts, StatusReport, SystemMetrics, bytes_to_gb};
pub use traffic::{CounterSample, TrafficRate, bytes_per_sec_to_mbps};
pub use version::VersionInfo;
