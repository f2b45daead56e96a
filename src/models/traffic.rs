// Network counter sample and traffic rate models

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One read of the cumulative byte counters, summed over all non-loopback interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSample {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRate {
    pub rx_bytes_per_sec: u64,
    pub tx_bytes_per_sec: u64,
    pub rx_mbps: f64,
    pub tx_mbps: f64,
}

impl TrafficRate {
    /// Per-second rate for two samples taken `elapsed` apart.
    /// A counter that went backwards (reset or wrap) reports 0.
    pub fn between(first: CounterSample, second: CounterSample, elapsed: Duration) -> Self {
        let rx = per_second(second.rx_bytes.saturating_sub(first.rx_bytes), elapsed);
        let tx = per_second(second.tx_bytes.saturating_sub(first.tx_bytes), elapsed);
        Self {
            rx_bytes_per_sec: rx,
            tx_bytes_per_sec: tx,
            rx_mbps: bytes_per_sec_to_mbps(rx),
            tx_mbps: bytes_per_sec_to_mbps(tx),
        }
    }
}

fn per_second(delta: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0;
    }
    (delta as f64 / secs).round() as u64
}

/// Megabits per second, rounded to 4 decimal places.
pub fn bytes_per_sec_to_mbps(bytes_per_sec: u64) -> f64 {
    let mbps = bytes_per_sec as f64 * 8.0 / 1_000_000.0;
    (mbps * 10_000.0).round() / 10_000.0
}
