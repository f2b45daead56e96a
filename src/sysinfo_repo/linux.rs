// Linux-specific helpers: /proc/net/dev counters and /proc/self/cgroup membership.

use crate::models::CounterSample;
use std::num::ParseIntError;
use std::path::Path;

/// Column of the receive-bytes counter in a /proc/net/dev row (after the `iface:` prefix).
const RX_BYTES_FIELD: usize = 0;
/// Column of the transmit-bytes counter.
const TX_BYTES_FIELD: usize = 8;

/// Sum rx/tx byte counters over every interface except `loopback`.
/// Header lines (no `:`) and short rows are skipped; a malformed counter fails the whole table.
pub fn parse_net_dev(content: &str, loopback: &str) -> Result<CounterSample, ParseIntError> {
    let mut sample = CounterSample::default();
    for line in content.lines() {
        let Some((name, rest)) = line.trim().split_once(':') else {
            continue;
        };
        if name.trim() == loopback {
            continue;
        }
        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() < 10 {
            continue;
        }
        sample.rx_bytes = sample
            .rx_bytes
            .saturating_add(fields[RX_BYTES_FIELD].parse::<u64>()?);
        sample.tx_bytes = sample
            .tx_bytes
            .saturating_add(fields[TX_BYTES_FIELD].parse::<u64>()?);
    }
    Ok(sample)
}

/// Read and sum the counter table. Any failure yields a zero sample.
pub async fn read_net_counters(path: &Path, loopback: &str) -> CounterSample {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "net counters unreadable");
            return CounterSample::default();
        }
    };
    parse_net_dev(&content, loopback).unwrap_or_else(|e| {
        tracing::debug!(path = %path.display(), error = %e, "net counters malformed");
        CounterSample::default()
    })
}

/// Container ID from cgroup membership: first line mentioning docker or containerd,
/// last path segment. Systemd scope units (`docker-<id>.scope`) are reduced to the bare ID.
pub fn container_id_from_cgroup(content: &str) -> Option<String> {
    let line = content
        .lines()
        .find(|l| l.contains("docker") || l.contains("containerd"))?;
    let segment = line.rsplit('/').next()?.trim();
    let id = segment.strip_suffix(".scope").unwrap_or(segment);
    let id = id
        .strip_prefix("docker-")
        .or_else(|| id.strip_prefix("cri-containerd-"))
        .unwrap_or(id);
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
