// Shared test helpers

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// /proc/net/dev as seen on a host with loopback, a wired and a wireless interface.
pub const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 9000000    1200    0    0    0     0          0         0  9000000    1200    0    0    0     0       0          0
  eth0: 1000000     800    0    0    0     0          0         0   250000     400    0    0    0     0       0          0
 wlan0:  500000     300    0    0    0     0          0         0    50000     100    0    0    0     0       0          0
";

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Config with every filesystem source pointed into `dir`.
pub fn config_toml(dir: &Path) -> String {
    format!(
        r#"
[server]
port = 8000
host = "127.0.0.1"

[database]
path = "{db}"
max_pool_size = 2

[version]
app_root = "{root}"
env_var = "SMITE_STATUS_TEST_UNSET_VERSION"
cgroup_path = "{cgroup}"
command_timeout_ms = 2000

[metrics]
cpu_sample_window_ms = 200

[traffic]
net_dev_path = "{net_dev}"
loopback = "lo"
sample_interval_ms = 50
"#,
        db = dir.join("panel.db").display(),
        root = dir.display(),
        cgroup = dir.join("cgroup").display(),
        net_dev = dir.join("net_dev").display(),
    )
}
