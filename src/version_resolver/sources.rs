// Individual version sources. Each returns None when the source is unusable.

use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tracing::debug;

/// Values that mean "unresolved" when read from git.
pub const GIT_PLACEHOLDERS: [&str; 4] = ["next", "latest", "main", "master"];
/// Values that mean "unresolved" when read from the VERSION file, env, or image labels.
pub const RELEASE_PLACEHOLDERS: [&str; 2] = ["next", "latest"];

pub fn strip_v(s: &str) -> &str {
    s.trim_start_matches('v')
}

/// `v1.2.3-4-gabcdef-dirty` -> `1.2.3`.
pub fn version_from_describe(stdout: &str) -> Option<String> {
    let raw = stdout.trim();
    if raw.is_empty() || raw.starts_with("fatal") {
        return None;
    }
    let version = strip_v(raw.split('-').next()?);
    if version.is_empty() || GIT_PLACEHOLDERS.contains(&version) {
        return None;
    }
    Some(version.to_string())
}

/// Placeholder check happens on the trimmed content, before `v` is stripped.
pub fn version_from_file(content: &str) -> Option<String> {
    let raw = content.trim();
    if raw.is_empty() || RELEASE_PLACEHOLDERS.contains(&raw) {
        return None;
    }
    let version = strip_v(raw);
    (!version.is_empty()).then(|| version.to_string())
}

/// First label in `keys` with a non-empty value; placeholders reject the lookup outright.
pub fn version_from_labels(labels: &HashMap<String, String>, keys: &[String]) -> Option<String> {
    let value = keys
        .iter()
        .find_map(|k| labels.get(k).filter(|v| !v.is_empty()))?;
    if RELEASE_PLACEHOLDERS.contains(&value.as_str()) {
        return None;
    }
    Some(strip_v(value).to_string())
}

/// Stdout of `git describe --tags --always --dirty` run in `cwd`.
pub async fn git_describe(cwd: &Path, timeout: Duration) -> Option<String> {
    let mut cmd = tokio::process::Command::new("git");
    cmd.args(["describe", "--tags", "--always", "--dirty"])
        .current_dir(cwd)
        .stdin(Stdio::null())
        .kill_on_drop(true);
    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(o)) => o,
        Ok(Err(e)) => {
            debug!("git describe could not run: {}", e);
            return None;
        }
        Err(_) => {
            debug!("git describe timed out after {:?}", timeout);
            return None;
        }
    };
    if !output.status.success() {
        debug!("git describe exited with {}", output.status);
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

pub async fn read_to_string(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(s) => Some(s),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "version source unreadable");
            None
        }
    }
}
