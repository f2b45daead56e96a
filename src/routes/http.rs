// GET handlers: status, version, traffic

use axum::{Json, extract::State};

use super::AppState;
use crate::error::ApiError;
use crate::models::{StatusReport, TrafficRate, VersionInfo};
use crate::store_repo::EntityKind;

/// GET /api/status/version: best-effort version from git, VERSION file, image label or env.
pub(super) async fn version_handler(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(VersionInfo {
        version: state.version_resolver.resolve().await,
    })
}

/// GET /api/status: CPU/memory plus tunnel and node counts. Store failures become a 500.
pub(super) async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusReport>, ApiError> {
    let system = state.sysinfo_repo.get_system_metrics().await?;
    let tunnels = state.store_repo.entity_counts(EntityKind::Tunnel).await?;
    let nodes = state.store_repo.entity_counts(EntityKind::Node).await?;
    Ok(Json(StatusReport {
        system,
        tunnels,
        nodes,
    }))
}

/// GET /api/status/traffic: rx/tx rate over a one-second window.
pub(super) async fn traffic_handler(State(state): State<AppState>) -> Json<TrafficRate> {
    Json(state.traffic_sampler.sample_rate().await)
}
