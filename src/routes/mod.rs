// HTTP routes for the panel status API

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::docker_repo::DockerRepo;
use crate::store_repo::StoreRepo;
use crate::sysinfo_repo::SysinfoRepo;
use crate::traffic::TrafficSampler;
use crate::version_resolver::VersionResolver;

pub const STATUS_PATH: &str = "/api/status";
pub const VERSION_PATH: &str = "/api/status/version";
pub const TRAFFIC_PATH: &str = "/api/status/traffic";

#[derive(Clone)]
pub struct AppState {
    pub version_resolver: Arc<VersionResolver<DockerRepo>>,
    pub sysinfo_repo: Arc<SysinfoRepo>,
    pub store_repo: Arc<StoreRepo>,
    pub traffic_sampler: Arc<TrafficSampler>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(STATUS_PATH, get(http::status_handler)) // GET /api/status
        .route(VERSION_PATH, get(http::version_handler)) // GET /api/status/version
        .route(TRAFFIC_PATH, get(http::traffic_handler)) // GET /api/status/traffic
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
