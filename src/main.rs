use anyhow::Result;
use smite_status::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!("{} {} starting", version::NAME, version::VERSION);

    let docker_repo = match docker_repo::DockerRepo::connect(Duration::from_millis(
        app_config.version.command_timeout_ms,
    )) {
        Ok(r) => Some(Arc::new(r)),
        Err(e) => {
            tracing::warn!("Docker client unavailable, image labels disabled: {}", e);
            None
        }
    };
    let version_resolver = Arc::new(version_resolver::VersionResolver::new(
        app_config.version.clone(),
        docker_repo,
    ));

    let sysinfo_repo = Arc::new(sysinfo_repo::SysinfoRepo::new(Duration::from_millis(
        app_config.metrics.cpu_sample_window_ms,
    )));
    let store_repo = Arc::new(
        store_repo::StoreRepo::connect(&app_config.database.path, app_config.database.max_pool_size)
            .await?,
    );
    store_repo.init().await?;
    let traffic_sampler = Arc::new(traffic::TrafficSampler::new(&app_config.traffic));

    let app = routes::app(routes::AppState {
        version_resolver,
        sysinfo_repo,
        store_repo,
        traffic_sampler,
    });
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let in_container = std::path::Path::new("/.dockerenv").exists()
        || std::env::var("CONTAINER").as_deref() == Ok("1");

    if in_container {
        // In Docker: run until error or SIGTERM ends the process
        axum::serve(listener, app).await?;
    } else {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Received shutdown signal");
}
