// SQLite panel store. Only aggregate counts over tunnels and nodes are read here.

use crate::models::EntityCounts;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

/// Status value counted as active.
pub const ACTIVE_STATUS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tunnel,
    Node,
}

impl EntityKind {
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Tunnel => "tunnels",
            EntityKind::Node => "nodes",
        }
    }
}

pub struct StoreRepo {
    pool: SqlitePool,
}

impl StoreRepo {
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    /// Creates the entity tables on a fresh database so counts start at zero.
    pub async fn init(&self) -> anyhow::Result<()> {
        for kind in [EntityKind::Tunnel, EntityKind::Node] {
            sqlx::query(&format!(
                "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, name TEXT, status TEXT NOT NULL)",
                kind.table()
            ))
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    #[instrument(skip(self), fields(repo = "store", operation = "count"))]
    pub async fn count(&self, kind: EntityKind) -> anyhow::Result<i64> {
        let n: Option<i64> = sqlx::query_scalar(&format!("SELECT COUNT(id) FROM {}", kind.table()))
            .fetch_one(&self.pool)
            .await?;
        Ok(n.unwrap_or(0))
    }

    #[instrument(skip(self), fields(repo = "store", operation = "count_active"))]
    pub async fn count_active(&self, kind: EntityKind) -> anyhow::Result<i64> {
        let n: Option<i64> = sqlx::query_scalar(&format!(
            "SELECT COUNT(id) FROM {} WHERE status = $1",
            kind.table()
        ))
        .bind(ACTIVE_STATUS)
        .fetch_one(&self.pool)
        .await?;
        Ok(n.unwrap_or(0))
    }

    pub async fn entity_counts(&self, kind: EntityKind) -> anyhow::Result<EntityCounts> {
        Ok(EntityCounts {
            total: self.count(kind).await?,
            active: self.count_active(kind).await?,
        })
    }
}
