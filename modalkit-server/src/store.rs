//! Durable storage for saved modal configs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use modalkit_common::ModalConfig;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A config as it sits in the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredConfig {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub config: ModalConfig,
    pub published: bool,
}

impl StoredConfig {
    fn new(config: ModalConfig, published: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            config,
            published,
        }
    }
}

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Save a new record under a fresh id
    async fn insert(&self, config: ModalConfig, published: bool)
        -> Result<StoredConfig, StoreError>;

    async fn fetch(&self, id: &str) -> Result<Option<StoredConfig>, StoreError>;
}

pub struct SqliteConfigStore {
    pool: SqlitePool,
}

impl SqliteConfigStore {
    /// Open (or create) the database at `url` and make sure the table exists
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS modal_configs (
                id TEXT PRIMARY KEY,
                created_at TEXT NOT NULL,
                config TEXT NOT NULL,
                published INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&pool)
        .await?;

        info!("modal_configs table ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ConfigStore for SqliteConfigStore {
    async fn insert(
        &self,
        config: ModalConfig,
        published: bool,
    ) -> Result<StoredConfig, StoreError> {
        let record = StoredConfig::new(config, published);
        let json = serde_json::to_string(&record.config)?;

        sqlx::query(
            "INSERT INTO modal_configs (id, created_at, config, published) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(record.created_at)
        .bind(json)
        .bind(record.published)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn fetch(&self, id: &str) -> Result<Option<StoredConfig>, StoreError> {
        let row = sqlx::query(
            "SELECT id, created_at, config, published FROM modal_configs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let json: String = row.try_get("config")?;
        Ok(Some(StoredConfig {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            config: serde_json::from_str(&json)?,
            published: row.try_get("published")?,
        }))
    }
}

/// Process-local store for router tests
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryConfigStore {
    records: tokio::sync::RwLock<std::collections::HashMap<String, StoredConfig>>,
}

#[cfg(test)]
#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn insert(
        &self,
        config: ModalConfig,
        published: bool,
    ) -> Result<StoredConfig, StoreError> {
        let record = StoredConfig::new(config, published);
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn fetch(&self, id: &str) -> Result<Option<StoredConfig>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteConfigStore {
        // One connection so every query sees the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteConfigStore::from_pool(pool).await.unwrap()
    }

    #[tokio::test]
    async fn sqlite_insert_then_fetch() {
        let store = memory_store().await;
        let saved = store.insert(ModalConfig::starter(), true).await.unwrap();

        let loaded = store.fetch(&saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.id, saved.id);
        assert_eq!(loaded.config, ModalConfig::starter());
        assert!(loaded.published);
        assert_eq!(loaded.created_at.timestamp(), saved.created_at.timestamp());
    }

    #[tokio::test]
    async fn sqlite_unknown_id_is_none() {
        let store = memory_store().await;
        assert!(store.fetch("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn every_insert_gets_a_new_id() {
        let store = memory_store().await;
        let a = store.insert(ModalConfig::starter(), false).await.unwrap();
        let b = store.insert(ModalConfig::starter(), false).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(!store.fetch(&a.id).await.unwrap().unwrap().published);
    }

    #[tokio::test]
    async fn in_memory_store_round_trip() {
        let store = InMemoryConfigStore::default();
        let saved = store.insert(ModalConfig::default(), false).await.unwrap();
        assert_eq!(store.fetch(&saved.id).await.unwrap(), Some(saved));
        assert_eq!(store.fetch("missing").await.unwrap(), None);
    }
}
