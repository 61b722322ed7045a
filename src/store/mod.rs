//! Content repository
//!
//! The sole integration point with persistent storage. The whole Site
//! Content document lives in one SQLite row as JSON, keyed by
//! [`CONTENT_ID`](crate::content::CONTENT_ID); the row key is storage
//! bookkeeping and never appears inside the document handed to callers.
//!
//! Reads favor availability: any storage problem is logged and masked by
//! the canonical defaults. Writes favor integrity: validation failures and
//! storage errors abort the save and are surfaced verbatim.

use std::path::Path;

use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::{
    default_document, reconcile, validate_document, SiteContent, Violation, CONTENT_ID,
};

/// A failed save, reported to the caller in full
#[derive(Debug, Error)]
pub enum SaveError {
    /// The document failed validation; nothing was written
    #[error("validation failed")]
    Invalid(Vec<Violation>),

    /// No content database is configured
    #[error("content storage is not configured")]
    NotConfigured,

    /// A database was configured but could not be opened at startup
    #[error("content storage is unavailable: {0}")]
    Unavailable(String),

    /// The write itself failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository over the single persisted content document
#[derive(Clone)]
pub struct ContentRepository {
    pool: Option<SqlitePool>,
    configured: bool,
}

impl ContentRepository {
    /// Repository with no backing storage; reads serve defaults, writes fail
    pub fn without_storage() -> Self {
        Self {
            pool: None,
            configured: false,
        }
    }

    /// Open (creating if needed) the content database at `db_path`
    pub async fn open(db_path: &Path) -> Result<Self, sqlx::Error> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
            }
        }

        let newly_created = !db_path.exists();
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        create_content_table(&pool).await?;

        if newly_created {
            info!("Initialized new content database: {}", db_path.display());
        } else {
            debug!("Opened content database: {}", db_path.display());
        }

        Ok(Self {
            pool: Some(pool),
            configured: true,
        })
    }

    /// Open storage per the configuration, degrading instead of failing
    ///
    /// A missing database setting runs the site on defaults only. A
    /// configured database that cannot be opened is logged; reads fall back
    /// to defaults and writes report the outage.
    pub async fn connect(db_path: Option<&Path>) -> Self {
        let Some(path) = db_path else {
            info!("No content database configured, serving default content");
            return Self::without_storage();
        };

        match Self::open(path).await {
            Ok(repo) => repo,
            Err(e) => {
                warn!("Could not open content database {}: {}", path.display(), e);
                Self {
                    pool: None,
                    configured: true,
                }
            }
        }
    }

    /// Whether a usable database connection exists
    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Read the current content document, reconciled against defaults
    ///
    /// Never fails. Seeds storage with the default document on first read.
    /// A reconciled document that still fails validation is logged and
    /// served anyway; the public site prefers stale shape over no page.
    pub async fn load_document(&self) -> Value {
        let default = default_document();

        let Some(pool) = &self.pool else {
            return default;
        };

        let stored = match fetch_document(pool).await {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                if let Err(e) = insert_document(pool, &default).await {
                    warn!("Failed to seed default content: {}", e);
                } else {
                    info!("Seeded storage with default content");
                }
                return default;
            }
            Err(e) => {
                warn!("Failed to fetch site content, falling back to defaults: {}", e);
                return default;
            }
        };

        let merged = reconcile(&default, &stored);
        if let Err(violations) = validate_document(&merged) {
            for v in &violations {
                warn!("Stored content failed validation: {}", v);
            }
        }
        merged
    }

    /// Validate and persist a full replacement document
    ///
    /// The entire field set is replaced via an upsert on the fixed id; no
    /// partial write occurs. Returns the typed content that was stored.
    pub async fn save(&self, document: &Value) -> Result<SiteContent, SaveError> {
        let content = validate_document(document).map_err(SaveError::Invalid)?;

        let pool = match &self.pool {
            Some(pool) => pool,
            None if self.configured => {
                return Err(SaveError::Unavailable(
                    "database connection failed at startup".to_string(),
                ))
            }
            None => return Err(SaveError::NotConfigured),
        };

        upsert_document(pool, document).await?;
        info!("Saved site content");
        Ok(content)
    }

    /// Seed the default document if none exists yet
    ///
    /// Returns `true` when this call inserted the seed.
    pub async fn seed(&self) -> Result<bool, SaveError> {
        let pool = match &self.pool {
            Some(pool) => pool,
            None if self.configured => {
                return Err(SaveError::Unavailable(
                    "database connection failed at startup".to_string(),
                ))
            }
            None => return Err(SaveError::NotConfigured),
        };

        if fetch_document(pool).await?.is_some() {
            return Ok(false);
        }
        insert_document(pool, &default_document()).await?;
        Ok(true)
    }
}

async fn create_content_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS site_content (
            id TEXT PRIMARY KEY,
            document TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn fetch_document(pool: &SqlitePool) -> Result<Option<Value>, sqlx::Error> {
    let row: Option<String> =
        sqlx::query_scalar("SELECT document FROM site_content WHERE id = ?")
            .bind(CONTENT_ID)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|text| match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(e) => {
            // Treated as absent-shaped; reconciliation fills every field
            warn!("Stored content document is not valid JSON: {}", e);
            Value::Null
        }
    }))
}

async fn insert_document(pool: &SqlitePool, document: &Value) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO site_content (id, document, updated_at) VALUES (?, ?, ?)")
        .bind(CONTENT_ID)
        .bind(document.to_string())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(pool)
        .await?;
    Ok(())
}

async fn upsert_document(pool: &SqlitePool, document: &Value) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO site_content (id, document, updated_at) VALUES (?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
            document = excluded.document,
            updated_at = excluded.updated_at",
    )
    .bind(CONTENT_ID)
    .bind(document.to_string())
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    async fn open_repo(dir: &TempDir) -> ContentRepository {
        ContentRepository::open(&dir.path().join("content.db"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_first_read_seeds_and_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        assert_eq!(repo.load_document().await, default_document());
        // the seed persisted: a fresh handle still finds the document
        let again = open_repo(&dir).await;
        assert!(!again.seed().await.unwrap());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let mut doc = default_document();
        doc["artistName"] = json!("Test Artist");
        repo.save(&doc).await.unwrap();

        let read = repo.load_document().await;
        assert_eq!(read["artistName"], json!("Test Artist"));
        // every other field is untouched
        let default = default_document();
        for (key, value) in default.as_object().unwrap() {
            if key != "artistName" {
                assert_eq!(&read[key], value, "field {key} changed unexpectedly");
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_write_is_rejected_and_storage_unchanged() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let mut good = default_document();
        good["artistName"] = json!("Before");
        repo.save(&good).await.unwrap();

        let mut bad = default_document();
        bad["contact"]["email"] = json!("not-an-email");
        match repo.save(&bad).await {
            Err(SaveError::Invalid(violations)) => {
                assert!(violations.iter().any(|v| v.path == "contact.email"));
            }
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }

        assert_eq!(repo.load_document().await["artistName"], json!("Before"));
    }

    #[tokio::test]
    async fn test_emptied_list_reads_back_as_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let mut doc = default_document();
        doc["tourDates"] = json!([]);
        repo.save(&doc).await.unwrap();

        // empty-by-write is indistinguishable from empty-by-absence on
        // read, and the empty-list guard applies: defaults come back
        let read = repo.load_document().await;
        assert_eq!(read["tourDates"], default_document()["tourDates"]);
    }

    #[tokio::test]
    async fn test_partial_stored_document_is_reconciled() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        // simulate an old-schema row written before newer fields existed
        let pool = repo.pool.as_ref().unwrap();
        upsert_document(pool, &json!({ "artistName": "Legacy" }))
            .await
            .unwrap();

        let read = repo.load_document().await;
        assert_eq!(read["artistName"], json!("Legacy"));
        assert_eq!(read["tourDates"], default_document()["tourDates"]);
        assert_eq!(read["contact"], default_document()["contact"]);
    }

    #[tokio::test]
    async fn test_without_storage_reads_defaults_and_rejects_writes() {
        let repo = ContentRepository::without_storage();
        assert_eq!(repo.load_document().await, default_document());
        assert!(matches!(
            repo.save(&default_document()).await,
            Err(SaveError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_malformed_stored_json_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let pool = repo.pool.as_ref().unwrap();
        sqlx::query("INSERT INTO site_content (id, document, updated_at) VALUES (?, ?, ?)")
            .bind(CONTENT_ID)
            .bind("{ this is not json")
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(pool)
            .await
            .unwrap();

        assert_eq!(repo.load_document().await, default_document());
    }
}
