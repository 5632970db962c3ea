//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use postboard_core::ports::UploadStore;
use postboard_core::{NewUpload, PostboardError, UploadRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        let parent = Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        tokio::fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;

        // Check if directory is writable
        let test_file = parent.join(".write_test");
        match tokio::fs::write(&test_file, b"test").await {
            Ok(_) => {
                let _ = tokio::fs::remove_file(&test_file).await;
                tracing::debug!("Database directory is writable");
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Database directory is not writable: {}: {}",
                    parent.display(),
                    e
                ));
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, ensuring schema...");

        let db = Self { pool };
        db.ensure_schema()
            .await
            .context("Failed to create database schema")?;

        tracing::info!("Database initialization complete");

        Ok(db)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UploadStore for Database {
    async fn ensure_schema(&self) -> postboard_core::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                caption TEXT NOT NULL DEFAULT '',
                url TEXT NOT NULL,
                file_type TEXT NOT NULL,
                file_name TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn insert_upload(&self, upload: &NewUpload) -> postboard_core::Result<UploadRecord> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let id = sqlx::query(
            r#"
            INSERT INTO posts (caption, url, file_type, file_name)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&upload.caption)
        .bind(&upload.url)
        .bind(&upload.file_type)
        .bind(&upload.file_name)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?
        .last_insert_rowid();

        tx.commit().await.map_err(database_error)?;

        // Reload so store-generated columns are populated
        let row: UploadRow = sqlx::query_as(
            r#"
            SELECT id, caption, url, file_type, file_name, created_at
            FROM posts WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.into())
    }
}

fn database_error(e: sqlx::Error) -> PostboardError {
    PostboardError::Database(e.to_string())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct UploadRow {
    id: i64,
    caption: String,
    url: String,
    file_type: String,
    file_name: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UploadRow> for UploadRecord {
    fn from(r: UploadRow) -> Self {
        UploadRecord {
            id: r.id,
            caption: r.caption,
            url: r.url,
            file_type: r.file_type,
            file_name: r.file_name,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::{PLACEHOLDER_FILE_NAME, PLACEHOLDER_FILE_TYPE, PLACEHOLDER_URL};

    async fn open(dir: &tempfile::TempDir) -> Database {
        let path = dir.path().join("nested").join("uploads.db");
        Database::new(path.to_str().unwrap()).await.unwrap()
    }

    async fn count_uploads(db: &Database) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn test_insert_into_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir).await;

        let record = db
            .insert_upload(&NewUpload::placeholder("hello"))
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.caption, "hello");
        assert_eq!(record.url, PLACEHOLDER_URL);
        assert_eq!(record.file_type, PLACEHOLDER_FILE_TYPE);
        assert_eq!(record.file_name, PLACEHOLDER_FILE_NAME);

        let second = db.insert_upload(&NewUpload::placeholder("")).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(second.caption, "");
        assert_eq!(count_uploads(&db).await, 2);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir).await;

        db.insert_upload(&NewUpload::placeholder("keep me"))
            .await
            .unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
        assert_eq!(count_uploads(&db).await, 1);
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let db = open(&dir).await;
        db.insert_upload(&NewUpload::placeholder("first"))
            .await
            .unwrap();
        db.close().await;

        // Opening again runs the startup schema check a second time
        let db = open(&dir).await;
        assert_eq!(count_uploads(&db).await, 1);

        let record = db
            .insert_upload(&NewUpload::placeholder("second"))
            .await
            .unwrap();
        assert_eq!(record.id, 2);
    }

    #[tokio::test]
    async fn test_insert_after_close_fails_with_database_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir).await;
        db.close().await;

        let err = db
            .insert_upload(&NewUpload::placeholder("late"))
            .await
            .unwrap_err();
        assert!(matches!(err, PostboardError::Database(_)));
    }
}
