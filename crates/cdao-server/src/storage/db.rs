//! SQLite storage backend (embedded, no external service)

use async_trait::async_trait;
use cdao_core::{CdaoError, ContactMessageStore, DashboardStore, Result, SubscriberStore};
use cdao_types::{Activity, ContactMessage, Deal, Metric, NewContactMessage, Subscriber};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;

use super::demo;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn connect(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    CdaoError::Database(format!(
                        "failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
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
            .map_err(|e| {
                CdaoError::Database(format!(
                    "failed to connect to SQLite database at {}: {}",
                    database_path, e
                ))
            })?;

        Self::run_migrations(&pool).await?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // The UNIQUE constraint on email is the authoritative duplicate
        // signal; concurrent writers cannot race past it the way an
        // application-level existence check could.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS subscribers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(db_error)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                organization TEXT,
                phone TEXT,
                privacy_agreed INTEGER NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }
}

#[async_trait]
impl SubscriberStore for Database {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber> {
        let result = sqlx::query(
            r#"
            INSERT INTO subscribers (email) VALUES (?1)
            "#,
        )
        .bind(email)
        .execute(&*self.pool)
        .await
        .map_err(|e| insert_error(e, email))?;

        let row: SubscriberRow = sqlx::query_as(
            r#"
            SELECT id, email, created_at FROM subscribers WHERE id = ?1
            "#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.into())
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        let rows: Vec<SubscriberRow> = sqlx::query_as(
            r#"
            SELECT id, email, created_at FROM subscribers
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl ContactMessageStore for Database {
    async fn create_contact_message(&self, new: NewContactMessage) -> Result<ContactMessage> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages
                (name, email, subject, message, organization, phone, privacy_agreed)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.subject)
        .bind(&new.message)
        .bind(&new.organization)
        .bind(&new.phone)
        .bind(new.privacy_agreed)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        let row: ContactMessageRow = sqlx::query_as(
            r#"
            SELECT id, name, email, subject, message, organization, phone,
                   privacy_agreed, created_at
            FROM contact_messages WHERE id = ?1
            "#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.into())
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        let rows: Vec<ContactMessageRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, subject, message, organization, phone,
                   privacy_agreed, created_at
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl DashboardStore for Database {
    // Demo entities have no tables; both backends share the static seed.
    async fn list_deals(&self) -> Result<Vec<Deal>> {
        Ok(demo::deals())
    }

    async fn list_metrics(&self) -> Result<Vec<Metric>> {
        Ok(demo::metrics())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(demo::activities())
    }
}

fn db_error(e: sqlx::Error) -> CdaoError {
    CdaoError::Database(e.to_string())
}

/// Map an insert failure, treating the schema-level uniqueness violation as
/// the duplicate-email signal.
fn insert_error(e: sqlx::Error, email: &str) -> CdaoError {
    if let sqlx::Error::Database(ref db) = e {
        if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) {
            return CdaoError::DuplicateEmail(email.to_string());
        }
    }
    db_error(e)
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<SubscriberRow> for Subscriber {
    fn from(r: SubscriberRow) -> Self {
        Subscriber {
            id: r.id,
            email: r.email,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ContactMessageRow {
    id: i64,
    name: String,
    email: String,
    subject: String,
    message: String,
    organization: Option<String>,
    phone: Option<String>,
    privacy_agreed: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(r: ContactMessageRow) -> Self {
        ContactMessage {
            id: r.id,
            name: r.name,
            email: r.email,
            subject: r.subject,
            message: r.message,
            organization: r.organization,
            phone: r.phone,
            privacy_agreed: r.privacy_agreed,
            created_at: r.created_at,
        }
    }
}
