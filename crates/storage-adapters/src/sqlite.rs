//! # SQLite Content Store
//!
//! Maps the `content` and `reviews` tables onto the `domains` models.
//! The store is opened once per process over a single connection and kept
//! open until shutdown; each operation is one parameterized statement.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use domains::{NewReview, NewWork, Review, ReviewRepository, Work, WorkRepository};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    Row,
};
use tracing::info;

const CREATE_CONTENT: &str = "CREATE TABLE IF NOT EXISTS content (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL,
    body       TEXT NOT NULL,
    type       TEXT NOT NULL,
    pdf_data   TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_REVIEWS: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    comment    TEXT NOT NULL,
    rating     INTEGER DEFAULT 5,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Clone)]
pub struct SqliteContentStore {
    pool: SqlitePool,
}

impl SqliteContentStore {
    /// Opens (creating if missing) the database at `url` and ensures both
    /// tables exist. Accepts any sqlx SQLite URL, including `sqlite::memory:`.
    pub async fn open(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url {url}"))?
            .create_if_missing(true);

        // One connection that never expires: an in-memory database lives
        // exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open content store")?;

        let store = Self { pool };
        store.init_schema().await?;
        info!(url, "content store ready");
        Ok(store)
    }

    async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_CONTENT).execute(&self.pool).await?;
        sqlx::query(CREATE_REVIEWS).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_work(row: &SqliteRow) -> sqlx::Result<Work> {
    Ok(Work {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        kind: row.try_get("type")?,
        attachment: row.try_get("pdf_data")?,
        created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
    })
}

fn row_to_review(row: &SqliteRow) -> sqlx::Result<Review> {
    Ok(Review {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        comment: row.try_get("comment")?,
        rating: row.try_get("rating")?,
        created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
    })
}

#[async_trait]
impl WorkRepository for SqliteContentStore {
    async fn list_works(&self) -> anyhow::Result<Vec<Work>> {
        let rows = sqlx::query(
            "SELECT id, title, body, type, pdf_data, created_at FROM content ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_work).collect::<sqlx::Result<_>>()?)
    }

    async fn create_work(&self, work: NewWork) -> anyhow::Result<i64> {
        let result = sqlx::query(
            "INSERT INTO content (title, body, type, pdf_data) VALUES (?, ?, ?, ?)",
        )
        .bind(work.title)
        .bind(work.body)
        .bind(work.kind)
        .bind(work.attachment)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete_work(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_works(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl ReviewRepository for SqliteContentStore {
    async fn list_reviews(&self) -> anyhow::Result<Vec<Review>> {
        let rows = sqlx::query(
            "SELECT id, name, comment, rating, created_at FROM reviews ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_review).collect::<sqlx::Result<_>>()?)
    }

    async fn create_review(&self, review: NewReview) -> anyhow::Result<i64> {
        let result =
            sqlx::query("INSERT INTO reviews (name, comment, rating) VALUES (?, ?, ?)")
                .bind(review.name)
                .bind(review.comment)
                .bind(review.rating)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete_review(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_reviews(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
