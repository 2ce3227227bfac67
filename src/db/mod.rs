use crate::constants::DEFAULT_BOARDS;
use crate::models::board::Board;
use crate::models::book::{Book, BookFields};
use crate::models::post::{NewPost, Post, PostChanges};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, SqlErr, Statement,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Current UTC time as RFC 3339 with fixed microsecond precision, so string order is time order.
#[must_use]
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if let Some(path_str) = sqlite_file_path(db_url) {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn book_repo(&self) -> repositories::book::BookRepository {
        repositories::book::BookRepository::new(self.conn.clone())
    }

    fn board_repo(&self) -> repositories::board::BoardRepository {
        repositories::board::BoardRepository::new(self.conn.clone())
    }

    fn post_repo(&self) -> repositories::post::PostRepository {
        repositories::post::PostRepository::new(self.conn.clone())
    }

    // ========== Books ==========

    pub async fn add_book(&self, fields: BookFields) -> Result<Book> {
        self.book_repo().add(fields).await
    }

    pub async fn get_book(&self, id: i32) -> Result<Option<Book>> {
        self.book_repo().get(id).await
    }

    pub async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        self.book_repo().find_by_isbn(isbn).await
    }

    pub async fn list_books(&self, skip: u64, limit: u64) -> Result<Vec<Book>> {
        self.book_repo().list(skip, limit).await
    }

    pub async fn replace_book(&self, id: i32, fields: BookFields) -> Result<Option<Book>> {
        self.book_repo().replace(id, fields).await
    }

    pub async fn remove_book(&self, id: i32) -> Result<bool> {
        self.book_repo().remove(id).await
    }

    // ========== Boards ==========

    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        self.board_repo().list().await
    }

    pub async fn board_exists(&self, id: i32) -> Result<bool> {
        Ok(self.board_repo().get(id).await?.is_some())
    }

    /// Writes the default boards into an empty table. Returns the number inserted.
    pub async fn seed_default_boards(&self) -> Result<usize> {
        self.board_repo().seed(&DEFAULT_BOARDS).await
    }

    // ========== Posts ==========

    pub async fn add_post(&self, post: NewPost) -> Result<Post> {
        self.post_repo().add(post).await
    }

    pub async fn get_post(&self, id: i32) -> Result<Option<Post>> {
        self.post_repo().get(id).await
    }

    pub async fn list_posts(&self, skip: u64, limit: u64) -> Result<Vec<Post>> {
        self.post_repo().list(skip, limit).await
    }

    pub async fn update_post(&self, id: i32, changes: PostChanges) -> Result<Option<Post>> {
        self.post_repo().apply(id, changes).await
    }

    pub async fn remove_post(&self, id: i32) -> Result<bool> {
        self.post_repo().remove(id).await
    }
}

/// True when a repository error came from a UNIQUE constraint rejecting the write.
#[must_use]
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<DbErr>()
        .and_then(DbErr::sql_err)
        .is_some_and(|e| matches!(e, SqlErr::UniqueConstraintViolation(_)))
}

/// Filesystem path behind a file-backed sqlite URL. `None` for in-memory or non-sqlite URLs.
fn sqlite_file_path(db_url: &str) -> Option<&str> {
    let rest = db_url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.contains(":memory:") || path.starts_with("file::memory") {
        return None;
    }
    Some(path)
}
