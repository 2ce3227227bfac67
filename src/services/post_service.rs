//! Domain service for boards and their posts.

use crate::api::types::{BoardDto, PostDto};
use crate::models::post::{NewPost, PostChanges};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("Post not found: {0}")]
    NotFound(i32),

    #[error("Board does not exist: {0}")]
    UnknownBoard(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for PostError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait PostService: Send + Sync {
    async fn list_boards(&self) -> Result<Vec<BoardDto>, PostError>;

    /// Lists posts newest first.
    async fn list_posts(&self, skip: u64, limit: u64) -> Result<Vec<PostDto>, PostError>;

    async fn get_post(&self, id: i32) -> Result<PostDto, PostError>;

    /// # Errors
    ///
    /// Returns [`PostError::UnknownBoard`] if `board_id` names no board.
    async fn create_post(&self, post: NewPost) -> Result<PostDto, PostError>;

    /// Applies only the fields set in `changes`.
    async fn update_post(&self, id: i32, changes: PostChanges) -> Result<PostDto, PostError>;

    async fn delete_post(&self, id: i32) -> Result<(), PostError>;
}
