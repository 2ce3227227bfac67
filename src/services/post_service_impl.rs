//! `SeaORM` implementation of the `PostService` trait.

use crate::api::types::{BoardDto, PostDto};
use crate::db::Store;
use crate::models::post::{NewPost, PostChanges};
use crate::services::post_service::{PostError, PostService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmPostService {
    store: Store,
}

impl SeaOrmPostService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn ensure_board(&self, board_id: i32) -> Result<(), PostError> {
        if self.store.board_exists(board_id).await? {
            Ok(())
        } else {
            Err(PostError::UnknownBoard(board_id))
        }
    }
}

#[async_trait]
impl PostService for SeaOrmPostService {
    async fn list_boards(&self) -> Result<Vec<BoardDto>, PostError> {
        let boards = self.store.list_boards().await?;
        Ok(boards.into_iter().map(BoardDto::from).collect())
    }

    async fn list_posts(&self, skip: u64, limit: u64) -> Result<Vec<PostDto>, PostError> {
        let posts = self.store.list_posts(skip, limit).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }

    async fn get_post(&self, id: i32) -> Result<PostDto, PostError> {
        self.store
            .get_post(id)
            .await?
            .map(PostDto::from)
            .ok_or(PostError::NotFound(id))
    }

    async fn create_post(&self, post: NewPost) -> Result<PostDto, PostError> {
        self.ensure_board(post.board_id).await?;

        let created = self.store.add_post(post).await?;
        info!(post_id = created.id, board_id = created.board_id, "Created post");
        Ok(created.into())
    }

    async fn update_post(&self, id: i32, changes: PostChanges) -> Result<PostDto, PostError> {
        let Some(current) = self.store.get_post(id).await? else {
            return Err(PostError::NotFound(id));
        };
        if changes.is_empty() {
            return Ok(current.into());
        }
        if let Some(board_id) = changes.board_id {
            self.ensure_board(board_id).await?;
        }

        self.store
            .update_post(id, changes)
            .await?
            .map(PostDto::from)
            .ok_or(PostError::NotFound(id))
    }

    async fn delete_post(&self, id: i32) -> Result<(), PostError> {
        if !self.store.remove_post(id).await? {
            return Err(PostError::NotFound(id));
        }

        info!(post_id = id, "Deleted post");
        Ok(())
    }
}
