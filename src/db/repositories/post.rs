use crate::entities::{posts, prelude::*};
use crate::models::post::{NewPost, Post, PostChanges};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::db::timestamp_now;

pub struct PostRepository {
    conn: DatabaseConnection,
}

impl PostRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Post>> {
        let row = Posts::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Post::from))
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Post>> {
        let rows = Posts::find()
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    pub async fn add(&self, post: NewPost) -> Result<Post> {
        let active_model = posts::ActiveModel {
            board_id: Set(post.board_id),
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            password: Set(post.password),
            is_notice: Set(post.is_notice),
            is_secret: Set(post.is_secret),
            view_count: Set(0),
            created_at: Set(timestamp_now()),
            updated_at: Set(None),
            ..Default::default()
        };

        let res = Posts::insert(active_model).exec(&self.conn).await?;
        let created = Posts::find_by_id(res.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created post"))?;

        Ok(created.into())
    }

    /// Writes only the columns present in `changes`. Returns `None` when the id is unknown.
    pub async fn apply(&self, id: i32, changes: PostChanges) -> Result<Option<Post>> {
        let Some(existing) = Posts::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: posts::ActiveModel = existing.into();

        if let Some(board_id) = changes.board_id {
            active.board_id = Set(board_id);
        }
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(author) = changes.author {
            active.author = Set(author);
        }
        if let Some(password) = changes.password {
            active.password = Set(password);
        }
        if let Some(is_notice) = changes.is_notice {
            active.is_notice = Set(is_notice);
        }
        if let Some(is_secret) = changes.is_secret {
            active.is_secret = Set(is_secret);
        }
        active.updated_at = Set(Some(timestamp_now()));

        let updated = active.update(&self.conn).await?;
        Ok(Some(updated.into()))
    }

    pub async fn remove(&self, id: i32) -> Result<bool> {
        let result = Posts::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}
