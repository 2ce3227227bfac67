use crate::entities::{books, prelude::*};
use crate::models::book::{Book, BookFields};
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use tracing::info;

use crate::db::timestamp_now;

/// Repository for the book catalog
pub struct BookRepository {
    conn: DatabaseConnection,
}

impl BookRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Book>> {
        let row = Books::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Book::from))
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        let row = Books::find()
            .filter(books::Column::Isbn.eq(isbn))
            .one(&self.conn)
            .await?;
        Ok(row.map(Book::from))
    }

    /// Newest first. Rows created within the same microsecond fall back to id order.
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Book>> {
        let rows = Books::find()
            .order_by_desc(books::Column::CreatedAt)
            .order_by_desc(books::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    pub async fn add(&self, fields: BookFields) -> Result<Book> {
        let active_model = books::ActiveModel {
            isbn: Set(fields.isbn),
            title: Set(fields.title),
            author: Set(fields.author),
            category: Set(fields.category),
            publisher: Set(fields.publisher),
            issue_date: Set(fields.issue_date),
            detail: Set(fields.detail),
            price: Set(fields.price),
            cover_image_url: Set(fields.cover_image_url),
            created_at: Set(timestamp_now()),
            updated_at: Set(None),
            ..Default::default()
        };

        let res = Books::insert(active_model).exec(&self.conn).await?;
        let book = Books::find_by_id(res.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created book"))?;

        info!(book_id = book.id, isbn = %book.isbn, "Added book");
        Ok(book.into())
    }

    /// Overwrites every writable column. Returns `None` when the id is unknown.
    pub async fn replace(&self, id: i32, fields: BookFields) -> Result<Option<Book>> {
        let result = Books::update(books::ActiveModel {
            id: Set(id),
            isbn: Set(fields.isbn),
            title: Set(fields.title),
            author: Set(fields.author),
            category: Set(fields.category),
            publisher: Set(fields.publisher),
            issue_date: Set(fields.issue_date),
            detail: Set(fields.detail),
            price: Set(fields.price),
            cover_image_url: Set(fields.cover_image_url),
            updated_at: Set(Some(timestamp_now())),
            ..Default::default()
        })
        .exec(&self.conn)
        .await;

        match result {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn remove(&self, id: i32) -> Result<bool> {
        let result = Books::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}
