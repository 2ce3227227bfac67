//! Domain service for the book catalog.

use crate::api::types::BookDto;
use crate::models::book::BookFields;
use thiserror::Error;

/// Errors specific to book operations.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(i32),

    #[error("ISBN already registered: {0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Image upload failed: {0}")]
    Upload(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for BookError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for BookError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// An uploaded cover image as received from the client.
#[derive(Debug, Clone)]
pub struct CoverUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[async_trait::async_trait]
pub trait BookService: Send + Sync {
    /// Lists books newest first.
    async fn list_books(&self, skip: u64, limit: u64) -> Result<Vec<BookDto>, BookError>;

    async fn get_book(&self, id: i32) -> Result<BookDto, BookError>;

    /// Registers a new book, uploading its cover first when one is given.
    ///
    /// # Errors
    ///
    /// - [`BookError::Conflict`] if the ISBN is already registered
    /// - [`BookError::Validation`] if the cover is not an image
    /// - [`BookError::Upload`] if the image host rejects the cover
    async fn create_book(
        &self,
        fields: BookFields,
        cover: Option<CoverUpload>,
    ) -> Result<BookDto, BookError>;

    /// Overwrites every field of an existing book.
    async fn replace_book(&self, id: i32, fields: BookFields) -> Result<BookDto, BookError>;

    async fn delete_book(&self, id: i32) -> Result<(), BookError>;
}
