//! `SeaORM` implementation of the `BookService` trait.

use crate::api::types::BookDto;
use crate::db::{Store, is_unique_violation};
use crate::models::book::BookFields;
use crate::services::book_service::{BookError, BookService, CoverUpload};
use crate::services::image::{ImageHost, cover_public_id};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub struct SeaOrmBookService {
    store: Store,
    image_host: Arc<dyn ImageHost>,
    cover_folder: String,
}

impl SeaOrmBookService {
    #[must_use]
    pub fn new(store: Store, image_host: Arc<dyn ImageHost>, cover_folder: String) -> Self {
        Self {
            store,
            image_host,
            cover_folder,
        }
    }

    async fn ensure_isbn_free(&self, isbn: &str, except_id: Option<i32>) -> Result<(), BookError> {
        let existing = self.store.find_book_by_isbn(isbn).await?;
        match existing {
            Some(book) if Some(book.id) != except_id => Err(BookError::Conflict(isbn.to_string())),
            _ => Ok(()),
        }
    }

    async fn upload_cover(&self, isbn: &str, cover: CoverUpload) -> Result<String, BookError> {
        let content_type = image_content_type(cover.content_type.as_deref())?;

        self.image_host
            .upload(
                cover.bytes,
                &content_type,
                &self.cover_folder,
                &cover_public_id(isbn),
            )
            .await
            .map_err(|e| BookError::Upload(format!("{e:#}")))
    }
}

/// Accepts only `image/*` media types.
fn image_content_type(declared: Option<&str>) -> Result<String, BookError> {
    let parsed = declared
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .filter(|m| m.type_() == mime::IMAGE);

    parsed.map(|m| m.essence_str().to_string()).ok_or_else(|| {
        BookError::Validation(format!(
            "Cover must be an image, got {}",
            declared.unwrap_or("no content type")
        ))
    })
}

fn conflict_or_db(err: anyhow::Error, isbn: &str) -> BookError {
    if is_unique_violation(&err) {
        BookError::Conflict(isbn.to_string())
    } else {
        BookError::from(err)
    }
}

#[async_trait]
impl BookService for SeaOrmBookService {
    async fn list_books(&self, skip: u64, limit: u64) -> Result<Vec<BookDto>, BookError> {
        let books = self.store.list_books(skip, limit).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, id: i32) -> Result<BookDto, BookError> {
        self.store
            .get_book(id)
            .await?
            .map(BookDto::from)
            .ok_or(BookError::NotFound(id))
    }

    async fn create_book(
        &self,
        mut fields: BookFields,
        cover: Option<CoverUpload>,
    ) -> Result<BookDto, BookError> {
        self.ensure_isbn_free(&fields.isbn, None).await?;

        if let Some(cover) = cover {
            fields.cover_image_url = Some(self.upload_cover(&fields.isbn, cover).await?);
        }

        let isbn = fields.isbn.clone();
        let book = self
            .store
            .add_book(fields)
            .await
            .map_err(|e| conflict_or_db(e, &isbn))?;

        Ok(book.into())
    }

    async fn replace_book(&self, id: i32, fields: BookFields) -> Result<BookDto, BookError> {
        if self.store.get_book(id).await?.is_none() {
            return Err(BookError::NotFound(id));
        }
        self.ensure_isbn_free(&fields.isbn, Some(id)).await?;

        let isbn = fields.isbn.clone();
        let book = self
            .store
            .replace_book(id, fields)
            .await
            .map_err(|e| conflict_or_db(e, &isbn))?
            .ok_or(BookError::NotFound(id))?;

        info!(book_id = id, "Updated book");
        Ok(book.into())
    }

    async fn delete_book(&self, id: i32) -> Result<(), BookError> {
        if !self.store.remove_book(id).await? {
            return Err(BookError::NotFound(id));
        }

        info!(book_id = id, "Deleted book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_content_type() {
        assert_eq!(image_content_type(Some("image/png")).unwrap(), "image/png");
        assert_eq!(
            image_content_type(Some("image/jpeg; charset=binary")).unwrap(),
            "image/jpeg"
        );
        assert!(matches!(
            image_content_type(Some("text/plain")),
            Err(BookError::Validation(_))
        ));
        assert!(image_content_type(None).is_err());
        assert!(image_content_type(Some("not a mime")).is_err());
    }
}
