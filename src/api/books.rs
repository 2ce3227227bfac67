use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;
use tracing::info;

use super::validation::{
    parse_issue_date, parse_price, validate_isbn, validate_limit, validate_required, validate_skip,
};
use super::{ApiError, AppState, BookDto, ListQuery, MessageResponse, UpdateBookRequest};
use crate::constants::pagination::DEFAULT_BOOK_LIMIT;
use crate::models::book::BookFields;
use crate::services::{BookError, CoverUpload};

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(id) => Self::not_found("Book", id),
            BookError::Conflict(_) => Self::conflict("ISBN already registered"),
            BookError::Validation(msg) => Self::validation(msg),
            BookError::Upload(msg) => Self::validation(format!("Image upload failed: {msg}")),
            BookError::Database(msg) => Self::database(msg),
        }
    }
}

/// Text fields and the optional cover collected from a create form.
#[derive(Debug, Default)]
struct BookForm {
    isbn: Option<String>,
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
    publisher: Option<String>,
    issue_date: Option<String>,
    detail: Option<String>,
    price: Option<String>,
    cover: Option<CoverUpload>,
}

impl BookForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "file" | "cover_image" => {
                    let has_filename = field.file_name().is_some_and(|f| !f.is_empty());
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;

                    // Browsers send an empty part when no file was picked
                    if bytes.is_empty() && !has_filename {
                        continue;
                    }
                    form.cover = Some(CoverUpload {
                        bytes: bytes.to_vec(),
                        content_type,
                    });
                }
                _ => {
                    let value = field.text().await?;
                    let slot = match name.as_str() {
                        "isbn" => &mut form.isbn,
                        "title" => &mut form.title,
                        "author" => &mut form.author,
                        "category" => &mut form.category,
                        "publisher" => &mut form.publisher,
                        "issue_date" => &mut form.issue_date,
                        "detail" => &mut form.detail,
                        "price" => &mut form.price,
                        _ => continue,
                    };
                    *slot = Some(value);
                }
            }
        }

        Ok(form)
    }

    fn into_fields(self) -> Result<(BookFields, Option<CoverUpload>), ApiError> {
        let isbn = self.isbn.unwrap_or_default();
        validate_isbn(&isbn)?;
        let title = self.title.unwrap_or_default();
        validate_required("title", &title)?;
        let author = self.author.unwrap_or_default();
        validate_required("author", &author)?;

        let fields = BookFields {
            issue_date: parse_issue_date(self.issue_date.as_deref())?,
            price: parse_price(self.price.as_deref())?,
            isbn,
            title,
            author,
            category: non_blank(self.category),
            publisher: non_blank(self.publisher),
            detail: non_blank(self.detail),
            cover_image_url: None,
        };

        Ok((fields, self.cover))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `POST /books/`
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BookDto>, ApiError> {
    let form = BookForm::read(multipart?).await?;
    let (fields, cover) = form.into_fields()?;

    let book = state.book_service().create_book(fields, cover).await?;
    info!(book_id = book.id, isbn = %book.isbn, "Book created");

    Ok(Json(book))
}

/// `GET /books/`
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    let Query(query) = query?;
    let skip = validate_skip(query.skip.unwrap_or(0))?;
    let limit = validate_limit(query.limit.unwrap_or(DEFAULT_BOOK_LIMIT))?;

    let books = state.book_service().list_books(skip, limit).await?;
    Ok(Json(books))
}

/// `GET /books/{id}`
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<BookDto>, ApiError> {
    let Path(id) = id?;
    let book = state.book_service().get_book(id).await?;
    Ok(Json(book))
}

/// `PUT /books/{id}`
///
/// Replaces the whole record. Optional fields missing from the body are cleared.
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<BookDto>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    validate_isbn(&payload.isbn)?;
    validate_required("title", &payload.title)?;
    validate_required("author", &payload.author)?;

    let fields = BookFields {
        isbn: payload.isbn,
        title: payload.title,
        author: payload.author,
        category: payload.category,
        publisher: payload.publisher,
        issue_date: payload.issue_date,
        detail: payload.detail,
        price: payload.price,
        cover_image_url: payload.cover_image_url,
    };

    let book = state.book_service().replace_book(id, fields).await?;
    Ok(Json(book))
}

/// `DELETE /books/{id}`
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.book_service().delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
