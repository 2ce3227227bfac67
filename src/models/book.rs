use chrono::NaiveDate;

use crate::entities::books;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub publisher: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub detail: Option<String>,
    pub price: Option<i32>,
    pub cover_image_url: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<books::Model> for Book {
    fn from(m: books::Model) -> Self {
        Self {
            id: m.id,
            isbn: m.isbn,
            title: m.title,
            author: m.author,
            category: m.category,
            publisher: m.publisher,
            issue_date: m.issue_date,
            detail: m.detail,
            price: m.price,
            cover_image_url: m.cover_image_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Every writable column of a book.
///
/// Inserts and full updates both take the complete set, so a field left as
/// `None` here is written as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub publisher: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub detail: Option<String>,
    pub price: Option<i32>,
    pub cover_image_url: Option<String>,
}
