use crate::models::board::Board;
use crate::models::book::Book;
use crate::models::post::Post;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BookDto {
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

impl From<Book> for BookDto {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            isbn: b.isbn,
            title: b.title,
            author: b.author,
            category: b.category,
            publisher: b.publisher,
            issue_date: b.issue_date,
            detail: b.detail,
            price: b.price,
            cover_image_url: b.cover_image_url,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Body of `PUT /books/{id}`. Optional fields left out are cleared.
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BoardDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub allow_anonymous: bool,
    pub require_password: bool,
    pub created_at: String,
}

impl From<Board> for BoardDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id,
            name: b.name,
            slug: b.slug,
            description: b.description,
            is_active: b.is_active,
            allow_anonymous: b.allow_anonymous,
            require_password: b.require_password,
            created_at: b.created_at,
        }
    }
}

/// A post as returned to clients. The stored password never leaves the server.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PostDto {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub has_password: bool,
    pub is_notice: bool,
    pub is_secret: bool,
    pub view_count: i32,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Post> for PostDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            board_id: p.board_id,
            title: p.title,
            content: p.content,
            author: p.author,
            has_password: p.password.is_some(),
            is_notice: p.is_notice,
            is_secret: p.is_secret,
            view_count: p.view_count,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub board_id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_notice: bool,
    #[serde(default)]
    pub is_secret: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdatePostRequest {
    pub board_id: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Absent keeps the password, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub password: Option<Option<String>>,
    pub is_notice: Option<bool>,
    pub is_secret: Option<bool>,
}

/// Marks a field as present, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_post_password_states() {
        let absent: UpdatePostRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(absent.password, None);

        let cleared: UpdatePostRequest = serde_json::from_str(r#"{"password":null}"#).unwrap();
        assert_eq!(cleared.password, Some(None));

        let set: UpdatePostRequest = serde_json::from_str(r#"{"password":"pw"}"#).unwrap();
        assert_eq!(set.password, Some(Some("pw".to_string())));
    }

    #[test]
    fn test_post_dto_hides_password() {
        let post = Post {
            id: 1,
            board_id: 2,
            title: "t".into(),
            content: "c".into(),
            author: "a".into(),
            password: Some("secret".into()),
            is_notice: false,
            is_secret: true,
            view_count: 0,
            created_at: "2024-01-01T00:00:00.000000Z".into(),
            updated_at: None,
        };

        let json = serde_json::to_value(PostDto::from(post)).unwrap();
        assert_eq!(json["has_password"], true);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_update_book_optional_fields_default_to_none() {
        let req: UpdateBookRequest =
            serde_json::from_str(r#"{"isbn":"1-2","title":"T","author":"A"}"#).unwrap();
        assert!(req.cover_image_url.is_none());
        assert!(req.issue_date.is_none());
    }
}
