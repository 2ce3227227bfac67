use crate::entities::posts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: Option<String>,
    pub is_notice: bool,
    pub is_secret: bool,
    pub view_count: i32,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<posts::Model> for Post {
    fn from(m: posts::Model) -> Self {
        Self {
            id: m.id,
            board_id: m.board_id,
            title: m.title,
            content: m.content,
            author: m.author,
            password: m.password,
            is_notice: m.is_notice,
            is_secret: m.is_secret,
            view_count: m.view_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub board_id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: Option<String>,
    pub is_notice: bool,
    pub is_secret: bool,
}

/// Fields to overwrite on an existing post. `None` leaves the column alone.
///
/// `password` is doubly optional: `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub board_id: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub password: Option<Option<String>>,
    pub is_notice: Option<bool>,
    pub is_secret: Option<bool>,
}

impl PostChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.board_id.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.password.is_none()
            && self.is_notice.is_none()
            && self.is_secret.is_none()
    }
}
