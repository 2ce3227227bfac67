use crate::entities::boards;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub allow_anonymous: bool,
    pub require_password: bool,
    pub created_at: String,
}

impl From<boards::Model> for Board {
    fn from(m: boards::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            slug: m.slug,
            description: m.description,
            is_active: m.is_active,
            allow_anonymous: m.allow_anonymous,
            require_password: m.require_password,
            created_at: m.created_at,
        }
    }
}

/// A board definition used by the startup seed.
#[derive(Debug, Clone, Copy)]
pub struct BoardSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub allow_anonymous: bool,
    pub require_password: bool,
}
