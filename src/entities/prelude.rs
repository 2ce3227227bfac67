pub use super::boards::Entity as Boards;
pub use super::books::Entity as Books;
pub use super::posts::Entity as Posts;
