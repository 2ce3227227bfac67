pub mod board;
pub mod book;
pub mod post;
