pub mod prelude;

pub mod boards;
pub mod books;
pub mod posts;
