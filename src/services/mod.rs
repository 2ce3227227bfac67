pub mod book_service;
pub mod book_service_impl;
pub use book_service::{BookError, BookService, CoverUpload};
pub use book_service_impl::SeaOrmBookService;

pub mod post_service;
pub mod post_service_impl;
pub use post_service::{PostError, PostService};
pub use post_service_impl::SeaOrmPostService;

pub mod image;
pub use image::ImageHost;
