//! Cover image hosting.

use crate::constants::images::BOOK_COVER_PREFIX;
use anyhow::Result;
use async_trait::async_trait;

/// An external service that stores uploaded images and hands back a durable URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads `bytes` under `folder/public_id`, replacing any image already
    /// stored there, and returns the secure URL of the stored image.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
        public_id: &str,
    ) -> Result<String>;
}

/// Deterministic public id for a book cover, so re-uploads overwrite.
#[must_use]
pub fn cover_public_id(isbn: &str) -> String {
    format!("{BOOK_COVER_PREFIX}{isbn}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_public_id() {
        assert_eq!(cover_public_id("978-0-13"), "book_978-0-13");
    }
}
