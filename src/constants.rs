use crate::models::board::BoardSeed;

pub mod pagination {

    pub const DEFAULT_BOOK_LIMIT: u64 = 100;

    pub const DEFAULT_POST_LIMIT: u64 = 10;
}

pub mod images {

    pub const BOOK_COVER_FOLDER: &str = "books";

    pub const BOOK_COVER_PREFIX: &str = "book_";
}

pub mod isbn {

    pub const MAX_LEN: usize = 17;
}

/// Boards created on first startup when the table is empty.
pub const DEFAULT_BOARDS: [BoardSeed; 3] = [
    BoardSeed {
        name: "Notice",
        slug: "notice",
        description: "Announcements from the operators",
        allow_anonymous: false,
        require_password: false,
    },
    BoardSeed {
        name: "Free Board",
        slug: "free",
        description: "Talk about anything",
        allow_anonymous: true,
        require_password: true,
    },
    BoardSeed {
        name: "Q&A",
        slug: "qna",
        description: "Questions and answers",
        allow_anonymous: true,
        require_password: true,
    },
];
