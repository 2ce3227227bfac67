//! Store-level tests against a temporary SQLite file.

use bookboard::db::Store;
use bookboard::models::book::BookFields;
use bookboard::models::post::{NewPost, PostChanges};

async fn temp_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("bookboard-store-test-{}.db", uuid::Uuid::new_v4()));
    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to open store")
}

fn book(isbn: &str) -> BookFields {
    BookFields {
        isbn: isbn.to_string(),
        title: format!("Title {isbn}"),
        author: "Author".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let store = temp_store().await;

    assert_eq!(store.seed_default_boards().await.unwrap(), 3);
    assert_eq!(store.seed_default_boards().await.unwrap(), 0);

    let boards = store.list_boards().await.unwrap();
    assert_eq!(boards.len(), 3);
    assert!(store.board_exists(boards[0].id).await.unwrap());
    assert!(!store.board_exists(9999).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_isbn_is_a_unique_violation() {
    let store = temp_store().await;

    let original = store.add_book(book("978-0-13")).await.unwrap();
    assert!(original.cover_image_url.is_none());

    let err = store.add_book(book("978-0-13")).await.unwrap_err();
    assert!(bookboard::db::is_unique_violation(&err));

    let found = store.find_book_by_isbn("978-0-13").await.unwrap().unwrap();
    assert_eq!(found, original);
}

#[tokio::test]
async fn test_replace_and_remove_book() {
    let store = temp_store().await;
    let created = store.add_book(book("1")).await.unwrap();

    let replaced = store
        .replace_book(
            created.id,
            BookFields {
                price: Some(42),
                ..book("1-1")
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.isbn, "1-1");
    assert_eq!(replaced.price, Some(42));
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at.is_some());

    assert!(store.replace_book(9999, book("x")).await.unwrap().is_none());

    assert!(store.remove_book(created.id).await.unwrap());
    assert!(!store.remove_book(created.id).await.unwrap());
    assert!(store.get_book(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_removed_book_is_none() {
    let store = temp_store().await;
    let created = store.add_book(book("7")).await.unwrap();
    assert!(store.remove_book(created.id).await.unwrap());

    let replaced = store.replace_book(created.id, book("7")).await.unwrap();
    assert!(replaced.is_none());
    assert!(store.get_book(created.id).await.unwrap().is_none());
    assert!(store.list_books(0, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_books_order_and_paging() {
    let store = temp_store().await;
    for isbn in ["1", "2", "3"] {
        store.add_book(book(isbn)).await.unwrap();
    }

    let all = store.list_books(0, 100).await.unwrap();
    let isbns: Vec<_> = all.iter().map(|b| b.isbn.as_str()).collect();
    assert_eq!(isbns, vec!["3", "2", "1"]);

    let page = store.list_books(1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].isbn, "2");
}

#[tokio::test]
async fn test_post_partial_update() {
    let store = temp_store().await;
    store.seed_default_boards().await.unwrap();
    let board_id = store.list_boards().await.unwrap()[1].id;

    let post = store
        .add_post(NewPost {
            board_id,
            title: "Old".to_string(),
            content: "Content".to_string(),
            author: "Author".to_string(),
            password: Some("pw".to_string()),
            is_notice: false,
            is_secret: false,
        })
        .await
        .unwrap();
    assert_eq!(post.view_count, 0);

    let updated = store
        .update_post(
            post.id,
            PostChanges {
                title: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "New");
    assert_eq!(updated.content, "Content");
    assert_eq!(updated.password.as_deref(), Some("pw"));
    assert!(updated.updated_at.is_some());

    let cleared = store
        .update_post(
            post.id,
            PostChanges {
                password: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.password.is_none());

    assert!(store.remove_post(post.id).await.unwrap());
    assert!(!store.remove_post(post.id).await.unwrap());
    assert!(
        store
            .update_post(post.id, PostChanges::default())
            .await
            .unwrap()
            .is_none()
    );
}
