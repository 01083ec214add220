//! Repository tests against a live PostgreSQL server
//!
//! Run with: TEST_DATABASE_URL=postgres://... cargo test -- --ignored
//!
//! Every test works on temporary tables that shadow the real ones for the
//! lifetime of a single pooled connection, so nothing persists.

use bookstore_server::repository::{LibraryStore, Repository, StoreError};
use sqlx::{postgres::PgPoolOptions, Executor};

const SCHEMA: &str = include_str!("../../sql/schema.sql");

async fn repository_with(seed: &str) -> Repository {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    let temporary = SCHEMA
        .replace("CREATE TABLE", "CREATE TEMPORARY TABLE")
        .replace(" REFERENCES book (isbn)", "")
        .replace(" REFERENCES author (authorid)", "")
        .replace(" REFERENCES customer (customerid)", "");
    pool.execute(temporary.as_str()).await.expect("Failed to create tables");
    if !seed.is_empty() {
        pool.execute(seed).await.expect("Failed to seed tables");
    }

    Repository::new(pool)
}

const SEED: &str = r#"
    INSERT INTO book (isbn, title, edition_no, numofcop, numleft) VALUES
        (12345, '  Dune  ', 1, 5, 3),
        (23456, 'Dune Messiah', NULL, 2, 2),
        (34567, 'Children of Dune', 2, 1, 0);
    INSERT INTO author (authorid, surname, name) VALUES (1, 'Herbert', NULL), (2, 'Anon', '');
    INSERT INTO book_author (isbn, authorid, authorseqno) VALUES
        (12345, 1, 3), (23456, 1, 1), (34567, 1, 2);
    INSERT INTO customer (customerid, l_name, f_name, city) VALUES (10, 'Atreides', 'Paul', NULL);
    INSERT INTO cust_book (isbn, customerid) VALUES (34567, 10), (12345, 10);
"#;

#[tokio::test]
#[ignore]
async fn test_get_book_maps_row() {
    let repo = repository_with(SEED).await;

    let book = repo.get_book(12345).await.unwrap();
    assert_eq!(book.isbn, 12345);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.edition, Some(1));
    assert_eq!(book.total_copies, 5);
    assert_eq!(book.copies_left, 3);

    let book = repo.get_book(23456).await.unwrap();
    assert_eq!(book.edition, None);
}

#[tokio::test]
#[ignore]
async fn test_missing_book_is_not_found() {
    let repo = repository_with(SEED).await;

    let err = repo.get_book(999999).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 999999, .. }));
}

#[tokio::test]
#[ignore]
async fn test_empty_table_lists_nothing() {
    let repo = repository_with("").await;

    assert!(repo.get_all_books().await.unwrap().is_empty());
    assert!(repo.get_all_customers().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_books_by_author_use_sequence_number() {
    let repo = repository_with(SEED).await;

    let isbns: Vec<i32> = repo
        .get_books_by_author(1)
        .await
        .unwrap()
        .iter()
        .map(|b| b.isbn)
        .collect();
    assert_eq!(isbns, vec![23456, 34567, 12345]);
    assert!(repo.get_books_by_author(2).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_authors_and_customers() {
    let repo = repository_with(SEED).await;

    assert_eq!(repo.get_author(1).await.unwrap().firstname, None);
    assert_eq!(repo.get_author(2).await.unwrap().firstname, Some(String::new()));
    assert_eq!(repo.get_all_authors().await.unwrap().len(), 2);

    let customer = repo.get_customer(10).await.unwrap();
    assert_eq!(customer.firstname.as_deref(), Some("Paul"));
    assert_eq!(customer.city, None);
    assert!(matches!(
        repo.get_customer(11).await,
        Err(StoreError::NotFound { entity: "Customer", id: 11 })
    ));

    let borrowed: Vec<i32> = repo
        .get_books_borrowed_by_customer(10)
        .await
        .unwrap()
        .iter()
        .map(|b| b.isbn)
        .collect();
    assert_eq!(borrowed, vec![12345, 34567]);
}

#[tokio::test]
#[ignore]
async fn test_type_mismatch_is_scan_failure() {
    let repo = repository_with("").await;
    repo.pool()
        .execute("DROP TABLE book; CREATE TEMPORARY TABLE book (isbn INTEGER, title INTEGER, edition_no INTEGER, numofcop INTEGER, numleft INTEGER); INSERT INTO book VALUES (1, 2, 3, 4, 5);")
        .await
        .unwrap();

    let err = repo.get_book(1).await.unwrap_err();
    assert!(matches!(err, StoreError::Scan(_)), "{:?}", err);
}
