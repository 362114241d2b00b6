mod common;

use common::TempDb;
use daily_quote::QuoteError;
use daily_quote::db::{DbQuote, Page, QuoteCreate, QuoteStore};
use std::collections::HashSet;

fn quote(author: &str, text: &str) -> QuoteCreate {
    QuoteCreate {
        author: author.to_string(),
        text: text.to_string(),
    }
}

async fn seed(store: &impl QuoteStore, n: usize) -> Vec<DbQuote> {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let row = store
            .insert(quote(&format!("author-{i}"), &format!("text-{i}")))
            .await
            .expect("insert failed");
        rows.push(row);
    }
    rows
}

#[tokio::test]
async fn insert_assigns_sequential_ids_from_one() {
    let db = TempDb::new("store-ids");
    let store = db.connect().await;

    // 1. Fresh store lists nothing
    let rows = store.list(Page::new(0, 10).unwrap()).await.unwrap();
    assert!(rows.is_empty(), "Expected no quotes initially");

    // 2. Ten inserts yield ids 1..=10 and echo the columns back
    let inserted = seed(&store, 10).await;
    let ids: Vec<i64> = inserted.iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    assert_eq!(inserted[3].author, "author-3");
    assert_eq!(inserted[3].text, "text-3");

    // 3. Listing returns exactly what was inserted, in id order
    let listed = store.list(Page::new(0, 100).unwrap()).await.unwrap();
    assert_eq!(listed, inserted);
}

#[tokio::test]
async fn list_honours_offset_and_limit_windows() {
    let db = TempDb::new("store-window");
    let store = db.connect().await;
    let all = seed(&store, 7).await;

    let window = store.list(Page::new(2, 3).unwrap()).await.unwrap();
    assert_eq!(window, all[2..5].to_vec());

    // Short tail: fewer rows than `limit` remain, no padding
    let tail = store.list(Page::new(5, 10).unwrap()).await.unwrap();
    assert_eq!(tail, all[5..].to_vec());

    // Offset at and past the end is empty, not an error
    assert!(store.list(Page::new(7, 10).unwrap()).await.unwrap().is_empty());
    assert!(store.list(Page::new(1_000, 1).unwrap()).await.unwrap().is_empty());
}

#[tokio::test]
async fn data_survives_reconnect_and_ids_keep_growing() {
    let db = TempDb::new("store-reopen");

    let first = db.connect().await;
    seed(&first, 2).await;
    first.close().await;

    // Re-applying the schema must not disturb existing rows
    let second = db.connect().await;
    let rows = second.list(Page::new(0, 10).unwrap()).await.unwrap();
    assert_eq!(rows.len(), 2);

    let next = second
        .insert(quote("Lewis Hamilton", "Still we rise!"))
        .await
        .unwrap();
    assert_eq!(next.id, 3);
    second.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_get_unique_ids() {
    let db = TempDb::new("store-concurrent");
    let store = db.connect().await;

    let n = 20;
    let mut tasks = Vec::with_capacity(n);
    for i in 0..n {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .insert(quote("John Doe", &format!("quote #{i}")))
                .await
                .expect("concurrent insert failed")
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        let row = task.await.expect("insert task panicked");
        assert!(ids.insert(row.id), "duplicate id {}", row.id);
    }
    assert_eq!(ids, (1..=20).collect::<HashSet<i64>>());

    // Storage order is id order regardless of which request won the race
    let listed = store.list(Page::new(0, 100).unwrap()).await.unwrap();
    let listed_ids: Vec<i64> = listed.iter().map(|q| q.id).collect();
    assert_eq!(listed_ids, (1..=20).collect::<Vec<i64>>());
}

#[tokio::test]
async fn closed_pool_reports_storage_failure_without_writing() {
    let db = TempDb::new("store-closed");
    let store = db.connect().await;
    store.close().await;

    let err = store
        .insert(quote("John Doe", "Hello World!"))
        .await
        .expect_err("insert on closed pool");
    assert!(matches!(err, QuoteError::Storage(_)));

    let reopened = db.connect().await;
    let rows = reopened.list(Page::new(0, 10).unwrap()).await.unwrap();
    assert!(rows.is_empty(), "failed insert must not leave a row behind");
}
