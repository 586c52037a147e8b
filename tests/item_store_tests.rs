use itemstore::config::DatabaseConfig;
use itemstore::db::{ItemPayload, ItemStore};
use itemstore::error::ItemstoreError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "itemstore-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    temp_path
}

fn db_config(db_path: &Path, transactional_mutations: bool) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite:{}", db_path.display()),
        transactional_mutations,
        ..DatabaseConfig::default()
    }
}

async fn cleanup(db_path: &Path) {
    let wal_path = PathBuf::from(format!("{}-wal", db_path.to_string_lossy()));
    let shm_path = PathBuf::from(format!("{}-shm", db_path.to_string_lossy()));
    let _ = fs::remove_file(&wal_path).await;
    let _ = fs::remove_file(&shm_path).await;
    let _ = fs::remove_file(db_path).await;
}

async fn crud_lifecycle(transactional_mutations: bool) {
    let db_path = temp_db_path(if transactional_mutations { "tx" } else { "plain" });
    let store = ItemStore::connect(&db_config(&db_path, transactional_mutations))
        .await
        .expect("connect store");

    // 1. Fresh table lists empty.
    assert!(store.list().await.unwrap().is_empty());

    // 2. Create assigns an id and echoes the payload.
    let created = store
        .create(ItemPayload::new("widget", "a small part"))
        .await
        .unwrap();
    assert!(created.id > 0, "Expected a storage-assigned id");
    assert_eq!(created.name, "widget");
    assert_eq!(created.description, "a small part");

    // 3. Get by id returns the same row; repeated reads are identical.
    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(store.get(created.id).await.unwrap(), fetched);

    let all = store.list().await.unwrap();
    assert_eq!(all, vec![created.clone()]);

    // 4. Update replaces name/description and keeps the id.
    let updated = store
        .update(created.id, ItemPayload::new("widget2", "updated"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "widget2");
    assert_eq!(updated.description, "updated");
    assert_eq!(store.get(created.id).await.unwrap(), updated);

    // 5. Delete returns the last-known value, then the row is gone.
    let deleted = store.delete(created.id).await.unwrap();
    assert_eq!(deleted, updated);
    assert!(matches!(
        store.get(created.id).await,
        Err(ItemstoreError::NotFound(id)) if id == created.id
    ));

    // 6. Deleting again is a plain NotFound.
    assert!(matches!(
        store.delete(created.id).await,
        Err(ItemstoreError::NotFound(_))
    ));

    // 7. Updating a missing id is NotFound and does not create a row.
    assert!(matches!(
        store.update(9_999, ItemPayload::new("ghost", "nope")).await,
        Err(ItemstoreError::NotFound(9_999))
    ));
    assert!(store.list().await.unwrap().is_empty());

    store.close().await;
    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_item_store_crud_without_transactions() {
    crud_lifecycle(false).await;
}

#[tokio::test]
async fn test_item_store_crud_with_transactions() {
    crud_lifecycle(true).await;
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let db_path = temp_db_path("unknown");
    let store = ItemStore::connect(&db_config(&db_path, false))
        .await
        .expect("connect store");

    assert!(matches!(
        store.get(1).await,
        Err(ItemstoreError::NotFound(1))
    ));

    store.close().await;
    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_schema_init_is_idempotent_and_rows_survive_reconnect() {
    let db_path = temp_db_path("reopen");
    let cfg = db_config(&db_path, false);

    let store = ItemStore::connect(&cfg).await.expect("first connect");
    let created = store
        .create(ItemPayload::new("bolt", "m6"))
        .await
        .unwrap();
    store.close().await;

    let store = ItemStore::connect(&cfg).await.expect("second connect");
    assert_eq!(store.list().await.unwrap(), vec![created]);

    store.close().await;
    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_list_length_tracks_creates_minus_deletes() {
    let db_path = temp_db_path("count");
    let store = ItemStore::connect(&db_config(&db_path, false))
        .await
        .expect("connect store");

    let mut ids = Vec::new();
    for i in 0..5 {
        let item = store
            .create(ItemPayload::new(format!("item-{i}"), format!("desc-{i}")))
            .await
            .unwrap();
        ids.push(item.id);
    }
    store.delete(ids[1]).await.unwrap();
    store.delete(ids[3]).await.unwrap();

    let remaining: HashSet<i64> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(remaining, HashSet::from([ids[0], ids[2], ids[4]]));

    store.close().await;
    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let db_path = temp_db_path("concurrent");
    let store = ItemStore::connect(&db_config(&db_path, false))
        .await
        .expect("connect store");

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(ItemPayload::new(format!("n{i}"), "concurrent"))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let item = handle.await.expect("task panicked").expect("create failed");
        assert!(ids.insert(item.id), "duplicate id {}", item.id);
    }
    assert_eq!(store.list().await.unwrap().len(), 16);

    store.close().await;
    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_closed_store_reports_database_error() {
    let db_path = temp_db_path("closed");
    let store = ItemStore::connect(&db_config(&db_path, false))
        .await
        .expect("connect store");
    store.close().await;

    assert!(matches!(
        store.list().await,
        Err(ItemstoreError::Database(_))
    ));

    cleanup(&db_path).await;
}
