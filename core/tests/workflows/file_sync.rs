// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! File synchronization workflow tests.
//!
//! A fresh store opened on the same file must always observe the latest
//! committed state of another store.

use dayplan_core::{StoreError, TaskStore, read_records};
use tokio::fs;

use crate::common::{pairs, setup_temp_dirs};

#[tokio::test]
async fn file_sync_round_trip_through_fresh_store() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut store = TaskStore::open(temp_dirs.store_path()).await;
    store.add("2025-02-10", "Buy milk").await.unwrap();
    store.add("2025-01-05", "Pay bills").await.unwrap();
    store.add("2025-02-10", "Call mom").await.unwrap();

    // Act
    let reloaded = TaskStore::open(temp_dirs.store_path()).await;

    // Assert
    assert_eq!(pairs(&reloaded), pairs(&store));
}

#[tokio::test]
async fn file_sync_delete_is_visible_after_reload() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut store = TaskStore::open(temp_dirs.store_path()).await;
    store.add("2025-02-10", "Buy milk").await.unwrap();
    store.add("2025-01-05", "Pay bills").await.unwrap();

    // Act
    store.delete_by_date("2025-01-05").await.unwrap();
    let reloaded = TaskStore::open(temp_dirs.store_path()).await;

    // Assert
    assert_eq!(
        pairs(&reloaded),
        vec![("2025-02-10".to_string(), "Buy milk".to_string())]
    );
}

#[tokio::test]
async fn file_sync_loads_unsorted_file_in_date_order() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    temp_dirs
        .write_store_file(
            r#"[
                {"date": "2025-03-01", "description": "later"},
                {"date": "2025-01-01", "description": "first of two"},
                {"date": "2025-01-01", "description": "second of two"}
            ]"#,
        )
        .await
        .unwrap();

    // Act
    let store = TaskStore::open(temp_dirs.store_path()).await;

    // Assert
    let descriptions: Vec<_> = store.list_all().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["first of two", "second of two", "later"]);
}

#[tokio::test]
async fn file_sync_corrupt_file_is_treated_as_empty() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    temp_dirs.write_store_file("[{\"date\": ").await.unwrap();

    // Act
    let store = TaskStore::open(temp_dirs.store_path()).await;
    let strict = read_records(&temp_dirs.store_path()).await;

    // Assert
    assert!(store.is_empty());
    assert!(matches!(strict, Err(StoreError::Decode { .. })));
}

#[tokio::test]
async fn file_sync_corrupt_file_is_replaced_on_next_add() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    temp_dirs.write_store_file("garbage").await.unwrap();
    let mut store = TaskStore::open(temp_dirs.store_path()).await;

    // Act
    store.add("2025-01-05", "Pay bills").await.unwrap();

    // Assert
    let records = read_records(&temp_dirs.store_path()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "Pay bills");
}

#[tokio::test]
async fn file_sync_empty_delete_leaves_file_unchanged() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut store = TaskStore::open(temp_dirs.store_path()).await;
    store.add("2025-01-05", "Pay bills").await.unwrap();
    let before = fs::read_to_string(temp_dirs.store_path()).await.unwrap();

    // Act
    let removed = store.delete_by_date("1999-01-01").await.unwrap();

    // Assert
    assert_eq!(removed, 0);
    let after = fs::read_to_string(temp_dirs.store_path()).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn file_sync_file_is_a_json_array_of_objects() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut store = TaskStore::open(temp_dirs.store_path()).await;

    // Act
    store.add("2025-01-05", "Pay bills").await.unwrap();

    // Assert
    let content = fs::read_to_string(temp_dirs.store_path()).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "date": "2025-01-05", "description": "Pay bills" }])
    );
}

#[tokio::test]
async fn file_sync_failed_add_keeps_memory_and_disk_equal() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut store = TaskStore::open(temp_dirs.store_path()).await;
    store.add("2025-01-05", "Pay bills").await.unwrap();

    // the data directory becomes a plain file, so writes fail from now on
    fs::remove_dir_all(&temp_dirs.data_dir).await.unwrap();
    fs::write(&temp_dirs.data_dir, "").await.unwrap();

    // Act
    let result = store.add("2025-02-10", "Buy milk").await;

    // Assert
    assert!(matches!(result, Err(StoreError::Persist { .. })));
    assert_eq!(
        pairs(&store),
        vec![("2025-01-05".to_string(), "Pay bills".to_string())]
    );

    // restore the directory so cleanup succeeds
    fs::remove_file(&temp_dirs.data_dir).await.unwrap();
}
