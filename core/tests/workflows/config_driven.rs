// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven workflow tests.

use dayplan_core::{Config, STORE_FILE_NAME, TaskStore};

use crate::common::{pairs, setup_temp_dirs};

#[tokio::test]
async fn config_driven_store_lives_in_data_dir() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let toml = format!(
        r#"data_dir = "{}""#,
        temp_dirs.data_dir.to_str().unwrap().replace('\\', "/")
    );
    let mut config: Config = toml::from_str(&toml).unwrap();
    config.normalize().unwrap();

    // Act
    let mut store = TaskStore::open(config.store_path()).await;
    store.add("2025-01-05", "Pay bills").await.unwrap();

    // Assert
    assert_eq!(store.path().file_name().unwrap(), STORE_FILE_NAME);
    assert!(temp_dirs.data_dir.join(STORE_FILE_NAME).exists());
}

#[tokio::test]
async fn config_driven_missing_data_dir_is_created_on_first_write() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = Config {
        data_dir: Some(temp_dirs.data_dir.join("nested")),
    };

    // Act
    let mut store = TaskStore::open(config.store_path()).await;
    assert!(store.is_empty());
    store.add("2025-01-05", "Pay bills").await.unwrap();

    // Assert
    let reloaded = TaskStore::open(config.store_path()).await;
    assert_eq!(pairs(&reloaded), pairs(&store));
}
