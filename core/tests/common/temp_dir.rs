// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use dayplan_core::STORE_FILE_NAME;
use tokio::fs;

/// Temporary data directory used for testing.
///
/// Removed when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// Directory holding the task file.
    pub data_dir: PathBuf,
}

impl TempDirs {
    /// Creates a new temporary data directory.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?.keep();
        let data_dir = base.join("data");
        fs::create_dir_all(&data_dir).await?;
        Ok(Self { data_dir })
    }

    /// Path of the task file inside the data directory.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Writes raw content to the task file.
    pub async fn write_store_file(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(self.store_path(), content).await?;
        Ok(())
    }

    fn base(&self) -> PathBuf {
        self.data_dir
            .parent()
            .expect("temp directories should have a parent")
            .to_path_buf()
    }
}

/// Sets up a temporary data directory for integration tests.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

impl Drop for TempDirs {
    fn drop(&mut self) {
        let base = self.base();
        if let Err(e) = std::fs::remove_dir_all(&base) {
            tracing::warn!(path = %base.display(), err = %e, "failed to clean up temp directory");
        }
    }
}
