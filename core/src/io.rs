// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::StoreError;
use crate::task::{TaskRecord, sort_by_date};

/// Reads and decodes the task file at `path`, sorted by date.
///
/// A missing file is not an error and yields an empty list. Any other read
/// failure or malformed content is reported.
#[tracing::instrument]
pub async fn read_records(path: &Path) -> Result<Vec<TaskRecord>, StoreError> {
    let content = match fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "task file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };

    let mut records: Vec<TaskRecord> =
        serde_json::from_slice(&content).map_err(|source| StoreError::Decode {
            path: path.to_owned(),
            source,
        })?;

    sort_by_date(&mut records);
    tracing::debug!(count = records.len(), "loaded tasks");
    Ok(records)
}

/// Replaces the task file at `path` with the given records.
///
/// The content is written to a sibling temporary file first and then renamed
/// over the target, so a reader never observes a partially written file.
pub async fn write_records(path: &Path, records: &[TaskRecord]) -> Result<(), StoreError> {
    let content = serde_json::to_vec_pretty(records).map_err(StoreError::Encode)?;
    let persist_err = |source| StoreError::Persist {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(persist_err)?;
    }

    let tmp_path = tmp_path_of(path);
    if let Err(e) = fs::write(&tmp_path, &content).await {
        tracing::error!(path = %tmp_path.display(), err = %e, "failed to write temporary task file");
        return Err(persist_err(e));
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        tracing::error!(from = %tmp_path.display(), to = %path.display(), err = %e, "failed to replace task file");
        let _ = fs::remove_file(&tmp_path).await;
        return Err(persist_err(e));
    }

    tracing::debug!(path = %path.display(), count = records.len(), "persisted tasks");
    Ok(())
}

fn tmp_path_of(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|a| a.to_owned())
        .unwrap_or_else(|| OsString::from("tasks"));
    name.push(".tmp");
    path.with_file_name(name)
}
