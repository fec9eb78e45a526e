// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::slice;

use crate::StoreError;
use crate::io::{read_records, write_records};
use crate::task::{TaskRecord, sort_by_date};

/// File-backed collection of tasks, kept sorted by date.
///
/// Every successful mutation rewrites the whole backing file. When the write
/// fails the mutation is undone in memory, so the collection always matches
/// the last committed file content.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    records: Vec<TaskRecord>,
}

impl TaskStore {
    /// Opens the store backed by the file at `path`.
    ///
    /// A missing, unreadable or corrupt file results in an empty store. The
    /// failure is logged but never returned; use [`read_records`] to observe it.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_or_empty(&path).await;
        Self { path, records }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards the in-memory tasks and loads them again from the backing file.
    pub async fn reload(&mut self) {
        self.records = load_or_empty(&self.path).await;
    }

    /// Adds a task and persists the store.
    ///
    /// Any strings are accepted, including empty ones. The new task is placed
    /// after existing tasks with the same date.
    #[tracing::instrument(skip(self, date, description))]
    pub async fn add(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TaskRecord, StoreError> {
        let record = TaskRecord::new(date, description);
        tracing::debug!(date = %record.date, "adding task");

        let previous = self.records.clone();
        self.records.push(record.clone());
        sort_by_date(&mut self.records);

        if let Err(e) = self.persist().await {
            self.records = previous;
            return Err(e);
        }
        Ok(record)
    }

    /// Returns the tasks whose date equals `date` exactly, in store order.
    pub fn search_by_date(&self, date: &str) -> Vec<&TaskRecord> {
        self.records.iter().filter(|r| r.date == date).collect()
    }

    /// Removes every task whose date equals `date` exactly.
    ///
    /// Returns the number of removed tasks. When nothing matches, the store
    /// and its file are left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_date(&mut self, date: &str) -> Result<usize, StoreError> {
        let before = self.records.len();
        let (removed, kept): (Vec<_>, Vec<_>) =
            self.records.iter().cloned().partition(|r| r.date == date);

        if removed.is_empty() {
            tracing::debug!("no task matched, nothing to delete");
            return Ok(0);
        }

        let previous = std::mem::replace(&mut self.records, kept);
        if let Err(e) = self.persist().await {
            self.records = previous;
            return Err(e);
        }

        tracing::debug!(removed = removed.len(), remaining = before - removed.len(), "deleted tasks");
        Ok(removed.len())
    }

    /// Iterates over all tasks in date order.
    ///
    /// The iterator is cheap to clone, so it can be walked more than once.
    pub fn list_all(&self) -> slice::Iter<'_, TaskRecord> {
        self.records.iter()
    }

    async fn persist(&self) -> Result<(), StoreError> {
        write_records(&self.path, &self.records).await
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a TaskRecord;
    type IntoIter = slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_all()
    }
}

async fn load_or_empty(path: &Path) -> Vec<TaskRecord> {
    match read_records(path).await {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(%err, "failed to load tasks, starting with an empty list");
            Vec::new()
        }
    }
}
