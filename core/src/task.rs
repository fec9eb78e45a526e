// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fmt;

/// A single dated task entry.
///
/// The date is kept as the string the user supplied. It is expected to be in
/// `YYYY-MM-DD` form but is never validated; records are ordered by plain
/// lexical comparison of this string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TaskRecord {
    /// The date of the task, usually `YYYY-MM-DD`.
    pub date: String,

    /// Free-form description of the task.
    pub description: String,
}

impl TaskRecord {
    /// Creates a new record from a date and a description.
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
        }
    }

    /// Compares two records by date only.
    pub fn cmp_date(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl fmt::Display for TaskRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.description)
    }
}

/// Stable sort by date, preserving the relative order of records that share a date.
pub(crate) fn sort_by_date(records: &mut [TaskRecord]) {
    records.sort_by(TaskRecord::cmp_date);
}
