// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.

mod temp_dir;

pub use temp_dir::setup_temp_dirs;

use dayplan_core::TaskStore;

/// Collects the store content as `(date, description)` pairs.
pub fn pairs(store: &TaskStore) -> Vec<(String, String)> {
    store
        .list_all()
        .map(|r| (r.date.clone(), r.description.clone()))
        .collect()
}

/// Asserts that the store lists its tasks in non-decreasing date order.
pub fn assert_sorted(store: &TaskStore) {
    let dates: Vec<_> = store.list_all().map(|r| r.date.as_str()).collect();
    assert!(
        dates.windows(2).all(|w| w[0] <= w[1]),
        "tasks are not sorted by date: {dates:?}"
    );
}
