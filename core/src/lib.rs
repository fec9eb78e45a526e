// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of dayplan: a file-backed list of dated tasks kept in date order.

mod config;
mod error;
mod io;
mod store;
mod task;

pub use crate::config::{APP_NAME, Config, STORE_FILE_NAME};
pub use crate::error::StoreError;
pub use crate::io::{read_records, write_records};
pub use crate::store::TaskStore;
pub use crate::task::TaskRecord;
