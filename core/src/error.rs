// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

/// Errors raised while reading or writing the task file.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The task file exists but could not be read.
    #[error("Failed to read task file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The task file content is not a valid list of tasks.
    #[error("Failed to decode task file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory tasks could not be serialized.
    #[error("Failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    /// Writing or replacing the task file failed.
    #[error("Failed to write task file {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
