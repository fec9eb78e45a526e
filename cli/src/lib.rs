// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of dayplan: an interactive menu and one-shot
//! subcommands over the task store.

mod cli;
mod cmd_generate_completion;
mod cmd_menu;
mod cmd_task;
mod config;
mod table;
mod task_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_menu::{Menu, MenuChoice};
