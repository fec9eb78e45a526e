// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use dayplan_core::{APP_NAME, TaskStore};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_menu::CmdMenu;
use crate::cmd_task::{CmdTaskAdd, CmdTaskDelete, CmdTaskList, CmdTaskSearch};
use crate::config::parse_config;

/// Run the dayplan command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep a dated to-do list, sorted by day.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the interactive menu
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/dayplan/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/dayplan/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdMenu::command())
            .subcommand(CmdTaskAdd::command())
            .subcommand(CmdTaskSearch::command())
            .subcommand(CmdTaskDelete::command())
            .subcommand(CmdTaskList::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdMenu::NAME, _)) | None => Menu(CmdMenu),
            Some((CmdTaskAdd::NAME, matches)) => Add(CmdTaskAdd::from(matches)),
            Some((CmdTaskSearch::NAME, matches)) => Search(CmdTaskSearch::from(matches)),
            Some((CmdTaskDelete::NAME, matches)) => Delete(CmdTaskDelete::from(matches)),
            Some((CmdTaskList::NAME, matches)) => List(CmdTaskList::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Interactive menu
    Menu(CmdMenu),

    /// Add a task
    Add(CmdTaskAdd),

    /// Show the tasks of a date
    Search(CmdTaskSearch),

    /// Delete the tasks of a date
    Delete(CmdTaskDelete),

    /// List all tasks
    List(CmdTaskList),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Menu(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Add(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Search(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Delete(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            List(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut TaskStore) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut store = TaskStore::open(config.store_path()).await;
        tracing::debug!(path = %store.path().display(), tasks = store.len(), "opened task store");

        f(&mut store).await
    }
}
