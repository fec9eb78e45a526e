// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use dayplan_core::{TaskRecord, TaskStore};

use crate::task_formatter::TaskFormatter;
use crate::util::{ArgOutputFormat, non_iso_date_warning, resolve_date, resolve_lookup_date};

#[derive(Debug, Clone)]
pub struct CmdTaskAdd {
    pub date: String,
    pub description: String,
}

impl CmdTaskAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new task")
            .arg(arg_date("Date of the task"))
            .arg(arg!(description: <DESCRIPTION> "Description of the task"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            description: matches
                .get_one::<String>("description")
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, store: &mut TaskStore) -> Result<(), Box<dyn Error>> {
        self.run_at(store, today()).await
    }

    async fn run_at(self, store: &mut TaskStore, today: NaiveDate) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding task...");
        let date = resolve_date(&self.date, today);
        if let Some(warning) = non_iso_date_warning(&date) {
            println!("{} {}", "Warning:".yellow(), warning);
        }

        let record = store.add(date, self.description).await?;
        println!("{} {}", "Added:".green(), record);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskSearch {
    pub date: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("find")
            .about("Show the tasks of a date")
            .arg(arg_date("Date to search, matched exactly"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &mut TaskStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching tasks...");
        let today = today();
        let date = resolve_lookup_date(store, &self.date, today);
        let tasks = store.search_by_date(&date);
        print_tasks(&tasks, today, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskDelete {
    pub date: String,
}

impl CmdTaskDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete all tasks of a date")
            .arg(arg_date("Date to delete, matched exactly"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
        }
    }

    pub async fn run(self, store: &mut TaskStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting tasks...");
        let date = resolve_lookup_date(store, &self.date, today());
        let removed = store.delete_by_date(&date).await?;
        println!("{} {removed} task(s) on {date}", "Deleted:".green());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTaskList {
    pub output_format: ArgOutputFormat,
}

impl CmdTaskList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all tasks in date order")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &mut TaskStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing tasks...");
        let tasks: Vec<_> = store.list_all().collect();
        print_tasks(&tasks, today(), self.output_format);
        Ok(())
    }
}

fn print_tasks(tasks: &[&TaskRecord], today: NaiveDate, format: ArgOutputFormat) {
    if tasks.is_empty() && format == ArgOutputFormat::Table {
        println!("No tasks found.");
        return;
    }

    let formatter = TaskFormatter::new(today).with_output_format(format);
    println!("{}", formatter.format(tasks));
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn arg_date(help: &'static str) -> Arg {
    arg!(date: <DATE>)
        .help(help)
        .long_help(format!(
            "{help}. Expected as YYYY-MM-DD; the keywords today, tomorrow and yesterday are also accepted."
        ))
}

fn get_date(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_default()
}
