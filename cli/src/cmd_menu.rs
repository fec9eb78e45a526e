// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, BufReader, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::Command;
use dayplan_core::{StoreError, TaskRecord, TaskStore};

use crate::util::{non_iso_date_warning, resolve_date, resolve_lookup_date};

const MENU: &str = "\
1. Add task
2. Search tasks by date
3. Delete tasks by date
4. List all tasks
5. Exit";

#[derive(Debug, Clone, Copy)]
pub struct CmdMenu;

impl CmdMenu {
    pub const NAME: &str = "menu";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Manage tasks from an interactive menu")
    }

    pub async fn run(self, store: &mut TaskStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting interactive menu...");
        let today = Local::now().date_naive();
        let mut menu = Menu::new(BufReader::new(io::stdin()), io::stdout(), today);
        menu.run(store).await?;
        Ok(())
    }
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Delete,
    List,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Search),
            "3" => Ok(Self::Delete),
            "4" => Ok(Self::List),
            "5" => Ok(Self::Exit),
            other => Err(format!("Invalid choice: {other}")),
        }
    }
}

/// Interactive prompt loop over a task store.
///
/// Reads choices and values line by line from `input` and writes prompts and
/// results to `output`. The loop ends on the exit choice or at end of input.
pub struct Menu<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            today,
        }
    }

    pub async fn run(&mut self, store: &mut TaskStore) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::debug!(err = %e, "rejected menu input");
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Add => self.add(store).await?,
                MenuChoice::Search => self.search(store)?,
                MenuChoice::Delete => self.delete(store).await?,
                MenuChoice::List => self.list(store)?,
                MenuChoice::Exit => return Ok(()),
            }
        }
    }

    async fn add(&mut self, store: &mut TaskStore) -> io::Result<()> {
        let date = self.prompt_value("Enter date (YYYY-MM-DD): ")?;
        let description = self.prompt_value("Enter description: ")?;

        let date = resolve_date(&date, self.today);
        if let Some(warning) = non_iso_date_warning(&date) {
            writeln!(self.output, "Warning: {warning}")?;
        }

        match store.add(date, description).await {
            Ok(record) => writeln!(self.output, "Added: {record}"),
            Err(e) => self.report(&e),
        }
    }

    fn search(&mut self, store: &TaskStore) -> io::Result<()> {
        let date = self.prompt_value("Enter date to search: ")?;
        let date = resolve_lookup_date(store, &date, self.today);
        let found = store.search_by_date(&date);
        self.write_records(found)
    }

    async fn delete(&mut self, store: &mut TaskStore) -> io::Result<()> {
        let date = self.prompt_value("Enter date to delete: ")?;
        let date = resolve_lookup_date(store, &date, self.today);
        match store.delete_by_date(&date).await {
            Ok(removed) => writeln!(self.output, "Deleted {removed} task(s)."),
            Err(e) => self.report(&e),
        }
    }

    fn list(&mut self, store: &TaskStore) -> io::Result<()> {
        self.write_records(store.list_all())
    }

    fn write_records<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a TaskRecord>,
    ) -> io::Result<()> {
        let mut count = 0;
        for record in records {
            writeln!(self.output, "{record}")?;
            count += 1;
        }
        if count == 0 {
            writeln!(self.output, "No tasks found.")?;
        }
        Ok(())
    }

    fn report(&mut self, err: &StoreError) -> io::Result<()> {
        tracing::warn!(%err, "task store operation failed");
        writeln!(self.output, "Error: {err}")
    }

    /// Prompts for a value; end of input reads as an empty string.
    fn prompt_value(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.prompt(prompt)?.unwrap_or_default())
    }

    /// Prints the prompt and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
