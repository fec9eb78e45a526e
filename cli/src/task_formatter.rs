// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDate;
use colored::Color;
use dayplan_core::TaskRecord;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug)]
pub struct TaskFormatter {
    columns: Vec<TaskColumn>,
    format: ArgOutputFormat,
}

impl TaskFormatter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            columns: vec![
                TaskColumn::Date(TaskColumnDate { today }),
                TaskColumn::Description(TaskColumnDescription),
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, tasks: &'a [&'a TaskRecord]) -> Display<'a> {
        Display {
            tasks,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    tasks: &'a [&'a TaskRecord],
    formatter: &'a TaskFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.tasks).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(self.formatter.columns.as_slice(), self.tasks))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskColumn {
    Date(TaskColumnDate),
    Description(TaskColumnDescription),
}

impl Column<&TaskRecord> for TaskColumn {
    fn format(&self, data: &&TaskRecord) -> String {
        match self {
            TaskColumn::Date(_) => data.date.clone(),
            TaskColumn::Description(_) => data.description.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, data: &&TaskRecord) -> Option<Color> {
        match self {
            TaskColumn::Date(a) => a.get_color(data),
            TaskColumn::Description(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnDate {
    today: NaiveDate,
}

impl TaskColumnDate {
    fn get_color(&self, task: &TaskRecord) -> Option<Color> {
        const COLOR_PAST: Option<Color> = Some(Color::Red);
        const COLOR_TODAY: Option<Color> = Some(Color::Yellow);

        let date = parse_date(&task.date)?;
        if date < self.today {
            COLOR_PAST
        } else if date == self.today {
            COLOR_TODAY
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnDescription;
