// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};
use clap::{Arg, ArgMatches, arg, value_parser};
use dayplan_core::TaskStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Resolves the date keywords `today`, `tomorrow` and `yesterday` relative to
/// `today`. Any other input is returned unchanged.
pub fn resolve_date(input: &str, today: NaiveDate) -> String {
    let date = match input {
        "today" => today,
        "tomorrow" => today + TimeDelta::days(1),
        "yesterday" => today - TimeDelta::days(1),
        _ => return input.to_string(),
    };
    format_date(date)
}

/// Resolves the date used to look tasks up in `store`.
///
/// Input that already matches stored tasks is used verbatim, so a task whose
/// date is literally `today` stays reachable. Otherwise keywords are resolved
/// as in [`resolve_date`].
pub fn resolve_lookup_date(store: &TaskStore, input: &str, today: NaiveDate) -> String {
    if store.search_by_date(input).is_empty() {
        resolve_date(input, today)
    } else {
        input.to_string()
    }
}

/// Parses a strict, zero padded `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    // chrono accepts "2025-1-5" for %m/%d, which would not sort correctly
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Message shown when a date will not sort chronologically.
pub fn non_iso_date_warning(date: &str) -> Option<String> {
    match parse_date(date) {
        Some(_) => None,
        None => Some(format!(
            "'{date}' is not a YYYY-MM-DD date, it will be ordered as plain text"
        )),
    }
}
