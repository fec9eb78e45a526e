// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    padding: bool,
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            padding: true,
        }
    }

    fn compute_paddings(&self, table: &[Vec<String>]) -> Vec<Option<(usize, PaddingDirection)>> {
        let max_widths = self.padding.then(|| get_column_max_width(table, self.columns.len()));

        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let direction = col.padding_direction();
                let is_last = i == self.columns.len() - 1;
                match &max_widths {
                    // Last column does not need padding if it's left-aligned
                    Some(_) if is_last && direction == PaddingDirection::Left => None,
                    Some(widths) => Some((widths[i], direction)),
                    None => None,
                }
            })
            .collect()
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let paddings = self.compute_paddings(&table);

        for (i, (cells, row)) in table.into_iter().zip(self.data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                if j > 0 {
                    write!(f, "{}", self.separator)?;
                }

                let cell = pad_cell(cell, paddings[j]);
                match col.get_color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
            }
        }

        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad_cell(cell: String, padding: Option<(usize, PaddingDirection)>) -> String {
    let Some((width, direction)) = padding else {
        return cell;
    };

    // pad by display width, not by char count
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => cell + &fill,
        PaddingDirection::Right => fill + &cell,
    }
}

fn get_column_max_width(table: &[Vec<String>], n_columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; n_columns];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
