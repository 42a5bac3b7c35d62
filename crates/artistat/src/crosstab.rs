// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Two-key count matrix. Row and column keys keep an explicit display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    row_axis: String,
    column_axis: String,
    rows: Vec<String>,
    columns: Vec<String>,
    counts: Vec<Vec<usize>>,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'a> {
    pub row_index: usize,
    pub column_index: usize,
    pub row: &'a str,
    pub column: &'a str,
    pub count: usize,
}
impl CrossTab {
    /// Tabulates `(row, column)` pairs. Keys come out sorted.
    pub fn from_pairs<I, R, C>(row_axis: &str, column_axis: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, C)>,
        R: Into<String>,
        C: Into<String>,
    {
        let mut tally: BTreeMap<(String, String), usize> = BTreeMap::new();
        let mut rows = BTreeSet::new();
        let mut columns = BTreeSet::new();
        for (row, column) in pairs {
            let (row, column) = (row.into(), column.into());
            rows.insert(row.clone());
            columns.insert(column.clone());
            *tally.entry((row, column)).or_insert(0) += 1;
        }
        let rows: Vec<String> = rows.into_iter().collect();
        let columns: Vec<String> = columns.into_iter().collect();
        let counts = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        tally
                            .get(&(row.clone(), column.clone()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();
        Self {
            row_axis: row_axis.to_string(),
            column_axis: column_axis.to_string(),
            rows,
            columns,
            counts,
        }
    }
    /// Reorders both axes to the given orders, keeping only keys present in
    /// the table.
    pub fn reindex<R, C>(&self, row_order: &[R], column_order: &[C]) -> Self
    where
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let rows: Vec<usize> = row_order
            .iter()
            .filter_map(|key| self.row_position(key.as_ref()))
            .collect();
        let columns: Vec<usize> = column_order
            .iter()
            .filter_map(|key| self.column_position(key.as_ref()))
            .collect();
        Self {
            row_axis: self.row_axis.clone(),
            column_axis: self.column_axis.clone(),
            rows: rows.iter().map(|&i| self.rows[i].clone()).collect(),
            columns: columns.iter().map(|&j| self.columns[j].clone()).collect(),
            counts: rows
                .iter()
                .map(|&i| columns.iter().map(|&j| self.counts[i][j]).collect())
                .collect(),
        }
    }
    fn row_position(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|row| row == key)
    }
    fn column_position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == key)
    }
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn row_axis(&self) -> &str {
        &self.row_axis
    }
    pub fn column_axis(&self) -> &str {
        &self.column_axis
    }
    pub fn count(&self, row: &str, column: &str) -> usize {
        match (self.row_position(row), self.column_position(column)) {
            (Some(i), Some(j)) => self.counts[i][j],
            _ => 0,
        }
    }
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
    /// Cells with a positive count, row-major.
    pub fn non_zero_cells(&self) -> Vec<Cell<'_>> {
        let mut cells = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, column) in self.columns.iter().enumerate() {
                let count = self.counts[i][j];
                if count > 0 {
                    cells.push(Cell {
                        row_index: i,
                        column_index: j,
                        row,
                        column,
                        count,
                    });
                }
            }
        }
        cells
    }
}
impl fmt::Display for CrossTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.chars().count())
            .chain([
                self.row_axis.chars().count(),
                self.column_axis.chars().count(),
            ])
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, column)| {
                let widest_count = self
                    .counts
                    .iter()
                    .map(|row| row[j].to_string().len())
                    .max()
                    .unwrap_or(1);
                column.chars().count().max(widest_count)
            })
            .collect();
        write!(f, "{:<label_width$}", self.column_axis)?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {column:>width$}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.row_axis)?;
        for (row, counts) in self.rows.iter().zip(&self.counts) {
            writeln!(f)?;
            write!(f, "{row:<label_width$}")?;
            for (count, width) in counts.iter().zip(&widths) {
                write!(f, "  {count:>width$}")?;
            }
        }
        Ok(())
    }
}
