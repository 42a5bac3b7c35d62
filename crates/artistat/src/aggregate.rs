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

use crate::dataset::{Dataset, Field};
use crate::normalize::{Normalizer, OTHERS, UNDEFINED};
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered `(category, count)` pairs for one field.
///
/// Entries are sorted by descending count with ties kept in encounter order,
/// except that `Undefined` always sits last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    entries: Vec<(String, usize)>,
}
impl CategoryCounts {
    /// Counts `values`, folding categories seen fewer than `threshold` times
    /// into a single `Others` bucket.
    pub fn from_values<I, S>(values: I, threshold: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter: IndexMap<String, usize> = IndexMap::new();
        for value in values {
            *counter.entry(value.as_ref().to_string()).or_insert(0) += 1;
        }
        let mut merged: IndexMap<String, usize> = IndexMap::with_capacity(counter.len());
        let mut low_frequency = 0usize;
        for (value, count) in counter {
            if count < threshold {
                low_frequency += count;
            } else {
                merged.insert(value, count);
            }
        }
        if low_frequency > 0 {
            *merged.entry(OTHERS.to_string()).or_insert(0) += low_frequency;
        }
        let mut entries: Vec<(String, usize)> = merged.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(position) = entries.iter().position(|(label, _)| label == UNDEFINED) {
            let undefined = entries.remove(position);
            entries.push(undefined);
        }
        Self { entries }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, count)| *count)
    }
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
    pub fn min_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, count)| *count).min()
    }
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, count)| *count).max()
    }
    /// Each entry with its share of `total` as a percentage.
    pub fn percentages(&self, total: usize) -> Vec<(&str, usize, f64)> {
        self.iter()
            .map(|(label, count)| {
                let share = if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                };
                (label, count, share)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDistribution {
    pub field: Field,
    pub counts: CategoryCounts,
}
impl FieldDistribution {
    pub fn from_dataset(
        dataset: &Dataset,
        field: Field,
        normalizer: &Normalizer,
        threshold: usize,
    ) -> Self {
        let values = dataset
            .column(field)
            .map(|raw| normalizer.normalize(field, raw));
        Self {
            field,
            counts: CategoryCounts::from_values(values, threshold),
        }
    }
}
