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

use crate::normalize::{Normalizer, UNDEFINED};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Widest first-to-last range the series fills without complaint.
pub const PLAUSIBLE_YEAR_SPAN: i64 = 200;

/// Per-year counts covering every year between the first and last observed
/// year, gaps filled with zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSeries {
    points: Vec<(i32, usize)>,
    valid_count: usize,
}
impl YearSeries {
    /// Accepts integral numbers only, so `2021` and `2021.0` parse but `2021.5`
    /// does not.
    pub fn parse_year(raw: &str) -> Option<i32> {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return None;
        }
        Some(value as i32)
    }
    pub fn from_values<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for raw in values {
            let value = Normalizer::default_value(raw);
            if value == UNDEFINED {
                continue;
            }
            if let Some(year) = Self::parse_year(&value) {
                *counts.entry(year).or_insert(0) += 1;
            }
        }
        Self::from_counts(&counts)
    }
    /// Returns `None` when there is nothing to plot.
    pub fn from_counts(counts: &BTreeMap<i32, usize>) -> Option<Self> {
        let (&first, _) = counts.first_key_value()?;
        let (&last, _) = counts.last_key_value()?;
        let span = i64::from(last) - i64::from(first);
        if span > PLAUSIBLE_YEAR_SPAN {
            warn!(first, last, span, "year span is implausibly wide, check the Year column");
        }
        let points = (first..=last)
            .map(|year| (year, counts.get(&year).copied().unwrap_or(0)))
            .collect();
        Some(Self {
            points,
            valid_count: counts.values().sum(),
        })
    }
    pub fn points(&self) -> &[(i32, usize)] {
        &self.points
    }
    pub fn count(&self, year: i32) -> Option<usize> {
        self.points
            .iter()
            .find(|(known, _)| *known == year)
            .map(|(_, count)| *count)
    }
    pub fn first_year(&self) -> i32 {
        self.points[0].0
    }
    pub fn last_year(&self) -> i32 {
        self.points[self.points.len() - 1].0
    }
    pub fn max_count(&self) -> usize {
        self.points.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
    /// Rows with a parseable year.
    pub fn valid_count(&self) -> usize {
        self.valid_count
    }
}
