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

use artistat::summary::{CrossTabSummary, YearSummary};
use artistat::{CrossTab, YearSeries};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);
impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_log<T>(f: impl FnOnce() -> T) -> (T, String) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    (value, text)
}

#[test]
fn test_crosstab_counts_pairs() {
    let table = CrossTab::from_pairs(
        "RE stage",
        "Task",
        [
            ("Analysis", "Classification"),
            ("Analysis", "Classification"),
            ("Elicitation", "Extraction"),
        ],
    );
    assert_eq!(table.rows(), ["Analysis", "Elicitation"]);
    assert_eq!(table.columns(), ["Classification", "Extraction"]);
    assert_eq!(table.count("Analysis", "Classification"), 2);
    assert_eq!(table.count("Analysis", "Extraction"), 0);
    assert_eq!(table.count("Missing", "Extraction"), 0);
    assert_eq!(table.total(), 3);
}

#[test]
fn test_reindex_keeps_only_present_keys_in_given_order() {
    let table = CrossTab::from_pairs(
        "RE stage",
        "Task",
        [
            ("Analysis", "Q&A"),
            ("Elicitation", "Classification"),
            ("Undefined", "Q&A"),
        ],
    )
    .reindex(
        &["Elicitation", "Analysis", "Specification"],
        &["Classification", "Extraction", "Q&A"],
    );
    assert_eq!(table.rows(), ["Elicitation", "Analysis"]);
    assert_eq!(table.columns(), ["Classification", "Q&A"]);
    assert_eq!(table.total(), 2);
    let cells: Vec<(usize, usize, usize)> = table
        .non_zero_cells()
        .iter()
        .map(|cell| (cell.row_index, cell.column_index, cell.count))
        .collect();
    assert_eq!(cells, vec![(0, 0, 1), (1, 1, 1)]);
}

#[test]
fn test_empty_crosstab() {
    let table = CrossTab::from_pairs("RE stage", "Task", Vec::<(String, String)>::new());
    assert!(table.is_empty());
    assert!(table.non_zero_cells().is_empty());
}

#[test]
fn test_crosstab_summary_layout() {
    let table = CrossTab::from_pairs("RE stage", "Task", [("V&V", "Q&A")]);
    let text = CrossTabSummary(&table).to_string();
    assert!(text.contains("RE STAGE vs TASK CROSS-TABULATION"));
    assert!(text.contains(&"=".repeat(60)));
    let last = text.lines().last().unwrap_or_default();
    assert!(last.starts_with("V&V"));
    assert!(last.trim_end().ends_with('1'));
}

#[test]
fn test_year_series_fills_gaps() {
    let series = YearSeries::from_values([Some("2019"), Some("2021"), Some("2019")]).unwrap();
    assert_eq!(series.points(), [(2019, 2), (2020, 0), (2021, 1)]);
    assert_eq!(series.count(2020), Some(0));
    assert_eq!(series.first_year(), 2019);
    assert_eq!(series.last_year(), 2021);
    assert_eq!(series.max_count(), 2);
    assert_eq!(series.valid_count(), 3);
}

#[test]
fn test_year_series_skips_unparseable_values() {
    let series = YearSeries::from_values([
        Some("2020.0"),
        Some("2020.5"),
        Some("soon"),
        Some("-"),
        None,
        Some("nan"),
    ])
    .unwrap();
    assert_eq!(series.points(), [(2020, 1)]);
    assert_eq!(series.valid_count(), 1);
}

#[test]
fn test_year_series_without_years_is_none() {
    assert!(YearSeries::from_values([None, Some("unknown")]).is_none());
    assert!(YearSeries::from_counts(&BTreeMap::new()).is_none());
}

#[test]
fn test_year_summary_lists_every_year() {
    let counts = BTreeMap::from([(2019, 2), (2021, 1)]);
    let series = YearSeries::from_counts(&counts).unwrap();
    let text = YearSummary(&series).to_string();
    assert!(text.contains("YEAR DATASET SUMMARY"));
    assert!(text.contains("Total datasets with valid years: 3"));
    assert!(text.contains("Year range: 2019 - 2021"));
    assert!(text.contains("  2020: 0\n"));
}

#[test]
fn test_wide_year_span_is_logged() {
    let (series, log) =
        with_captured_log(|| YearSeries::from_values([Some("2019"), Some("2400")]).unwrap());
    assert_eq!(series.points().len(), 382);
    assert_eq!(series.count(2200), Some(0));
    assert!(log.contains("year span is implausibly wide"), "{log}");
    assert!(log.contains("span=381"), "{log}");
}

#[test]
fn test_ordinary_year_span_is_quiet() {
    let (series, log) =
        with_captured_log(|| YearSeries::from_values([Some("2019"), Some("2021")]).unwrap());
    assert_eq!(series.points().len(), 3);
    assert!(log.is_empty(), "{log}");
}
