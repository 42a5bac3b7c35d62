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

//! Descriptive statistics and charts for a catalogue of research artifacts.
//!
//! A CSV table of datasets is loaded, its categorical columns normalized and
//! counted, and three charts are drawn: a stacked distribution of every
//! property, an RE stage by task bubble matrix and a per-year line.

pub mod aggregate;
pub mod config;
pub mod crosstab;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod summary;
pub mod years;

pub use aggregate::{CategoryCounts, FieldDistribution};
pub use config::{BubbleSettings, ServerSettings, Settings};
pub use crosstab::CrossTab;
pub use dataset::{CsvLoader, Dataset, Field, Record};
pub use error::{ArtistatError, ConfigError, DatasetError, RenderError, Result};
pub use normalize::{NormalizationTables, Normalizer, SizeBucket};
pub use pipeline::{Chart, ReportOutcome, ReportPipeline};
pub use years::YearSeries;
