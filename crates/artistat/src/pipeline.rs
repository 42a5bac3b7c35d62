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

use crate::aggregate::FieldDistribution;
use crate::config::Settings;
use crate::crosstab::CrossTab;
use crate::dataset::{Dataset, Field};
use crate::error::{RenderError, RenderResult, Result};
use crate::normalize::Normalizer;
use crate::render::{
    draw_bubble_matrix, draw_stacked_distribution, draw_year_line, BitmapSurface, ChartTheme,
    RecordingSurface, Surface, BUBBLE_SIZE, LINE_SIZE, STACKED_SIZE,
};
use crate::summary::{CrossTabSummary, DistributionSummary, YearSummary};
use crate::years::YearSeries;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const STACKED_FILE: &str = "dataset_distribution_stacked.png";
pub const BUBBLE_FILE: &str = "re_stage_task_bubble.png";
pub const LINE_FILE: &str = "year_dataset_line.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    StackedDistribution,
    Bubble,
    YearLine,
}
impl Chart {
    pub const fn file_name(self) -> &'static str {
        match self {
            Chart::StackedDistribution => STACKED_FILE,
            Chart::Bubble => BUBBLE_FILE,
            Chart::YearLine => LINE_FILE,
        }
    }
    const fn title(self) -> &'static str {
        match self {
            Chart::StackedDistribution => "Stacked distribution plot",
            Chart::Bubble => "Bubble plot",
            Chart::YearLine => "Year line plot",
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub distributions: Vec<FieldDistribution>,
    pub crosstab: Option<CrossTab>,
    pub years: Option<YearSeries>,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<Chart>,
}

/// Load, aggregate, render and summarize in one sequential pass.
pub struct ReportPipeline {
    settings: Settings,
    normalizer: Normalizer,
    theme: ChartTheme,
    dry_run: bool,
}
impl ReportPipeline {
    pub fn new(settings: Settings) -> Self {
        let normalizer = Normalizer::with_tables(settings.tables.clone());
        let theme = ChartTheme::default().with_label_min_count(settings.label_min_count);
        Self {
            settings,
            normalizer,
            theme,
            dry_run: false,
        }
    }
    /// Render onto an in-memory surface and write no files.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ReportOutcome> {
        let dataset = Dataset::load(&self.settings.data_path)?;
        info!(
            rows = dataset.len(),
            path = %self.settings.data_path.display(),
            "artifact table loaded"
        );
        let properties: Vec<&str> = self
            .settings
            .properties
            .iter()
            .map(|field| field.column())
            .collect();
        writeln!(out, "Loaded {} datasets", dataset.len())?;
        writeln!(out, "Properties to analyze: {}", properties.join(", "))?;
        self.run_on(&dataset, out)
    }
    pub fn run_on<W: Write>(&self, dataset: &Dataset, out: &mut W) -> Result<ReportOutcome> {
        if !self.dry_run {
            let dir = &self.settings.output_dir;
            std::fs::create_dir_all(dir).map_err(|source| RenderError::OutputDirectory {
                path: dir.display().to_string(),
                source,
            })?;
        }
        let mut outcome = ReportOutcome {
            distributions: self.distributions(dataset),
            ..ReportOutcome::default()
        };

        if dataset.is_empty() {
            let notice = "No records to plot for the distribution chart";
            self.skip(out, &mut outcome, Chart::StackedDistribution, notice)?;
        } else {
            let written = self.render(Chart::StackedDistribution, STACKED_SIZE, |surface| {
                draw_stacked_distribution(surface, &outcome.distributions, &self.theme)
            })?;
            self.announce(out, &mut outcome, Chart::StackedDistribution, written)?;
            write!(
                out,
                "{}",
                DistributionSummary {
                    distributions: &outcome.distributions,
                    total: dataset.len(),
                }
            )?;
        }

        let table = self.crosstab(dataset);
        if table.is_empty() {
            let notice = "No data to plot for RE stage vs Task bubble plot";
            self.skip(out, &mut outcome, Chart::Bubble, notice)?;
        } else {
            let written = self.render(Chart::Bubble, BUBBLE_SIZE, |surface| {
                draw_bubble_matrix(surface, &table, &self.theme)
            })?;
            self.announce(out, &mut outcome, Chart::Bubble, written)?;
            write!(out, "{}", CrossTabSummary(&table))?;
            outcome.crosstab = Some(table);
        }

        match self.year_series(dataset) {
            None => self.skip(out, &mut outcome, Chart::YearLine, "No valid year data to plot")?,
            Some(series) => {
                let written = self.render(Chart::YearLine, LINE_SIZE, |surface| {
                    draw_year_line(surface, &series, &self.theme)
                })?;
                self.announce(out, &mut outcome, Chart::YearLine, written)?;
                write!(out, "{}", YearSummary(&series))?;
                outcome.years = Some(series);
            }
        }
        Ok(outcome)
    }
    pub fn distributions(&self, dataset: &Dataset) -> Vec<FieldDistribution> {
        self.settings
            .properties
            .iter()
            .map(|&field| {
                FieldDistribution::from_dataset(
                    dataset,
                    field,
                    &self.normalizer,
                    self.settings.aggregation_threshold,
                )
            })
            .collect()
    }
    /// RE stage by task, reindexed to the configured display order.
    pub fn crosstab(&self, dataset: &Dataset) -> CrossTab {
        let pairs = dataset.records().iter().map(|record| {
            (
                self.display_label(Field::ReStage, record.get(Field::ReStage)),
                self.display_label(Field::Task, record.get(Field::Task)),
            )
        });
        let bubble = &self.settings.bubble;
        CrossTab::from_pairs(Field::ReStage.column(), Field::Task.column(), pairs)
            .reindex(&bubble.row_order, &bubble.column_order)
    }
    fn display_label(&self, field: Field, raw: Option<&str>) -> String {
        let value = self.normalizer.normalize(field, raw);
        self.settings
            .bubble
            .aliases
            .iter()
            .find(|(long, _)| *long == value)
            .map_or(value, |(_, short)| short.clone())
    }
    pub fn year_series(&self, dataset: &Dataset) -> Option<YearSeries> {
        YearSeries::from_values(dataset.column(Field::Year))
    }
    fn render<F>(&self, chart: Chart, size: (u32, u32), draw: F) -> RenderResult<Option<PathBuf>>
    where
        F: FnOnce(&mut dyn Surface) -> RenderResult<()>,
    {
        if self.dry_run {
            let mut surface = RecordingSurface::new(size);
            draw(&mut surface)?;
            surface.present()?;
            debug!(
                chart = chart.file_name(),
                primitives = surface.primitives().len(),
                "dry run, nothing written"
            );
            return Ok(None);
        }
        let path = self.settings.output_dir.join(chart.file_name());
        {
            let mut surface = BitmapSurface::create(&path, size)?;
            draw(&mut surface)?;
            surface.present()?;
        }
        info!(path = %path.display(), "chart written");
        Ok(Some(path))
    }
    fn announce<W: Write>(
        &self,
        out: &mut W,
        outcome: &mut ReportOutcome,
        chart: Chart,
        written: Option<PathBuf>,
    ) -> Result<()> {
        match written {
            Some(path) => {
                writeln!(out, "{} saved as {}", chart.title(), display_name(&path))?;
                outcome.written.push(path);
            }
            None => writeln!(out, "{} rendered (dry run)", chart.title())?,
        }
        Ok(())
    }
    fn skip<W: Write>(
        &self,
        out: &mut W,
        outcome: &mut ReportOutcome,
        chart: Chart,
        notice: &str,
    ) -> Result<()> {
        warn!(chart = chart.file_name(), "{notice}");
        writeln!(out, "{notice}")?;
        outcome.skipped.push(chart);
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
