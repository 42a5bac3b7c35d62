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

//! Plain-text console reports printed next to each chart.

use crate::aggregate::FieldDistribution;
use crate::crosstab::CrossTab;
use crate::years::YearSeries;
use std::fmt;

const RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 30;

fn banner(f: &mut fmt::Formatter, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

pub struct DistributionSummary<'a> {
    pub distributions: &'a [FieldDistribution],
    pub total: usize,
}
impl fmt::Display for DistributionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        banner(f, "DATASET DISTRIBUTION SUMMARY")?;
        for distribution in self.distributions {
            writeln!(f)?;
            writeln!(f, "{}:", distribution.field)?;
            writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
            for (label, count, share) in distribution.counts.percentages(self.total) {
                writeln!(f, "  {label}: {count} ({share:.1}%)")?;
            }
        }
        Ok(())
    }
}

pub struct CrossTabSummary<'a>(pub &'a CrossTab);
impl fmt::Display for CrossTabSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let title = format!(
            "{} vs {} CROSS-TABULATION",
            self.0.row_axis().to_uppercase(),
            self.0.column_axis().to_uppercase()
        );
        banner(f, &title)?;
        writeln!(f, "{}", self.0)
    }
}

pub struct YearSummary<'a>(pub &'a YearSeries);
impl fmt::Display for YearSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let series = self.0;
        banner(f, "YEAR DATASET SUMMARY")?;
        writeln!(f, "Total datasets with valid years: {}", series.valid_count())?;
        writeln!(
            f,
            "Year range: {} - {}",
            series.first_year(),
            series.last_year()
        )?;
        writeln!(f, "Datasets per year:")?;
        for (year, count) in series.points() {
            writeln!(f, "  {year}: {count}")?;
        }
        Ok(())
    }
}
