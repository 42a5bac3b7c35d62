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

use super::layout::{LinearAxis, Margins};
use super::palette::{label_color, CountRange, Rgb};
use super::surface::{Fill, HAlign, LabelStyle, Stroke, Surface, VAlign};
use super::ChartTheme;
use crate::crosstab::CrossTab;
use crate::error::RenderResult;
use std::f64::consts::PI;

pub const BUBBLE_SIZE: (u32, u32) = (1200, 700);
const MARGINS: Margins = Margins {
    left: 230,
    right: 40,
    top: 40,
    bottom: 90,
};

/// Marker area for `count`, interpolated between the theme bounds. A flat
/// range gets the midpoint.
pub fn bubble_area(range: &CountRange, count: usize, theme: &ChartTheme) -> f64 {
    let (low, high) = theme.bubble_area;
    range.interpolate(count, low, high)
}

/// Rows run top to bottom in table order, columns left to right.
pub fn draw_bubble_matrix<S: Surface + ?Sized>(
    surface: &mut S,
    table: &CrossTab,
    theme: &ChartTheme,
) -> RenderResult<()> {
    let (rows, columns) = (table.rows().len(), table.columns().len());
    if rows == 0 || columns == 0 {
        return Ok(());
    }
    let area = MARGINS.plot_area(surface.size());
    let x = LinearAxis::new(-0.5, columns as f64 - 0.5, area.left, area.right);
    let y = LinearAxis::new(-0.5, rows as f64 - 0.5, area.top, area.bottom);

    let column_style = LabelStyle::centered(theme.tick_font, theme.text_color)
        .aligned(HAlign::Center, VAlign::Top);
    for (j, column) in table.columns().iter().enumerate() {
        let px = x.map(j as f64);
        surface.dashed_line((px, area.top), (px, area.bottom), theme.grid, theme.grid_dash)?;
        surface.text(column, (px, area.bottom + 12), &column_style)?;
    }
    let row_style = LabelStyle::centered(theme.tick_font, theme.text_color)
        .aligned(HAlign::Right, VAlign::Middle);
    for (i, row) in table.rows().iter().enumerate() {
        let py = y.map(i as f64);
        surface.dashed_line((area.left, py), (area.right, py), theme.grid, theme.grid_dash)?;
        surface.text(row, (area.left - 14, py), &row_style)?;
    }

    let cells = table.non_zero_cells();
    let Some(range) = CountRange::from_counts(cells.iter().map(|cell| cell.count)) else {
        return Ok(());
    };
    let edge = Stroke::new(Rgb::WHITE, 3);
    for cell in &cells {
        let center = (x.map(cell.column_index as f64), y.map(cell.row_index as f64));
        let color = theme.scale.color(range.normalize(cell.count));
        let radius = theme.points_to_pixels((bubble_area(&range, cell.count, theme) / PI).sqrt());
        surface.circle(
            center,
            radius.round() as u32,
            Fill::translucent(color, theme.segment_opacity),
            Some(edge),
        )?;
        surface.text(
            &cell.count.to_string(),
            center,
            &LabelStyle::centered(theme.label_font, label_color(color)),
        )?;
    }
    Ok(())
}
