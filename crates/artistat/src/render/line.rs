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

use super::layout::{format_tick, integer_ticks, LinearAxis, Margins};
use super::surface::{Fill, HAlign, LabelStyle, Point, Rotation, Stroke, Surface, VAlign};
use super::ChartTheme;
use crate::error::RenderResult;
use crate::years::YearSeries;

pub const LINE_SIZE: (u32, u32) = (1200, 700);
const MARGINS: Margins = Margins {
    left: 150,
    right: 40,
    top: 30,
    bottom: 120,
};
const HEADROOM: f64 = 1.2;
const LABEL_LIFT: f64 = 0.05;
const MAX_YEAR_TICKS: usize = 12;

pub fn draw_year_line<S: Surface + ?Sized>(
    surface: &mut S,
    series: &YearSeries,
    theme: &ChartTheme,
) -> RenderResult<()> {
    let area = MARGINS.plot_area(surface.size());
    let (first, last) = (f64::from(series.first_year()), f64::from(series.last_year()));
    let peak = series.max_count().max(1) as f64;
    let x = LinearAxis::new(first - 0.5, last + 0.5, area.left, area.right);
    let y = LinearAxis::new(0.0, peak * HEADROOM, area.bottom, area.top);

    let year_ticks: Vec<f64> = if series.points().len() <= MAX_YEAR_TICKS {
        series.points().iter().map(|(year, _)| f64::from(*year)).collect()
    } else {
        integer_ticks(first, last, MAX_YEAR_TICKS - 2)
    };
    let x_tick_style = LabelStyle::centered(theme.tick_font, theme.text_color)
        .aligned(HAlign::Center, VAlign::Top);
    for tick in year_ticks {
        let px = x.map(tick);
        surface.dashed_line((px, area.top), (px, area.bottom), theme.grid, theme.grid_dash)?;
        surface.text(&format_tick(tick), (px, area.bottom + 12), &x_tick_style)?;
    }
    let y_tick_style = LabelStyle::centered(theme.tick_font, theme.text_color)
        .aligned(HAlign::Right, VAlign::Middle);
    for tick in integer_ticks(0.0, peak * HEADROOM, 6) {
        let py = y.map(tick);
        surface.dashed_line((area.left, py), (area.right, py), theme.grid, theme.grid_dash)?;
        surface.text(&format_tick(tick), (area.left - 12, py), &y_tick_style)?;
    }
    let caption = LabelStyle::centered(theme.caption_font, theme.text_color);
    surface.text(
        "Year",
        ((area.left + area.right) / 2, area.bottom + 12 + theme.tick_font as i32 + 20),
        &caption.aligned(HAlign::Center, VAlign::Top),
    )?;
    surface.text(
        "Number of Datasets",
        (theme.caption_font as i32, (area.top + area.bottom) / 2),
        &caption.rotated(Rotation::Quarter),
    )?;

    let points: Vec<Point> = series
        .points()
        .iter()
        .map(|(year, count)| (x.map(f64::from(*year)), y.map(*count as f64)))
        .collect();
    let baseline = y.map(0.0);
    let mut shaded = Vec::with_capacity(points.len() + 2);
    shaded.push((points[0].0, baseline));
    shaded.extend(points.iter().copied());
    shaded.push((points[points.len() - 1].0, baseline));
    surface.polygon(&shaded, Fill::translucent(theme.area_color, 0.3))?;
    surface.polyline(&points, Stroke::new(theme.line_color, 6).with_opacity(0.9))?;

    let marker_radius = theme.points_to_pixels(4.0).round() as u32;
    let marker_edge = Stroke::new(theme.line_color, 4);
    let count_style = LabelStyle::centered(theme.label_font + 6, theme.line_color)
        .aligned(HAlign::Center, VAlign::Bottom);
    for (&(year, count), &point) in series.points().iter().zip(&points) {
        surface.circle(
            point,
            marker_radius,
            Fill::solid(theme.marker_color),
            Some(marker_edge),
        )?;
        if count > 0 {
            let lifted = y.map(count as f64 + peak * LABEL_LIFT);
            surface.text(&count.to_string(), (x.map(f64::from(year)), lifted), &count_style)?;
        }
    }
    Ok(())
}
