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

use super::layout::{format_tick, nice_ticks, LinearAxis, Margins};
use super::palette::{label_color, CountRange, Rgb};
use super::surface::{Fill, HAlign, LabelStyle, PixelRect, Rotation, Surface, VAlign};
use super::ChartTheme;
use crate::aggregate::FieldDistribution;
use crate::error::RenderResult;

pub const STACKED_SIZE: (u32, u32) = (1800, 900);
const MARGINS: Margins = Margins {
    left: 300,
    right: 40,
    top: 30,
    bottom: 130,
};
const BAR_FILL_RATIO: f64 = 0.8;
const X_CAPTION: &str = "Number of Datasets";

/// One horizontal bar per field, segments in the order of each
/// distribution's counts.
pub fn draw_stacked_distribution<S: Surface + ?Sized>(
    surface: &mut S,
    distributions: &[FieldDistribution],
    theme: &ChartTheme,
) -> RenderResult<()> {
    let area = MARGINS.plot_area(surface.size());
    let range = CountRange::from_counts(
        distributions
            .iter()
            .flat_map(|distribution| distribution.counts.iter().map(|(_, count)| count)),
    );
    let max_total = distributions
        .iter()
        .map(|distribution| distribution.counts.total())
        .max()
        .unwrap_or(0)
        .max(1);
    let x = LinearAxis::new(0.0, max_total as f64, area.left, area.right);

    let tick_style = LabelStyle::centered(theme.tick_font, theme.text_color)
        .aligned(HAlign::Center, VAlign::Top);
    for tick in nice_ticks(0.0, max_total as f64, 8) {
        let px = x.map(tick);
        surface.dashed_line((px, area.top), (px, area.bottom), theme.grid, theme.grid_dash)?;
        surface.text(&format_tick(tick), (px, area.bottom + 12), &tick_style)?;
    }
    surface.polyline(
        &[(area.left, area.bottom), (area.right, area.bottom)],
        theme.axis,
    )?;
    surface.text(
        X_CAPTION,
        ((area.left + area.right) / 2, area.bottom + 12 + theme.tick_font as i32 + 24),
        &LabelStyle::centered(theme.caption_font, theme.text_color)
            .aligned(HAlign::Center, VAlign::Top),
    )?;

    let band = f64::from(area.height()) / distributions.len().max(1) as f64;
    let name_style = LabelStyle::centered(theme.tick_font, theme.text_color)
        .aligned(HAlign::Right, VAlign::Middle);
    for (row, distribution) in distributions.iter().enumerate() {
        let center = f64::from(area.top) + band * (row as f64 + 0.5);
        let half = band * BAR_FILL_RATIO / 2.0;
        let (top, bottom) = ((center - half).round() as i32, (center + half).round() as i32);
        surface.text(
            distribution.field.column(),
            (area.left - 14, center.round() as i32),
            &name_style,
        )?;
        let mut offset = 0usize;
        for (label, count) in distribution.counts.iter() {
            let rect = PixelRect {
                left: x.map(offset as f64),
                top,
                right: x.map((offset + count) as f64),
                bottom,
            };
            let color = theme
                .scale
                .color(range.map_or(0.5, |range| range.normalize(count)));
            surface.fill_rect(rect, Fill::translucent(color, theme.segment_opacity))?;
            surface.stroke_rect(rect, theme.segment_edge)?;
            if count >= theme.label_min_count {
                draw_segment_label(surface, rect, label, count, label_color(color), theme)?;
            }
            offset += count;
        }
    }
    Ok(())
}

/// Category name with the count on a second line.
fn draw_segment_label<S: Surface + ?Sized>(
    surface: &mut S,
    rect: PixelRect,
    label: &str,
    count: usize,
    color: Rgb,
    theme: &ChartTheme,
) -> RenderResult<()> {
    let rotation = if count <= theme.rotate_at_or_below {
        Rotation::Quarter
    } else {
        Rotation::None
    };
    let (cx, cy) = rect.center();
    let offset = theme.label_font as i32 * 6 / 10;
    let (first, second) = match rotation {
        Rotation::None => ((cx, cy - offset), (cx, cy + offset)),
        Rotation::Quarter => ((cx - offset, cy), (cx + offset, cy)),
    };
    let style = LabelStyle::centered(theme.label_font, color).rotated(rotation);
    surface.text(label, first, &style)?;
    surface.text(&format!("({count})"), second, &style)
}
