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

use super::palette::Rgb;
use super::surface::{
    dash_segments, Fill, HAlign, LabelStyle, PixelRect, Point, Rotation, Stroke, Surface, VAlign,
};
use crate::error::{RenderError, RenderResult};
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Circle, Color, DrawingArea, FontTransform, IntoDrawingArea, IntoFont,
    PathElement, Polygon, RGBColor, Rectangle, ShapeStyle, Text, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const FONT_FAMILY: &str = "sans-serif";

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}
fn fill_style(fill: Fill) -> ShapeStyle {
    rgb(fill.color).mix(fill.opacity).filled()
}
fn stroke_style(stroke: Stroke) -> ShapeStyle {
    rgb(stroke.color)
        .mix(stroke.opacity)
        .stroke_width(stroke.width)
}

/// PNG output through the `plotters` bitmap backend.
pub struct BitmapSurface<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    size: (u32, u32),
    target: String,
}
impl<'a> BitmapSurface<'a> {
    /// Opens a white canvas that is written to `path` on [`Surface::present`].
    pub fn create(path: &'a Path, size: (u32, u32)) -> RenderResult<Self> {
        let target = path.display().to_string();
        let area = BitMapBackend::new(path, size).into_drawing_area();
        area.fill(&WHITE).map_err(|e| backend_error(&target, e))?;
        Ok(Self { area, size, target })
    }
}
fn backend_error(target: &str, error: impl std::fmt::Display) -> RenderError {
    RenderError::Backend {
        target: target.to_string(),
        reason: error.to_string(),
    }
}
impl Surface for BitmapSurface<'_> {
    fn size(&self) -> (u32, u32) {
        self.size
    }
    fn fill_rect(&mut self, rect: PixelRect, fill: Fill) -> RenderResult<()> {
        self.area
            .draw(&Rectangle::new(
                [(rect.left, rect.top), (rect.right, rect.bottom)],
                fill_style(fill),
            ))
            .map_err(|e| backend_error(&self.target, e))
    }
    fn stroke_rect(&mut self, rect: PixelRect, stroke: Stroke) -> RenderResult<()> {
        self.area
            .draw(&Rectangle::new(
                [(rect.left, rect.top), (rect.right, rect.bottom)],
                stroke_style(stroke),
            ))
            .map_err(|e| backend_error(&self.target, e))
    }
    fn circle(
        &mut self,
        center: Point,
        radius: u32,
        fill: Fill,
        edge: Option<Stroke>,
    ) -> RenderResult<()> {
        let radius = i32::try_from(radius).unwrap_or(i32::MAX);
        self.area
            .draw(&Circle::new(center, radius, fill_style(fill)))
            .map_err(|e| backend_error(&self.target, e))?;
        if let Some(edge) = edge {
            self.area
                .draw(&Circle::new(center, radius, stroke_style(edge)))
                .map_err(|e| backend_error(&self.target, e))?;
        }
        Ok(())
    }
    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> RenderResult<()> {
        self.area
            .draw(&PathElement::new(points.to_vec(), stroke_style(stroke)))
            .map_err(|e| backend_error(&self.target, e))
    }
    fn polygon(&mut self, points: &[Point], fill: Fill) -> RenderResult<()> {
        self.area
            .draw(&Polygon::new(points.to_vec(), fill_style(fill)))
            .map_err(|e| backend_error(&self.target, e))
    }
    fn dashed_line(
        &mut self,
        from: Point,
        to: Point,
        stroke: Stroke,
        dash: u32,
    ) -> RenderResult<()> {
        for (start, end) in dash_segments(from, to, dash) {
            self.polyline(&[start, end], stroke)?;
        }
        Ok(())
    }
    fn text(&mut self, text: &str, at: Point, style: &LabelStyle) -> RenderResult<()> {
        let h_pos = match style.h_align {
            HAlign::Left => HPos::Left,
            HAlign::Center => HPos::Center,
            HAlign::Right => HPos::Right,
        };
        let v_pos = match style.v_align {
            VAlign::Top => VPos::Top,
            VAlign::Middle => VPos::Center,
            VAlign::Bottom => VPos::Bottom,
        };
        let mut font = (FONT_FAMILY, f64::from(style.size)).into_font();
        if style.rotation == Rotation::Quarter {
            font = font.transform(FontTransform::Rotate270);
        }
        let text_style = font
            .color(&rgb(style.color))
            .pos(Pos::new(h_pos, v_pos));
        self.area
            .draw(&Text::new(text.to_string(), at, text_style))
            .map_err(|e| backend_error(&self.target, e))
    }
    fn present(&mut self) -> RenderResult<()> {
        self.area
            .present()
            .map_err(|e| backend_error(&self.target, e))
    }
}
