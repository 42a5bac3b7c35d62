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

use super::surface::{Fill, LabelStyle, PixelRect, Point, Stroke, Surface};
use crate::error::RenderResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillRect {
        rect: PixelRect,
        fill: Fill,
    },
    StrokeRect {
        rect: PixelRect,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: u32,
        fill: Fill,
        edge: Option<Stroke>,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Point>,
        fill: Fill,
    },
    DashedLine {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Point,
        style: LabelStyle,
    },
}

/// Keeps every primitive in memory instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: (u32, u32),
    primitives: Vec<Primitive>,
    presented: bool,
}
impl RecordingSurface {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
    pub fn is_presented(&self) -> bool {
        self.presented
    }
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
    pub fn filled_rects(&self) -> Vec<(PixelRect, Fill)> {
        self.primitives
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::FillRect { rect, fill } => Some((*rect, *fill)),
                _ => None,
            })
            .collect()
    }
    pub fn circles(&self) -> Vec<(Point, u32, Fill)> {
        self.primitives
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::Circle {
                    center,
                    radius,
                    fill,
                    ..
                } => Some((*center, *radius, *fill)),
                _ => None,
            })
            .collect()
    }
    pub fn text_style(&self, text: &str) -> Option<&LabelStyle> {
        self.primitives.iter().find_map(|primitive| match primitive {
            Primitive::Text {
                text: drawn, style, ..
            } if drawn == text => Some(style),
            _ => None,
        })
    }
}
impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }
    fn fill_rect(&mut self, rect: PixelRect, fill: Fill) -> RenderResult<()> {
        self.primitives.push(Primitive::FillRect { rect, fill });
        Ok(())
    }
    fn stroke_rect(&mut self, rect: PixelRect, stroke: Stroke) -> RenderResult<()> {
        self.primitives.push(Primitive::StrokeRect { rect, stroke });
        Ok(())
    }
    fn circle(
        &mut self,
        center: Point,
        radius: u32,
        fill: Fill,
        edge: Option<Stroke>,
    ) -> RenderResult<()> {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            fill,
            edge,
        });
        Ok(())
    }
    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> RenderResult<()> {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }
    fn polygon(&mut self, points: &[Point], fill: Fill) -> RenderResult<()> {
        self.primitives.push(Primitive::Polygon {
            points: points.to_vec(),
            fill,
        });
        Ok(())
    }
    fn dashed_line(
        &mut self,
        from: Point,
        to: Point,
        stroke: Stroke,
        _dash: u32,
    ) -> RenderResult<()> {
        self.primitives
            .push(Primitive::DashedLine { from, to, stroke });
        Ok(())
    }
    fn text(&mut self, text: &str, at: Point, style: &LabelStyle) -> RenderResult<()> {
        self.primitives.push(Primitive::Text {
            text: text.to_string(),
            at,
            style: *style,
        });
        Ok(())
    }
    fn present(&mut self) -> RenderResult<()> {
        self.presented = true;
        Ok(())
    }
}
