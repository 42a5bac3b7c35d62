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
use crate::error::RenderResult;

/// Pixel coordinate, origin top-left.
pub type Point = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}
impl PixelRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
    pub fn center(&self) -> Point {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    pub opacity: f64,
}
impl Fill {
    pub fn solid(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
    pub fn translucent(color: Rgb, opacity: f64) -> Self {
        Self { color, opacity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub opacity: f64,
    pub width: u32,
}
impl Stroke {
    pub fn new(color: Rgb, width: u32) -> Self {
        Self {
            color,
            opacity: 1.0,
            width,
        }
    }
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}
/// Bitmap text only turns in quarter steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    /// Reads bottom to top.
    Quarter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub size: u32,
    pub color: Rgb,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub rotation: Rotation,
}
impl LabelStyle {
    pub fn centered(size: u32, color: Rgb) -> Self {
        Self {
            size,
            color,
            h_align: HAlign::Center,
            v_align: VAlign::Middle,
            rotation: Rotation::None,
        }
    }
    pub fn aligned(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Drawing primitives the chart renderers emit.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn fill_rect(&mut self, rect: PixelRect, fill: Fill) -> RenderResult<()>;
    fn stroke_rect(&mut self, rect: PixelRect, stroke: Stroke) -> RenderResult<()>;
    fn circle(
        &mut self,
        center: Point,
        radius: u32,
        fill: Fill,
        edge: Option<Stroke>,
    ) -> RenderResult<()>;
    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> RenderResult<()>;
    fn polygon(&mut self, points: &[Point], fill: Fill) -> RenderResult<()>;
    fn dashed_line(&mut self, from: Point, to: Point, stroke: Stroke, dash: u32)
        -> RenderResult<()>;
    fn text(&mut self, text: &str, at: Point, style: &LabelStyle) -> RenderResult<()>;
    /// Flushes the finished image.
    fn present(&mut self) -> RenderResult<()>;
}

/// Splits a line into dash segments of `dash` pixels separated by equal gaps.
pub fn dash_segments(from: Point, to: Point, dash: u32) -> Vec<(Point, Point)> {
    let (dx, dy) = (f64::from(to.0 - from.0), f64::from(to.1 - from.1));
    let length = dx.hypot(dy);
    if length == 0.0 || dash == 0 {
        return vec![(from, to)];
    }
    let step = f64::from(dash);
    let at = |distance: f64| {
        let t = (distance / length).min(1.0);
        (
            from.0 + (dx * t).round() as i32,
            from.1 + (dy * t).round() as i32,
        )
    };
    let mut segments = Vec::new();
    let mut start = 0.0;
    while start < length {
        segments.push((at(start), at(start + step)));
        start += step * 2.0;
    }
    segments
}
