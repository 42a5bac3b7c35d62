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

//! Chart rendering onto a generic [`Surface`].
//!
//! Each chart function is a pure translation of already aggregated data plus
//! a [`ChartTheme`] into drawing primitives. The caller owns the surface and
//! decides when to present it.

pub mod bitmap;
pub mod bubble;
pub mod layout;
pub mod line;
pub mod palette;
pub mod recording;
pub mod stacked;
pub mod surface;

pub use bitmap::BitmapSurface;
pub use bubble::{draw_bubble_matrix, BUBBLE_SIZE};
pub use line::{draw_year_line, LINE_SIZE};
pub use palette::{label_color, CountRange, Rgb, SequentialScale};
pub use recording::{Primitive, RecordingSurface};
pub use stacked::{draw_stacked_distribution, STACKED_SIZE};
pub use surface::{Fill, LabelStyle, PixelRect, Point, Rotation, Stroke, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub scale: SequentialScale,
    pub segment_opacity: f64,
    pub segment_edge: Stroke,
    /// Segments with fewer datasets than this stay unlabelled.
    pub label_min_count: usize,
    /// Segment labels at or below this count are turned a quarter.
    pub rotate_at_or_below: usize,
    /// Bubble marker area bounds in square points.
    pub bubble_area: (f64, f64),
    /// Pixels per inch, used to turn point sizes into pixels.
    pub dpi: f64,
    pub grid: Stroke,
    pub grid_dash: u32,
    pub axis: Stroke,
    pub text_color: Rgb,
    pub tick_font: u32,
    pub label_font: u32,
    pub caption_font: u32,
    pub line_color: Rgb,
    pub marker_color: Rgb,
    pub area_color: Rgb,
}
impl Default for ChartTheme {
    fn default() -> Self {
        let grey = Rgb::new(0xb0, 0xb0, 0xb0);
        Self {
            scale: SequentialScale::blues(),
            segment_opacity: 0.8,
            segment_edge: Stroke::new(Rgb::WHITE, 3),
            label_min_count: 3,
            rotate_at_or_below: 10,
            bubble_area: (200.0, 2000.0),
            dpi: 150.0,
            grid: Stroke::new(grey, 1).with_opacity(0.3),
            grid_dash: 8,
            axis: Stroke::new(Rgb::BLACK, 2),
            text_color: Rgb::BLACK,
            tick_font: 28,
            label_font: 26,
            caption_font: 30,
            line_color: Rgb::new(0x1f, 0x77, 0xb4),
            marker_color: Rgb::new(0xae, 0xc7, 0xe8),
            area_color: Rgb::new(0xdb, 0xea, 0xfe),
        }
    }
}
impl ChartTheme {
    pub fn with_label_min_count(mut self, label_min_count: usize) -> Self {
        self.label_min_count = label_min_count;
        self
    }
    /// Converts a length in points to pixels.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}
