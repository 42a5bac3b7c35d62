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

use super::surface::PixelRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}
impl Margins {
    pub fn plot_area(&self, size: (u32, u32)) -> PixelRect {
        let width = i32::try_from(size.0).unwrap_or(i32::MAX);
        let height = i32::try_from(size.1).unwrap_or(i32::MAX);
        PixelRect {
            left: self.left,
            top: self.top,
            right: (width - self.right).max(self.left + 1),
            bottom: (height - self.bottom).max(self.top + 1),
        }
    }
}

/// Maps data values onto a pixel span. The pixel end may be smaller than the
/// start, which is how y axes grow upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    lower: f64,
    upper: f64,
    start: f64,
    end: f64,
}
impl LinearAxis {
    pub fn new(lower: f64, upper: f64, start: i32, end: i32) -> Self {
        Self {
            lower,
            upper,
            start: f64::from(start),
            end: f64::from(end),
        }
    }
    pub fn map(&self, value: f64) -> i32 {
        let span = self.upper - self.lower;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.lower) / span
        };
        (self.start + t * (self.end - self.start)).round() as i32
    }
}

/// Round tick positions (steps of 1, 2 or 5 times a power of ten) covering
/// `[lower, upper]` with roughly `target` intervals.
pub fn nice_ticks(lower: f64, upper: f64, target: usize) -> Vec<f64> {
    let span = upper - lower;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return vec![lower];
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let step = magnitude
        * if residual <= 1.0 {
            1.0
        } else if residual <= 2.0 {
            2.0
        } else if residual <= 5.0 {
            5.0
        } else {
            10.0
        };
    integer_steps(lower, upper, step)
}

/// Like [`nice_ticks`] but never steps by less than one.
pub fn integer_ticks(lower: f64, upper: f64, target: usize) -> Vec<f64> {
    let ticks = nice_ticks(lower, upper, target);
    match ticks.as_slice() {
        [first, second, ..] if second - first < 1.0 => integer_steps(lower, upper, 1.0),
        _ => ticks,
    }
}

fn integer_steps(lower: f64, upper: f64, step: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut value = (lower / step).ceil() * step;
    let limit = upper + step * 1e-9;
    while value <= limit {
        ticks.push(value);
        value += step;
    }
    ticks
}

pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cover_the_range() {
        assert_eq!(nice_ticks(0.0, 50.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(integer_ticks(0.0, 3.0, 6), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn axis_flips_for_y() {
        let axis = LinearAxis::new(0.0, 10.0, 500, 100);
        assert_eq!(axis.map(0.0), 500);
        assert_eq!(axis.map(10.0), 100);
        assert_eq!(axis.map(5.0), 300);
    }
}
