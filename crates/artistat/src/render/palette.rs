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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    /// Perceptual brightness in `[0, 1]`.
    pub fn brightness(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Black on light backgrounds, white on dark ones.
pub fn label_color(background: Rgb) -> Rgb {
    if background.brightness() > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// ColorBrewer "Blues", lightest to darkest.
pub const BLUES: [Rgb; 9] = [
    Rgb::new(0xf7, 0xfb, 0xff),
    Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0xc6, 0xdb, 0xef),
    Rgb::new(0x9e, 0xca, 0xe1),
    Rgb::new(0x6b, 0xae, 0xd6),
    Rgb::new(0x42, 0x92, 0xc6),
    Rgb::new(0x21, 0x71, 0xb5),
    Rgb::new(0x08, 0x51, 0x9c),
    Rgb::new(0x08, 0x30, 0x6b),
];

/// Light-to-dark ramp sampled over `[lower, upper]` of its stops.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialScale {
    stops: Vec<Rgb>,
    lower: f64,
    upper: f64,
}
impl SequentialScale {
    pub fn new(stops: Vec<Rgb>, lower: f64, upper: f64) -> Self {
        Self {
            stops,
            lower: lower.clamp(0.0, 1.0),
            upper: upper.clamp(0.0, 1.0),
        }
    }
    /// Blues without the near-white head of the ramp.
    pub fn blues() -> Self {
        Self::new(BLUES.to_vec(), 0.2, 1.0)
    }
    pub fn color(&self, t: f64) -> Rgb {
        let Some(&last) = self.stops.last() else {
            return Rgb::BLACK;
        };
        if self.stops.len() == 1 {
            return last;
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let position = (self.lower + (self.upper - self.lower) * t) * (self.stops.len() - 1) as f64;
        let index = (position.floor() as usize).min(self.stops.len() - 2);
        self.stops[index].lerp(self.stops[index + 1], position - index as f64)
    }
}

/// Observed `[min, max]` of the counts in one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}
impl CountRange {
    pub fn from_counts<I: IntoIterator<Item = usize>>(counts: I) -> Option<Self> {
        counts.into_iter().fold(None, |range, count| match range {
            None => Some(Self {
                min: count,
                max: count,
            }),
            Some(Self { min, max }) => Some(Self {
                min: min.min(count),
                max: max.max(count),
            }),
        })
    }
    /// Linear position of `count` in the range; `0.5` when the range is flat.
    pub fn normalize(&self, count: usize) -> f64 {
        if self.max > self.min {
            (count as f64 - self.min as f64) / (self.max - self.min) as f64
        } else {
            0.5
        }
    }
    pub fn interpolate(&self, count: usize, low: f64, high: f64) -> f64 {
        low + self.normalize(count) * (high - low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_ends() {
        let scale = SequentialScale::blues();
        assert_eq!(scale.color(1.0), BLUES[8]);
        assert_eq!(scale.color(0.0), BLUES[1].lerp(BLUES[2], 0.6));
    }
}
