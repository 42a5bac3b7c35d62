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

use artistat::render::bubble::bubble_area;
use artistat::render::palette::BLUES;
use artistat::render::{
    draw_bubble_matrix, draw_stacked_distribution, draw_year_line, label_color, ChartTheme,
    CountRange, Primitive, RecordingSurface, Rgb, Rotation, BUBBLE_SIZE, LINE_SIZE, STACKED_SIZE,
};
use artistat::{CategoryCounts, CrossTab, Field, FieldDistribution, YearSeries};
use std::collections::BTreeMap;

fn distributions() -> Vec<FieldDistribution> {
    let licenses = std::iter::repeat("A")
        .take(12)
        .chain(std::iter::repeat("B").take(5))
        .chain(std::iter::repeat("C").take(2));
    vec![
        FieldDistribution {
            field: Field::License,
            counts: CategoryCounts::from_values(licenses, 1),
        },
        FieldDistribution {
            field: Field::Languages,
            counts: CategoryCounts::from_values(["English"], 1),
        },
    ]
}

#[test]
fn test_stacked_draws_one_segment_per_category() {
    let theme = ChartTheme::default();
    let mut surface = RecordingSurface::new(STACKED_SIZE);
    draw_stacked_distribution(&mut surface, &distributions(), &theme).unwrap();
    let rects = surface.filled_rects();
    assert_eq!(rects.len(), 4);
    assert!(rects.windows(2).take(2).all(|pair| pair[0].0.right == pair[1].0.left));
    assert!(!surface.is_presented());
    let texts = surface.texts();
    assert!(texts.contains(&"License"));
    assert!(texts.contains(&"Languages"));
    assert!(texts.contains(&"Number of Datasets"));
}

#[test]
fn test_stacked_colors_follow_count_range() {
    let theme = ChartTheme::default();
    let mut surface = RecordingSurface::new(STACKED_SIZE);
    draw_stacked_distribution(&mut surface, &distributions(), &theme).unwrap();
    let rects = surface.filled_rects();
    assert_eq!(rects[0].1.color, BLUES[8]);
    assert!((rects[0].1.opacity - 0.8).abs() < f64::EPSILON);
    assert_eq!(rects[3].1.color, theme.scale.color(0.0));
}

#[test]
fn test_stacked_labels_are_suppressed_and_rotated() {
    let theme = ChartTheme::default();
    let mut surface = RecordingSurface::new(STACKED_SIZE);
    draw_stacked_distribution(&mut surface, &distributions(), &theme).unwrap();
    let texts = surface.texts();
    assert!(texts.contains(&"A"));
    assert!(texts.contains(&"(12)"));
    assert!(!texts.contains(&"C"));
    assert!(!texts.contains(&"(2)"));
    assert!(!texts.contains(&"English"));

    let wide = surface.text_style("A").unwrap();
    assert_eq!(wide.rotation, Rotation::None);
    assert_eq!(wide.color, Rgb::WHITE);
    let narrow = surface.text_style("(5)").unwrap();
    assert_eq!(narrow.rotation, Rotation::Quarter);
    assert_eq!(narrow.color, Rgb::BLACK);
}

#[test]
fn test_label_threshold_comes_from_theme() {
    let theme = ChartTheme::default().with_label_min_count(1);
    let mut surface = RecordingSurface::new(STACKED_SIZE);
    draw_stacked_distribution(&mut surface, &distributions(), &theme).unwrap();
    assert!(surface.texts().contains(&"English"));
}

#[test]
fn test_label_color_uses_perceptual_brightness() {
    assert_eq!(label_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(label_color(Rgb::BLACK), Rgb::WHITE);
    assert_eq!(label_color(Rgb::new(0, 255, 0)), Rgb::BLACK);
    assert_eq!(label_color(Rgb::new(0, 0, 255)), Rgb::WHITE);
    assert_eq!(label_color(BLUES[8]), Rgb::WHITE);
}

#[test]
fn test_count_range_normalization() {
    let range = CountRange::from_counts([4, 1, 10]).unwrap();
    assert_eq!((range.min, range.max), (1, 10));
    assert!((range.normalize(1) - 0.0).abs() < 1e-9);
    assert!((range.normalize(10) - 1.0).abs() < 1e-9);
    let flat = CountRange::from_counts([3, 3]).unwrap();
    assert!((flat.normalize(3) - 0.5).abs() < 1e-9);
    assert!(CountRange::from_counts(Vec::new()).is_none());
}

#[test]
fn test_bubble_area_bounds() {
    let theme = ChartTheme::default();
    let range = CountRange { min: 1, max: 4 };
    assert!((bubble_area(&range, 1, &theme) - 200.0).abs() < 1e-9);
    assert!((bubble_area(&range, 4, &theme) - 2000.0).abs() < 1e-9);
    let flat = CountRange { min: 2, max: 2 };
    assert!((bubble_area(&flat, 2, &theme) - 1100.0).abs() < 1e-9);
}

fn bubble_table() -> CrossTab {
    let mut pairs = vec![("Elicitation", "Classification"); 4];
    pairs.extend(vec![("Analysis", "Classification"); 2]);
    pairs.push(("Analysis", "Extraction"));
    CrossTab::from_pairs("RE stage", "Task", pairs).reindex(
        &["Elicitation", "Analysis", "Specification", "Management", "V&V"],
        &["Classification", "Extraction", "Modelling", "Traceability", "Q&A"],
    )
}

#[test]
fn test_bubble_draws_one_marker_per_non_zero_cell() {
    let theme = ChartTheme::default();
    let mut surface = RecordingSurface::new(BUBBLE_SIZE);
    draw_bubble_matrix(&mut surface, &bubble_table(), &theme).unwrap();
    let circles = surface.circles();
    assert_eq!(circles.len(), 3);

    let range = CountRange { min: 1, max: 4 };
    let radius = |count| {
        let area = bubble_area(&range, count, &theme);
        theme
            .points_to_pixels((area / std::f64::consts::PI).sqrt())
            .round() as u32
    };
    assert_eq!(circles[0].1, radius(4));
    assert_eq!(circles[2].1, radius(1));
    assert!(circles[0].1 > circles[1].1 && circles[1].1 > circles[2].1);
}

#[test]
fn test_bubble_rows_follow_table_order() {
    let theme = ChartTheme::default();
    let mut surface = RecordingSurface::new(BUBBLE_SIZE);
    draw_bubble_matrix(&mut surface, &bubble_table(), &theme).unwrap();
    let texts = surface.texts();
    let position = |label: &str| texts.iter().position(|text| *text == label).unwrap();
    assert!(position("Elicitation") < position("Analysis"));
    assert!(position("Classification") < position("Extraction"));
    assert!(!texts.contains(&"Specification"));

    let circles = surface.circles();
    let (elicitation, analysis) = (circles[0].0, circles[1].0);
    assert_eq!(elicitation.0, analysis.0);
    assert!(elicitation.1 < analysis.1);
}

#[test]
fn test_year_line_marks_every_year() {
    let theme = ChartTheme::default();
    let series = YearSeries::from_counts(&BTreeMap::from([(2019, 2), (2021, 1)])).unwrap();
    let mut surface = RecordingSurface::new(LINE_SIZE);
    draw_year_line(&mut surface, &series, &theme).unwrap();

    assert_eq!(surface.circles().len(), 3);
    let lines: Vec<&Vec<(i32, i32)>> = surface
        .primitives()
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Polyline { points, .. } => Some(points),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 3);
    assert!(lines[0][0].0 < lines[0][1].0 && lines[0][1].0 < lines[0][2].0);

    let count_labels = surface
        .primitives()
        .iter()
        .filter(|primitive| {
            matches!(primitive, Primitive::Text { style, .. } if style.color == theme.line_color)
        })
        .count();
    assert_eq!(count_labels, 2);
    let texts = surface.texts();
    assert!(texts.contains(&"2020"));
    assert!(texts.contains(&"Year"));
}
