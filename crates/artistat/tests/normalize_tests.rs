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

use artistat::normalize::{capitalize_label, NO_LICENSE, OTHERS, UNDEFINED};
use artistat::{Field, NormalizationTables, Normalizer, SizeBucket};
use proptest::prelude::*;

#[test]
fn test_size_buckets() {
    assert_eq!(Normalizer::size(Some("500")), SizeBucket::UnderOneK);
    assert_eq!(Normalizer::size(Some("5k")), SizeBucket::OneKToTenK);
    assert_eq!(Normalizer::size(Some("250000")), SizeBucket::OverHundredK);
    assert_eq!(Normalizer::size(Some("")), SizeBucket::Undefined);
    assert_eq!(Normalizer::size(None), SizeBucket::Undefined);
    assert_eq!(Normalizer::size(Some("-")), SizeBucket::Undefined);
    assert_eq!(Normalizer::size(Some("12K")), SizeBucket::TenKToHundredK);
    assert_eq!(Normalizer::size(Some("1,5m")), SizeBucket::OverHundredK);
    assert_eq!(Normalizer::size(Some("lots")), SizeBucket::Undefined);
}

#[test]
fn test_size_labels_map_to_themselves() {
    for bucket in SizeBucket::ALL {
        assert_eq!(Normalizer::size(Some(bucket.label())), bucket);
    }
}

#[test]
fn test_license_mapping() {
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.license(Some("MIT License")), "MIT");
    assert_eq!(normalizer.license(Some("")), NO_LICENSE);
    assert_eq!(normalizer.license(None), NO_LICENSE);
    assert_eq!(normalizer.license(Some("-")), NO_LICENSE);
    assert_eq!(
        normalizer.license(Some("Released under Apache 2.0 terms")),
        "Apache-2.0"
    );
    assert_eq!(normalizer.license(Some("BSD-3")), "BSD-3");
}

#[test]
fn test_long_license_is_truncated() {
    let raw = "Custom Research Data Agreement";
    assert_eq!(raw.chars().count(), 30);
    let short = Normalizer::new().license(Some(raw));
    assert_eq!(short, "Custom Research D...");
    assert_eq!(short.chars().count(), 20);
}

#[test]
fn test_license_table_is_injectable() {
    let tables = NormalizationTables {
        licenses: vec![("Internal Use".to_string(), "PROPRIETARY".to_string())],
        languages: Vec::new(),
    };
    let normalizer = Normalizer::with_tables(tables);
    assert_eq!(normalizer.license(Some("Internal Use Only")), "PROPRIETARY");
    assert_eq!(normalizer.license(Some("MIT License")), "MIT License");
}

#[test]
fn test_language_mapping() {
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.language(Some(" EN ")), "English");
    assert_eq!(normalizer.language(Some("chn")), "Chinese");
    assert_eq!(normalizer.language(Some("en, fr")), "English, French");
    assert_eq!(normalizer.language(Some("en,swahili")), "English, Swahili");
    assert_eq!(normalizer.language(Some("klingon")), UNDEFINED);
    assert_eq!(normalizer.language(None), UNDEFINED);
}

#[test]
fn test_language_names_are_recognized() {
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.language(Some("German")), "German");
    assert_eq!(
        normalizer.language(Some("English, Swahili")),
        "English, Swahili"
    );
}

#[test]
fn test_default_rule() {
    assert_eq!(Normalizer::default_value(None), UNDEFINED);
    assert_eq!(Normalizer::default_value(Some("")), UNDEFINED);
    assert_eq!(Normalizer::default_value(Some("-")), UNDEFINED);
    assert_eq!(Normalizer::default_value(Some("nan")), UNDEFINED);
    assert_eq!(Normalizer::default_value(Some("Requirements")), "Requirements");
}

#[test]
fn test_capitalization() {
    assert_eq!(capitalize_label("elicitation"), "Elicitation");
    assert_eq!(capitalize_label("Undefined"), "Undefined");
    assert_eq!(capitalize_label("Others"), OTHERS);
    assert_eq!(capitalize_label("NLP"), "NLP");
    assert_eq!(capitalize_label(""), "");
    assert_eq!(capitalize_label("1K-10K"), "1K-10K");
}

#[test]
fn test_normalize_applies_capitalization() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize(Field::ReStage, Some("elicitation")),
        "Elicitation"
    );
    assert_eq!(normalizer.normalize(Field::Domain, None), UNDEFINED);
    assert_eq!(normalizer.normalize(Field::Size, Some("5k")), "1K-10K");
    assert_eq!(normalizer.normalize(Field::License, Some("mit")), "Mit");
}

proptest! {
    #[test]
    fn prop_normalization_is_total_and_idempotent(
        raw in proptest::option::of("[ -~]{0,40}"),
        field_index in 0usize..Field::ALL.len(),
    ) {
        let normalizer = Normalizer::new();
        let field = Field::ALL[field_index];
        let once = normalizer.normalize(field, raw.as_deref());
        let twice = normalizer.normalize(field, Some(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_size_always_lands_in_a_bucket(raw in "[0-9kKmM.,]{0,12}") {
        let bucket = Normalizer::size(Some(&raw));
        prop_assert!(SizeBucket::ALL.contains(&bucket));
    }
}
