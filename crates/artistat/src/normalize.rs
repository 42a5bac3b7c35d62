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

//! Field-specific rules that turn raw cell text into display categories.
//!
//! Every rule is total: malformed input collapses into [`UNDEFINED`] (or
//! [`NO_LICENSE`] for the license column) instead of failing. Every rule is
//! also idempotent, so feeding a category value back through the normalizer
//! yields the same value.

use crate::dataset::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNDEFINED: &str = "Undefined";
pub const OTHERS: &str = "Others";
pub const NO_LICENSE: &str = "None";

const LICENSE_MAX_CHARS: usize = 20;
const LICENSE_KEEP_CHARS: usize = 17;
const ELLIPSIS: &str = "...";

/// Lookup tables injected into the [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationTables {
    /// `(full name, short code)` pairs, matched by substring in order.
    pub licenses: Vec<(String, String)>,
    /// `(code, language name)` pairs, matched exactly after lower-casing.
    pub languages: Vec<(String, String)>,
}
impl Default for NormalizationTables {
    fn default() -> Self {
        let licenses = [
            (
                "Creative Commons Attribution Share Alike 4.0 International",
                "CC-BY-SA-4.0",
            ),
            ("Creative Commons Attribution 4.0 International", "CC-BY-4.0"),
            ("GNU General Public License v3.0", "GPL-3.0"),
            ("Apache 2.0", "Apache-2.0"),
            ("MIT License", "MIT"),
            ("SNT Non Commercial LICENSE V.2", "SNT-NC-2.0"),
            ("None", "None"),
        ];
        let languages = [
            ("en", "English"),
            ("chn", "Chinese"),
            ("es", "Spanish"),
            ("fr", "French"),
            ("de", "German"),
            ("it", "Italian"),
            ("pt", "Portuguese"),
            ("ru", "Russian"),
            ("ja", "Japanese"),
            ("ko", "Korean"),
            ("ar", "Arabic"),
            ("hi", "Hindi"),
            ("multiple", "Multiple"),
        ];
        Self {
            licenses: licenses
                .iter()
                .map(|(full, code)| (full.to_string(), code.to_string()))
                .collect(),
            languages: languages
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeBucket {
    UnderOneK,
    OneKToTenK,
    TenKToHundredK,
    OverHundredK,
    Undefined,
}
impl SizeBucket {
    pub const ALL: [SizeBucket; 5] = [
        SizeBucket::UnderOneK,
        SizeBucket::OneKToTenK,
        SizeBucket::TenKToHundredK,
        SizeBucket::OverHundredK,
        SizeBucket::Undefined,
    ];
    pub const fn label(self) -> &'static str {
        match self {
            SizeBucket::UnderOneK => "<1K",
            SizeBucket::OneKToTenK => "1K-10K",
            SizeBucket::TenKToHundredK => "10K-100K",
            SizeBucket::OverHundredK => ">100K",
            SizeBucket::Undefined => UNDEFINED,
        }
    }
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            SizeBucket::Undefined
        } else if amount < 1_000.0 {
            SizeBucket::UnderOneK
        } else if amount < 10_000.0 {
            SizeBucket::OneKToTenK
        } else if amount < 100_000.0 {
            SizeBucket::TenKToHundredK
        } else {
            SizeBucket::OverHundredK
        }
    }
    /// Parses sizes such as `500`, `5k`, `1,200` or `2.5M`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(bucket) = Self::from_label(trimmed) {
            return bucket;
        }
        let text = trimmed.to_lowercase().replace(',', "");
        let (digits, scale) = if text.contains('k') {
            (text.replace('k', ""), 1_000.0)
        } else if text.contains('m') {
            (text.replace('m', ""), 1_000_000.0)
        } else {
            (text, 1.0)
        };
        match digits.trim().parse::<f64>() {
            Ok(amount) => Self::from_amount(amount * scale),
            Err(_) => SizeBucket::Undefined,
        }
    }
}
impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uppercases the first character when it is lowercase. `Undefined` and
/// `Others` pass through untouched.
pub fn capitalize_label(label: &str) -> String {
    if label == UNDEFINED || label == OTHERS {
        return label.to_string();
    }
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => label.to_string(),
    }
}

fn capitalize_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Returns the raw value unless it is absent, blank or the `-` placeholder.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| {
        let trimmed = value.trim();
        !trimmed.is_empty() && trimmed != "-"
    })
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tables: NormalizationTables,
}
impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_tables(tables: NormalizationTables) -> Self {
        Self { tables }
    }
    /// Field rule followed by label capitalization.
    pub fn normalize(&self, field: Field, raw: Option<&str>) -> String {
        let value = match field {
            Field::License => self.license(raw),
            Field::Languages => self.language(raw),
            Field::Size => Self::size(raw).label().to_string(),
            _ => Self::default_value(raw),
        };
        capitalize_label(&value)
    }
    pub fn license(&self, raw: Option<&str>) -> String {
        let Some(raw) = present(raw) else {
            return NO_LICENSE.to_string();
        };
        // Capitalizing first keeps the substring match stable when the output is
        // normalized again.
        let raw = capitalize_label(raw);
        if let Some((_, code)) = self
            .tables
            .licenses
            .iter()
            .find(|(full, _)| raw.contains(full.as_str()))
        {
            return code.clone();
        }
        if raw.chars().count() > LICENSE_MAX_CHARS {
            let mut short: String = raw.chars().take(LICENSE_KEEP_CHARS).collect();
            short.push_str(ELLIPSIS);
            return short;
        }
        raw
    }
    pub fn language(&self, raw: Option<&str>) -> String {
        let Some(raw) = present(raw) else {
            return UNDEFINED.to_string();
        };
        let text = raw.trim().to_lowercase();
        if let Some(name) = self.lookup_language(&text) {
            return name.to_string();
        }
        if text.contains(',') {
            return text
                .split(',')
                .map(|token| {
                    let token = token.trim();
                    self.lookup_language(token)
                        .map_or_else(|| capitalize_token(token), str::to_string)
                })
                .collect::<Vec<_>>()
                .join(", ");
        }
        UNDEFINED.to_string()
    }
    fn lookup_language(&self, lowered: &str) -> Option<&str> {
        self.tables
            .languages
            .iter()
            .find(|(code, name)| code == lowered || name.to_lowercase() == lowered)
            .map(|(_, name)| name.as_str())
    }
    pub fn size(raw: Option<&str>) -> SizeBucket {
        present(raw).map_or(SizeBucket::Undefined, SizeBucket::parse)
    }
    pub fn default_value(raw: Option<&str>) -> String {
        match present(raw) {
            Some(value) if value != "nan" => value.to_string(),
            _ => UNDEFINED.to_string(),
        }
    }
}
