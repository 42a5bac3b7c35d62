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

use crate::error::{ConfigError, DatasetError, DatasetResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Cell contents the table reader treats as "no value".
pub const NA_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "<NA>",
];

pub fn is_na_marker(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NA_MARKERS.contains(&trimmed)
}

/// The metadata columns every artifact table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Field {
    License,
    ArtifactType,
    Granularity,
    ReStage,
    Task,
    Domain,
    Size,
    Languages,
    Year,
}
impl Field {
    pub const ALL: [Field; 9] = [
        Field::License,
        Field::ArtifactType,
        Field::Granularity,
        Field::ReStage,
        Field::Task,
        Field::Domain,
        Field::Size,
        Field::Languages,
        Field::Year,
    ];
    /// Fields drawn as bars in the distribution chart, top to bottom.
    pub const PLOTTED: [Field; 8] = [
        Field::License,
        Field::ArtifactType,
        Field::Granularity,
        Field::ReStage,
        Field::Task,
        Field::Domain,
        Field::Size,
        Field::Languages,
    ];
    pub const fn column(self) -> &'static str {
        match self {
            Field::License => "License",
            Field::ArtifactType => "Artifact type",
            Field::Granularity => "Granularity",
            Field::ReStage => "RE stage",
            Field::Task => "Task",
            Field::Domain => "Domain",
            Field::Size => "Size",
            Field::Languages => "Languages",
            Field::Year => "Year",
        }
    }
    pub fn from_column(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.column().eq_ignore_ascii_case(name))
    }
}
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.column())
    }
}
impl FromStr for Field {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_column(s).ok_or_else(|| ConfigError::UnknownProperty {
            name: s.to_string(),
        })
    }
}
impl TryFrom<String> for Field {
    type Error = ConfigError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.column().to_string()
    }
}

/// One row of the artifact table. Missing cells are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<Field, String>,
}
impl Record {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Field, S)>,
        S: Into<String>,
    {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }
    /// Stores `value` unless it is an NA marker, in which case the cell is cleared.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if is_na_marker(&value) {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    source_path: Option<PathBuf>,
    records: Vec<Record>,
}
impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            source_path: None,
            records,
        }
    }
    pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        CsvLoader::new().read_file(path.as_ref())
    }
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        CsvLoader::new().read(reader)
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
    pub fn column(&self, field: Field) -> impl Iterator<Item = Option<&str>> + '_ {
        self.records.iter().map(move |record| record.get(field))
    }
}

#[derive(Debug, Clone)]
pub struct CsvLoader {
    delimiter: u8,
    required: Vec<Field>,
}
impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}
impl CsvLoader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            required: Field::ALL.to_vec(),
        }
    }
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
    pub fn with_required(mut self, required: &[Field]) -> Self {
        self.required = required.to_vec();
        self
    }
    pub fn read_file(&self, path: &Path) -> DatasetResult<Dataset> {
        let file = File::open(path).map_err(|source| DatasetError::DataFileError {
            path: path.display().to_string(),
            source,
        })?;
        let mut dataset = self.read(file)?;
        dataset.source_path = Some(path.to_path_buf());
        Ok(dataset)
    }
    pub fn read<R: Read>(&self, reader: R) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let mut columns: Vec<(Field, usize)> = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(field) = Field::from_column(header) {
                if !columns.iter().any(|(known, _)| *known == field) {
                    columns.push((field, index));
                }
            }
        }
        for field in &self.required {
            if !columns.iter().any(|(known, _)| known == field) {
                return Err(DatasetError::ColumnNotFound {
                    column: field.column().to_string(),
                });
            }
        }
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = Record::new();
            for (field, index) in &columns {
                if let Some(cell) = row.get(*index) {
                    record.set(*field, cell);
                }
            }
            records.push(record);
        }
        debug!(rows = records.len(), columns = columns.len(), "artifact table parsed");
        Ok(Dataset {
            source_path: None,
            records,
        })
    }
}
