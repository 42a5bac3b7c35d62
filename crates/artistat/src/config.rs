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

//! Layered settings: built-in defaults, then an optional TOML file, then
//! `ARTISTAT_*` environment variables. Nested keys use `__`, so
//! `ARTISTAT_SERVER__PORT=9000` sets `server.port`.

use crate::dataset::Field;
use crate::error::{ConfigError, ConfigResult};
use crate::normalize::NormalizationTables;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PREFIX: &str = "ARTISTAT";
pub const CONFIG_PATH_VAR: &str = "ARTISTAT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "artistat.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    /// Categories seen fewer times than this are folded into `Others`.
    pub aggregation_threshold: usize,
    /// Bar segments below this count are drawn without a label.
    pub label_min_count: usize,
    pub properties: Vec<Field>,
    pub tables: NormalizationTables,
    pub bubble: BubbleSettings,
    pub server: ServerSettings,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/datasets - datasets.csv"),
            output_dir: PathBuf::from("figures"),
            aggregation_threshold: 1,
            label_min_count: 3,
            properties: Field::PLOTTED.to_vec(),
            tables: NormalizationTables::default(),
            bubble: BubbleSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleSettings {
    /// Row order, top to bottom.
    pub row_order: Vec<String>,
    pub column_order: Vec<String>,
    /// `(label, shorter label)` substitutions applied before tabulating.
    pub aliases: Vec<(String, String)>,
}
impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            row_order: ["Elicitation", "Analysis", "Specification", "Management", "V&V"]
                .map(String::from)
                .to_vec(),
            column_order: [
                "Classification",
                "Extraction",
                "Modelling",
                "Traceability",
                "Q&A",
            ]
            .map(String::from)
            .to_vec(),
            aliases: vec![("Verification & validation".to_string(), "V&V".to_string())],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
    pub root: PathBuf,
}
impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            root: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Reads `ARTISTAT_CONFIG` (or `artistat.toml`) and the process environment.
    pub fn load() -> ConfigResult<Self> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(Some(path.as_path()), None::<Vec<(String, String)>>)
    }
    /// `env` replaces the process environment when given.
    pub fn load_from<I, K, V>(file: Option<&Path>, env: Option<I>) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            debug!(path = %path.display(), "loading settings file");
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(false));
        }
        let mut environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("properties");
        if let Some(vars) = env {
            let vars: config::Map<String, String> = vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect();
            environment = environment.source(Some(vars));
        }
        let settings: Settings = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
    pub fn validate(&self) -> ConfigResult<()> {
        if self.properties.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "properties".to_string(),
                value: "[]".to_string(),
            });
        }
        if self.bubble.row_order.is_empty() || self.bubble.column_order.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bubble".to_string(),
                value: "empty axis order".to_string(),
            });
        }
        Ok(())
    }
}
